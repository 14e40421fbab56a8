// # dec Command System
//
// Commands are the render rules of the language: each maps a parsed node to a
// LaTeX fragment. The registry is built once and never changes afterwards.
//
// ## Module Structure
//
// - **`arithmetic`**: `add`, `sub`, `mul`, `pow`, `frac`, `root`, `sqrt`, `log`, `ln`, `neg`, `fact`
// - **`binding`**: `let`, `set`, `func`, `subst`, `params`, `latex`
// - **`geometry`**: `point`, `poly`, `dist`, `mid`, `action`, `xcoord`, `ycoord`
// - **`collections`**: `list`, `index`, `listcomp` and the statistics operators
// - **`trig`**: trigonometric, hyperbolic and rounding operators
// - **`logic`**: relations, `if`, `piecewise`
// - **`calculus`**: `deriv`, `int`, `sum`, `prod`
// - **`constants`**: greek letters, `pi`, `tau`, `inf` and friends
//
// Every command declares its arity. The renderer checks it before the rule runs
// and reports a violation, but still runs the rule so that the rest of the tree
// is checked too. Rules must therefore cope with missing arguments.

use std::fmt;

use im::HashMap;
use once_cell::sync::Lazy;

use crate::render::Renderer;
use crate::syntax::Node;

pub mod arithmetic;
pub mod binding;
pub mod calculus;
pub mod collections;
pub mod constants;
pub mod geometry;
pub mod logic;
pub mod trig;

// ============================================================================
// CORE TYPES
// ============================================================================

/// A render rule: turns a node into a LaTeX fragment, reporting problems
/// through the renderer.
pub type RenderFn = fn(&mut Renderer<'_>, &Node) -> String;

/// How many positional arguments a command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    AtLeast(usize),
    Exactly(usize),
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::AtLeast(min) => count >= min,
            Arity::Exactly(n) => count == n,
        }
    }

    /// Smallest number of arguments the command accepts.
    pub fn min(&self) -> usize {
        match *self {
            Arity::AtLeast(n) | Arity::Exactly(n) => n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Exactly(n) => write!(f, "exactly {}", n),
        }
    }
}

/// A registered command.
#[derive(Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub arity: Arity,
    /// Usage line, e.g. `(frac <numerator> <denominator>)`.
    pub usage: &'static str,
    pub render: RenderFn,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("usage", &self.usage)
            .finish()
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// Registry for all commands, inspectable at runtime.
#[derive(Default, Clone)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the full standard command set.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        register_all_commands(&mut registry);
        registry
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    /// Registers a command, replacing any command with the same name.
    pub fn register(
        &mut self,
        name: &'static str,
        arity: Arity,
        usage: &'static str,
        render: RenderFn,
    ) {
        self.commands.insert(
            name.to_string(),
            Command {
                name,
                arity,
                usage,
                render,
            },
        );
    }

    /// All commands, sorted by name.
    pub fn list(&self) -> Vec<&Command> {
        let mut commands: Vec<_> = self.commands.values().collect();
        commands.sort_by_key(|command| command.name);
        commands
    }

    pub fn has(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// The standard command set, built on first use.
pub static STANDARD: Lazy<CommandRegistry> = Lazy::new(CommandRegistry::standard);

// ============================================================================
// UNIFIED REGISTRATION FUNCTION
// ============================================================================

/// Registers every standard command family with the given registry.
pub fn register_all_commands(registry: &mut CommandRegistry) {
    binding::register_binding_commands(registry);
    arithmetic::register_arithmetic_commands(registry);
    geometry::register_geometry_commands(registry);
    collections::register_collection_commands(registry);
    trig::register_trig_commands(registry);
    logic::register_logic_commands(registry);
    calculus::register_calculus_commands(registry);
    constants::register_constant_commands(registry);
}

// ============================================================================
// SHARED TEMPLATES
// ============================================================================

/// `\left(<inner>\right)`
pub(crate) fn parens(inner: &str) -> String {
    format!("\\left({}\\right)", inner)
}

/// `<operator>\left(<a>,<b>,...\right)`
pub(crate) fn operator_call(operator: &str, args: &[String]) -> String {
    format!("{}{}", operator, parens(&args.join(",")))
}

/// `\operatorname{<name>}\left(<a>,<b>,...\right)`
pub(crate) fn named_call(name: &str, args: &[String]) -> String {
    operator_call(&format!("\\operatorname{{{}}}", name), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert!(Arity::AtLeast(1).accepts(3));
        assert!(!Arity::AtLeast(2).accepts(1));
        assert!(Arity::Exactly(3).accepts(3));
        assert!(!Arity::Exactly(3).accepts(4));
        assert_eq!(Arity::Exactly(3).min(), 3);
        assert_eq!(Arity::AtLeast(2).to_string(), "at least 2");
    }

    #[test]
    fn test_standard_registry_contents() {
        let registry = CommandRegistry::standard();
        for name in [
            "let", "set", "add", "sub", "mul", "pow", "frac", "root", "log", "point", "poly",
            "dist", "mid", "list", "index", "params", "listcomp", "func", "subst", "sin", "asin",
            "sinh", "asinh", "cos", "acos", "cosh", "acosh", "tan", "atan", "atan2", "tanh",
            "atanh", "floor", "ceil", "round", "eq", "gt", "lt", "geq", "leq", "if", "piecewise",
            "deriv", "int", "sum", "prod", "len", "mean", "median", "min", "max", "mad", "alpha",
            "beta", "theta", "pi", "tau", "phi", "inf", "ninf", "ellipsis", "empty", "xcoord",
            "ycoord", "neg", "fact", "ln", "latex", "sqrt", "action",
        ] {
            assert!(registry.has(name), "missing command {}", name);
        }
    }

    #[test]
    fn test_list_is_sorted() {
        let registry = CommandRegistry::standard();
        let names: Vec<_> = registry.list().iter().map(|c| c.name).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn test_operator_templates() {
        assert_eq!(parens("x"), "\\left(x\\right)");
        assert_eq!(
            named_call("floor", &["x".into()]),
            "\\operatorname{floor}\\left(x\\right)"
        );
        assert_eq!(
            operator_call("\\min", &["a".into(), "b".into()]),
            "\\min\\left(a,b\\right)"
        );
    }
}
