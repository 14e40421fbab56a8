//! Definitions and function-shaped commands: `let`, `set`, `func`, `subst`,
//! `params`, and the raw `latex` escape hatch.

use crate::commands::{parens, Arity, CommandRegistry, RenderFn};
use crate::errors::ErrorKind;
use crate::syntax::Argument;

/// Defines a variable. The value defaults to `0`.
///
/// Usage: (let <name> [value])
///
/// Example:
///   (let m 0) ; => m=0
pub const CMD_LET: RenderFn = |r, node| {
    let name = r.identifier(node, 0, "variable name");
    let value = r.value_or(node, 1, "0");
    format!("{}={}", name, value)
};

/// Assignment used inside actions. The value defaults to `0`.
///
/// Usage: (set <name> [value])
///
/// Example:
///   (set a (add a 1)) ; => a\to \left(a+1\right)
pub const CMD_SET: RenderFn = |r, node| {
    let name = r.identifier(node, 0, "variable name");
    let value = r.value_or(node, 1, "0");
    format!("{}\\to {}", name, value)
};

/// Comma-separated parameter list, only meaningful inside `func`.
///
/// Usage: (params <a> <b> ...)
pub const CMD_PARAMS: RenderFn = |r, node| r.values(node).join(",");

/// Defines a function.
///
/// Usage: (func <name> (params <p> ...) <body>)
///
/// Example:
///   (func f (params x) (mul 2 x)) ; => f\left(x\right)=\left(2\cdot x\right)
pub const CMD_FUNC: RenderFn = |r, node| {
    if let Some(inputs) = node.arg(1) {
        if !inputs.is_command("params") {
            r.report(
                ErrorKind::ExpectedParams {
                    command: node.command.clone(),
                },
                inputs.span(),
            );
        }
    }
    let name = r.identifier(node, 0, "function name");
    let inputs = r.value(node, 1);
    let body = r.value(node, 2);
    format!("{}{}={}", name, parens(&inputs), body)
};

/// Calls a function.
///
/// Usage: (subst <name> <a> <b> ...)
pub const CMD_SUBST: RenderFn = |r, node| {
    let name = r.identifier(node, 0, "function name");
    let args = r.values_from(node, 1);
    format!("{}{}", name, parens(&args.join(",")))
};

/// Passes tokens through untouched, joined by spaces. Nested expressions are
/// still rendered.
///
/// Usage: (latex <token> ...)
///
/// Example:
///   (latex \theta_{0} (add 1 2)) ; => \theta_{0} \left(1+2\right)
pub const CMD_LATEX: RenderFn = |r, node| {
    node.args
        .iter()
        .map(|arg| match arg {
            Argument::Literal { text, .. } => text.clone(),
            Argument::Expr(inner) => r.render_node(inner),
        })
        .collect::<Vec<_>>()
        .join(" ")
};

pub fn register_binding_commands(registry: &mut CommandRegistry) {
    registry.register("let", Arity::AtLeast(1), "(let <name> [value])", CMD_LET);
    registry.register("set", Arity::AtLeast(1), "(set <name> [value])", CMD_SET);
    registry.register("params", Arity::AtLeast(0), "(params <a> <b> ...)", CMD_PARAMS);
    registry.register(
        "func",
        Arity::AtLeast(3),
        "(func <name> (params <p> ...) <body>)",
        CMD_FUNC,
    );
    registry.register("subst", Arity::AtLeast(1), "(subst <name> <a> ...)", CMD_SUBST);
    registry.register("latex", Arity::AtLeast(0), "(latex <token> ...)", CMD_LATEX);
}
