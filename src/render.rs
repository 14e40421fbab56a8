//! Rendering of syntax trees into LaTeX.
//!
//! The [`Renderer`] walks a [`Node`] bottom-up: each node is dispatched to the
//! command registry, and each literal token is classified as a numeral
//! (emitted verbatim) or an identifier (validated, multi-letter names
//! subscripted). Values are recomputed on every access; nothing is cached.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::commands::CommandRegistry;
use crate::errors::{Diagnostics, ErrorKind, ErrorReporting};
use crate::syntax::{Argument, Node, Span};

static NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.e-]+$").expect("valid regex"));
// ASCII classes only: `\d` and `\W` would accept non-ASCII letters.
static INVALID_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]|[^0-9A-Za-z_]").expect("valid regex"));

// ============================================================================
// LITERAL CLASSIFICATION
// ============================================================================

/// True if every character of `token` is a digit, `-`, `.` or `e`.
///
/// This is deliberately loose (`-`, `e` and `1-2` all qualify); anything it
/// accepts is passed through untouched.
pub fn is_numeral(token: &str) -> bool {
    NUMERAL.is_match(token)
}

/// Formats an identifier the way the graphing calculator expects variable
/// names: one character as is, longer names as `first_{rest}`.
///
/// # Examples
///
/// ```rust
/// use dec::render::format_identifier;
/// assert_eq!(format_identifier("x").unwrap(), "x");
/// assert_eq!(format_identifier("abc").unwrap(), "a_{bc}");
/// assert!(format_identifier("1x").is_err());
/// ```
pub fn format_identifier(name: &str) -> Result<String, ErrorKind> {
    if name.is_empty() {
        return Err(ErrorKind::EmptyIdentifier {
            identifier: name.to_string(),
        });
    }
    if INVALID_IDENTIFIER.is_match(name) {
        return Err(ErrorKind::MalformedIdentifier {
            identifier: name.to_string(),
        });
    }
    let mut chars = name.chars();
    match (chars.next(), chars.as_str()) {
        (Some(first), "") => Ok(first.to_string()),
        (Some(first), rest) => Ok(format!("{}_{{{}}}", first, rest)),
        (None, _) => Ok(String::new()),
    }
}

// ============================================================================
// LATEX JOINING
// ============================================================================

/// Appends `fragment` to `out`, separating a trailing control word such as
/// `\cdot` from a following letter so the two do not fuse into `\cdotx`.
pub fn push_latex(out: &mut String, fragment: &str) {
    let starts_with_letter = fragment.starts_with(|c: char| c.is_ascii_alphabetic());
    if starts_with_letter && ends_with_control_word(out) {
        out.push(' ');
    }
    out.push_str(fragment);
}

/// Joins fragments with `separator`, applying [`push_latex`] at each seam.
pub fn join_latex<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            push_latex(&mut out, separator);
        }
        push_latex(&mut out, part.as_ref());
    }
    out
}

fn ends_with_control_word(text: &str) -> bool {
    let letters = text
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    letters > 0 && text[..text.len() - letters].ends_with('\\')
}

// ============================================================================
// RENDERER
// ============================================================================

/// Renders nodes against a command registry, reporting into a sink.
pub struct Renderer<'a> {
    registry: &'a CommandRegistry,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a CommandRegistry, diagnostics: &'a mut Diagnostics) -> Self {
        Self {
            registry,
            diagnostics,
        }
    }

    /// Renders `node` by dispatching to its command's rule.
    ///
    /// An unknown command renders as an empty fragment. An arity violation is
    /// reported but the rule still runs, so errors further down the tree are
    /// collected too. Arity is not checked on a node that lost an argument to
    /// a parse error.
    pub fn render_node(&mut self, node: &Node) -> String {
        let Some(command) = self.registry.get(&node.command) else {
            self.diagnostics
                .unknown_command(&node.command, node.command_span);
            return String::new();
        };
        // a dropped argument was already reported by the parser
        if !node.dropped_args && !command.arity.accepts(node.args.len()) {
            self.diagnostics.arity_mismatch(
                command.name,
                &command.arity.to_string(),
                node.args.len(),
                node.span,
            );
        }
        tracing::trace!(command = command.name, "rendering node");
        (command.render)(self, node)
    }

    /// Renders one argument: nested nodes recursively, literals as numeral or
    /// identifier.
    pub fn render_arg(&mut self, arg: &Argument) -> String {
        match arg {
            Argument::Expr(node) => self.render_node(node),
            Argument::Literal { text, span } => {
                if is_numeral(text) {
                    text.clone()
                } else {
                    self.identifier_text(text, *span)
                }
            }
        }
    }

    /// Renders argument `index` of `node`, or an empty fragment if it is
    /// missing (the arity check has already reported that).
    pub fn value(&mut self, node: &Node, index: usize) -> String {
        match node.arg(index) {
            Some(arg) => self.render_arg(arg),
            None => String::new(),
        }
    }

    /// Like [`Renderer::value`] but with a fallback for a missing argument.
    pub fn value_or(&mut self, node: &Node, index: usize, default: &str) -> String {
        match node.arg(index) {
            Some(arg) => self.render_arg(arg),
            None => default.to_string(),
        }
    }

    /// Renders every argument starting at `from`.
    pub fn values_from(&mut self, node: &Node, from: usize) -> Vec<String> {
        node.args
            .iter()
            .skip(from)
            .map(|arg| self.render_arg(arg))
            .collect()
    }

    pub fn values(&mut self, node: &Node) -> Vec<String> {
        self.values_from(node, 0)
    }

    /// Renders argument `index` as an identifier (a name, not a value).
    /// `role` describes the position for the error message.
    pub fn identifier(&mut self, node: &Node, index: usize, role: &str) -> String {
        match node.arg(index) {
            Some(Argument::Literal { text, span }) => self.identifier_text(text, *span),
            Some(Argument::Expr(inner)) => {
                self.diagnostics.report(
                    ErrorKind::ExpectedIdentifier {
                        command: node.command.clone(),
                        role: role.to_string(),
                    },
                    inner.span,
                );
                self.render_node(inner)
            }
            None => String::new(),
        }
    }

    /// Reports a semantic error at `span`.
    pub fn report(&mut self, kind: ErrorKind, span: Span) {
        self.diagnostics.report(kind, span);
    }

    /// Rejects numeral literals and the numeric constants `pi` and `tau`
    /// among the arguments of `node`.
    pub fn reject_numbers(&mut self, node: &Node) {
        for arg in &node.args {
            let numeric = match arg {
                Argument::Literal { text, .. } => is_numeral(text),
                Argument::Expr(inner) => inner.command == "pi" || inner.command == "tau",
            };
            if numeric {
                self.diagnostics.report(
                    ErrorKind::UnexpectedNumber {
                        command: node.command.clone(),
                    },
                    arg.span(),
                );
            }
        }
    }

    fn identifier_text(&mut self, text: &str, span: Span) -> String {
        match format_identifier(text) {
            Ok(formatted) => formatted,
            Err(kind) => {
                self.diagnostics.report(kind, span);
                text.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::STANDARD;
    use crate::errors::{ErrorCategory, SourceContext};

    fn render(node: &Node) -> (String, Diagnostics) {
        let mut diagnostics = Diagnostics::new(SourceContext::default());
        let output = Renderer::new(&STANDARD, &mut diagnostics).render_node(node);
        (output, diagnostics)
    }

    #[test]
    fn test_numerals() {
        assert!(is_numeral("3.14"));
        assert!(is_numeral("-2e5"));
        assert!(is_numeral("0"));
        assert!(!is_numeral("x1"));
        assert!(!is_numeral(""));
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(format_identifier("x").unwrap(), "x");
        assert_eq!(format_identifier("abc").unwrap(), "a_{bc}");
        assert_eq!(format_identifier("x1").unwrap(), "x_{1}");
        assert!(matches!(
            format_identifier(""),
            Err(ErrorKind::EmptyIdentifier { .. })
        ));
        assert!(matches!(
            format_identifier("1x"),
            Err(ErrorKind::MalformedIdentifier { .. })
        ));
        assert!(matches!(
            format_identifier("a-b"),
            Err(ErrorKind::MalformedIdentifier { .. })
        ));
        assert_eq!(format_identifier("_tmp").unwrap(), "__{tmp}");
    }

    #[test]
    fn test_identifiers_are_ascii_only() {
        for name in ["xé", "αβ", "é", "x٣"] {
            assert!(
                matches!(
                    format_identifier(name),
                    Err(ErrorKind::MalformedIdentifier { .. })
                ),
                "{} accepted",
                name
            );
        }
    }

    #[test]
    fn test_join_separates_control_words() {
        assert_eq!(join_latex(&["2", "x"], "\\cdot"), "2\\cdot x");
        assert_eq!(join_latex(&["2", "3"], "\\cdot"), "2\\cdot3");
        assert_eq!(join_latex(&["\\pi", "\\tau"], "\\cdot"), "\\pi\\cdot\\tau");
        assert_eq!(join_latex(&["a", "b"], "+"), "a+b");
        assert_eq!(join_latex::<&str>(&[], "+"), "");
    }

    #[test]
    fn test_push_latex_after_braces() {
        let mut out = String::from("\\operatorname{for}");
        push_latex(&mut out, "x");
        assert_eq!(out, "\\operatorname{for}x");
    }

    #[test]
    fn test_render_built_tree() {
        let node = Node::new(
            "add",
            vec![Argument::literal("1"), Argument::expr(Node::new("pi", vec![]))],
        );
        let (output, diagnostics) = render(&node);
        assert_eq!(output, "\\left(1+\\pi\\right)");
        assert!(diagnostics.is_valid());
    }

    #[test]
    fn test_arity_checked_unless_argument_dropped() {
        let mut node = Node::new("neg", vec![]);
        let (_, diagnostics) = render(&node);
        assert_eq!(diagnostics.errors()[0].category(), ErrorCategory::Arity);

        node.dropped_args = true;
        let (output, diagnostics) = render(&node);
        assert!(diagnostics.is_valid());
        assert_eq!(output, "\\left(-\\right)");
    }
}
