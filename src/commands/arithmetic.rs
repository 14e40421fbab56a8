//! # Arithmetic Commands
//!
//! - **Variadic**: `add`, `sub`, `mul`
//! - **Binary templates**: `pow`, `frac`, `root`, `log`
//! - **Unary**: `sqrt`, `ln`, `neg`, `fact`
//!
//! Variadic operators wrap their result in auto-sized parentheses so nesting
//! never depends on operator precedence.

use crate::commands::{parens, Arity, CommandRegistry, RenderFn};
use crate::render::join_latex;

/// Adds values.
///
/// Usage: (add <a> <b> ...)
///
/// Example:
///   (add 1 2 3) ; => \left(1+2+3\right)
pub const CMD_ADD: RenderFn = |r, node| parens(&r.values(node).join("+"));

/// Subtracts values left to right.
///
/// Usage: (sub <a> <b> ...)
pub const CMD_SUB: RenderFn = |r, node| parens(&r.values(node).join("-"));

/// Multiplies values.
///
/// Usage: (mul <a> <b> ...)
///
/// Example:
///   (mul 2 x) ; => \left(2\cdot x\right)
pub const CMD_MUL: RenderFn = |r, node| parens(&join_latex(&r.values(node), "\\cdot"));

/// Raises a base to an exponent.
///
/// Usage: (pow <base> <exponent>)
pub const CMD_POW: RenderFn = |r, node| {
    let base = r.value(node, 0);
    let exponent = r.value(node, 1);
    parens(&format!("{}^{{{}}}", parens(&base), parens(&exponent)))
};

/// Usage: (frac <numerator> <denominator>)
pub const CMD_FRAC: RenderFn = |r, node| {
    let numerator = r.value(node, 0);
    let denominator = r.value(node, 1);
    format!("\\frac{{{}}}{{{}}}", numerator, denominator)
};

/// Indexed root.
///
/// Usage: (root <radicand> <index>)
///
/// Example:
///   (root x 3) ; => \sqrt[3]{x}
pub const CMD_ROOT: RenderFn = |r, node| {
    let radicand = r.value(node, 0);
    let index = r.value(node, 1);
    format!("\\sqrt[{}]{{{}}}", index, radicand)
};

/// Usage: (sqrt <value>)
pub const CMD_SQRT: RenderFn = |r, node| format!("\\sqrt{{{}}}", r.value(node, 0));

/// Logarithm with an explicit base.
///
/// Usage: (log <value> <base>)
///
/// Example:
///   (log x 2) ; => \log_{2}\left(x\right)
pub const CMD_LOG: RenderFn = |r, node| {
    let value = r.value(node, 0);
    let base = r.value(node, 1);
    format!("\\log_{{{}}}{}", base, parens(&value))
};

/// Usage: (ln <value>)
pub const CMD_LN: RenderFn = |r, node| format!("\\ln{}", parens(&r.value(node, 0)));

/// Usage: (neg <value>)
pub const CMD_NEG: RenderFn = |r, node| parens(&format!("-{}", r.value(node, 0)));

/// Usage: (fact <value>)
pub const CMD_FACT: RenderFn = |r, node| format!("{}!", parens(&r.value(node, 0)));

pub fn register_arithmetic_commands(registry: &mut CommandRegistry) {
    registry.register("add", Arity::AtLeast(0), "(add <a> <b> ...)", CMD_ADD);
    registry.register("sub", Arity::AtLeast(0), "(sub <a> <b> ...)", CMD_SUB);
    registry.register("mul", Arity::AtLeast(0), "(mul <a> <b> ...)", CMD_MUL);
    registry.register("pow", Arity::AtLeast(2), "(pow <base> <exponent>)", CMD_POW);
    registry.register(
        "frac",
        Arity::AtLeast(2),
        "(frac <numerator> <denominator>)",
        CMD_FRAC,
    );
    registry.register("root", Arity::AtLeast(2), "(root <radicand> <index>)", CMD_ROOT);
    registry.register("sqrt", Arity::AtLeast(1), "(sqrt <value>)", CMD_SQRT);
    registry.register("log", Arity::AtLeast(2), "(log <value> <base>)", CMD_LOG);
    registry.register("ln", Arity::AtLeast(1), "(ln <value>)", CMD_LN);
    registry.register("neg", Arity::AtLeast(1), "(neg <value>)", CMD_NEG);
    registry.register("fact", Arity::AtLeast(1), "(fact <value>)", CMD_FACT);
}
