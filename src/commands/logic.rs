//! Relations and conditionals.

use crate::commands::{Arity, CommandRegistry, RenderFn};
use crate::render::{join_latex, Renderer};
use crate::syntax::Node;

fn relation(r: &mut Renderer<'_>, node: &Node, symbol: &str) -> String {
    let left = r.value(node, 0);
    let right = r.value(node, 1);
    join_latex(&[left, right], symbol)
}

pub const CMD_EQ: RenderFn = |r, node| relation(r, node, "=");
pub const CMD_GT: RenderFn = |r, node| relation(r, node, ">");
pub const CMD_LT: RenderFn = |r, node| relation(r, node, "<");
pub const CMD_GEQ: RenderFn = |r, node| relation(r, node, "\\ge");
pub const CMD_LEQ: RenderFn = |r, node| relation(r, node, "\\le");

/// Restricts an expression to where a condition holds.
///
/// Usage: (if <condition> <expression>)
///
/// Example:
///   (if (gt x 0) x) ; => x\left\{x>0\right\}
pub const CMD_IF: RenderFn = |r, node| {
    let condition = r.value(node, 0);
    let expression = r.value(node, 1);
    format!("{}\\left\\{{{}\\right\\}}", expression, condition)
};

/// Usage: (piecewise <condition> <then> <else>)
///
/// Example:
///   (piecewise (lt x 0) (neg x) x) ; => \left\{x<0:\left(-x\right),x\right\}
pub const CMD_PIECEWISE: RenderFn = |r, node| {
    let condition = r.value(node, 0);
    let then = r.value(node, 1);
    let otherwise = r.value(node, 2);
    format!("\\left\\{{{}:{},{}\\right\\}}", condition, then, otherwise)
};

pub fn register_logic_commands(registry: &mut CommandRegistry) {
    registry.register("eq", Arity::AtLeast(2), "(eq <a> <b>)", CMD_EQ);
    registry.register("gt", Arity::AtLeast(2), "(gt <a> <b>)", CMD_GT);
    registry.register("lt", Arity::AtLeast(2), "(lt <a> <b>)", CMD_LT);
    registry.register("geq", Arity::AtLeast(2), "(geq <a> <b>)", CMD_GEQ);
    registry.register("leq", Arity::AtLeast(2), "(leq <a> <b>)", CMD_LEQ);
    registry.register("if", Arity::AtLeast(2), "(if <condition> <expression>)", CMD_IF);
    registry.register(
        "piecewise",
        Arity::AtLeast(3),
        "(piecewise <condition> <then> <else>)",
        CMD_PIECEWISE,
    );
}
