//! Trigonometric, hyperbolic and rounding operators.
//!
//! All of these are single-argument operator calls, so they are generated
//! from tables instead of being spelled out one by one. Names beginning with
//! `a` map to the corresponding `arc` operator.

use crate::commands::{named_call, operator_call, Arity, CommandRegistry, RenderFn};
use crate::render::Renderer;
use crate::syntax::Node;

fn unary(r: &mut Renderer<'_>, node: &Node, operator: &str) -> String {
    let value = r.value(node, 0);
    operator_call(operator, &[value])
}

pub const CMD_SIN: RenderFn = |r, node| unary(r, node, "\\sin");
pub const CMD_COS: RenderFn = |r, node| unary(r, node, "\\cos");
pub const CMD_TAN: RenderFn = |r, node| unary(r, node, "\\tan");
pub const CMD_ASIN: RenderFn = |r, node| unary(r, node, "\\arcsin");
pub const CMD_ACOS: RenderFn = |r, node| unary(r, node, "\\arccos");
pub const CMD_ATAN: RenderFn = |r, node| unary(r, node, "\\arctan");
pub const CMD_SINH: RenderFn = |r, node| unary(r, node, "\\sinh");
pub const CMD_COSH: RenderFn = |r, node| unary(r, node, "\\cosh");
pub const CMD_TANH: RenderFn = |r, node| unary(r, node, "\\tanh");
pub const CMD_ASINH: RenderFn = |r, node| unary(r, node, "\\arcsinh");
pub const CMD_ACOSH: RenderFn = |r, node| unary(r, node, "\\arccosh");
pub const CMD_ATANH: RenderFn = |r, node| unary(r, node, "\\arctanh");

/// Two-argument arctangent.
///
/// Usage: (atan2 <y> <x>)
pub const CMD_ATAN2: RenderFn = |r, node| {
    let args = vec![r.value(node, 0), r.value(node, 1)];
    operator_call("\\arctan", &args)
};

pub const CMD_FLOOR: RenderFn = |r, node| {
    let value = r.value(node, 0);
    named_call("floor", &[value])
};
pub const CMD_CEIL: RenderFn = |r, node| {
    let value = r.value(node, 0);
    named_call("ceil", &[value])
};
pub const CMD_ROUND: RenderFn = |r, node| {
    let value = r.value(node, 0);
    named_call("round", &[value])
};

const UNARY: &[(&str, &str, RenderFn)] = &[
    ("sin", "(sin <angle>)", CMD_SIN),
    ("cos", "(cos <angle>)", CMD_COS),
    ("tan", "(tan <angle>)", CMD_TAN),
    ("asin", "(asin <value>)", CMD_ASIN),
    ("acos", "(acos <value>)", CMD_ACOS),
    ("atan", "(atan <value>)", CMD_ATAN),
    ("sinh", "(sinh <value>)", CMD_SINH),
    ("cosh", "(cosh <value>)", CMD_COSH),
    ("tanh", "(tanh <value>)", CMD_TANH),
    ("asinh", "(asinh <value>)", CMD_ASINH),
    ("acosh", "(acosh <value>)", CMD_ACOSH),
    ("atanh", "(atanh <value>)", CMD_ATANH),
    ("floor", "(floor <value>)", CMD_FLOOR),
    ("ceil", "(ceil <value>)", CMD_CEIL),
    ("round", "(round <value>)", CMD_ROUND),
];

pub fn register_trig_commands(registry: &mut CommandRegistry) {
    for &(name, usage, render) in UNARY {
        registry.register(name, Arity::AtLeast(1), usage, render);
    }
    registry.register("atan2", Arity::AtLeast(2), "(atan2 <y> <x>)", CMD_ATAN2);
}
