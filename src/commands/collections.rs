//! List commands and the statistics operators that consume lists.

use crate::commands::{named_call, operator_call, Arity, CommandRegistry, RenderFn};

/// Usage: (list <a> <b> ...)
///
/// Example:
///   (list 1 2 3) ; => \left[1,2,3\right]
pub const CMD_LIST: RenderFn = |r, node| format!("\\left[{}\\right]", r.values(node).join(","));

/// One-based element access.
///
/// Usage: (index <list> <position>)
pub const CMD_INDEX: RenderFn = |r, node| {
    let list = r.value(node, 0);
    let position = r.value(node, 1);
    format!("{}\\left[{}\\right]", list, position)
};

/// List comprehension.
///
/// Usage: (listcomp <list> <variable> <body>)
///
/// Example:
///   (listcomp (list 1 2) n (mul n n)) ; => \left[\left(n\cdot n\right)\operatorname{for}n=\left[1,2\right]\right]
pub const CMD_LISTCOMP: RenderFn = |r, node| {
    let list = r.value(node, 0);
    let variable = r.identifier(node, 1, "bound variable");
    let body = r.value(node, 2);
    format!(
        "\\left[{}\\operatorname{{for}}{}={}\\right]",
        body, variable, list
    )
};

pub const CMD_LEN: RenderFn = |r, node| named_call("length", &r.values(node));
pub const CMD_MEAN: RenderFn = |r, node| named_call("mean", &r.values(node));
pub const CMD_MEDIAN: RenderFn = |r, node| named_call("median", &r.values(node));
pub const CMD_MAD: RenderFn = |r, node| named_call("mad", &r.values(node));
pub const CMD_MIN: RenderFn = |r, node| operator_call("\\min", &r.values(node));
pub const CMD_MAX: RenderFn = |r, node| operator_call("\\max", &r.values(node));

pub fn register_collection_commands(registry: &mut CommandRegistry) {
    registry.register("list", Arity::AtLeast(0), "(list <a> <b> ...)", CMD_LIST);
    registry.register("index", Arity::AtLeast(2), "(index <list> <position>)", CMD_INDEX);
    registry.register(
        "listcomp",
        Arity::Exactly(3),
        "(listcomp <list> <variable> <body>)",
        CMD_LISTCOMP,
    );

    // Statistics
    registry.register("len", Arity::AtLeast(1), "(len <list> ...)", CMD_LEN);
    registry.register("mean", Arity::AtLeast(1), "(mean <a> ...)", CMD_MEAN);
    registry.register("median", Arity::AtLeast(1), "(median <a> ...)", CMD_MEDIAN);
    registry.register("mad", Arity::AtLeast(1), "(mad <a> ...)", CMD_MAD);
    registry.register("min", Arity::AtLeast(1), "(min <a> ...)", CMD_MIN);
    registry.register("max", Arity::AtLeast(1), "(max <a> ...)", CMD_MAX);
}

