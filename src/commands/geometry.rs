//! Geometry commands: points, polygons, distances and coordinate access.

use crate::commands::{named_call, parens, Arity, CommandRegistry, RenderFn};

/// Usage: (point <x> <y>)
///
/// Example:
///   (point x y) ; => \left(x,y\right)
pub const CMD_POINT: RenderFn = |r, node| {
    let x = r.value(node, 0);
    let y = r.value(node, 1);
    parens(&format!("{},{}", x, y))
};

/// Polygon through a sequence of points. Bare numbers are rejected: every
/// vertex must be a point or a name bound to one.
///
/// Usage: (poly <p1> <p2> ...)
pub const CMD_POLY: RenderFn = |r, node| {
    r.reject_numbers(node);
    named_call("polygon", &r.values(node))
};

/// Usage: (dist <p1> <p2>)
pub const CMD_DIST: RenderFn = |r, node| {
    let args = vec![r.value(node, 0), r.value(node, 1)];
    named_call("distance", &args)
};

/// Usage: (mid <p1> <p2>)
pub const CMD_MID: RenderFn = |r, node| {
    let args = vec![r.value(node, 0), r.value(node, 1)];
    named_call("midpoint", &args)
};

/// A list of assignments run together, e.g. on a click.
///
/// Usage: (action (set a 1) (set b 2) ...)
pub const CMD_ACTION: RenderFn = |r, node| {
    r.reject_numbers(node);
    r.values(node).join(",")
};

/// Usage: (xcoord <point>)
pub const CMD_XCOORD: RenderFn = |r, node| format!("{}.x", r.value(node, 0));

/// Usage: (ycoord <point>)
pub const CMD_YCOORD: RenderFn = |r, node| format!("{}.y", r.value(node, 0));

pub fn register_geometry_commands(registry: &mut CommandRegistry) {
    registry.register("point", Arity::AtLeast(2), "(point <x> <y>)", CMD_POINT);
    registry.register("poly", Arity::AtLeast(2), "(poly <p1> <p2> ...)", CMD_POLY);
    registry.register("dist", Arity::AtLeast(2), "(dist <p1> <p2>)", CMD_DIST);
    registry.register("mid", Arity::AtLeast(2), "(mid <p1> <p2>)", CMD_MID);
    registry.register("action", Arity::AtLeast(1), "(action <update> ...)", CMD_ACTION);
    registry.register("xcoord", Arity::AtLeast(1), "(xcoord <point>)", CMD_XCOORD);
    registry.register("ycoord", Arity::AtLeast(1), "(ycoord <point>)", CMD_YCOORD);
}
