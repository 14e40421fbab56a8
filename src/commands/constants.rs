//! Fixed symbols. These take no arguments and ignore any they are given.

use crate::commands::{Arity, CommandRegistry, RenderFn};

pub const CMD_ALPHA: RenderFn = |_, _| "\\alpha".to_string();
pub const CMD_BETA: RenderFn = |_, _| "\\beta".to_string();
pub const CMD_THETA: RenderFn = |_, _| "\\theta".to_string();
pub const CMD_PI: RenderFn = |_, _| "\\pi".to_string();
pub const CMD_TAU: RenderFn = |_, _| "\\tau".to_string();
pub const CMD_PHI: RenderFn = |_, _| "\\phi".to_string();
pub const CMD_INF: RenderFn = |_, _| "\\infty".to_string();
pub const CMD_NINF: RenderFn = |_, _| "-\\infty".to_string();
/// Used inside lists for ranges: `(list 1 (ellipsis) 10)`.
pub const CMD_ELLIPSIS: RenderFn = |_, _| "...".to_string();
/// The empty list.
pub const CMD_EMPTY: RenderFn = |_, _| "\\left[\\right]".to_string();

const CONSTANTS: &[(&str, &str, RenderFn)] = &[
    ("alpha", "(alpha)", CMD_ALPHA),
    ("beta", "(beta)", CMD_BETA),
    ("theta", "(theta)", CMD_THETA),
    ("pi", "(pi)", CMD_PI),
    ("tau", "(tau)", CMD_TAU),
    ("phi", "(phi)", CMD_PHI),
    ("inf", "(inf)", CMD_INF),
    ("ninf", "(ninf)", CMD_NINF),
    ("ellipsis", "(ellipsis)", CMD_ELLIPSIS),
    ("empty", "(empty)", CMD_EMPTY),
];

pub fn register_constant_commands(registry: &mut CommandRegistry) {
    for &(name, usage, render) in CONSTANTS {
        registry.register(name, Arity::AtLeast(0), usage, render);
    }
}
