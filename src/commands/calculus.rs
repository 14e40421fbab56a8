//! Calculus templates. Each one binds a variable, which always comes first.

use crate::commands::{parens, Arity, CommandRegistry, RenderFn};

/// Usage: (deriv <variable> <body>)
///
/// Example:
///   (deriv x (pow x 2)) ; => \frac{d}{dx}\left(\left(\left(x\right)^{\left(2\right)}\right)\right)
pub const CMD_DERIV: RenderFn = |r, node| {
    let variable = r.identifier(node, 0, "bound variable");
    let body = r.value(node, 1);
    format!("\\frac{{d}}{{d{}}}{}", variable, parens(&body))
};

/// Definite integral.
///
/// Usage: (int <variable> <lower> <upper> <body>)
pub const CMD_INT: RenderFn = |r, node| {
    let variable = r.identifier(node, 0, "bound variable");
    let lower = r.value(node, 1);
    let upper = r.value(node, 2);
    let body = r.value(node, 3);
    format!("\\int_{{{}}}^{{{}}}{}d{}", lower, upper, parens(&body), variable)
};

/// Usage: (sum <variable> <from> <to> <body>)
pub const CMD_SUM: RenderFn = |r, node| {
    let variable = r.identifier(node, 0, "bound variable");
    let from = r.value(node, 1);
    let to = r.value(node, 2);
    let body = r.value(node, 3);
    format!("\\sum_{{{}={}}}^{{{}}}{}", variable, from, to, parens(&body))
};

/// Usage: (prod <variable> <from> <to> <body>)
pub const CMD_PROD: RenderFn = |r, node| {
    let variable = r.identifier(node, 0, "bound variable");
    let from = r.value(node, 1);
    let to = r.value(node, 2);
    let body = r.value(node, 3);
    format!("\\prod_{{{}={}}}^{{{}}}{}", variable, from, to, parens(&body))
};

pub fn register_calculus_commands(registry: &mut CommandRegistry) {
    registry.register("deriv", Arity::AtLeast(2), "(deriv <variable> <body>)", CMD_DERIV);
    registry.register(
        "int",
        Arity::AtLeast(4),
        "(int <variable> <lower> <upper> <body>)",
        CMD_INT,
    );
    registry.register(
        "sum",
        Arity::AtLeast(4),
        "(sum <variable> <from> <to> <body>)",
        CMD_SUM,
    );
    registry.register(
        "prod",
        Arity::AtLeast(4),
        "(prod <variable> <from> <to> <body>)",
        CMD_PROD,
    );
}
