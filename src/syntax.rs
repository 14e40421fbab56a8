//! Syntax module for the dec language
//!
//! This module provides the Abstract Syntax Tree types for prefix expressions,
//! with source location tracking, plus the grouper and parser that build them.

use serde::{Deserialize, Serialize};

pub mod grouper;
pub mod parser;

/// Represents a span in the source code, as byte offsets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// One parenthesized expression: a command applied to positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub command: String,
    pub command_span: Span,
    pub args: Vec<Argument>,
    /// Span of the node's content, excluding the surrounding parentheses.
    pub span: Span,
    /// Set when a nested argument failed to parse and was left out of `args`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub dropped_args: bool,
}

/// A positional argument of a [`Node`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Argument {
    /// Unparenthesized token. Whether it is a numeral or an identifier is
    /// decided at render time.
    Literal { text: String, span: Span },
    /// Nested parenthesized expression.
    Expr(Box<Node>),
}

impl Node {
    pub fn new(command: impl Into<String>, args: Vec<Argument>) -> Self {
        Self {
            command: command.into(),
            command_span: Span::default(),
            args,
            span: Span::default(),
            dropped_args: false,
        }
    }

    pub fn arg(&self, index: usize) -> Option<&Argument> {
        self.args.get(index)
    }

    /// Pretty-prints the node back into prefix notation.
    pub fn pretty(&self) -> String {
        let mut out = format!("({}", self.command);
        for arg in &self.args {
            out.push(' ');
            out.push_str(&arg.pretty());
        }
        out.push(')');
        out
    }
}

impl Argument {
    pub fn literal(text: impl Into<String>) -> Self {
        Argument::Literal {
            text: text.into(),
            span: Span::default(),
        }
    }

    pub fn expr(node: Node) -> Self {
        Argument::Expr(Box::new(node))
    }

    pub fn span(&self) -> Span {
        match self {
            Argument::Literal { span, .. } => *span,
            Argument::Expr(node) => node.span,
        }
    }

    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Argument::Literal { .. } => None,
            Argument::Expr(node) => Some(node),
        }
    }

    /// True if this argument is a nested `(command ...)` expression.
    pub fn is_command(&self, command: &str) -> bool {
        self.as_node().is_some_and(|node| node.command == command)
    }

    pub fn pretty(&self) -> String {
        match self {
            Argument::Literal { text, .. } => text.clone(),
            Argument::Expr(node) => node.pretty(),
        }
    }
}
