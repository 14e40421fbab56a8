//! dec Parser - recursive descent over one balanced group
//!
//! Converts the inner text of a parenthesized group into a [`Node`] tree with
//! source location tracking. The parser is purely syntactic: whether a literal
//! is a numeral or an identifier, and whether a command exists, is decided when
//! the tree is rendered.

use crate::errors::{Diagnostics, ErrorKind, ErrorReporting};
use crate::syntax::{Argument, Node, Span};

/// Nesting limit used when no other limit is configured.
pub const DEFAULT_MAX_DEPTH: usize = 256;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parser state shared across one recursive descent.
pub struct Parser<'d> {
    diagnostics: &'d mut Diagnostics,
    max_depth: usize,
}

impl<'d> Parser<'d> {
    pub fn new(diagnostics: &'d mut Diagnostics, max_depth: usize) -> Self {
        Self {
            diagnostics,
            max_depth,
        }
    }

    /// Parses the content of one group (without its outer parentheses).
    ///
    /// `offset` is the position of `text` in the compiled source. Returns
    /// `None` when no command could be found; the reason is recorded in the
    /// diagnostics.
    pub fn parse_expression(&mut self, text: &str, offset: usize) -> Option<Node> {
        self.parse_at_depth(text, offset, 1)
    }

    fn parse_at_depth(&mut self, text: &str, offset: usize, depth: usize) -> Option<Node> {
        let span = Span::new(offset, offset + text.len());
        if depth > self.max_depth {
            self.diagnostics.report(
                ErrorKind::NestingTooDeep {
                    limit: self.max_depth,
                },
                span,
            );
            return None;
        }

        let tokens = split_top_level(text, offset, self.diagnostics);
        let mut tokens = tokens.into_iter();

        let Some(command) = tokens.next() else {
            self.diagnostics
                .report(ErrorKind::CommandExpected { found: None }, span);
            return None;
        };
        if command.text.starts_with('(') {
            self.diagnostics.report(
                ErrorKind::CommandExpected {
                    found: Some(command.text.to_string()),
                },
                command.span,
            );
            return None;
        }

        let mut args = Vec::new();
        let mut dropped_args = false;
        for token in tokens {
            match self.parse_argument(token, depth) {
                Some(arg) => args.push(arg),
                None => dropped_args = true,
            }
        }

        tracing::trace!(command = command.text, args = args.len(), "parsed node");
        Some(Node {
            command: command.text.to_string(),
            command_span: command.span,
            args,
            span,
            dropped_args,
        })
    }

    fn parse_argument(&mut self, token: Token<'_>, depth: usize) -> Option<Argument> {
        if !token.text.starts_with('(') {
            return Some(Argument::Literal {
                text: token.text.to_string(),
                span: token.span,
            });
        }
        if token.text.len() < 2 || !token.text.ends_with(')') {
            self.diagnostics.mismatched_parentheses(token.span);
            return None;
        }
        let inner = &token.text[1..token.text.len() - 1];
        self.parse_at_depth(inner, token.span.start + 1, depth + 1)
            .map(Argument::expr)
    }
}

/// Parses a single expression with the default nesting limit.
pub fn parse_expression(text: &str, offset: usize, diagnostics: &mut Diagnostics) -> Option<Node> {
    Parser::new(diagnostics, DEFAULT_MAX_DEPTH).parse_expression(text, offset)
}

// ============================================================================
// TOKENIZER
// ============================================================================

/// A whitespace-delimited token at paren depth 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub text: &'src str,
    pub span: Span,
}

/// Splits `text` at whitespace that is not inside parentheses.
///
/// A token beginning with `(` runs to its matching `)` regardless of the
/// whitespace inside it. Unbalanced parentheses are reported; the tokens found
/// so far are still returned.
pub fn split_top_level<'src>(
    text: &'src str,
    offset: usize,
    diagnostics: &mut Diagnostics,
) -> Vec<Token<'src>> {
    let mut tokens = Vec::new();
    let mut depth: usize = 0;
    let mut start: Option<usize> = None;

    for (index, ch) in text.char_indices() {
        if ch.is_whitespace() && depth == 0 {
            if let Some(begin) = start.take() {
                tokens.push(make_token(text, begin, index, offset));
            }
            continue;
        }
        if start.is_none() {
            start = Some(index);
        }
        match ch {
            '(' => depth += 1,
            ')' if depth == 0 => {
                diagnostics.mismatched_parentheses(Span::new(offset + index, offset + index + 1))
            }
            ')' => depth -= 1,
            _ => {}
        }
    }
    if let Some(begin) = start {
        tokens.push(make_token(text, begin, text.len(), offset));
    }
    if depth != 0 {
        diagnostics.mismatched_parentheses(Span::new(offset, offset + text.len()));
    }
    tokens
}

fn make_token(text: &str, begin: usize, end: usize, offset: usize) -> Token<'_> {
    Token {
        text: &text[begin..end],
        span: Span::new(offset + begin, offset + end),
    }
}
