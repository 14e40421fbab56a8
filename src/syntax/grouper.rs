//! Top-level grouping.
//!
//! Splits a source text into its outermost balanced `( ... )` regions. Each
//! region is compiled on its own, so an error in one group never stops its
//! siblings from being parsed and rendered.
//!
//! Newlines need no separate normalization pass: the parser treats every
//! whitespace run as one separator, and spans stay in the original text.

use crate::errors::{Diagnostics, ErrorReporting};
use crate::syntax::Span;

/// One outermost parenthesized region of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Group<'src> {
    /// Text between the outer parentheses.
    pub content: &'src str,
    /// Span of `content` in the source.
    pub content_span: Span,
    /// Span of the whole group, parentheses included.
    pub span: Span,
}

/// Finds every top-level group in `source`, in source order.
///
/// Unbalanced parentheses are reported and scanning carries on, so groups that
/// are well formed still come back. Text outside any group is ignored.
pub fn find_groups<'src>(source: &'src str, diagnostics: &mut Diagnostics) -> Vec<Group<'src>> {
    let mut groups = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for (index, ch) in source.char_indices() {
        match ch {
            '(' => open.push(index),
            ')' => {
                let Some(start) = open.pop() else {
                    diagnostics.mismatched_parentheses(Span::new(index, index + 1));
                    continue;
                };
                if open.is_empty() {
                    groups.push(Group {
                        content: &source[start + 1..index],
                        content_span: Span::new(start + 1, index),
                        span: Span::new(start, index + 1),
                    });
                }
            }
            _ => {}
        }
    }

    if let Some(&outermost) = open.first() {
        diagnostics.mismatched_parentheses(Span::new(outermost, outermost + 1));
    }

    tracing::trace!(count = groups.len(), "found top-level groups");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorCategory, SourceContext};

    fn groups_of(source: &str) -> (Vec<String>, Diagnostics) {
        let mut diagnostics = Diagnostics::new(SourceContext::from_file("test", source));
        let groups = find_groups(source, &mut diagnostics)
            .into_iter()
            .map(|g| g.content.to_string())
            .collect();
        (groups, diagnostics)
    }

    #[test]
    fn test_sibling_groups() {
        let (groups, diagnostics) = groups_of("(let m 0)\n(let b (add 1 2))");
        assert_eq!(groups, vec!["let m 0", "let b (add 1 2)"]);
        assert!(diagnostics.is_valid());
    }

    #[test]
    fn test_text_outside_groups_is_ignored() {
        let (groups, diagnostics) = groups_of("stray (pi) words");
        assert_eq!(groups, vec!["pi"]);
        assert!(diagnostics.is_valid());
    }

    #[test]
    fn test_unexpected_close_keeps_scanning() {
        let (groups, diagnostics) = groups_of(") (let m 0)");
        assert_eq!(groups, vec!["let m 0"]);
        assert_eq!(diagnostics.errors().len(), 1);
        assert_eq!(diagnostics.errors()[0].category(), ErrorCategory::Structural);
        assert_eq!(diagnostics.errors()[0].span(), Span::new(0, 1));
    }

    #[test]
    fn test_unclosed_group_reported_once() {
        let (groups, diagnostics) = groups_of("(let m 0) (add (mul 1 2)");
        assert_eq!(groups, vec!["let m 0"]);
        assert_eq!(diagnostics.errors().len(), 1);
        assert_eq!(diagnostics.errors()[0].span(), Span::new(10, 11));
    }

    #[test]
    fn test_group_spans() {
        let source = "  (pi)";
        let mut diagnostics = Diagnostics::new(SourceContext::from_file("test", source));
        let groups = find_groups(source, &mut diagnostics);
        assert_eq!(groups[0].span, Span::new(2, 6));
        assert_eq!(groups[0].content_span, Span::new(3, 5));
    }
}
