//! Error handling for the dec compiler.
//!
//! Every failure in grouping, parsing, and rendering is a [`CompileError`]
//! recorded in a [`Diagnostics`] sink. Nothing in the pipeline aborts on the
//! first error: the sink collects everything and the engine withholds the
//! output when it is not empty.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use serde::Serialize;
use thiserror::Error;

use crate::syntax::Span;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Name and full text of the source being compiled.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from real file content
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a fallback when real source is unavailable
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "fallback".to_string(),
            content: format!("// {}", context),
        }
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::fallback("default context")
    }
}

// ============================================================================
// ERROR KINDS
// ============================================================================

/// Everything that can go wrong while compiling. The display string is the
/// human-readable diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // Structural errors
    #[error("mismatched parentheses")]
    MismatchedParentheses,
    #[error("command expected after '('")]
    CommandExpected { found: Option<String> },
    #[error("expression nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },

    // Identifier errors
    #[error("identifier \"{identifier}\" is empty")]
    EmptyIdentifier { identifier: String },
    #[error("identifier \"{identifier}\" is not alphanumeric")]
    MalformedIdentifier { identifier: String },
    #[error("expected identifier as {role} for \"{command}\", found an expression")]
    ExpectedIdentifier { command: String, role: String },

    // Arity errors
    #[error("\"{command}\" expects {expected} argument(s), got {actual}")]
    ArityMismatch {
        command: String,
        expected: String,
        actual: usize,
    },

    #[error("command \"{command}\" not found")]
    UnknownCommand { command: String },

    // Semantic errors
    #[error("unexpected number in \"{command}\"")]
    UnexpectedNumber { command: String },
    #[error("expected (params ...) as function inputs for \"{command}\"")]
    ExpectedParams { command: String },

    #[error("cannot read {path}: {reason}")]
    InvalidPath { path: String, reason: String },
}

/// Coarse classification of an [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Structural,
    Identifier,
    Arity,
    UnknownCommand,
    Semantic,
    Io,
}

impl ErrorKind {
    /// Get the error category for test assertions and JSON output
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MismatchedParentheses
            | Self::CommandExpected { .. }
            | Self::NestingTooDeep { .. } => ErrorCategory::Structural,

            Self::EmptyIdentifier { .. }
            | Self::MalformedIdentifier { .. }
            | Self::ExpectedIdentifier { .. } => ErrorCategory::Identifier,

            Self::ArityMismatch { .. } => ErrorCategory::Arity,

            Self::UnknownCommand { .. } => ErrorCategory::UnknownCommand,

            Self::UnexpectedNumber { .. } | Self::ExpectedParams { .. } => {
                ErrorCategory::Semantic
            }

            Self::InvalidPath { .. } => ErrorCategory::Io,
        }
    }

    /// Get error code suffix for diagnostic codes
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::MismatchedParentheses => "mismatched_parentheses",
            Self::CommandExpected { .. } => "command_expected",
            Self::NestingTooDeep { .. } => "nesting_too_deep",
            Self::EmptyIdentifier { .. } => "empty_identifier",
            Self::MalformedIdentifier { .. } => "malformed_identifier",
            Self::ExpectedIdentifier { .. } => "expected_identifier",
            Self::ArityMismatch { .. } => "arity_mismatch",
            Self::UnknownCommand { .. } => "unknown_command",
            Self::UnexpectedNumber { .. } => "unexpected_number",
            Self::ExpectedParams { .. } => "expected_params",
            Self::InvalidPath { .. } => "invalid_path",
        }
    }

    /// The compilation phase that produces this kind of error.
    pub const fn phase(&self) -> &'static str {
        match self {
            Self::MismatchedParentheses
            | Self::CommandExpected { .. }
            | Self::NestingTooDeep { .. } => "parse",
            Self::InvalidPath { .. } => "file-system",
            _ => "render",
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            Self::MismatchedParentheses => "unbalanced here",
            Self::CommandExpected { .. } => "command missing here",
            Self::NestingTooDeep { .. } => "too deep",
            Self::EmptyIdentifier { .. } => "empty identifier",
            Self::MalformedIdentifier { .. } => "invalid identifier",
            Self::ExpectedIdentifier { .. } => "expected identifier",
            Self::ArityMismatch { .. } => "arity mismatch",
            Self::UnknownCommand { .. } => "unknown command",
            Self::UnexpectedNumber { .. } => "number not allowed here",
            Self::ExpectedParams { .. } => "expected (params ...)",
            Self::InvalidPath { .. } => "invalid path",
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            Self::CommandExpected { found: Some(found) } => Some(format!(
                "the first item of a group names a command, but found `{}`",
                found
            )),
            Self::MalformedIdentifier { .. } => Some(
                "identifiers start with a letter or '_' and contain only letters, digits and '_'"
                    .into(),
            ),
            Self::UnknownCommand { .. } => Some("run `dec commands` to list every command".into()),
            Self::UnexpectedNumber { .. } => {
                Some("use a point or an identifier instead of a number".into())
            }
            _ => None,
        }
    }
}

// ============================================================================
// COMPILE ERROR
// ============================================================================

/// Context-specific source information
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: String,
}

/// Diagnostic enhancement data
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// A single recorded diagnostic.
#[derive(Debug, Clone)]
pub struct CompileError {
    pub kind: ErrorKind,
    pub source_info: SourceInfo,
    pub diagnostic_info: DiagnosticInfo,
}

impl CompileError {
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    /// Byte span of the offending text in the compiled source.
    pub fn span(&self) -> Span {
        let offset = self.source_info.primary_span.offset();
        Span {
            start: offset,
            end: offset + self.source_info.primary_span.len(),
        }
    }

    pub fn code(&self) -> &str {
        &self.diagnostic_info.error_code
    }
}

impl std::error::Error for CompileError {}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error: {}", self.kind)
    }
}

impl Diagnostic for CompileError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.kind.primary_label().to_string()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

/// Flat, serializable view of a [`CompileError`] for JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticRecord {
    pub category: ErrorCategory,
    pub code: String,
    pub message: String,
    pub span: Span,
}

impl From<&CompileError> for DiagnosticRecord {
    fn from(error: &CompileError) -> Self {
        Self {
            category: error.category(),
            code: error.code().to_string(),
            message: error.to_string(),
            span: error.span(),
        }
    }
}

// ============================================================================
// ERROR REPORTING
// ============================================================================

/// Context-aware error recording. Implementors decide where errors go; the
/// convenience methods keep call sites short.
pub trait ErrorReporting {
    fn report(&mut self, kind: ErrorKind, span: Span);

    fn mismatched_parentheses(&mut self, span: Span) {
        self.report(ErrorKind::MismatchedParentheses, span);
    }

    fn arity_mismatch(&mut self, command: &str, expected: &str, actual: usize, span: Span) {
        self.report(
            ErrorKind::ArityMismatch {
                command: command.into(),
                expected: expected.into(),
                actual,
            },
            span,
        );
    }

    fn unknown_command(&mut self, command: &str, span: Span) {
        self.report(
            ErrorKind::UnknownCommand {
                command: command.into(),
            },
            span,
        );
    }
}

/// The per-compile diagnostic sink.
///
/// Holds the source it reports against so every error can carry a
/// `NamedSource` for miette. Valid while no error has been reported.
#[derive(Debug, Default)]
pub struct Diagnostics {
    source: SourceContext,
    named: Option<Arc<NamedSource<String>>>,
    errors: Vec<CompileError>,
}

impl Diagnostics {
    pub fn new(source: SourceContext) -> Self {
        let mut diagnostics = Self::default();
        diagnostics.reset(source);
        diagnostics
    }

    /// Clears all recorded errors and retargets the sink at `source`.
    pub fn reset(&mut self, source: SourceContext) {
        self.named = Some(source.to_named_source());
        self.source = source;
        self.errors.clear();
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[CompileError] {
        &self.errors
    }

    pub fn source(&self) -> &SourceContext {
        &self.source
    }

    /// Human-readable messages in the order they were reported.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn take(&mut self) -> Vec<CompileError> {
        std::mem::take(&mut self.errors)
    }
}

impl ErrorReporting for Diagnostics {
    fn report(&mut self, kind: ErrorKind, span: Span) {
        let named = self
            .named
            .get_or_insert_with(|| self.source.to_named_source())
            .clone();
        tracing::debug!(code = kind.code_suffix(), start = span.start, end = span.end, "{}", kind);
        let error = make_error(named, kind, span);
        self.errors.push(error);
    }
}

fn make_error(source: Arc<NamedSource<String>>, kind: ErrorKind, span: Span) -> CompileError {
    let phase = kind.phase();
    let error_code = format!("dec::{}::{}", phase, kind.code_suffix());
    let help = kind.help();
    CompileError {
        kind,
        source_info: SourceInfo {
            source,
            primary_span: to_source_span(span),
            phase: phase.into(),
        },
        diagnostic_info: DiagnosticInfo { help, error_code },
    }
}

/// Builds an error outside of a compile pass, e.g. for file access.
pub fn standalone_error(source: SourceContext, kind: ErrorKind) -> CompileError {
    make_error(source.to_named_source(), kind, Span::default())
}

/// Converts a syntax span to a miette SourceSpan.
pub fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::from(span.start..span.end)
}

// ============================================================================
// ERROR FORMATTING UTILITIES
// ============================================================================

/// Prints a CompileError with full miette diagnostics.
pub fn print_error(error: CompileError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
