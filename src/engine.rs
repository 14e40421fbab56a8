//! Compilation pipeline.
//!
//! Ties the grouper, parser and renderer together: every top-level group is
//! parsed and rendered on its own, fragments are joined one per line, and the
//! text is withheld if anything was reported along the way.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::commands::{CommandRegistry, STANDARD};
use crate::errors::{
    standalone_error, CompileError, DiagnosticRecord, Diagnostics, ErrorKind, SourceContext,
};
use crate::render::Renderer;
use crate::syntax::grouper::find_groups;
use crate::syntax::parser::{Parser, DEFAULT_MAX_DEPTH};
use crate::syntax::Node;

// ============================================================================
// OPTIONS AND RESULTS
// ============================================================================

/// Tunables for a [`Compiler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Deepest parenthesis nesting accepted inside one group.
    pub max_depth: usize,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// The outcome of one compile: the LaTeX text, if nothing went wrong, and
/// every diagnostic in the order it was reported.
#[derive(Debug)]
pub struct Compilation {
    pub output: Option<String>,
    pub diagnostics: Vec<CompileError>,
}

impl Compilation {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    /// Human-readable diagnostic messages.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    pub fn into_result(self) -> Result<String, Vec<CompileError>> {
        match self.output {
            Some(output) => Ok(output),
            None => Err(self.diagnostics),
        }
    }

    /// Serializable summary, used for `--json` output.
    pub fn to_report(&self) -> CompilationReport {
        CompilationReport {
            output: self.output.clone(),
            diagnostics: self.diagnostics.iter().map(DiagnosticRecord::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompilationReport {
    pub output: Option<String>,
    pub diagnostics: Vec<DiagnosticRecord>,
}

// ============================================================================
// COMPILER
// ============================================================================

/// Compiles prefix source text into LaTeX against a command registry.
#[derive(Clone, Copy)]
pub struct Compiler<'r> {
    registry: &'r CommandRegistry,
    options: CompileOptions,
}

impl Default for Compiler<'static> {
    fn default() -> Self {
        Self::new(&STANDARD, CompileOptions::default())
    }
}

impl<'r> Compiler<'r> {
    pub fn new(registry: &'r CommandRegistry, options: CompileOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &'r CommandRegistry {
        self.registry
    }

    /// Compiles `source` from scratch.
    pub fn compile(&self, source: &str) -> Compilation {
        self.compile_named("input", source)
    }

    /// Compiles `source`, naming it `name` in diagnostics.
    pub fn compile_named(&self, name: &str, source: &str) -> Compilation {
        let mut diagnostics = Diagnostics::default();
        let output = self.compile_into(SourceContext::from_file(name, source), &mut diagnostics);
        Compilation {
            output,
            diagnostics: diagnostics.take(),
        }
    }

    /// Compiles `source` into an existing sink, which is reset first.
    ///
    /// Returns the LaTeX text, one group per line, or `None` if the sink
    /// recorded anything.
    pub fn compile_into(
        &self,
        source: SourceContext,
        diagnostics: &mut Diagnostics,
    ) -> Option<String> {
        diagnostics.reset(source.clone());
        let text = source.content.as_str();

        let mut output = String::new();
        let groups = find_groups(text, diagnostics);
        for group in &groups {
            let node = Parser::new(diagnostics, self.options.max_depth)
                .parse_expression(group.content, group.content_span.start);
            let Some(node) = node else {
                continue;
            };
            let fragment = Renderer::new(self.registry, diagnostics).render_node(&node);
            tracing::debug!(command = %node.command, start = group.span.start, "rendered group");
            output.push_str(&fragment);
            output.push('\n');
        }

        tracing::debug!(
            source = %source.name,
            groups = groups.len(),
            errors = diagnostics.errors().len(),
            "compilation finished"
        );
        diagnostics.is_valid().then_some(output)
    }

    /// Parses every top-level group without rendering.
    pub fn parse(&self, source: &str) -> (Vec<Node>, Vec<CompileError>) {
        let mut diagnostics = Diagnostics::new(SourceContext::from_file("input", source));
        let mut nodes = Vec::new();
        for group in find_groups(source, &mut diagnostics) {
            let node = Parser::new(&mut diagnostics, self.options.max_depth)
                .parse_expression(group.content, group.content_span.start);
            nodes.extend(node);
        }
        (nodes, diagnostics.take())
    }
}

/// Compiles `source` with the standard command set and default options.
///
/// # Examples
///
/// ```rust
/// let compilation = dec::compile("(add 1 (mul 2 3))");
/// assert_eq!(compilation.output(), Some("\\left(1+\\left(2\\cdot3\\right)\\right)\n"));
///
/// let failed = dec::compile("(poly 1 2)");
/// assert!(failed.output().is_none());
/// ```
pub fn compile(source: &str) -> Compilation {
    Compiler::default().compile(source)
}

/// Reads a source file, reporting failures as a diagnostic.
pub fn read_file(path: &Path) -> Result<String, CompileError> {
    std::fs::read_to_string(path).map_err(|error| {
        standalone_error(
            SourceContext::fallback("read_file"),
            ErrorKind::InvalidPath {
                path: path.display().to_string(),
                reason: error.to_string(),
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCategory;

    #[test]
    fn test_output_is_one_line_per_group() {
        let compilation = compile("(let m 0)\n(let b 1)");
        assert_eq!(compilation.output(), Some("m=0\nb=1\n"));
    }

    #[test]
    fn test_empty_source_compiles_to_nothing() {
        let compilation = compile("   \n");
        assert_eq!(compilation.output(), Some(""));
        assert!(compilation.is_valid());
    }

    #[test]
    fn test_sink_is_reused_across_compiles() {
        let compiler = Compiler::default();
        let mut diagnostics = Diagnostics::default();
        let failed = compiler.compile_into(
            SourceContext::from_file("a.dec", "(nope)"),
            &mut diagnostics,
        );
        assert!(failed.is_none());
        assert_eq!(diagnostics.errors()[0].category(), ErrorCategory::UnknownCommand);

        let ok = compiler.compile_into(
            SourceContext::from_file("b.dec", "(pi)"),
            &mut diagnostics,
        );
        assert_eq!(ok.as_deref(), Some("\\pi\n"));
        assert!(diagnostics.is_valid());
    }

    #[test]
    fn test_parse_collects_groups() {
        let (nodes, errors) = Compiler::default().parse("(let m 0) (add 1 (mul 2 3))");
        assert!(errors.is_empty());
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].pretty(), "(add 1 (mul 2 3))");
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: CompileOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, CompileOptions::default());
        let options: CompileOptions = serde_json::from_str(r#"{"max_depth": 4}"#).unwrap();
        assert_eq!(options.max_depth, 4);
    }

    #[test]
    fn test_read_missing_file() {
        let error = read_file(Path::new("/definitely/not/here.dec")).unwrap_err();
        assert_eq!(error.category(), ErrorCategory::Io);
    }
}
