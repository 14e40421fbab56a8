//! # dec
//!
//! A compiler from a parenthesized prefix notation to the LaTeX expressions
//! understood by graphing calculators.
//!
//! ```rust
//! let compilation = dec::compile("(func f (params x) (mul 2 x))");
//! assert_eq!(
//!     compilation.output(),
//!     Some("f\\left(x\\right)=\\left(2\\cdot x\\right)\n")
//! );
//! ```
//!
//! Every top-level `( ... )` group compiles to one line. Errors never stop the
//! pass: all of them are collected, and the text is only returned when there
//! were none.

pub use crate::engine::{compile, Compilation, CompileOptions, Compiler};
pub use crate::errors::{CompileError, Diagnostics, ErrorCategory, ErrorKind, SourceContext};
pub use crate::syntax::{Argument, Node, Span};

pub mod cli;
pub mod commands;
pub mod engine;
pub mod errors;
pub mod render;
pub mod syntax;
