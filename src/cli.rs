//! Command-line front end.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing_subscriber::{fmt, EnvFilter};
use walkdir::WalkDir;

use crate::{
    commands::{CommandRegistry, STANDARD},
    engine::{read_file, CompileOptions, Compiler},
    errors::{print_error, standalone_error, CompileError, Diagnostics, ErrorKind, SourceContext},
    syntax::parser::DEFAULT_MAX_DEPTH,
};

/// File extension picked up by `dec check <directory>`.
pub const SOURCE_EXTENSION: &str = "dec";

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "dec",
    version,
    about = "Compiles prefix expressions into graphing-calculator LaTeX."
)]
pub struct DecArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,

    /// Deepest parenthesis nesting accepted inside one group.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Compile a source file and print the LaTeX, one expression per line.
    Compile {
        /// The source file, or `-` for stdin.
        #[arg(required = true)]
        file: PathBuf,
        /// Print the output and diagnostics as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Compile a file, or every `.dec` file under a directory, and report errors.
    Check {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Show the parsed syntax trees as JSON.
    Ast {
        /// The source file, or `-` for stdin.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// List all available commands with their arity and usage.
    Commands,
}

impl DecArgs {
    pub fn options(&self) -> CompileOptions {
        CompileOptions {
            max_depth: self.max_depth,
        }
    }
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = DecArgs::parse();
    init_logging(args.verbose);

    let compiler = Compiler::new(&STANDARD, args.options());
    let success = match args.command {
        ArgsCommand::Compile { file, json } => compile_file(&compiler, &file, json),
        ArgsCommand::Check { path } => check_path(&compiler, &path),
        ArgsCommand::Ast { file } => print_ast(&compiler, &file),
        ArgsCommand::Commands => {
            print_commands(compiler.registry());
            true
        }
    };

    if !success {
        process::exit(1);
    }
}

/// Installs the tracing subscriber. `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "dec=debug",
        _ => "dec=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

// ============================================================================
// SUBCOMMANDS
// ============================================================================

fn compile_file(compiler: &Compiler<'_>, file: &Path, json: bool) -> bool {
    let Some((name, source)) = read_source_or_report(file) else {
        return false;
    };
    let compilation = compiler.compile_named(&name, &source);
    let valid = compilation.is_valid();

    if json {
        return print_json(&compilation.to_report()) && valid;
    }

    match compilation.into_result() {
        Ok(output) => {
            print!("{}", output);
            let _ = io::stdout().flush();
            print_status(Color::Green, "No errors found.");
            true
        }
        Err(errors) => {
            let count = errors.len();
            errors.into_iter().for_each(print_error);
            print_status(Color::Red, &format!("{} error(s) found.", count));
            false
        }
    }
}

fn check_path(compiler: &Compiler<'_>, path: &Path) -> bool {
    let files = match discover_source_files(path) {
        Ok(files) => files,
        Err(error) => {
            print_error(error);
            return false;
        }
    };
    if files.is_empty() {
        println!("No .{} files found under {}", SOURCE_EXTENSION, path.display());
        return true;
    }

    let mut diagnostics = Diagnostics::default();
    let mut failed = 0;
    for file in &files {
        let source = match read_file(file) {
            Ok(source) => source,
            Err(error) => {
                failed += 1;
                print_error(error);
                continue;
            }
        };
        let name = file.display().to_string();
        let output = compiler.compile_into(SourceContext::from_file(&name, source), &mut diagnostics);
        if output.is_some() {
            println!("\u{2713} {}", name);
        } else {
            failed += 1;
            println!("\u{2717} {} ({} error(s))", name, diagnostics.errors().len());
            diagnostics.take().into_iter().for_each(print_error);
        }
    }

    let passed = files.len() - failed;
    let (color, summary) = if failed == 0 {
        (Color::Green, format!("All {} file(s) compiled.", passed))
    } else {
        (Color::Red, format!("{} of {} file(s) failed.", failed, files.len()))
    };
    print_status(color, &summary);
    failed == 0
}

fn print_ast(compiler: &Compiler<'_>, file: &Path) -> bool {
    let Some((_, source)) = read_source_or_report(file) else {
        return false;
    };
    let (nodes, errors) = compiler.parse(&source);
    let printed = print_json(&nodes);
    let valid = errors.is_empty();
    errors.into_iter().for_each(print_error);
    printed && valid
}

fn print_commands(registry: &CommandRegistry) {
    for command in registry.list() {
        println!(
            "  {:<10} {:<12} {}",
            command.name,
            command.arity.to_string(),
            command.usage
        );
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Reads `file`, or stdin when it is `-`. Returns the display name and text.
fn read_source_or_report(file: &Path) -> Option<(String, String)> {
    if file.as_os_str() == "-" {
        return match io::read_to_string(io::stdin()) {
            Ok(source) => Some(("<stdin>".to_string(), source)),
            Err(error) => {
                print_error(standalone_error(
                    SourceContext::fallback("stdin"),
                    ErrorKind::InvalidPath {
                        path: "<stdin>".into(),
                        reason: error.to_string(),
                    },
                ));
                None
            }
        };
    }
    match read_file(file) {
        Ok(source) => Some((file.display().to_string(), source)),
        Err(error) => {
            print_error(error);
            None
        }
    }
}

/// Lists the files `check` should compile: `path` itself if it is a file,
/// otherwise every source file below it, sorted.
pub fn discover_source_files(path: &Path) -> Result<Vec<PathBuf>, CompileError> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(path) {
        let entry = entry.map_err(|error| {
            standalone_error(
                SourceContext::fallback("discover_source_files"),
                ErrorKind::InvalidPath {
                    path: path.display().to_string(),
                    reason: error.to_string(),
                },
            )
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn print_json<T: Serialize>(value: &T) -> bool {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            true
        }
        Err(error) => {
            eprintln!("failed to serialize output: {}", error);
            false
        }
    }
}

fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stderr) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn print_status(color: Color, message: &str) {
    let mut stderr = StandardStream::stderr(color_choice());
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = writeln!(stderr, "{}", message);
    let _ = stderr.reset();
}
