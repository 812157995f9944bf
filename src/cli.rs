//! Command-line interface for the `eml` binary.
//!
//! This module handles parsing command-line arguments and maps them to the
//! binary's execution modes and output formats.

use std::borrow::Cow;

#[cfg(feature = "repl")]
use clap::Parser;

/// Command-line arguments for the `eml` binary
#[cfg(feature = "repl")]
#[derive(Parser, Debug)]
#[command(name = "eml")]
#[command(about = "An Exercise Markup Language parser and REPL", long_about = None)]
#[command(version)]
pub struct Cli {
    /// EML program file to parse
    pub file: Option<String>,

    /// Parse a program given on the command line and exit
    #[arg(short = 'e', long = "eval", conflicts_with = "file")]
    pub eval: Option<String>,

    /// Print the canonical form instead of a description
    #[arg(long = "canonical", conflicts_with = "ast")]
    pub canonical: bool,

    /// Print the abstract syntax tree instead of a description
    #[arg(long = "ast")]
    pub ast: bool,

    /// Maximum number of lines kept in REPL history
    #[arg(long = "history-size", default_value_t = 1000)]
    pub history_size: usize,

    /// Suppress the banner (REPL only)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

/// What the binary prints for a successfully parsed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Description,
    Canonical,
    Ast,
}

/// Execution mode for the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    Interactive,
    Eval,
    File,
}

/// Determines whether to show the banner based on execution mode
pub fn should_show_banner(mode: ExecutionMode) -> bool {
    matches!(mode, ExecutionMode::Interactive)
}

/// Completes a loosely written program: interactive input may leave the
/// header section off, so anything not starting with `{` gets an empty one.
pub fn with_implicit_header(program: &str) -> Cow<'_, str> {
    if program.starts_with('{') {
        Cow::Borrowed(program)
    } else {
        Cow::Owned(format!("{{}}{program}"))
    }
}

#[cfg(feature = "repl")]
impl Cli {
    /// Determines the execution mode from the arguments
    pub fn execution_mode(&self) -> ExecutionMode {
        if self.eval.is_some() {
            ExecutionMode::Eval
        } else if self.file.is_some() {
            ExecutionMode::File
        } else {
            ExecutionMode::Interactive
        }
    }

    /// Determines the output format from the arguments
    pub fn output_format(&self) -> OutputFormat {
        if self.ast {
            OutputFormat::Ast
        } else if self.canonical {
            OutputFormat::Canonical
        } else {
            OutputFormat::Description
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_header_only_when_missing() {
        assert_eq!(with_implicit_header(r#""squat":5x5;"#), r#"{}"squat":5x5;"#);
        assert_eq!(
            with_implicit_header(r#"{"weight":"kg"}"squat":5x5;"#),
            r#"{"weight":"kg"}"squat":5x5;"#
        );
    }

    #[cfg(feature = "repl")]
    #[test]
    fn execution_modes() {
        let cli = Cli::try_parse_from(["eml"]).unwrap();
        assert_eq!(cli.execution_mode(), ExecutionMode::Interactive);

        let cli = Cli::try_parse_from(["eml", "-e", "{}"]).unwrap();
        assert_eq!(cli.execution_mode(), ExecutionMode::Eval);

        let cli = Cli::try_parse_from(["eml", "program.eml"]).unwrap();
        assert_eq!(cli.execution_mode(), ExecutionMode::File);
    }

    #[cfg(feature = "repl")]
    #[test]
    fn eval_conflicts_with_file() {
        assert!(Cli::try_parse_from(["eml", "program.eml", "-e", "{}"]).is_err());
    }

    #[cfg(feature = "repl")]
    #[test]
    fn output_formats() {
        let cli = Cli::try_parse_from(["eml"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Description);

        let cli = Cli::try_parse_from(["eml", "--canonical"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Canonical);

        let cli = Cli::try_parse_from(["eml", "--ast"]).unwrap();
        assert_eq!(cli.output_format(), OutputFormat::Ast);

        assert!(Cli::try_parse_from(["eml", "--canonical", "--ast"]).is_err());
    }
}
