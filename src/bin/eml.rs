use eml::cli::{with_implicit_header, OutputFormat};
use eml::formatter::format_session;
use eml::{parse, Session};

use std::io::{self, BufRead};

#[cfg(feature = "repl")]
use eml::cli::{should_show_banner, Cli, ExecutionMode};
#[cfg(feature = "repl")]
use std::fs;

#[cfg(feature = "repl")]
use clap::Parser;

#[cfg(feature = "repl")]
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    tty::IsTty,
    ExecutableCommand,
};

#[cfg(feature = "repl")]
mod repl;

fn main() -> io::Result<()> {
    #[cfg(feature = "repl")]
    {
        let cli = Cli::parse();
        let format = cli.output_format();
        let use_color = io::stdout().is_tty() && !cli.no_color;

        match cli.execution_mode() {
            ExecutionMode::Eval => {
                let program = cli.eval.unwrap();
                parse_and_print(&with_implicit_header(program.trim()), format, use_color)
            }
            ExecutionMode::File => {
                let path = cli.file.unwrap();
                let contents = fs::read_to_string(path)?;
                parse_and_print(contents.trim(), format, use_color)
            }
            ExecutionMode::Interactive => {
                if io::stdin().is_tty() {
                    run_interactive(format, cli.quiet, cli.history_size)
                } else {
                    run_batch(format, use_color)
                }
            }
        }
    }

    #[cfg(not(feature = "repl"))]
    run_batch(OutputFormat::Description, false)
}

#[cfg(feature = "repl")]
fn run_interactive(format: OutputFormat, quiet: bool, history_size: usize) -> io::Result<()> {
    if !quiet && should_show_banner(ExecutionMode::Interactive) {
        println!("EML: an Exercise Markup Language REPL");
        println!("Programs without a header get an implicit {{}}. Ctrl-C to quit.\n");
    }

    let mut history = repl::CommandHistory::new(history_size);

    loop {
        let line = match repl::read_line_with_history("eml> ", &mut history) {
            Ok(line) => line,
            Err(error)
                if error.kind() == io::ErrorKind::Interrupted
                    || error.kind() == io::ErrorKind::UnexpectedEof =>
            {
                println!();
                return Ok(());
            }
            Err(error) => return Err(error),
        };

        let program = line.trim();
        if program.is_empty() {
            continue;
        }

        parse_and_print(&with_implicit_header(program), format, true)?;
        history.add(program.to_string());
    }
}

/// Reads one program per line from stdin, for piped input.
fn run_batch(format: OutputFormat, use_color: bool) -> io::Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let program = line.trim();
        if program.is_empty() {
            continue;
        }

        parse_and_print(&with_implicit_header(program), format, use_color)?;
    }

    Ok(())
}

#[cfg(feature = "repl")]
fn parse_and_print(program: &str, format: OutputFormat, use_color: bool) -> io::Result<()> {
    match parse(program) {
        Ok(session) => {
            if use_color {
                let mut stdout = io::stdout();
                stdout.execute(SetForegroundColor(Color::Green))?;
                stdout.execute(Print("● "))?;
                stdout.execute(ResetColor)?;
            }
            println!("{}", render(&session, format));
        }
        Err(error) => {
            if use_color {
                let mut stdout = io::stdout();
                stdout.execute(SetForegroundColor(Color::Red))?;
                stdout.execute(Print("● "))?;
                stdout.execute(ResetColor)?;
                println!("{error}");
            } else {
                eprintln!("ERROR: {error}");
            }
        }
    }

    Ok(())
}

#[cfg(not(feature = "repl"))]
fn parse_and_print(program: &str, format: OutputFormat, _use_color: bool) -> io::Result<()> {
    match parse(program) {
        Ok(session) => println!("{}", render(&session, format)),
        Err(error) => eprintln!("ERROR: {error}"),
    }

    Ok(())
}

fn render(session: &Session, format: OutputFormat) -> String {
    match format {
        OutputFormat::Description => {
            let description = format_session(session);
            if description.is_empty() {
                "(empty session)".to_string()
            } else {
                description
            }
        }
        OutputFormat::Canonical => session.to_string(),
        OutputFormat::Ast => format!("{session:#?}"),
    }
}
