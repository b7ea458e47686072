use std::fmt::Display;
use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{ArgMatches, Command};
use crossterm::tty::IsTty;
use regex_tester_compiler::{parse_literal, Event, ParseErr, PatternSpec, Session};
use yansi::Color::Red;
use yansi::Paint;

use crate::config::Config;
use crate::{help, render};

const PROMPT: &str = "> ";

pub fn repl() -> Command {
    super::command("repl")
        .about("Edit a pattern and a subject interactively")
        .long_about(help::REPL_LONG_HELP)
        .arg(super::backtrack_limit_arg())
        .arg(super::flags_arg())
}

/// A single line of REPL input.
#[derive(Debug, PartialEq)]
pub(crate) enum ReplCommand {
    Pattern(PatternSpec),
    Flags(String),
    Subject(String),
    Quit,
}

#[derive(Debug, PartialEq)]
pub(crate) enum ReplError {
    Literal(ParseErr),
    UnknownCommand(String),
}

impl Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(err) => write!(f, "{}", err),
            Self::UnknownCommand(name) => write!(f, "unknown command `:{}`", name),
        }
    }
}

impl std::error::Error for ReplError {}

pub(crate) fn parse_command(line: &str) -> Result<ReplCommand, ReplError> {
    if line.starts_with('/') {
        return parse_literal(line)
            .map(ReplCommand::Pattern)
            .map_err(ReplError::Literal);
    }

    match line.strip_prefix(':') {
        Some(command) => {
            let (name, arg) = command.split_once(' ').unwrap_or((command, ""));

            match name {
                "q" | "quit" => Ok(ReplCommand::Quit),
                "flags" => Ok(ReplCommand::Flags(arg.to_string())),
                "subject" => Ok(ReplCommand::Subject(arg.to_string())),
                other => Err(ReplError::UnknownCommand(other.to_string())),
            }
        }
        None => Ok(ReplCommand::Subject(line.to_string())),
    }
}

/// Applies the flags given on the command line to a literal whose own flags
/// are blank once trimmed.
fn with_default_flags(spec: PatternSpec, default_flags: &str) -> PatternSpec {
    if spec.flags.trim().is_empty() {
        spec.with_flags(default_flags)
    } else {
        spec
    }
}

fn prompt(interactive: bool) -> io::Result<()> {
    if interactive {
        let mut stdout = io::stdout();
        write!(stdout, "{}", PROMPT)?;
        stdout.flush()?;
    }
    Ok(())
}

pub fn exec_repl(args: &ArgMatches, config: &Config) -> anyhow::Result<()> {
    let color = super::use_color(config);
    let default_flags = super::flags(args, config);
    let mut session = Session::with_options(super::compile_options(args, config));

    let stdin = io::stdin();
    let interactive = stdin.is_tty();

    prompt(interactive)?;

    for line in stdin.lock().lines() {
        let line = line.context("can not read from stdin")?;

        let event = match parse_command(&line) {
            Ok(ReplCommand::Quit) => break,
            Ok(ReplCommand::Pattern(spec)) => {
                Event::PatternChanged(with_default_flags(spec, &default_flags))
            }
            Ok(ReplCommand::Flags(flags)) => Event::PatternChanged(
                session.spec().cloned().unwrap_or_default().with_flags(flags),
            ),
            Ok(ReplCommand::Subject(subject)) => Event::SubjectChanged(subject),
            Err(err) => {
                eprintln!("{} {}", "error:".paint(Red).bold(), err);
                prompt(interactive)?;
                continue;
            }
        };

        let update = session.apply(event);
        log::debug!("{:?}", update);

        print!("{}", render::session(&session, color));
        prompt(interactive)?;
    }

    Ok(())
}
