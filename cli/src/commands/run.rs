use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{arg, value_parser, ArgMatches, Command};
use regex_tester_compiler::{Event, Outcome, PatternSpec, Session};

use crate::config::Config;
use crate::{help, render};

pub fn run() -> Command {
    super::command("run")
        .about("Match a pattern against a subject and show the results")
        .long_about(help::RUN_LONG_HELP)
        // Keep options sorted alphabetically by their long name.
        .arg(arg!(<PATTERN>).help("Regular expression to test"))
        .arg(arg!([SUBJECT]).help("Text the pattern is matched against"))
        .arg(super::backtrack_limit_arg())
        .arg(super::flags_arg())
        .arg(
            arg!(-i --input <FILE>)
                .help("Read the subject from a file, `-` reads stdin")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("SUBJECT"),
        )
}

fn read_subject(args: &ArgMatches) -> anyhow::Result<String> {
    match (
        args.get_one::<String>("SUBJECT"),
        args.get_one::<PathBuf>("input"),
    ) {
        (Some(subject), _) => Ok(subject.clone()),
        (None, Some(path)) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("can not read `{}`", path.display())),
        _ => {
            let mut subject = String::new();
            io::stdin()
                .read_to_string(&mut subject)
                .context("can not read subject from stdin")?;
            Ok(subject)
        }
    }
}

pub fn exec_run(args: &ArgMatches, config: &Config) -> anyhow::Result<()> {
    let source = args
        .get_one::<String>("PATTERN")
        .context("a pattern is required")?;
    let subject = read_subject(args)?;

    let mut session = Session::with_options(super::compile_options(args, config));
    session.apply(Event::SubjectChanged(subject));
    session.apply(Event::PatternChanged(PatternSpec::new(
        source.as_str(),
        super::flags(args, config),
    )));

    print!("{}", render::session(&session, super::use_color(config)));

    match session.outcome() {
        Outcome::CompileFailed(_) => bail!("pattern failed to compile"),
        Outcome::MatchFailed(_) => bail!("matching stopped before the end of the subject"),
        _ => Ok(()),
    }
}
