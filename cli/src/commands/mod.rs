mod repl;
mod run;

pub use repl::*;
pub use run::*;

use std::path::PathBuf;

use clap::{arg, command, value_parser, Arg, Command};
use crossterm::tty::IsTty;
use regex_tester_compiler::CompileOptions;

use crate::config::Config;
use crate::{commands, help};

pub fn command(name: &'static str) -> Command {
    Command::new(name).help_template(
        r#"{about-with-newline}
{usage-heading}
  {usage}

{all-args}
"#,
    )
}

pub fn cli() -> Command {
    command!()
        .arg_required_else_help(true)
        .arg(
            arg!(-C --config <CONFIG_FILE> "Config file")
                .value_parser(value_parser!(PathBuf))
                .long_help(help::CONFIG_FILE),
        )
        .subcommand_required(true)
        .subcommands(vec![commands::run(), commands::repl()])
}

/// The `--flags` option shared by every subcommand.
fn flags_arg() -> Arg {
    arg!(-f --flags <FLAGS>)
        .help("Inline flags applied to the pattern")
        .long_help(help::FLAGS_LONG_HELP)
}

/// The `--backtrack-limit` option shared by every subcommand.
fn backtrack_limit_arg() -> Arg {
    arg!(--"backtrack-limit" <STEPS>)
        .help("Maximum backtracking steps for a single search")
        .long_help(help::BACKTRACK_LIMIT_LONG_HELP)
        .value_parser(value_parser!(usize))
}

/// Command-line values take precedence over the config file.
fn compile_options(args: &clap::ArgMatches, config: &Config) -> CompileOptions {
    CompileOptions {
        backtrack_limit: args
            .get_one::<usize>("backtrack-limit")
            .copied()
            .or(config.backtrack_limit),
    }
}

fn flags(args: &clap::ArgMatches, config: &Config) -> String {
    args.get_one::<String>("flags")
        .cloned()
        .unwrap_or_else(|| config.flags.clone())
}

/// Colors are only used when enabled in the config and stdout is a terminal.
fn use_color(config: &Config) -> bool {
    config.color && std::io::stdout().is_tty()
}
