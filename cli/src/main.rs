mod commands;
mod config;
mod help;
mod render;

#[cfg(test)]
mod tests;

use std::path::PathBuf;
use std::{io, process};

use anyhow::Context;
use config::{load_config_from_file, Config};
use crossterm::tty::IsTty;
use yansi::Color::Red;
use yansi::Paint;

const EXIT_ERROR: i32 = 1;
const CONFIG_FILE: &str = ".retest.toml";

fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<Config> {
    // an explicit config file must load, the default one is optional.
    if let Some(path) = explicit {
        return load_config_from_file(path)
            .with_context(|| format!("can not load config file `{}`", path.display()));
    }

    Ok(match home::home_dir() {
        Some(home_path) if !home_path.as_os_str().is_empty() => {
            load_config_from_file(&home_path.join(CONFIG_FILE)).unwrap_or_default()
        }
        _ => Config::default(),
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // If stdout is not a tty (for example, because it was redirected to a
    // file) turn off colors.
    if !io::stdout().is_tty() {
        yansi::disable();
    }

    let args = commands::cli().get_matches();

    let result = load_config(args.get_one::<PathBuf>("config")).and_then(|config| {
        log::debug!("using {:?}", config);

        match args.subcommand() {
            Some(("run", args)) => commands::exec_run(args, &config),
            Some(("repl", args)) => commands::exec_repl(args, &config),
            _ => unreachable!(),
        }
    });

    if let Err(err) = result {
        if let Some(source) = err.source() {
            eprintln!("{} {}: {}", "error:".paint(Red).bold(), err, source);
        } else {
            eprintln!("{} {}", "error:".paint(Red).bold(), err);
        }
        process::exit(EXIT_ERROR);
    }

    Ok(())
}
