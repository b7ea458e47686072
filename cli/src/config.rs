use std::path::Path;

use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Configuration for the CLI.
#[derive(Deserialize, Serialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Flags used when none are given on the command line.
    pub flags: String,
    /// Maximum backtracking steps for a single search. The engine default
    /// applies when absent.
    pub backtrack_limit: Option<usize>,
    /// Highlight matches with colors. When `false`, or when stdout is not a
    /// terminal, matches are wrapped in brackets instead.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            flags: String::new(),
            backtrack_limit: None,
            color: true,
        }
    }
}

/// Load a config file from a given path. Path must contain a valid TOML file
/// or this function will propagate the error. Options missing from the file
/// keep their default values.
pub fn load_config_from_file(config_file: &Path) -> Result<Config, Box<figment::Error>> {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file_exact(config_file))
        .extract()?;
    Ok(config)
}
