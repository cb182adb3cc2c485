// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use slog::Level;
use thiserror::Error;

/// Configuration of the command line tool. Every key is optional.
#[derive(Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: Output,

    #[serde(default)]
    pub log: Log,
}

/// How documents are written back out.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Output {
    /// Indent the output of `fmt` unless `--compact` is given.
    #[serde(default = "default_true")]
    pub pretty: bool,

    #[serde(default = "default_true")]
    pub trailing_newline: bool,
}
impl Default for Output {
    fn default() -> Self {
        Self { pretty: true, trailing_newline: true }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct Log {
    /// One of the slog level names: `critical`, `error`, `warn`, `info`,
    /// `debug` or `trace`.
    #[serde(default = "default_level")]
    pub level: String,
}
impl Default for Log {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

fn default_true() -> bool {
    true
}

fn default_level() -> String {
    "info".to_string()
}

impl Config {
    /// Returns the configured log level.
    pub fn log_level(&self) -> Result<Level, ParseError> {
        Level::from_str(&self.log.level)
            .map_err(|_| ParseError::Level(self.log.level.clone()))
    }
}

/// Errors which may be returned when parsing the configuration.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot parse toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown log level {0:?}")]
    Level(String),
}

/// Parses a TOML file into a configuration object.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Config, ParseError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let cfg = toml::from_str::<Config>(&contents)?;
    cfg.log_level()?;
    Ok(cfg)
}
