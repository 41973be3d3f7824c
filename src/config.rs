//! Run configuration.
//!
//! There are no command-line flags. A run is configured from the
//! environment: an optional JSON file named by `SCALESHEET_CONFIG`, then
//! individual variables on top of it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::Locale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language tag, e.g. `de_DE.UTF-8`.
    pub locale: String,
    /// Directory the pages are written to.
    pub output_dir: PathBuf,
    /// Run the external converters after writing the SVG pages.
    pub convert: bool,
    /// Write a JSON layout summary next to each page.
    pub write_layout: bool,
    pub inkscape: String,
    pub pdftk: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".into(),
            output_dir: PathBuf::from("."),
            convert: true,
            write_layout: false,
            inkscape: "inkscape".into(),
            pdftk: "pdftk".into(),
        }
    }
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from `lookup`, which maps variable names to values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup("SCALESHEET_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        if let Some(lang) = lookup("LANG") {
            config.locale = lang;
        }
        if let Some(dir) = lookup("SCALESHEET_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup("SCALESHEET_CONVERT") {
            config.convert = parse_flag(&flag);
        }
        if let Some(flag) = lookup("SCALESHEET_LAYOUT") {
            config.write_layout = parse_flag(&flag);
        }
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn locale(&self) -> Locale {
        Locale::from_tag(&self.locale)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}
