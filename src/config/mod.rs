//! Facade configuration and its TOML loading.
//!
//! Every field has a default, so an empty document produces a working
//! console-only logger at WARNING.

use crate::fmt::ExtraField;
use crate::output::rollover::DEFAULT_MAX_BYTES;
use crate::output::size::parse_size;
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Console renders JSON instead of the colorized line.
    pub structured_output: bool,
    /// Validated at construction; unrecognized names fall back to WARNING.
    pub minimum_level: String,
    /// Extra JSON keys, in output order.
    pub extra_fields: Vec<ExtraField>,
    pub write_to_file: bool,
    /// Accepts a byte count or a size string such as `"3M"`.
    #[serde(deserialize_with = "deserialize_size")]
    pub max_file_bytes: u64,
    /// Directory for log files; `~` is expanded.
    pub log_dir: String,
    /// ANSI colors on the console line.
    pub colors: bool,
    /// Attached as the initial `app_name` attribute (file records' `app.name`).
    pub app_name: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            structured_output: false,
            minimum_level: "WARNING".to_string(),
            extra_fields: Vec::new(),
            write_to_file: false,
            max_file_bytes: DEFAULT_MAX_BYTES,
            log_dir: "logs".to_string(),
            colors: true,
            app_name: None,
        }
    }
}

impl LoggerConfig {
    /// # Errors
    /// TOML syntax or type errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Read failure or invalid TOML.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// `log_dir` with a leading `~` expanded to the home directory.
    #[must_use]
    pub fn resolved_log_dir(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.log_dir).as_ref())
    }
}

fn deserialize_size<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Size {
        Bytes(u64),
        Text(String),
    }

    match Size::deserialize(deserializer)? {
        Size::Bytes(bytes) => Ok(bytes),
        Size::Text(text) => parse_size(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid size: {text}"))),
    }
}
