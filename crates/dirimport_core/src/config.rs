use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

use crate::{constants::DEFAULT_EXTENSIONS, naming::NameCase};

/// Per-run options, read-only for the whole run.
///
/// Deserializes from the plugin option object, e.g.
/// `{ "exts": [".js", ".mjs"], "snakeCase": true }`. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Extensions of the files aggregated from an imported directory
    pub exts: Vec<String>,

    /// Derive property names in snake_case instead of camelCase
    pub snake_case: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { exts: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(), snake_case: false }
    }
}

impl Options {
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Options =
            serde_json::from_str(json).context("Failed to parse dirimport options")?;
        debug!("Loaded options: exts={:?}, snake_case={}", options.exts, options.snake_case);
        Ok(options)
    }

    pub fn name_case(&self) -> NameCase {
        if self.snake_case { NameCase::Snake } else { NameCase::Camel }
    }

    /// Whether `ext` (without the dot, as returned by `Path::extension`) is aggregated.
    /// Configured extensions match with or without their leading dot.
    pub fn includes_extension(&self, ext: &str) -> bool {
        self.exts.iter().any(|e| e.strip_prefix('.').unwrap_or(e) == ext)
    }
}
