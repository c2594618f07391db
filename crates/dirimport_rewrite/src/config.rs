use anyhow::{Context, Result};
use clap::Parser;
use dirimport_core::Options;
use log::debug;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "transform")]
#[command(about = "Rewrite directory imports in JavaScript/TypeScript files")]
pub struct Config {
    /// Files or directories to transform
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory to write transformed files to (prints to stdout when omitted)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Extension of the files aggregated from imported directories (repeatable)
    #[arg(long = "ext")]
    pub exts: Vec<String>,

    /// Name aggregated properties in snake_case instead of camelCase
    #[arg(long)]
    pub snake_case: bool,

    /// JSON file with transform options, e.g. {"exts": [".js"], "snakeCase": true}
    #[arg(long)]
    pub options: Option<PathBuf>,
}

impl Config {
    /// Options for this run: the options file if given, overridden by flags.
    pub fn options(&self) -> Result<Options> {
        let mut options = match &self.options {
            Some(path) => {
                debug!("Reading options from {}", path.display());
                let json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read options file {}", path.display()))?;
                Options::from_json(&json)
                    .with_context(|| format!("Invalid options file {}", path.display()))?
            }
            None => Options::default(),
        };

        if !self.exts.is_empty() {
            options.exts = self.exts.clone();
        }
        if self.snake_case {
            options.snake_case = true;
        }

        debug!("Using options: exts={:?}, snake_case={}", options.exts, options.snake_case);
        Ok(options)
    }
}
