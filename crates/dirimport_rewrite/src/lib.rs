//! Directory import rewriting for JavaScript/TypeScript sources.
//!
//! Drives [`dirimport_core`] over real files: parses each module with oxc,
//! lifts its top-level import declarations, renders the replacement statements
//! and splices them over the original imports.
//!
//! # Examples
//!
//! ```no_run
//! use dirimport_core::DirImportTransform;
//! use dirimport_rewrite::rewrite_file;
//!
//! # fn main() -> anyhow::Result<()> {
//! let transform = DirImportTransform::default();
//! let outcome = rewrite_file(std::path::Path::new("src/index.js"), &transform)?;
//! println!("{}", outcome.code);
//! # Ok(())
//! # }
//! ```

mod codegen;
mod collector;
mod config;
mod constants;
mod parser;
mod reporter;
mod rewrite;
mod runner;
mod types;

// Re-export public API
pub use codegen::{render, render_all};
pub use collector::collect_inputs;
pub use config::Config;
pub use constants::SOURCE_EXTENSIONS;
pub use parser::{LocatedImport, ParsedModule, parse_module};
pub use reporter::{print_summary, print_transformed};
pub use rewrite::{rewrite_file, rewrite_source};
pub use runner::run_transform;
pub use types::{FileResult, InputFile, RewriteOutcome, TransformResult};
