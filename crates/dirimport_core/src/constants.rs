//! Constants for file extensions and module resolution.
//!
//! Two different extension sets are in play:
//!
//! - **Aggregated extensions**: which files inside an imported directory become
//!   members of the aggregate. Configurable per run, defaulting to
//!   [`DEFAULT_EXTENSIONS`].
//! - **Resolution extensions**: which suffixes make a path resolve as an
//!   ordinary module, in which case the import is left alone. These follow
//!   Node's resolution algorithm and are not configurable.

/// Extensions aggregated when no `exts` option is given
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".es6", ".es", ".jsx"];

/// Extensions tried when resolving a path as an ordinary module (in priority order)
pub const RESOLVE_EXTENSIONS: &[&str] = &["js", "json", "node"];

/// Index file names tried when resolving a directory as an ordinary module
pub const INDEX_FILES: &[&str] = &["index.js", "index.json", "index.node"];

/// Identifier hint for the generated aggregate container
pub const CONTAINER_HINT: &str = "dirImport";

/// Property that dynamic aggregation remaps onto the file's own name
pub const DEFAULT_EXPORT: &str = "default";
