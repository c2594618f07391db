//! Directory import rewriting.
//!
//! Turns `import X from './dir'` (or `'./dir/*'`, `'./dir/**'`) into one
//! namespace import per file in the directory and an object aggregating them:
//! - Classifying import sources (plain, `/*` wildcard, `/**` recursive)
//! - Scanning the directory for files with the configured extensions
//! - Naming each file's property (camelCase or snake_case) and binding
//! - Synthesizing the replacement statements and the specifier bindings
//!
//! The crate knows nothing about any particular parser: hosts lift import
//! declarations into [`ImportRequest`]s and render the returned [`Statement`]s.

mod classifier;
mod config;
mod constants;
mod naming;
mod scanner;
mod synth;
mod transform;
mod types;
mod uid;

// Re-export public API
pub use classifier::{Classified, classify, resolve_module};
pub use config::Options;
pub use constants::{CONTAINER_HINT, DEFAULT_EXPORT, DEFAULT_EXTENSIONS, INDEX_FILES, RESOLVE_EXTENSIONS};
pub use naming::{NameCase, to_camel_case, to_snake_case};
pub use scanner::scan;
pub use synth::{bind_specifiers, discover, module_source, synthesize};
pub use transform::{DirImportTransform, ImportVisitor};
pub use types::{
    ClassifiedPath, DiscoveredFile, ImportRequest, ImportSpecifier, Rewrite, Statement, Untouched,
};
pub use uid::{ScopeUids, UidGenerator, to_identifier};
