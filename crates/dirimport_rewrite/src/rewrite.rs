use anyhow::{Context, Result};
use dirimport_core::{ImportVisitor, Rewrite, ScopeUids};
use log::{debug, trace};
use std::{fs, path::Path};

use crate::{codegen::render_all, parser::parse_module, types::RewriteOutcome};

/// Rewrites every directory import in `source`.
///
/// All imports of one file share a single identifier registry, seeded with the
/// names the file already uses. Imports the visitor leaves untouched keep their
/// exact original text.
pub fn rewrite_source<V>(path: &Path, source: &str, visitor: &V) -> Result<RewriteOutcome>
where
    V: ImportVisitor + ?Sized,
{
    let module = parse_module(path, source)?;
    let mut uids = ScopeUids::with_used(module.identifiers);

    let mut replacements = Vec::new();
    for import in &module.imports {
        match visitor.visit_import(&import.request, &mut uids)? {
            Rewrite::Replace(statements) => {
                trace!("Replacing bytes {}..{} of {}", import.start, import.end, path.display());
                replacements.push((import.start as usize, import.end as usize, render_all(&statements)));
            }
            Rewrite::Untouched(reason) => {
                trace!("Kept '{}' in {}: {:?}", import.request.source, path.display(), reason);
            }
        }
    }

    // Back to front, so earlier spans stay valid
    let mut code = source.to_string();
    for (start, end, text) in replacements.iter().rev() {
        code.replace_range(*start..*end, text);
    }

    debug!("Rewrote {} imports in {}", replacements.len(), path.display());
    Ok(RewriteOutcome { code, rewritten: replacements.len() })
}

pub fn rewrite_file<V>(path: &Path, visitor: &V) -> Result<RewriteOutcome>
where
    V: ImportVisitor + ?Sized,
{
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    rewrite_source(path, &source, visitor)
}
