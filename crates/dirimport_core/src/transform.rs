use anyhow::{Context, Result};
use log::{debug, trace};

use crate::{
    classifier::{Classified, classify},
    config::Options,
    constants::CONTAINER_HINT,
    scanner::scan,
    synth::{bind_specifiers, discover, synthesize},
    types::{ImportRequest, Rewrite, Untouched},
    uid::UidGenerator,
};

/// Entry point for tree-walking hosts: called once per import declaration.
pub trait ImportVisitor {
    fn visit_import(&self, request: &ImportRequest, uids: &mut dyn UidGenerator) -> Result<Rewrite>;
}

/// Rewrites directory imports into one namespace import per file plus an
/// aggregate object.
///
/// ```text
/// import X from './dir';
/// ```
///
/// becomes
///
/// ```text
/// const _dirImport = {};
/// import * as _a from "./dir/a";
/// import * as _bC from "./dir/b-c";
/// _dirImport.a = _a;
/// _dirImport.bC = _bC;
/// const X = _dirImport;
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirImportTransform {
    options: Options,
}

impl DirImportTransform {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl ImportVisitor for DirImportTransform {
    fn visit_import(&self, request: &ImportRequest, uids: &mut dyn UidGenerator) -> Result<Rewrite> {
        trace!("Visiting import '{}' in {}", request.source, request.importer.display());

        let classified = match classify(&request.source, &request.importer) {
            Classified::Directory(classified) => classified,
            Classified::Skip(reason) => {
                trace!("Leaving '{}' untouched: {:?}", request.source, reason);
                return Ok(Rewrite::Untouched(reason));
            }
        };

        let scanned = scan(&classified.resolved_path, &self.options, classified.is_recursive)
            .with_context(|| {
                format!(
                    "Failed to scan '{}' imported from {}",
                    request.source,
                    request.importer.display()
                )
            })?;
        if scanned.is_empty() {
            debug!("'{}' has no files to aggregate", request.source);
            return Ok(Rewrite::Untouched(Untouched::EmptyDirectory));
        }

        let files = discover(scanned, self.options.name_case(), uids);
        let container = uids.fresh_identifier(CONTAINER_HINT);

        let mut statements = synthesize(&classified, &files, &container);
        statements.extend(bind_specifiers(&request.specifiers, &container));

        debug!(
            "Rewrote '{}' into {} imports (wildcard: {}, recursive: {})",
            request.source,
            files.len(),
            classified.is_explicit_wildcard,
            classified.is_recursive
        );
        Ok(Rewrite::Replace(statements))
    }
}
