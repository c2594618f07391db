use log::trace;
use path_clean::clean;
use std::path::PathBuf;

use crate::{
    naming::NameCase,
    types::{ClassifiedPath, DiscoveredFile, ImportSpecifier, Statement},
    uid::UidGenerator,
};

/// Names every scanned file: a property from its final segment and a fresh binding.
pub fn discover(
    scanned: Vec<Vec<String>>,
    case: NameCase,
    uids: &mut dyn UidGenerator,
) -> Vec<DiscoveredFile> {
    scanned
        .into_iter()
        .map(|segments| {
            let last = segments.last().map(String::as_str).unwrap_or_default();
            let property = case.transform(last);
            let binding = uids.fresh_identifier(last);
            trace!("File {:?} -> property '{}', binding '{}'", segments, property, binding);
            DiscoveredFile { segments, property, binding }
        })
        .collect()
}

/// Import source of a discovered file, qualified like the original import.
///
/// `./dir` + `a` gives `./dir/a`; sources that already normalize to a relative
/// or absolute form (`../lib/a`, `/abs/a`) are kept as they are.
pub fn module_source(path_prefix: &str, cleaned_path: &str, segments: &[String]) -> String {
    let mut joined = PathBuf::from(cleaned_path);
    joined.extend(segments);
    let normalized = clean(joined).to_string_lossy().replace('\\', "/");

    if normalized == ".."
        || normalized.starts_with("../")
        || normalized.starts_with("./")
        || normalized.starts_with('/')
    {
        normalized
    } else {
        format!("{}{}", path_prefix, normalized)
    }
}

/// Container declaration, one namespace import per file, then one aggregation
/// statement per file in discovery order.
///
/// Files sharing a property name overwrite each other; the last one wins.
pub fn synthesize(
    classified: &ClassifiedPath,
    files: &[DiscoveredFile],
    container: &str,
) -> Vec<Statement> {
    let mut statements = Vec::with_capacity(files.len() * 2 + 1);
    statements.push(Statement::DeclareContainer { container: container.to_string() });

    for file in files {
        statements.push(Statement::ImportNamespace {
            local: file.binding.clone(),
            source: module_source(&classified.path_prefix, &classified.cleaned_path, &file.segments),
        });
    }

    for file in files {
        let container = container.to_string();
        let property = file.property.clone();
        let binding = file.binding.clone();
        statements.push(if classified.is_explicit_wildcard {
            Statement::SpreadExports { container, property, binding }
        } else {
            Statement::AssignProperty { container, property, binding }
        });
    }

    statements
}

/// Local bindings for the original specifiers, in declaration order.
pub fn bind_specifiers(specifiers: &[ImportSpecifier], container: &str) -> Vec<Statement> {
    specifiers
        .iter()
        .map(|spec| match spec {
            ImportSpecifier::Namespace { local } | ImportSpecifier::Default { local } => {
                Statement::BindContainer { local: local.clone(), container: container.to_string() }
            }
            ImportSpecifier::Named { imported, local } => Statement::BindMember {
                local: local.clone(),
                container: container.to_string(),
                member: imported.clone(),
            },
        })
        .collect()
}
