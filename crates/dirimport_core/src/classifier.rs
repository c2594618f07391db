use log::{debug, trace};
use path_clean::clean;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    constants::{INDEX_FILES, RESOLVE_EXTENSIONS},
    types::{ClassifiedPath, Untouched},
};

const WILDCARD_MARKER: &str = "/*";
const RECURSIVE_MARKER: &str = "/**";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Directory(ClassifiedPath),
    Skip(Untouched),
}

/// Decides whether `source`, imported from `importer`, names a directory to aggregate.
///
/// The `/*` marker is stripped first, then `/**`, so `./dir/**/*` is both
/// recursive and an explicit wildcard. Missing paths, unreadable paths and
/// paths that resolve as ordinary modules are skipped without error.
/// Absolute sources such as `/lib` name that filesystem path; they are not
/// joined onto the importer's directory.
pub fn classify(source: &str, importer: &Path) -> Classified {
    if !(source.starts_with('.') || source.starts_with('/')) {
        trace!("Not a relative import: '{}'", source);
        return Classified::Skip(Untouched::PackageImport);
    }

    let first_segment = source.split('/').next().unwrap_or_default();
    let path_prefix = format!("{}/", first_segment);

    let (cleaned, is_explicit_wildcard) = match source.strip_suffix(WILDCARD_MARKER) {
        Some(rest) => (rest, true),
        None => (source, false),
    };
    let (cleaned, is_recursive) = match cleaned.strip_suffix(RECURSIVE_MARKER) {
        Some(rest) => (rest, true),
        None => (cleaned, false),
    };

    let base = importer.parent().unwrap_or(Path::new(""));
    let joined = base.join(cleaned);
    let resolved_path = clean(std::path::absolute(&joined).unwrap_or(joined));
    trace!("Resolved '{}' from {} to {}", source, importer.display(), resolved_path.display());

    if let Some(module) = resolve_module(&resolved_path) {
        debug!("'{}' resolves to module {}, leaving it alone", source, module.display());
        return Classified::Skip(Untouched::ResolvesToModule);
    }

    match fs::metadata(&resolved_path) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            debug!("'{}' is not a directory", source);
            return Classified::Skip(Untouched::NotADirectory);
        }
        Err(e) => {
            debug!("'{}' cannot be inspected: {}", source, e);
            return Classified::Skip(Untouched::NotADirectory);
        }
    }

    Classified::Directory(ClassifiedPath {
        cleaned_path: cleaned.to_string(),
        is_explicit_wildcard,
        is_recursive,
        path_prefix,
        resolved_path,
    })
}

/// Resolves an absolute path the way Node resolves a module path: as a file,
/// as a file with a known extension, or as a package directory.
pub fn resolve_module(p: &Path) -> Option<PathBuf> {
    resolve_file(p).or_else(|| resolve_directory(p))
}

fn resolve_file(p: &Path) -> Option<PathBuf> {
    if p.is_file() {
        return Some(p.to_path_buf());
    }

    for ext in RESOLVE_EXTENSIONS {
        let candidate = PathBuf::from(format!("{}.{}", p.display(), ext));
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    None
}

fn resolve_directory(p: &Path) -> Option<PathBuf> {
    if !p.is_dir() {
        return None;
    }

    let pkg_json = p.join("package.json");
    if let Ok(txt) = fs::read_to_string(&pkg_json)
        && let Ok(v) = serde_json::from_str::<serde_json::Value>(&txt)
        && let Some(main) = v.get("main").and_then(|m| m.as_str())
    {
        let entry = clean(p.join(main));
        trace!("Trying package.json main '{}' in {}", main, p.display());
        if let Some(resolved) = resolve_file(&entry).or_else(|| resolve_index(&entry)) {
            return Some(resolved);
        }
    }

    resolve_index(p)
}

fn resolve_index(p: &Path) -> Option<PathBuf> {
    INDEX_FILES.iter().map(|index_file| p.join(index_file)).find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn expect_directory(classified: Classified) -> ClassifiedPath {
        match classified {
            Classified::Directory(path) => path,
            Classified::Skip(reason) => panic!("expected a directory, got {:?}", reason),
        }
    }

    #[test]
    fn test_package_imports_are_skipped() {
        let importer = Path::new("/project/src/index.js");
        assert_eq!(classify("react", importer), Classified::Skip(Untouched::PackageImport));
        assert_eq!(classify("@scope/pkg/*", importer), Classified::Skip(Untouched::PackageImport));
        assert_eq!(classify("", importer), Classified::Skip(Untouched::PackageImport));
    }

    #[test]
    fn test_plain_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "dir/a.js", "");

        let classified = expect_directory(classify("./dir", &importer));
        assert_eq!(classified.cleaned_path, "./dir");
        assert_eq!(classified.path_prefix, "./");
        assert!(!classified.is_explicit_wildcard);
        assert!(!classified.is_recursive);
        assert_eq!(classified.resolved_path, clean(root.join("dir")));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolute_source_is_not_joined_to_importer() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "app/src/index.js", "");
        create_test_file(root, "lib/a.js", "");
        let source = root.join("lib").to_string_lossy().into_owned();

        let classified = expect_directory(classify(&source, &importer));
        assert_eq!(classified.path_prefix, "/");
        assert_eq!(classified.resolved_path, clean(root.join("lib")));
    }

    #[test]
    fn test_wildcard_marker() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "dir/a.js", "");

        let classified = expect_directory(classify("./dir/*", &importer));
        assert_eq!(classified.cleaned_path, "./dir");
        assert!(classified.is_explicit_wildcard);
        assert!(!classified.is_recursive);
    }

    #[test]
    fn test_recursive_marker() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "dir/sub/c.js", "");

        let classified = expect_directory(classify("./dir/**", &importer));
        assert_eq!(classified.cleaned_path, "./dir");
        assert!(!classified.is_explicit_wildcard);
        assert!(classified.is_recursive);
    }

    #[test]
    fn test_recursive_then_wildcard_markers() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "dir/a.js", "");

        let classified = expect_directory(classify("./dir/**/*", &importer));
        assert_eq!(classified.cleaned_path, "./dir");
        assert!(classified.is_explicit_wildcard);
        assert!(classified.is_recursive);
    }

    #[test]
    fn test_parent_relative_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "src/app/index.js", "");
        create_test_file(root, "src/lib/a.js", "");

        let classified = expect_directory(classify("../lib", &importer));
        assert_eq!(classified.path_prefix, "../");
        assert_eq!(classified.resolved_path, clean(root.join("src/lib")));
    }

    #[test]
    fn test_file_import_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "util.js", "");
        create_test_file(root, "data.json", "{}");

        assert_eq!(classify("./util", &importer), Classified::Skip(Untouched::ResolvesToModule));
        assert_eq!(classify("./util.js", &importer), Classified::Skip(Untouched::ResolvesToModule));
        assert_eq!(classify("./data", &importer), Classified::Skip(Untouched::ResolvesToModule));
    }

    #[test]
    fn test_directory_with_index_resolves_as_module() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "dir/index.js", "");
        create_test_file(root, "dir/a.js", "");

        assert_eq!(classify("./dir", &importer), Classified::Skip(Untouched::ResolvesToModule));
        assert_eq!(classify("./dir/*", &importer), Classified::Skip(Untouched::ResolvesToModule));
    }

    #[test]
    fn test_directory_with_package_main_resolves_as_module() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "pkg/package.json", r#"{ "main": "lib/entry" }"#);
        create_test_file(root, "pkg/lib/entry.js", "");

        assert_eq!(classify("./pkg", &importer), Classified::Skip(Untouched::ResolvesToModule));
    }

    #[test]
    fn test_package_main_missing_target_falls_through() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "pkg/package.json", r#"{ "main": "missing.js" }"#);
        create_test_file(root, "pkg/a.js", "");

        assert!(matches!(classify("./pkg", &importer), Classified::Directory(_)));
    }

    #[test]
    fn test_missing_path_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let importer = create_test_file(temp_dir.path(), "index.js", "");

        assert_eq!(classify("./nowhere", &importer), Classified::Skip(Untouched::NotADirectory));
        assert_eq!(classify("./nowhere/*", &importer), Classified::Skip(Untouched::NotADirectory));
    }

    #[test]
    fn test_non_module_file_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let importer = create_test_file(root, "index.js", "");
        create_test_file(root, "styles.css", "");

        assert_eq!(classify("./styles.css", &importer), Classified::Skip(Untouched::ResolvesToModule));
        assert_eq!(classify("./styles.css/*", &importer), Classified::Skip(Untouched::ResolvesToModule));
    }

    #[test]
    fn test_resolve_module_prefers_file_over_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "both.js", "");
        create_test_file(root, "both/a.js", "");

        assert_eq!(resolve_module(&root.join("both")), Some(root.join("both.js")));
    }
}
