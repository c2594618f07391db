use std::path::PathBuf;

/// An import declaration as seen by the transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// The module source string, e.g. `./dir/*`
    pub source: String,
    pub specifiers: Vec<ImportSpecifier>,
    /// The file containing the import; relative sources resolve against its directory
    pub importer: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSpecifier {
    /// `import * as local from ...`
    Namespace { local: String },
    /// `import local from ...`
    Default { local: String },
    /// `import { imported as local } from ...`
    Named { imported: String, local: String },
}

impl ImportSpecifier {
    pub fn local(&self) -> &str {
        match self {
            ImportSpecifier::Namespace { local }
            | ImportSpecifier::Default { local }
            | ImportSpecifier::Named { local, .. } => local,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPath {
    /// Source with the `/*` or `/**` marker removed
    pub cleaned_path: String,
    /// Source ended in `/*`: spread each file's exports onto the container
    pub is_explicit_wildcard: bool,
    /// Source ended in `/**`: include subdirectories
    pub is_recursive: bool,
    /// First segment of the source plus `/`, e.g. `./` or `../`
    pub path_prefix: String,
    /// Directory on disk; only used for checks, never emitted
    pub resolved_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    /// Path below the scanned directory, final segment without its extension
    pub segments: Vec<String>,
    /// Property on the aggregate container
    pub property: String,
    /// Local binding of the file's namespace import
    pub binding: String,
}

/// A statement of the generated replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `const container = {};`
    DeclareContainer { container: String },
    /// `import * as local from "source";`
    ImportNamespace { local: String, source: String },
    /// `container.property = binding;`
    AssignProperty { container: String, property: String, binding: String },
    /// `for (let key in binding) container[key === "default" ? "property" : key] = binding[key];`
    SpreadExports { container: String, property: String, binding: String },
    /// `const local = container;`
    BindContainer { local: String, container: String },
    /// `const local = container.member;`
    BindMember { local: String, container: String, member: String },
}

/// Why an import was left exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Untouched {
    /// Source does not start with `.` or `/`
    PackageImport,
    /// Source resolves to an ordinary module
    ResolvesToModule,
    /// Source names nothing, or something other than a directory
    NotADirectory,
    /// Directory holds no file with an aggregated extension
    EmptyDirectory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    Untouched(Untouched),
    /// Statements replacing the import, in program order
    Replace(Vec<Statement>),
}

impl Rewrite {
    pub fn is_untouched(&self) -> bool {
        matches!(self, Rewrite::Untouched(_))
    }
}
