use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    pub code: String,
    /// Number of import declarations replaced
    pub rewritten: usize,
}

#[derive(Debug, Clone)]
pub struct InputFile {
    pub path: PathBuf,
    /// Path below the input it was collected from; used to place the output
    pub relative: PathBuf,
}

#[derive(Debug, Clone)]
pub struct FileResult {
    pub input: PathBuf,
    /// Where the code was written, None when no output directory was given
    pub output: Option<PathBuf>,
    pub code: String,
    pub rewritten: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub files: Vec<FileResult>,
    pub imports_rewritten: usize,
}

impl TransformResult {
    pub fn files_changed(&self) -> usize {
        self.files.iter().filter(|f| f.rewritten > 0).count()
    }
}
