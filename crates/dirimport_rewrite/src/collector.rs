use anyhow::{Result, anyhow};
use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::{Path, PathBuf};

use crate::{
    constants::{SKIPPED_DIRS, SOURCE_EXTENSIONS},
    types::InputFile,
};

/// Expands the CLI inputs into the source files to rewrite.
///
/// Files are taken as given. Directories are walked honoring `.gitignore`,
/// keeping files with a JS/TS extension.
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<InputFile>> {
    debug!("Collecting input files from {} inputs", inputs.len());
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            trace!("Input file: {}", input.display());
            let relative = input.file_name().map(PathBuf::from).unwrap_or_else(|| input.clone());
            files.push(InputFile { path: input.clone(), relative });
        } else if input.is_dir() {
            collect_dir(input, &mut files)?;
        } else {
            return Err(anyhow!("Input not found: {}", input.display()));
        }
    }

    debug!("Collected {} input files", files.len());
    Ok(files)
}

fn collect_dir(root: &Path, files: &mut Vec<InputFile>) -> Result<()> {
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(true)
        .filter_entry(|e| !SKIPPED_DIRS.iter().any(|d| e.file_name() == *d))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if let Some(ext) = p.extension().and_then(|e| e.to_str())
            && SOURCE_EXTENSIONS.contains(&ext)
        {
            trace!("Found source file: {}", p.display());
            let relative = p.strip_prefix(root).unwrap_or(p).to_path_buf();
            files.push(InputFile { path: p.to_path_buf(), relative });
        }
    }

    Ok(())
}
