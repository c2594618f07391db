use anyhow::{Context, Result};
use log::{debug, trace};
use std::{
    ffi::{OsStr, OsString},
    fs, io,
    path::Path,
};

use crate::config::Options;

/// Lists the aggregated files under `root`, as path segments relative to it.
///
/// Entries are visited in name order. At each level matching files come first,
/// then (when `recursive`) the subdirectories, each prefixing its results with
/// its own name. The final segment of every result has its extension removed.
///
/// Any I/O failure is returned: the caller has already established that `root`
/// is a directory, so a failure here means the tree cannot be read at all.
pub fn scan(root: &Path, options: &Options, recursive: bool) -> Result<Vec<Vec<String>>> {
    debug!("Scanning {} (recursive: {})", root.display(), recursive);
    let mut files = Vec::new();
    scan_into(root, options, recursive, &mut Vec::new(), &mut files)?;
    debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}

fn scan_into(
    dir: &Path,
    options: &Options,
    recursive: bool,
    prefix: &mut Vec<String>,
    files: &mut Vec<Vec<String>>,
) -> Result<()> {
    let mut entries = fs::read_dir(dir)
        .and_then(|rd| rd.map(|e| e.map(|e| e.file_name())).collect::<io::Result<Vec<OsString>>>())
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;
    entries.sort();

    let mut subdirs = Vec::new();
    for name in entries {
        let entry = Path::new(&name);

        if let Some(ext) = entry.extension().and_then(|e| e.to_str())
            && options.includes_extension(ext)
        {
            let stem = utf8_name(dir, entry.file_stem().unwrap_or(&name))?;
            trace!("Including {}", dir.join(entry).display());
            let mut segments = prefix.clone();
            segments.push(stem);
            files.push(segments);
        } else if recursive {
            let full = dir.join(entry);
            let meta = fs::metadata(&full)
                .with_context(|| format!("Failed to stat {}", full.display()))?;
            if meta.is_dir() {
                subdirs.push(name);
            } else {
                trace!("Skipping {}", full.display());
            }
        }
    }

    for sub in subdirs {
        prefix.push(utf8_name(dir, &sub)?);
        scan_into(&dir.join(&sub), options, recursive, prefix, files)?;
        prefix.pop();
    }

    Ok(())
}

// Segments end up in an import source, which must name the file exactly
fn utf8_name(dir: &Path, name: &OsStr) -> Result<String> {
    name.to_str().map(str::to_owned).with_context(|| {
        format!("Non UTF-8 entry name {:?} in {}", name, dir.display())
    })
}
