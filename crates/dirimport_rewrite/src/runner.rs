use anyhow::{Context, Result, anyhow};
use dirimport_core::DirImportTransform;
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::{collections::HashMap, fs, path::Path, thread};

use crate::{
    collector::collect_inputs,
    config::Config,
    rewrite::rewrite_file,
    types::{FileResult, InputFile, TransformResult},
};

/// Rewrites every collected input file.
///
/// Files are independent of each other and are processed in parallel. The
/// first failure (unreadable file, syntax error, unreadable aggregated
/// directory) aborts the whole run.
pub fn run_transform(cfg: &Config) -> Result<TransformResult> {
    info!("Starting directory import transform");

    let options = cfg.options()?;
    let transform = DirImportTransform::new(options);

    let inputs = collect_inputs(&cfg.inputs)?;
    if inputs.is_empty() {
        warn!("No source files found in {:?}", cfg.inputs);
        return Err(anyhow!("No source files found in {:?}", cfg.inputs));
    }
    info!("Found {} source files", inputs.len());

    if let Some(out_dir) = &cfg.out_dir {
        check_distinct_targets(out_dir, &inputs)?;
    }

    let files: Vec<FileResult> = inputs
        .par_iter()
        .map(|input| {
            let thread_id = thread::current().id();
            debug!("Thread {:?} processing: {}", thread_id, input.path.display());
            transform_one(cfg, &transform, input)
        })
        .collect::<Result<_>>()?;

    let imports_rewritten = files.iter().map(|f| f.rewritten).sum();
    info!("Transform complete. Rewrote {} imports in {} files", imports_rewritten, files.len());

    Ok(TransformResult { files, imports_rewritten })
}

/// Fails when two inputs would be written to the same file under `out_dir`.
fn check_distinct_targets(out_dir: &Path, inputs: &[InputFile]) -> Result<()> {
    let mut targets: HashMap<&Path, &Path> = HashMap::new();
    for input in inputs {
        if let Some(other) = targets.insert(&input.relative, &input.path)
            && other != input.path.as_path()
        {
            return Err(anyhow!(
                "{} and {} would both be written to {}",
                other.display(),
                input.path.display(),
                out_dir.join(&input.relative).display()
            ));
        }
    }
    Ok(())
}

fn transform_one(cfg: &Config, transform: &DirImportTransform, input: &InputFile) -> Result<FileResult> {
    let outcome = rewrite_file(&input.path, transform)?;

    let output = match &cfg.out_dir {
        Some(out_dir) => {
            let target = out_dir.join(&input.relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&target, &outcome.code)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            trace!("Wrote {}", target.display());
            Some(target)
        }
        None => None,
    };

    Ok(FileResult {
        input: input.path.clone(),
        output,
        code: outcome.code,
        rewritten: outcome.rewritten,
    })
}
