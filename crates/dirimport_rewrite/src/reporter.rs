use std::io::{self, Write};

use colored::Colorize;
use log::debug;

use crate::types::TransformResult;

/// Writes the transformed code of every file. A header names each file when
/// there is more than one.
pub fn print_transformed<W: Write>(writer: &mut W, result: &TransformResult) -> io::Result<()> {
    let with_headers = result.files.len() > 1;
    for file in &result.files {
        if with_headers {
            writeln!(writer, "// {}", file.input.display())?;
        }
        write!(writer, "{}", file.code)?;
        if !file.code.ends_with('\n') {
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn print_summary<W: Write>(writer: &mut W, result: &TransformResult) -> io::Result<()> {
    debug!("Printing summary for {} files", result.files.len());

    let changed: Vec<_> = result.files.iter().filter(|f| f.rewritten > 0).collect();
    if changed.is_empty() {
        writeln!(writer, "{} No directory imports found.", "✓".green().bold())?;
        writer.flush()?;
        return Ok(());
    }

    writeln!(
        writer,
        "{} Rewrote {} directory imports in {} files",
        "✓".green().bold(),
        result.imports_rewritten.to_string().cyan(),
        changed.len().to_string().cyan()
    )?;

    for (idx, file) in changed.iter().enumerate() {
        let is_last = idx == changed.len() - 1;
        let prefix = if is_last { "└──" } else { "├──" };
        let target = match &file.output {
            Some(output) => format!(" -> {}", output.display()),
            None => String::new(),
        };
        writeln!(
            writer,
            "{}  {} ({} imports){}",
            prefix.dimmed(),
            file.input.display().to_string().blue(),
            file.rewritten.to_string().yellow(),
            target.dimmed()
        )?;
    }

    writer.flush()?;
    Ok(())
}
