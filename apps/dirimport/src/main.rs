use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dirimport_rewrite::Config;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "dirimport")]
#[command(about = "Rewrite directory imports into per-file imports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rewrite directory imports in JavaScript/TypeScript files
    Transform(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());
    // Code goes to stdout, so the summary goes to stderr
    let mut stderr = BufWriter::new(std::io::stderr());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Transform(cfg) => {
            let num_threads = rayon::current_num_threads();
            info!("Running directory import transform (using {} threads)", num_threads);
            debug!("Config: inputs={:?}, out_dir={:?}", cfg.inputs, cfg.out_dir);

            let result = dirimport_rewrite::run_transform(&cfg)?;
            debug!("Rewrote {} imports", result.imports_rewritten);

            if cfg.out_dir.is_none() {
                dirimport_rewrite::print_transformed(&mut stdout, &result)?;
            }

            let elapsed_ms = start.elapsed().as_millis();
            dirimport_rewrite::print_summary(&mut stderr, &result)?;
            writeln!(
                stderr,
                "\n{} Finished in {}ms on {} files (using {} threads).",
                "●".bright_blue(),
                elapsed_ms.to_string().cyan(),
                result.files.len().to_string().cyan(),
                num_threads.to_string().cyan()
            )?;
            stderr.flush()?;

            Ok(())
        }
    }
}
