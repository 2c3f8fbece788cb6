use anyhow::{Context, Result};
use clap::Parser;
use footer_rollout::{run_batch, HTML_FILES};
use std::path::PathBuf;

/// Apply the shared footer system to every page in the site manifest
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Site root containing the target pages; defaults to the directory
    /// holding this executable
    #[arg(long)]
    root: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_exe()
            .context("Failed to locate the running executable")?
            .parent()
            .map(PathBuf::from)
            .context("Executable has no containing directory")?,
    };

    println!("🚀 Applying footer system to all HTML files...\n");

    let summary = run_batch(&root, HTML_FILES);

    // Per-file failures are already reported above; the run itself succeeds
    println!(
        "\n✅ Complete! Updated {}/{} files",
        summary.updated, summary.total
    );

    Ok(())
}
