use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use subconv::{convert, SubtitleFormat};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "subconv")]
#[command(version, about = "Convert subtitle files to SubRip")]
#[command(
    long_about = "Normalize SubRip, WebVTT, ASS/SSA, and legacy sub files into SubRip output."
)]
struct Cli {
    /// Input subtitle file
    input: PathBuf,

    /// Source format: srt, vtt, ass, ssa, sub (defaults to the input extension)
    #[arg(short, long)]
    format: Option<String>,

    /// Output file (defaults to input name with .srt extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default();
    let mut output = input.to_path_buf();
    output.set_file_name(format!("{}.srt", stem.to_string_lossy()));
    output
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if !cli.input.exists() {
        anyhow::bail!("Input file not found: {}", cli.input.display());
    }

    let tag = match cli.format {
        Some(tag) => tag,
        None => cli
            .input
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .context("Input file has no extension; pass --format")?,
    };
    let format: SubtitleFormat = tag.parse()?;

    let output = cli
        .output
        .unwrap_or_else(|| derive_output_path(&cli.input));
    if output == cli.input {
        anyhow::bail!(
            "Output would overwrite the input; pass --output to pick another path"
        );
    }

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;

    info!("Input:  {}", cli.input.display());
    info!("Output: {}", output.display());
    info!("Format: {}", format);

    convert(format, &content, Some(&output))
        .with_context(|| format!("Failed to convert {}", cli.input.display()))?;

    Ok(())
}
