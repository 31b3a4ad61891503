//! sheetmark CLI - XLSX worksheet to Markdown table conversion

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use sheetmark::{convert_file, ConvertOptions, SheetSelector};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetmark")]
#[command(
    author,
    version,
    about = "Convert an XLSX worksheet into a Markdown table"
)]
struct Cli {
    /// Input workbook (.xlsx)
    input: PathBuf,

    /// Sheet to convert: 1-based position or sheet name
    #[arg(short, long, default_value = "1")]
    sheet: SheetSelector,

    /// Output Markdown file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Leave out the drawings section
    #[arg(long)]
    no_drawings: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input.exists() {
        bail!("File '{}' not found", cli.input.display());
    }

    let options = ConvertOptions {
        sheet: cli.sheet.clone(),
        include_drawings: !cli.no_drawings,
    };
    let conversion = convert_file(&cli.input, &options)
        .with_context(|| format!("Failed to convert '{}'", cli.input.display()))?;

    if conversion.table.is_empty() {
        tracing::warn!("Sheet {} of '{}' is empty", options.sheet, cli.input.display());
    }
    let markdown = conversion.to_markdown();

    if let Some(output_path) = &cli.output {
        std::fs::write(output_path, &markdown)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        tracing::info!(
            "Wrote {} rows to '{}'",
            conversion.table.row_count(),
            output_path.display()
        );
    } else {
        io::stdout()
            .write_all(markdown.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}
