//! Export command
//!
//! Export a note to a plain-text or HTML file.

use anyhow::{Context, Result};
use clap::Args;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use nk_core::config::Config;
use nk_core::{ContentExporter, Document, ExportFormat, WriteMode};
use nk_storage::open_document;

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Note to export (.txt or .html, or - for stdin)
    pub input: PathBuf,

    /// Output file; its extension (.txt or .html) picks the format
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Format printed to stdout when no output file is given (txt or html)
    #[arg(long, short, default_value = "txt")]
    pub format: ExportFormat,

    /// Treat stdin as HTML
    #[arg(long)]
    pub markup: bool,

    /// Write the file in place instead of via a temp file
    #[arg(long)]
    pub direct: bool,

    /// Create missing parent directories of the output file
    #[arg(long)]
    pub parents: bool,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let document = read_input(&args.input, args.markup)?;

    let mut exporter = ContentExporter::from_config(&config.export);
    if args.direct {
        exporter = exporter.with_write_mode(WriteMode::Direct);
    }
    if args.parents {
        exporter = exporter.with_parent_dirs(true);
    }

    if let Some(output_path) = args.output {
        let summary = exporter
            .export(&document, &output_path)
            .with_context(|| format!("Failed to export to {}", output_path.display()))?;
        eprintln!(
            "{} Exported {} bytes of {} to {}",
            "✓".green(),
            summary.bytes.to_string().yellow(),
            summary.format.name(),
            summary.path.display()
        );
    } else {
        let output = exporter.render(&document, args.format);
        std::io::stdout()
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn read_input(input: &Path, markup: bool) -> Result<Document> {
    if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        let mut document = Document::new();
        if markup {
            document.set_markup(content);
        } else {
            document.set_plain(content);
        }
        return Ok(document);
    }

    open_document(input).with_context(|| format!("Failed to open {}", input.display()))
}
