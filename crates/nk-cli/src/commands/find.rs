//! Find command
//!
//! Find all occurrences of text in a note.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use nk_core::config::Config;
use nk_core::search::{find_all, SearchOptions};
use nk_core::TextBuffer;
use nk_storage::open_document;

/// Arguments for the find command
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Note to search (.txt or .html)
    pub input: PathBuf,

    /// Text to find
    pub pattern: String,

    /// Match case
    #[arg(long, short = 's')]
    pub case_sensitive: bool,
}

/// Execute the find command
pub fn execute(args: FindArgs, config: &Config) -> Result<()> {
    use colored::Colorize;

    let document = open_document(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let text = document.plain_text();

    let options = SearchOptions {
        case_sensitive: args.case_sensitive || config.search.case_sensitive,
    };
    let matches = find_all(&text, &args.pattern, options);
    let lines: Vec<&str> = text.split('\n').collect();

    for m in &matches {
        let line = lines.get(m.line - 1).copied().unwrap_or_default();
        println!(
            "{}:{}: {}",
            m.line.to_string().cyan(),
            m.column.to_string().cyan(),
            line
        );
    }

    eprintln!(
        "{} match{} for {}",
        matches.len().to_string().yellow(),
        if matches.len() == 1 { "" } else { "es" },
        args.pattern.bold()
    );

    Ok(())
}
