//! Formats command
//!
//! List the file formats notes can be exported to.

use anyhow::Result;
use nk_core::ExportFormat;

/// Execute the formats command
pub fn execute() -> Result<()> {
    use colored::Colorize;

    for format in ExportFormat::ALL {
        println!(
            "{:<6} {}",
            format!(".{}", format.extension()).cyan(),
            format.name()
        );
    }
    Ok(())
}
