//! Export command implementation.

use std::fs;
use std::path::Path;

use anyhow::Result;
use clap::ValueEnum;
use homeward_core::{Capture, Homeward, LocationJson, format_tsv_header, format_tsv_row};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Tsv,
}

/// Run the export command
pub fn run(capture_path: &Path, format: Format, output: Option<&Path>) -> Result<()> {
    let capture = Capture::load(capture_path)?;
    let homeward = Homeward::from_capture(&capture)?;
    let locations = homeward.teleports().all()?;

    let content = match format {
        Format::Json => {
            let rows: Vec<LocationJson> = locations.iter().map(LocationJson::from).collect();
            serde_json::to_string_pretty(&rows)?
        }
        Format::Tsv => {
            let mut lines = vec![format_tsv_header()];
            lines.extend(locations.iter().map(format_tsv_row));
            lines.join("\n")
        }
    };

    if let Some(path) = output {
        fs::write(path, &content)?;
        println!("Exported {} locations to {}", locations.len(), path.display());
    } else {
        println!("{}", content);
    }

    Ok(())
}
