//! Territories command implementation.

use std::path::Path;

use anyhow::Result;
use homeward_core::{Capture, Homeward};

/// Run the territories command
pub fn run(capture_path: &Path) -> Result<()> {
    let capture = Capture::load(capture_path)?;
    let homeward = Homeward::from_capture(&capture)?;

    let territories = homeward.territories().all();
    println!(
        "{:>5} {:<16} {:<30} {:<30} {:<30}",
        "Id", "Use", "Region", "Zone", "Name"
    );
    println!(
        "{:->5} {:-<16} {:-<30} {:-<30} {:-<30}",
        "", "", "", "", ""
    );
    for territory in &territories {
        println!(
            "{:>5} {:<16} {:<30} {:<30} {:<30}",
            territory.id(),
            territory.territory_use().to_string(),
            territory.region(),
            territory.zone(),
            territory.name()
        );
    }
    println!();
    println!("{} territories", territories.len());

    Ok(())
}
