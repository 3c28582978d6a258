//! Locations command implementation.

use std::path::Path;

use anyhow::Result;
use homeward_core::{Capture, Homeward};

/// Run the locations command
pub fn run(capture_path: &Path, houses_only: bool) -> Result<()> {
    let capture = Capture::load(capture_path)?;
    let homeward = Homeward::from_capture(&capture)?;

    let locations = if houses_only {
        homeward.teleports().houses()?
    } else {
        homeward.teleports().all()?
    };

    println!(
        "{:>3} {:<14} {:<30} {:>5} {:>5} {:<50}",
        "#", "Kind", "Territory", "Ward", "Plot", "Name"
    );
    println!(
        "{:->3} {:-<14} {:-<30} {:->5} {:->5} {:-<50}",
        "", "", "", "", "", ""
    );
    for (index, location) in locations.iter().enumerate() {
        println!(
            "{:>3} {:<14} {:<30} {:>5} {:>5} {:<50}",
            index,
            location.kind(),
            location.territory().name(),
            location.ward().map_or(String::new(), |w| w.to_string()),
            location.plot().map_or(String::new(), |p| p.to_string()),
            location.long_name()
        );
    }
    println!();
    println!("{} locations", locations.len());

    Ok(())
}
