//! Aetherytes command implementation.

use std::path::Path;

use anyhow::Result;
use homeward_core::{Capture, Homeward};

/// Run the aetherytes command
pub fn run(capture_path: &Path) -> Result<()> {
    let capture = Capture::load(capture_path)?;
    let homeward = Homeward::from_capture(&capture)?;

    let aetherytes = homeward.aetherytes().all();
    println!(
        "{:>5} {:>5} {:>6} {:>10} {:<40} {:<30}",
        "Id", "Main", "Group", "Order", "Name", "Aethernet Name"
    );
    println!(
        "{:->5} {:->5} {:->6} {:->10} {:-<40} {:-<30}",
        "", "", "", "", "", ""
    );
    for aetheryte in &aetherytes {
        println!(
            "{:>5} {:>5} {:>6} {:>10} {:<40} {:<30}",
            aetheryte.id(),
            if aetheryte.is_main() { "yes" } else { "no" },
            aetheryte.group(),
            aetheryte.order(),
            aetheryte.long_name(),
            aetheryte.aethernet_name()
        );
    }
    println!();
    println!("{} aetherytes", aetherytes.len());

    Ok(())
}
