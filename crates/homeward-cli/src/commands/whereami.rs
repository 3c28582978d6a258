//! Whereami command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use homeward_core::{Capture, Homeward};

/// Run the whereami command
pub fn run(capture_path: &Path) -> Result<()> {
    let capture = Capture::load(capture_path)?;
    let Some(position) = capture.position else {
        bail!("capture has no player position");
    };
    let homeward = Homeward::from_capture(&capture)?;

    let territory = homeward.territories().get(Some(position.territory_id));
    let result = homeward.locator().locate(&position)?;

    println!("Territory: {}", territory);
    println!(
        "Position:  ward {}, plot {}, room {}",
        position.ward, position.plot, position.room
    );
    println!("House:     {}", result);

    Ok(())
}
