//! Fc command implementation.

use std::path::Path;

use anyhow::{Result, bail};
use homeward_core::{Capture, FreeCompany};

/// Run the fc command
pub fn run(capture_path: &Path) -> Result<()> {
    let capture = Capture::load(capture_path)?;
    let Some(bytes) = capture.free_company_bytes()? else {
        bail!("capture has no free-company blob");
    };
    let fc = FreeCompany::decode(&bytes)?;

    println!("Name:          {}", fc.name);
    println!("Master:        {}", fc.master);
    println!("Grand Company: {}", fc.grand_company);
    println!("Rank:          {}", fc.rank);
    println!("Members:       {}/{} online", fc.online_members, fc.total_members);
    println!("Home World:    {}", fc.home_world);
    println!("Id:            {:#x}", fc.id);
    println!("Crest:         {:#x}", fc.crest);

    Ok(())
}
