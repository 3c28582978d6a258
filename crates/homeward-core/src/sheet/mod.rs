//! Row-indexed reference data source.
//!
//! The host exposes its game constants as versioned, read-only tables
//! addressed by integer row id. The two tables this crate needs are modeled
//! as traits so the caches can be wired to the live host, to a capture file,
//! or to a test fake.

use serde::{Deserialize, Serialize};

#[cfg(test)]
pub mod mock;

#[cfg(test)]
pub use mock::{MockAetheryteSheet, MockTerritorySheet};

/// One row of the territory table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryRow {
    pub place_name: Option<String>,
    pub zone_name: Option<String>,
    pub region_name: Option<String>,
    pub intended_use: u8,
}

/// One row of the aetheryte table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AetheryteRow {
    pub place_name: Option<String>,
    pub aethernet_name: Option<String>,
    pub territory_id: Option<u32>,
    pub is_aetheryte: bool,
    pub group: i32,
    pub order: u32,
}

/// Read access to the territory table.
pub trait TerritorySheet {
    /// The row with the given id, or None if the table has no such row.
    fn row(&self, id: u32) -> Option<TerritoryRow>;
    /// Number of row indices; ids run from 0 to this count, with gaps.
    fn row_count(&self) -> u32;
}

/// Read access to the aetheryte table.
pub trait AetheryteSheet {
    fn row(&self, id: u32) -> Option<AetheryteRow>;
    fn row_count(&self) -> u32;
}
