//! Counting sheet fakes shared by the cache, teleport, and locate tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::sheet::{AetheryteRow, AetheryteSheet, TerritoryRow, TerritorySheet};

#[derive(Default)]
pub struct MockTerritorySheet {
    rows: HashMap<u32, TerritoryRow>,
    pub fetches: RefCell<HashMap<u32, u32>>,
}

impl MockTerritorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(
        mut self,
        id: u32,
        name: &str,
        zone: &str,
        region: &str,
        intended_use: u8,
    ) -> Self {
        self.rows.insert(
            id,
            TerritoryRow {
                place_name: Some(name.to_string()),
                zone_name: Some(zone.to_string()),
                region_name: Some(region.to_string()),
                intended_use,
            },
        );
        self
    }

    pub fn with_raw_row(mut self, id: u32, row: TerritoryRow) -> Self {
        self.rows.insert(id, row);
        self
    }

    pub fn fetch_count(&self, id: u32) -> u32 {
        self.fetches.borrow().get(&id).copied().unwrap_or(0)
    }
}

impl TerritorySheet for MockTerritorySheet {
    fn row(&self, id: u32) -> Option<TerritoryRow> {
        *self.fetches.borrow_mut().entry(id).or_insert(0) += 1;
        self.rows.get(&id).cloned()
    }

    fn row_count(&self) -> u32 {
        self.rows.keys().max().map_or(0, |max| max + 1)
    }
}

#[derive(Default)]
pub struct MockAetheryteSheet {
    rows: HashMap<u32, AetheryteRow>,
    pub fetches: RefCell<HashMap<u32, u32>>,
}

impl MockAetheryteSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(mut self, id: u32, name: &str, territory_id: u32, order: u32) -> Self {
        self.rows.insert(
            id,
            AetheryteRow {
                place_name: Some(name.to_string()),
                aethernet_name: None,
                territory_id: Some(territory_id),
                is_aetheryte: true,
                group: 0,
                order,
            },
        );
        self
    }

    pub fn with_raw_row(mut self, id: u32, row: AetheryteRow) -> Self {
        self.rows.insert(id, row);
        self
    }

    pub fn fetch_count(&self, id: u32) -> u32 {
        self.fetches.borrow().get(&id).copied().unwrap_or(0)
    }
}

impl AetheryteSheet for MockAetheryteSheet {
    fn row(&self, id: u32) -> Option<AetheryteRow> {
        *self.fetches.borrow_mut().entry(id).or_insert(0) += 1;
        self.rows.get(&id).cloned()
    }

    fn row_count(&self) -> u32 {
        self.rows.keys().max().map_or(0, |max| max + 1)
    }
}
