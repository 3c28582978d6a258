use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::game::{Territory, TerritoryUse, UNKNOWN_NAME, UNKNOWN_REGION, UNKNOWN_ZONE};
use crate::sheet::{TerritoryRow, TerritorySheet};

/// Resolves territory ids against the host table into immutable
/// [`Territory`] values, memoizing per id.
pub struct TerritoryCache {
    sheet: Rc<dyn TerritorySheet>,
    cache: RefCell<HashMap<u32, Territory>>,
    filled: Cell<bool>,
}

impl TerritoryCache {
    pub fn new(sheet: Rc<dyn TerritorySheet>) -> Self {
        Self {
            sheet,
            cache: RefCell::new(HashMap::new()),
            filled: Cell::new(false),
        }
    }

    /// The territory for the given id, or the empty sentinel if the id is
    /// None or the table has no usable row. Never fails.
    pub fn get(&self, id: Option<u32>) -> Territory {
        let Some(id) = id else {
            return Territory::empty();
        };
        if let Some(hit) = self.cache.borrow().get(&id) {
            return hit.clone();
        }
        self.make(id, self.sheet.row(id))
    }

    /// Build and cache a territory from a table row.
    ///
    /// A Main-use row without a place name is a filler row in the host data;
    /// it maps to the empty sentinel and is not cached, like a missing row.
    fn make(&self, id: u32, row: Option<TerritoryRow>) -> Territory {
        let Some(row) = row else {
            return Territory::empty();
        };
        if row.intended_use == TerritoryUse::Main.code() && row.place_name.is_none() {
            return Territory::empty();
        }

        let name = row.place_name.unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let zone = row.zone_name.unwrap_or_else(|| UNKNOWN_ZONE.to_string());
        let region = row.region_name.unwrap_or_else(|| UNKNOWN_REGION.to_string());
        let territory = Territory::new(id, name, zone, region, TerritoryUse::from_u8(row.intended_use));
        self.cache.borrow_mut().insert(id, territory.clone());
        territory
    }

    /// Query every row once so the whole table is cached. Idempotent.
    pub fn fill_all(&self) {
        if self.filled.get() {
            return;
        }
        let count = self.sheet.row_count();
        for id in 0..count {
            self.get(Some(id)); // Called for the side effect of loading the cache
        }
        self.filled.set(true);
        debug!(
            "territory cache filled: {} ids scanned, {} cached",
            count,
            self.cache.borrow().len()
        );
    }

    /// Every defined territory, ordered by id.
    pub fn all(&self) -> Vec<Territory> {
        self.fill_all();
        let cache = self.cache.borrow();
        let mut territories: Vec<_> = cache.values().cloned().collect();
        territories.sort_by_key(Territory::id);
        territories
    }
}
