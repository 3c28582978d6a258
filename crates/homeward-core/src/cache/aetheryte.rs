use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;

use crate::cache::TerritoryCache;
use crate::game::{Aetheryte, UNKNOWN_AETHERNET_NAME, UNKNOWN_NAME};
use crate::sheet::{AetheryteRow, AetheryteSheet};

/// Resolves aetheryte ids against the host table into immutable
/// [`Aetheryte`] values, memoizing per id. Territory references in the rows
/// are resolved through the shared [`TerritoryCache`].
pub struct AetheryteCache {
    sheet: Rc<dyn AetheryteSheet>,
    territories: Rc<TerritoryCache>,
    cache: RefCell<HashMap<u32, Aetheryte>>,
    filled: Cell<bool>,
}

impl AetheryteCache {
    pub fn new(sheet: Rc<dyn AetheryteSheet>, territories: Rc<TerritoryCache>) -> Self {
        Self {
            sheet,
            territories,
            cache: RefCell::new(HashMap::new()),
            filled: Cell::new(false),
        }
    }

    /// The aetheryte for the given id, or the empty sentinel if the id is
    /// None or the table has no such row. Never fails.
    pub fn get(&self, id: Option<u32>) -> Aetheryte {
        let Some(id) = id else {
            return Aetheryte::empty();
        };
        if let Some(hit) = self.cache.borrow().get(&id) {
            return hit.clone();
        }
        self.make(id, self.sheet.row(id))
    }

    fn make(&self, id: u32, row: Option<AetheryteRow>) -> Aetheryte {
        let Some(row) = row else {
            return Aetheryte::empty();
        };

        let name = row.place_name.unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let aethernet_name = row
            .aethernet_name
            .unwrap_or_else(|| UNKNOWN_AETHERNET_NAME.to_string());
        let territory = self.territories.get(row.territory_id);
        let aetheryte = Aetheryte::new(
            id,
            name,
            aethernet_name,
            row.is_aetheryte,
            row.group,
            territory,
            row.order,
        );
        self.cache.borrow_mut().insert(id, aetheryte.clone());
        aetheryte
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
            "aetheryte cache filled: {} ids scanned, {} cached",
            count,
            self.cache.borrow().len()
        );
    }

    /// Every defined aetheryte, ordered by id.
    pub fn all(&self) -> Vec<Aetheryte> {
        self.fill_all();
        let cache = self.cache.borrow();
        let mut aetherytes: Vec<_> = cache.values().cloned().collect();
        aetherytes.sort_by_key(Aetheryte::id);
        aetherytes
    }
}
