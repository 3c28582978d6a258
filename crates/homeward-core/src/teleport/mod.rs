//! Teleport list classification.
//!
//! Walks the host's raw teleport list, decodes each fixed-size record, and
//! classifies it into one of the [`TeleportLocation`] variants by matching
//! the resolved aetheryte name against the host's two estate-hall labels
//! combined with the decoded flags.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::cache::{AetheryteCache, TerritoryCache};
use crate::decode::TeleportRecord;
use crate::error::Result;
use crate::game::TeleportLocation;

/// Host label for a free-company estate entry.
pub const ESTATE_HALL_FREE_COMPANY: &str = "Estate Hall (Free Company)";
/// Host label for a private-estate entry (owned, shared, or apartment).
pub const ESTATE_HALL_PRIVATE: &str = "Estate Hall (Private)";

/// The host's raw teleport list.
///
/// An ordered, fixed-stride record list that the host rebuilds on request.
pub trait TeleportListProvider {
    /// Ask the host to rebuild its teleport list before reading it.
    fn update(&self) -> Result<()>;

    /// Number of records currently in the list.
    fn size(&self) -> usize;

    /// Raw bytes of the record at `index`, exactly
    /// [`TeleportRecord::SIZE`] bytes.
    fn record(&self, index: usize) -> Result<Vec<u8>>;
}

/// Classified view of the teleport list, rebuilt in full on demand.
///
/// The list is cached after the first build; [`Self::clear_cache`] drops it
/// so the next query re-reads the provider. Partial updates are not
/// supported.
pub struct TeleportLocations {
    provider: Rc<dyn TeleportListProvider>,
    aetherytes: Rc<AetheryteCache>,
    territories: Rc<TerritoryCache>,
    cache: RefCell<Option<Vec<TeleportLocation>>>,
}

impl TeleportLocations {
    pub fn new(
        provider: Rc<dyn TeleportListProvider>,
        aetherytes: Rc<AetheryteCache>,
        territories: Rc<TerritoryCache>,
    ) -> Self {
        Self {
            provider,
            aetherytes,
            territories,
            cache: RefCell::new(None),
        }
    }

    /// All classified locations, in host list order.
    pub fn all(&self) -> Result<Vec<TeleportLocation>> {
        if let Some(list) = self.cache.borrow().as_ref() {
            return Ok(list.clone());
        }
        let list = self.rebuild()?;
        *self.cache.borrow_mut() = Some(list.clone());
        Ok(list)
    }

    fn rebuild(&self) -> Result<Vec<TeleportLocation>> {
        self.provider.update()?;
        let size = self.provider.size();
        let mut results = Vec::with_capacity(size);
        for index in 0..size {
            let bytes = self.provider.record(index)?;
            let record = TeleportRecord::decode(&bytes)?;
            results.push(self.classify(&record));
        }
        debug!("teleport list rebuilt: {} records", results.len());
        Ok(results)
    }

    /// Classify one record. The free-company label wins over any flags; the
    /// private label splits by the shared-house flag, then the apartment
    /// flag. Anything else is a plain aetheryte point.
    fn classify(&self, record: &TeleportRecord) -> TeleportLocation {
        let aetheryte = self.aetherytes.get(Some(record.aetheryte_id));
        let territory = self.territories.get(Some(record.territory_id as u32));
        let name = aetheryte.name().to_string();
        match name.as_str() {
            ESTATE_HALL_FREE_COMPANY => {
                TeleportLocation::free_company(aetheryte, territory, record.ward(), record.plot())
            }
            ESTATE_HALL_PRIVATE if record.is_shared_house() => TeleportLocation::shared_house(
                aetheryte,
                territory,
                record.shared_ward(),
                record.shared_plot(),
            ),
            ESTATE_HALL_PRIVATE if record.is_apartment() => {
                // The record kind carries no room number; see DESIGN.md.
                TeleportLocation::apartment(aetheryte, territory, -1)
            }
            ESTATE_HALL_PRIVATE => {
                TeleportLocation::private_house(aetheryte, territory, record.ward(), record.plot())
            }
            _ => TeleportLocation::aetheryte_point(aetheryte, territory),
        }
    }

    /// Every housing location, in host list order.
    pub fn houses(&self) -> Result<Vec<TeleportLocation>> {
        Ok(self.all()?.into_iter().filter(TeleportLocation::is_house).collect())
    }

    /// Shared houses sorted ascending by (aetheryte order, ward, plot).
    pub fn shared_houses(&self) -> Result<Vec<TeleportLocation>> {
        let mut shares: Vec<_> = self
            .all()?
            .into_iter()
            .filter(|location| matches!(location, TeleportLocation::SharedHouse { .. }))
            .collect();
        shares.sort_by_key(|location| {
            (
                location.aetheryte().order(),
                location.ward().unwrap_or(0),
                location.plot().unwrap_or(0),
            )
        });
        Ok(shares)
    }

    /// The free-company estate, if the list has one.
    pub fn free_company(&self) -> Result<Option<TeleportLocation>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|location| matches!(location, TeleportLocation::FreeCompany { .. })))
    }

    /// The player's own house, if the list has one.
    pub fn private_house(&self) -> Result<Option<TeleportLocation>> {
        Ok(self
            .all()?
            .into_iter()
            .find(|location| matches!(location, TeleportLocation::PrivateHouse { .. })))
    }

    /// Drop the classified list; the next query rebuilds it from the host.
    pub fn clear_cache(&self) {
        *self.cache.borrow_mut() = None;
    }
}
