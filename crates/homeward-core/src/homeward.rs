//! Top-level wiring of the decode/classify engine.

use std::rc::Rc;

use crate::cache::{AetheryteCache, TerritoryCache};
use crate::capture::Capture;
use crate::error::Result;
use crate::locate::HouseLocator;
use crate::sheet::{AetheryteSheet, TerritorySheet};
use crate::teleport::{TeleportListProvider, TeleportLocations};

/// The assembled engine: both reference caches, the classified teleport
/// list, and the house locator, wired from injected host collaborators.
pub struct Homeward {
    territories: Rc<TerritoryCache>,
    aetherytes: Rc<AetheryteCache>,
    teleports: Rc<TeleportLocations>,
    locator: HouseLocator,
}

impl Homeward {
    pub fn new(
        territory_sheet: Rc<dyn TerritorySheet>,
        aetheryte_sheet: Rc<dyn AetheryteSheet>,
        teleport_list: Rc<dyn TeleportListProvider>,
    ) -> Self {
        let territories = Rc::new(TerritoryCache::new(territory_sheet));
        let aetherytes = Rc::new(AetheryteCache::new(aetheryte_sheet, territories.clone()));
        let teleports = Rc::new(TeleportLocations::new(
            teleport_list,
            aetherytes.clone(),
            territories.clone(),
        ));
        let locator = HouseLocator::new(teleports.clone(), territories.clone());
        Self {
            territories,
            aetherytes,
            teleports,
            locator,
        }
    }

    /// Wire the engine from a capture file's contents.
    pub fn from_capture(capture: &Capture) -> Result<Self> {
        let tables = Rc::new(capture.tables()?);
        let teleports = Rc::new(capture.teleports()?);
        Ok(Self::new(tables.clone(), tables, teleports))
    }

    pub fn territories(&self) -> &TerritoryCache {
        &self.territories
    }

    pub fn aetherytes(&self) -> &AetheryteCache {
        &self.aetherytes
    }

    pub fn teleports(&self) -> &TeleportLocations {
        &self.teleports
    }

    pub fn locator(&self) -> &HouseLocator {
        &self.locator
    }
}
