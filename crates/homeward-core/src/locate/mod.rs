//! House classification from the live player position.
//!
//! Given where the player currently stands (territory, ward, plot) and the
//! classified teleport list, decide which semantic house they occupy. The
//! classifier is total: anything it cannot place is [`CurrentHouse::Unknown`].

use std::rc::Rc;

use crate::cache::TerritoryCache;
use crate::error::Result;
use crate::game::{CurrentHouse, TeleportLocation, Territory};
use crate::teleport::TeleportLocations;

/// Ward value the host reports while inside an apartment.
pub const APARTMENT_WARD: i32 = -128;
/// Plot value the host reports while inside an apartment.
pub const APARTMENT_PLOT: i32 = -127;

/// Live player housing position as exposed by the host.
///
/// Ward and plot are display (1-based) coordinates; inside an apartment the
/// host reports the sentinel pair, which must be passed through unadjusted.
pub trait HousePosition {
    fn territory_id(&self) -> u32;
    fn ward(&self) -> i32;
    fn plot(&self) -> i32;
    fn room(&self) -> i32;
    fn is_inside(&self) -> bool;
    fn has_permissions(&self) -> bool;
}

/// Convert a zero-based host ward index to display coordinates.
pub fn display_ward(raw: i32) -> i32 {
    raw + 1
}

/// Convert a zero-based host plot index to display coordinates.
pub fn display_plot(raw: i32) -> i32 {
    raw + 1
}

pub struct HouseLocator {
    teleports: Rc<TeleportLocations>,
    territories: Rc<TerritoryCache>,
}

impl HouseLocator {
    pub fn new(teleports: Rc<TeleportLocations>, territories: Rc<TerritoryCache>) -> Self {
        Self {
            teleports,
            territories,
        }
    }

    /// Classify the player's current position.
    pub fn locate(&self, position: &dyn HousePosition) -> Result<CurrentHouse> {
        let territory = self.territories.get(Some(position.territory_id()));
        self.locate_at(&territory, position.ward(), position.plot())
    }

    /// Classify a position given as territory plus display coordinates.
    ///
    /// First match wins: apartment sentinels, then the first two shared
    /// houses, then the free-company estate, then the player's own house.
    pub fn locate_at(&self, territory: &Territory, ward: i32, plot: i32) -> Result<CurrentHouse> {
        if !territory.territory_use().is_residential() {
            return Ok(CurrentHouse::Unknown);
        }
        if ward == APARTMENT_WARD && plot == APARTMENT_PLOT {
            return Ok(CurrentHouse::MyApartment);
        }

        let shares = self.teleports.shared_houses()?;
        if Self::share_matches(shares.first(), territory, ward, plot) {
            return Ok(CurrentHouse::SharedHouse1);
        }
        if Self::share_matches(shares.get(1), territory, ward, plot) {
            return Ok(CurrentHouse::SharedHouse2);
        }

        if let Some(estate) = self.teleports.free_company()? {
            if Self::house_matches(&estate, territory, ward, plot) {
                return Ok(CurrentHouse::MyFreeCompany);
            }
        }
        if let Some(house) = self.teleports.private_house()? {
            if Self::house_matches(&house, territory, ward, plot) {
                return Ok(CurrentHouse::MyHouse);
            }
        }
        Ok(CurrentHouse::Unknown)
    }

    /// Shared houses match on the relaxed residential predicate: the teleport
    /// list carries the interior row while the current position carries the
    /// district row, so plain equality would never hold.
    fn share_matches(
        share: Option<&TeleportLocation>,
        territory: &Territory,
        ward: i32,
        plot: i32,
    ) -> bool {
        let Some(share) = share else {
            return false;
        };
        Territory::match_residential(share.territory(), territory)
            && share.ward() == Some(ward)
            && share.plot() == Some(plot)
    }

    fn house_matches(
        location: &TeleportLocation,
        territory: &Territory,
        ward: i32,
        plot: i32,
    ) -> bool {
        location.territory() == territory
            && location.ward() == Some(ward)
            && location.plot() == Some(plot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use crate::cache::AetheryteCache;
    use crate::decode::TeleportRecord;
    use crate::game::TerritoryUse;
    use crate::sheet::{MockAetheryteSheet, MockTerritorySheet};
    use crate::teleport::{
        ESTATE_HALL_FREE_COMPANY, ESTATE_HALL_PRIVATE, TeleportListProvider,
    };

    const MIST_DISTRICT: u16 = 339;
    const MIST_INTERIOR: u16 = 608;
    const ESTATE_FC: u32 = 56;
    const ESTATE_PRIVATE: u32 = 57;

    struct StaticList {
        records: Vec<Vec<u8>>,
        reads: Cell<u32>,
    }

    impl TeleportListProvider for StaticList {
        fn update(&self) -> Result<()> {
            Ok(())
        }

        fn size(&self) -> usize {
            self.records.len()
        }

        fn record(&self, index: usize) -> Result<Vec<u8>> {
            self.reads.set(self.reads.get() + 1);
            self.records
                .get(index)
                .cloned()
                .ok_or(crate::Error::RecordOutOfRange {
                    index,
                    size: self.records.len(),
                })
        }
    }

    fn record(
        aetheryte_id: u32,
        territory_id: u16,
        plot: u8,
        ward: u8,
        shared_ward: u8,
        shared_plot: u8,
    ) -> Vec<u8> {
        let mut bytes = vec![0u8; TeleportRecord::SIZE];
        bytes[0..4].copy_from_slice(&aetheryte_id.to_le_bytes());
        bytes[8..10].copy_from_slice(&territory_id.to_le_bytes());
        bytes[0x0A] = plot;
        bytes[0x0B] = ward;
        bytes[0x0C] = shared_ward;
        bytes[0x0D] = shared_plot;
        bytes
    }

    fn locator(records: Vec<Vec<u8>>) -> (Rc<StaticList>, HouseLocator) {
        let territories = Rc::new(TerritoryCache::new(Rc::new(
            MockTerritorySheet::new()
                .with_row(MIST_DISTRICT as u32, "Mist", "Mist", "La Noscea", 13)
                .with_row(MIST_INTERIOR as u32, "Topmast Apartment", "Mist", "La Noscea", 14),
        )));
        let aetherytes = Rc::new(AetheryteCache::new(
            Rc::new(
                MockAetheryteSheet::new()
                    .with_row(ESTATE_FC, ESTATE_HALL_FREE_COMPANY, MIST_INTERIOR as u32, 2)
                    .with_row(ESTATE_PRIVATE, ESTATE_HALL_PRIVATE, MIST_INTERIOR as u32, 2),
            ),
            territories.clone(),
        ));
        let provider = Rc::new(StaticList {
            records,
            reads: Cell::new(0),
        });
        let teleports = Rc::new(TeleportLocations::new(
            provider.clone(),
            aetherytes,
            territories.clone(),
        ));
        (provider, HouseLocator::new(teleports, territories))
    }

    fn mist_district() -> Territory {
        Territory::new(
            MIST_DISTRICT as u32,
            "Mist",
            "Mist",
            "La Noscea",
            TerritoryUse::ResidentialZone,
        )
    }

    #[test]
    fn test_non_residential_territory_is_unknown() {
        let (_provider, locator) = locator(vec![record(ESTATE_PRIVATE, MIST_INTERIOR, 0, 0, 3, 7)]);
        let town = Territory::new(131, "Ul'dah - Steps of Thal", "Ul'dah", "Thanalan", TerritoryUse::Main);
        assert_eq!(locator.locate_at(&town, 4, 8).unwrap(), CurrentHouse::Unknown);
    }

    #[test]
    fn test_apartment_sentinels_short_circuit_list_lookup() {
        let (provider, locator) = locator(vec![record(ESTATE_PRIVATE, MIST_INTERIOR, 0, 0, 3, 7)]);
        let result = locator
            .locate_at(&mist_district(), APARTMENT_WARD, APARTMENT_PLOT)
            .unwrap();
        assert_eq!(result, CurrentHouse::MyApartment);
        assert_eq!(provider.reads.get(), 0);
    }

    #[test]
    fn test_first_shared_house_match() {
        let (_provider, locator) = locator(vec![record(ESTATE_PRIVATE, MIST_INTERIOR, 0, 0, 3, 7)]);
        let result = locator.locate_at(&mist_district(), 4, 8).unwrap();
        assert_eq!(result, CurrentHouse::SharedHouse1);
    }

    #[test]
    fn test_mismatched_plot_falls_through_to_unknown() {
        let (_provider, locator) = locator(vec![record(ESTATE_PRIVATE, MIST_INTERIOR, 0, 0, 3, 7)]);
        let result = locator.locate_at(&mist_district(), 4, 9).unwrap();
        assert_eq!(result, CurrentHouse::Unknown);
    }

    #[test]
    fn test_second_shared_house_match() {
        let (_provider, locator) = locator(vec![
            record(ESTATE_PRIVATE, MIST_INTERIOR, 0, 0, 3, 7),
            record(ESTATE_PRIVATE, MIST_INTERIOR, 0, 0, 5, 2),
        ]);
        let result = locator.locate_at(&mist_district(), 6, 3).unwrap();
        assert_eq!(result, CurrentHouse::SharedHouse2);
    }

    #[test]
    fn test_free_company_estate_match() {
        let (_provider, locator) = locator(vec![record(ESTATE_FC, MIST_DISTRICT, 7, 3, 0, 0)]);
        let result = locator.locate_at(&mist_district(), 4, 8).unwrap();
        assert_eq!(result, CurrentHouse::MyFreeCompany);
    }

    #[test]
    fn test_private_house_match() {
        let (_provider, locator) = locator(vec![record(ESTATE_PRIVATE, MIST_DISTRICT, 7, 3, 0, 0)]);
        let result = locator.locate_at(&mist_district(), 4, 8).unwrap();
        assert_eq!(result, CurrentHouse::MyHouse);
    }

    #[test]
    fn test_shared_house_wins_over_private_house() {
        // One shared entry and one private entry at the same coordinates:
        // the shared steps run first.
        let (_provider, locator) = locator(vec![
            record(ESTATE_PRIVATE, MIST_INTERIOR, 0, 0, 3, 7),
            record(ESTATE_PRIVATE, MIST_DISTRICT, 7, 3, 0, 0),
        ]);
        let result = locator.locate_at(&mist_district(), 4, 8).unwrap();
        assert_eq!(result, CurrentHouse::SharedHouse1);
    }

    #[test]
    fn test_display_adjustment_helpers() {
        assert_eq!(display_ward(3), 4);
        assert_eq!(display_plot(7), 8);
    }
}
