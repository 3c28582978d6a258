use std::cmp::Ordering;
use std::fmt;

use crate::game::TerritoryUse;

/// Placeholder name used when the host row has no place name.
pub const UNKNOWN_NAME: &str = "?[name]?";
/// Placeholder zone used when the host row has no zone name.
pub const UNKNOWN_ZONE: &str = "?[zone]?";
/// Placeholder region used when the host row has no region name.
pub const UNKNOWN_REGION: &str = "?[region]?";

/// An area of the game where a character can be, e.g. Mist, a dungeon, or an
/// inn room.
///
/// Immutable once built; created by the territory cache and shared by clone.
#[derive(Debug, Clone)]
pub struct Territory {
    id: u32,
    name: String,
    zone: String,
    region: String,
    territory_use: TerritoryUse,
}

impl Territory {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        zone: impl Into<String>,
        region: impl Into<String>,
        territory_use: TerritoryUse,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            zone: zone.into(),
            region: region.into(),
            territory_use,
        }
    }

    /// The sentinel returned for missing or unparseable rows.
    pub fn empty() -> Self {
        Self::new(0, UNKNOWN_NAME, UNKNOWN_ZONE, UNKNOWN_REGION, TerritoryUse::Main)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// The name of this territory such as `Lower La Noscea`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The zone of this territory such as `La Noscea`. Blank for territories
    /// that are nowhere in particular, such as the Gaol.
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// The region of this territory such as `La Noscea`. Often the same as
    /// the zone.
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn territory_use(&self) -> TerritoryUse {
        self.territory_use
    }

    /// Whether two territories denote the same residential area.
    ///
    /// A plot's interior and its district are different rows with different
    /// ids and uses; they match here when zone and region agree and both uses
    /// are residential-flavored.
    pub fn match_residential(lhs: &Territory, rhs: &Territory) -> bool {
        if lhs.zone != rhs.zone || lhs.region != rhs.region {
            return false;
        }
        lhs.territory_use.is_residential() && rhs.territory_use.is_residential()
    }

    /// Lexicographic ordering by name, zone, region, then use code.
    ///
    /// Exposed as a method rather than `Ord`: the equality relation below is
    /// looser than this ordering, so an `Ord` impl would violate the trait
    /// contract.
    pub fn compare(&self, other: &Territory) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.zone.cmp(&other.zone))
            .then_with(|| self.region.cmp(&other.region))
            .then_with(|| self.territory_use.code().cmp(&other.territory_use.code()))
    }
}

impl PartialEq for Territory {
    /// Equal when residentially matched, or when zone, region, and use all
    /// agree. The id and the name take no part in equality.
    fn eq(&self, other: &Self) -> bool {
        if Self::match_residential(self, other) {
            return true;
        }
        self.zone == other.zone
            && self.region == other.region
            && self.territory_use == other.territory_use
    }
}

impl fmt::Display for Territory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{} for {}",
            self.region, self.zone, self.name, self.territory_use
        )
    }
}
