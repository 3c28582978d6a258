use std::fmt;

use crate::game::{Aetheryte, Territory};

/// Payload shared by every teleport location variant.
#[derive(Debug, Clone)]
pub struct LocationInfo {
    aetheryte: Aetheryte,
    territory: Territory,
    name: String,
    long_name: String,
}

impl LocationInfo {
    fn new(aetheryte: Aetheryte, territory: Territory, name: String, long_name: String) -> Self {
        Self {
            aetheryte,
            territory,
            name,
            long_name,
        }
    }

    pub fn aetheryte(&self) -> &Aetheryte {
        &self.aetheryte
    }

    pub fn territory(&self) -> &Territory {
        &self.territory
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn long_name(&self) -> &str {
        &self.long_name
    }
}

/// A classified entry of the teleport list.
///
/// One variant per housing ownership category, plus the generic aetheryte
/// point. Display names are computed once at construction.
#[derive(Debug, Clone)]
pub enum TeleportLocation {
    Aetheryte(LocationInfo),
    FreeCompany {
        info: LocationInfo,
        ward: i32,
        plot: i32,
    },
    PrivateHouse {
        info: LocationInfo,
        ward: i32,
        plot: i32,
    },
    Apartment {
        info: LocationInfo,
        room: i32,
    },
    SharedHouse {
        info: LocationInfo,
        ward: i32,
        plot: i32,
    },
}

impl TeleportLocation {
    /// A generic teleport point that is not a house.
    pub fn aetheryte_point(aetheryte: Aetheryte, territory: Territory) -> Self {
        let name = aetheryte.name().to_string();
        let long_name = aetheryte.long_name();
        Self::Aetheryte(LocationInfo::new(aetheryte, territory, name, long_name))
    }

    pub fn free_company(aetheryte: Aetheryte, territory: Territory, ward: i32, plot: i32) -> Self {
        let name = "Free Company".to_string();
        let long_name = name.clone();
        Self::FreeCompany {
            info: LocationInfo::new(aetheryte, territory, name, long_name),
            ward,
            plot,
        }
    }

    pub fn private_house(aetheryte: Aetheryte, territory: Territory, ward: i32, plot: i32) -> Self {
        let name = "Your house".to_string();
        let long_name = name.clone();
        Self::PrivateHouse {
            info: LocationInfo::new(aetheryte, territory, name, long_name),
            ward,
            plot,
        }
    }

    pub fn apartment(aetheryte: Aetheryte, territory: Territory, room: i32) -> Self {
        let name = format!("{} ({})", territory.name(), room);
        let long_name = format!("Your apartment at {}, room {}", territory.name(), room);
        Self::Apartment {
            info: LocationInfo::new(aetheryte, territory, name, long_name),
            room,
        }
    }

    pub fn shared_house(aetheryte: Aetheryte, territory: Territory, ward: i32, plot: i32) -> Self {
        let name = format!("{}, ({}, {})", territory.name(), ward, plot);
        let long_name = format!(
            "Shared Estate at {} (Ward {}, Plot {})",
            territory.name(),
            ward,
            plot
        );
        Self::SharedHouse {
            info: LocationInfo::new(aetheryte, territory, name, long_name),
            ward,
            plot,
        }
    }

    pub fn info(&self) -> &LocationInfo {
        match self {
            Self::Aetheryte(info) => info,
            Self::FreeCompany { info, .. } => info,
            Self::PrivateHouse { info, .. } => info,
            Self::Apartment { info, .. } => info,
            Self::SharedHouse { info, .. } => info,
        }
    }

    pub fn aetheryte(&self) -> &Aetheryte {
        self.info().aetheryte()
    }

    pub fn territory(&self) -> &Territory {
        self.info().territory()
    }

    pub fn name(&self) -> &str {
        self.info().name()
    }

    pub fn long_name(&self) -> &str {
        self.info().long_name()
    }

    /// Every variant except the generic aetheryte point.
    pub fn is_house(&self) -> bool {
        !matches!(self, Self::Aetheryte(_))
    }

    /// Ward for the variants that have one.
    pub fn ward(&self) -> Option<i32> {
        match self {
            Self::FreeCompany { ward, .. }
            | Self::PrivateHouse { ward, .. }
            | Self::SharedHouse { ward, .. } => Some(*ward),
            _ => None,
        }
    }

    /// Plot for the variants that have one.
    pub fn plot(&self) -> Option<i32> {
        match self {
            Self::FreeCompany { plot, .. }
            | Self::PrivateHouse { plot, .. }
            | Self::SharedHouse { plot, .. } => Some(*plot),
            _ => None,
        }
    }

    /// Variant label for listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Aetheryte(_) => "Aetheryte",
            Self::FreeCompany { .. } => "Free Company",
            Self::PrivateHouse { .. } => "Private House",
            Self::Apartment { .. } => "Apartment",
            Self::SharedHouse { .. } => "Shared House",
        }
    }
}

impl fmt::Display for TeleportLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::TerritoryUse;

    fn mist_ward() -> Territory {
        Territory::new(339, "Mist", "Mist", "La Noscea", TerritoryUse::ResidentialZone)
    }

    fn estate_hall(name: &str) -> Aetheryte {
        Aetheryte::new(56, name, "", false, -1, mist_ward(), 10)
    }

    #[test]
    fn test_aetheryte_point_names() {
        let aetheryte = estate_hall("Limsa Lominsa Aetheryte Plaza");
        let location = TeleportLocation::aetheryte_point(aetheryte, mist_ward());
        assert_eq!(location.name(), "Limsa Lominsa Aetheryte Plaza");
        assert_eq!(location.long_name(), "Limsa Lominsa Aetheryte Plaza in Mist");
        assert!(!location.is_house());
        assert_eq!(location.ward(), None);
    }

    #[test]
    fn test_shared_house_names() {
        let aetheryte = estate_hall("Estate Hall (Private)");
        let location = TeleportLocation::shared_house(aetheryte, mist_ward(), 4, 8);
        assert_eq!(location.name(), "Mist, (4, 8)");
        assert_eq!(location.long_name(), "Shared Estate at Mist (Ward 4, Plot 8)");
        assert_eq!(location.ward(), Some(4));
        assert_eq!(location.plot(), Some(8));
        assert!(location.is_house());
    }

    #[test]
    fn test_apartment_names() {
        let aetheryte = estate_hall("Estate Hall (Private)");
        let location = TeleportLocation::apartment(aetheryte, mist_ward(), -1);
        assert_eq!(location.name(), "Mist (-1)");
        assert_eq!(location.long_name(), "Your apartment at Mist, room -1");
        assert_eq!(location.ward(), None);
    }

    #[test]
    fn test_house_names_are_fixed() {
        let fc = TeleportLocation::free_company(estate_hall("Estate Hall (Free Company)"), mist_ward(), 4, 8);
        assert_eq!(fc.name(), "Free Company");
        let house = TeleportLocation::private_house(estate_hall("Estate Hall (Private)"), mist_ward(), 4, 8);
        assert_eq!(house.name(), "Your house");
    }
}
