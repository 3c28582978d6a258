use std::fmt;

use strum::{Display, FromRepr, IntoStaticStr};

/// What a territory is used for.
///
/// The codes are host-defined; the named ones are those observed so far.
/// Codes the host adds in later versions come through as [`Self::Other`] so
/// two territories with different unknown uses still compare as different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerritoryUse {
    Main,
    Land,
    Inn,
    Dungeon,
    VariantDungeon,
    Gaol,
    AllianceRaid,
    Trial,
    ResidentialZone,
    Residence,
    Interior,
    NormalRaid1,
    NormalRaid2,
    Firmament,
    Sanctum,
    Diadem,
    Fold,
    Barracks,
    DeepDungeon,
    EventLocale,
    TreasureHunt,
    Eureka,
    Other(u8),
}

impl TerritoryUse {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Main,
            1 => Self::Land,
            2 => Self::Inn,
            3 => Self::Dungeon,
            4 => Self::VariantDungeon,
            5 => Self::Gaol,
            8 => Self::AllianceRaid,
            10 => Self::Trial,
            13 => Self::ResidentialZone,
            14 => Self::Residence,
            15 => Self::Interior,
            16 => Self::NormalRaid1,
            17 => Self::NormalRaid2,
            21 => Self::Firmament,
            22 => Self::Sanctum,
            26 => Self::Diadem,
            27 => Self::Fold,
            30 => Self::Barracks,
            31 => Self::DeepDungeon,
            32 => Self::EventLocale,
            33 => Self::TreasureHunt,
            41 => Self::Eureka,
            other => Self::Other(other),
        }
    }

    /// The host's numeric code for this use.
    pub fn code(&self) -> u8 {
        match self {
            Self::Main => 0,
            Self::Land => 1,
            Self::Inn => 2,
            Self::Dungeon => 3,
            Self::VariantDungeon => 4,
            Self::Gaol => 5,
            Self::AllianceRaid => 8,
            Self::Trial => 10,
            Self::ResidentialZone => 13,
            Self::Residence => 14,
            Self::Interior => 15,
            Self::NormalRaid1 => 16,
            Self::NormalRaid2 => 17,
            Self::Firmament => 21,
            Self::Sanctum => 22,
            Self::Diadem => 26,
            Self::Fold => 27,
            Self::Barracks => 30,
            Self::DeepDungeon => 31,
            Self::EventLocale => 32,
            Self::TreasureHunt => 33,
            Self::Eureka => 41,
            Self::Other(code) => *code,
        }
    }

    /// Whether a player can be standing in housing here.
    pub fn is_residential(&self) -> bool {
        matches!(self, Self::ResidentialZone | Self::Residence)
    }
}

impl fmt::Display for TerritoryUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Other(code) => write!(f, "{}", code),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// Grand company allegiance of a free company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromRepr, IntoStaticStr, Display)]
#[repr(u8)]
pub enum GrandCompany {
    #[default]
    #[strum(serialize = "-")]
    None = 0,
    #[strum(serialize = "Maelstrom")]
    Maelstrom = 1,
    #[strum(serialize = "Order of the Twin Adder")]
    TwinAdder = 2,
    #[strum(serialize = "Immortal Flames")]
    ImmortalFlames = 3,
}

impl GrandCompany {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

/// Which house the player currently occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoStaticStr, Display)]
pub enum CurrentHouse {
    #[default]
    Unknown,
    #[strum(serialize = "My Apartment")]
    MyApartment,
    #[strum(serialize = "Shared Estate 1")]
    SharedHouse1,
    #[strum(serialize = "Shared Estate 2")]
    SharedHouse2,
    #[strum(serialize = "Free Company Estate")]
    MyFreeCompany,
    #[strum(serialize = "My House")]
    MyHouse,
}
