//! Export formatting for classified teleport locations.

use serde::Serialize;

use crate::game::TeleportLocation;

pub fn format_tsv_header() -> String {
    [
        "Kind",
        "Name",
        "LongName",
        "Territory",
        "Zone",
        "Region",
        "Aetheryte",
        "Order",
        "Ward",
        "Plot",
    ]
    .join("\t")
}

pub fn format_tsv_row(location: &TeleportLocation) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        location.kind(),
        location.name(),
        location.long_name(),
        location.territory().name(),
        location.territory().zone(),
        location.territory().region(),
        location.aetheryte().name(),
        location.aetheryte().order(),
        location.ward().map_or(String::new(), |w| w.to_string()),
        location.plot().map_or(String::new(), |p| p.to_string()),
    )
}

/// JSON shape for one exported location.
#[derive(Debug, Clone, Serialize)]
pub struct LocationJson {
    pub kind: String,
    pub name: String,
    pub long_name: String,
    pub territory: String,
    pub zone: String,
    pub region: String,
    pub aetheryte: String,
    pub order: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ward: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<i32>,
}

impl From<&TeleportLocation> for LocationJson {
    fn from(location: &TeleportLocation) -> Self {
        let room = match location {
            TeleportLocation::Apartment { room, .. } => Some(*room),
            _ => None,
        };
        Self {
            kind: location.kind().to_string(),
            name: location.name().to_string(),
            long_name: location.long_name().to_string(),
            territory: location.territory().name().to_string(),
            zone: location.territory().zone().to_string(),
            region: location.territory().region().to_string(),
            aetheryte: location.aetheryte().name().to_string(),
            order: location.aetheryte().order(),
            ward: location.ward(),
            plot: location.plot(),
            room,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Aetheryte, Territory, TerritoryUse};

    fn shared() -> TeleportLocation {
        let territory = Territory::new(339, "Mist", "Mist", "La Noscea", TerritoryUse::ResidentialZone);
        let aetheryte = Aetheryte::new(57, "Estate Hall (Private)", "", false, -1, territory.clone(), 2);
        TeleportLocation::shared_house(aetheryte, territory, 4, 8)
    }

    #[test]
    fn test_tsv_row_matches_header_arity() {
        let header_fields = format_tsv_header().split('\t').count();
        let row_fields = format_tsv_row(&shared()).split('\t').count();
        assert_eq!(header_fields, row_fields);
    }

    #[test]
    fn test_tsv_row_content() {
        let row = format_tsv_row(&shared());
        assert!(row.starts_with("Shared House\t"));
        assert!(row.ends_with("\t4\t8"));
    }

    #[test]
    fn test_json_row() {
        let json = LocationJson::from(&shared());
        assert_eq!(json.kind, "Shared House");
        assert_eq!(json.ward, Some(4));
        assert_eq!(json.plot, Some(8));
        assert_eq!(json.room, None);
        assert_eq!(json.territory, "Mist");
    }
}
