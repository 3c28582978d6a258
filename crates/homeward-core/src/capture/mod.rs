//! Captured byte dumps.
//!
//! A capture is a JSON snapshot of everything the engine needs from the
//! host: the two reference tables, the raw teleport list, and optionally the
//! player position and the free-company info blob. Captures make the decode
//! and classification paths reproducible with the game closed.
//!
//! Raw records are stored as hex strings so a capture stays diffable and
//! hand-editable; the version field records which host client build the
//! layout offsets were valid for.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::locate::HousePosition;
use crate::sheet::{AetheryteRow, AetheryteSheet, TerritoryRow, TerritorySheet};
use crate::teleport::TeleportListProvider;

/// One territory row with its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedTerritory {
    pub id: u32,
    #[serde(flatten)]
    pub row: TerritoryRow,
}

/// One aetheryte row with its id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturedAetheryte {
    pub id: u32,
    #[serde(flatten)]
    pub row: AetheryteRow,
}

/// The player's position at capture time.
///
/// Ward and plot are display (1-based) coordinates; an apartment interior
/// carries the host sentinel pair unchanged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CapturedPosition {
    pub territory_id: u32,
    pub ward: i32,
    pub plot: i32,
    pub room: i32,
    #[serde(default)]
    pub is_inside: bool,
    #[serde(default)]
    pub has_permissions: bool,
}

impl HousePosition for CapturedPosition {
    fn territory_id(&self) -> u32 {
        self.territory_id
    }

    fn ward(&self) -> i32 {
        self.ward
    }

    fn plot(&self) -> i32 {
        self.plot
    }

    fn room(&self) -> i32 {
        self.room
    }

    fn is_inside(&self) -> bool {
        self.is_inside
    }

    fn has_permissions(&self) -> bool {
        self.has_permissions
    }
}

/// A full snapshot of the host state this engine consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capture {
    /// Host client version the layout offsets were valid for.
    pub version: String,
    pub captured_at: DateTime<Utc>,
    #[serde(default)]
    pub territories: Vec<CapturedTerritory>,
    #[serde(default)]
    pub aetherytes: Vec<CapturedAetheryte>,
    /// Hex-encoded teleport records, in host list order.
    #[serde(default)]
    pub teleport_list: Vec<String>,
    #[serde(default)]
    pub position: Option<CapturedPosition>,
    /// Hex-encoded free-company info-proxy blob.
    #[serde(default)]
    pub free_company: Option<String>,
}

impl Capture {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let capture: Capture = serde_json::from_str(&content)?;
        info!(
            "loaded capture from {}: version={}, {} territories, {} aetherytes, {} teleport records",
            path.display(),
            capture.version,
            capture.territories.len(),
            capture.aetherytes.len(),
            capture.teleport_list.len()
        );
        Ok(capture)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("saved capture to {}", path.as_ref().display());
        Ok(())
    }

    /// The reference tables, or [`Error::SheetUnavailable`] when one is
    /// missing — nothing downstream is meaningful without both.
    pub fn tables(&self) -> Result<Tables> {
        Tables::from_capture(self)
    }

    /// The raw teleport list as a provider.
    pub fn teleports(&self) -> Result<CapturedTeleportList> {
        let records = self
            .teleport_list
            .iter()
            .map(|entry| parse_hex_record(entry))
            .collect::<Result<Vec<_>>>()?;
        Ok(CapturedTeleportList { records })
    }

    /// The free-company blob bytes, when the capture has one.
    pub fn free_company_bytes(&self) -> Result<Option<Vec<u8>>> {
        self.free_company
            .as_deref()
            .map(parse_hex_record)
            .transpose()
    }
}

/// Parse a hex record string; whitespace between byte pairs is allowed.
pub fn parse_hex_record(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.split_whitespace().collect();
    if compact.len() % 2 != 0 {
        return Err(Error::InvalidHex(format!(
            "odd number of hex digits ({})",
            compact.len()
        )));
    }
    (0..compact.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&compact[i..i + 2], 16)
                .map_err(|e| Error::InvalidHex(format!("'{}': {}", &compact[i..i + 2], e)))
        })
        .collect()
}

/// Format bytes as space-separated hex pairs.
pub fn format_hex_record(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capture-backed reference tables.
#[derive(Debug)]
pub struct Tables {
    territories: HashMap<u32, TerritoryRow>,
    territory_count: u32,
    aetherytes: HashMap<u32, AetheryteRow>,
    aetheryte_count: u32,
}

impl Tables {
    fn from_capture(capture: &Capture) -> Result<Self> {
        if capture.territories.is_empty() {
            return Err(Error::SheetUnavailable("Territory"));
        }
        if capture.aetherytes.is_empty() {
            return Err(Error::SheetUnavailable("Aetheryte"));
        }

        let territories: HashMap<u32, TerritoryRow> = capture
            .territories
            .iter()
            .map(|entry| (entry.id, entry.row.clone()))
            .collect();
        let aetherytes: HashMap<u32, AetheryteRow> = capture
            .aetherytes
            .iter()
            .map(|entry| (entry.id, entry.row.clone()))
            .collect();
        // Captured tables are sparse; the host iterates dense row indices,
        // so the count spans up to the highest captured id.
        let territory_count = territories.keys().max().map_or(0, |max| max + 1);
        let aetheryte_count = aetherytes.keys().max().map_or(0, |max| max + 1);
        debug!(
            "capture tables ready: {} territory rows (count {}), {} aetheryte rows (count {})",
            territories.len(),
            territory_count,
            aetherytes.len(),
            aetheryte_count
        );

        Ok(Self {
            territories,
            territory_count,
            aetherytes,
            aetheryte_count,
        })
    }
}

impl TerritorySheet for Tables {
    fn row(&self, id: u32) -> Option<TerritoryRow> {
        self.territories.get(&id).cloned()
    }

    fn row_count(&self) -> u32 {
        self.territory_count
    }
}

impl AetheryteSheet for Tables {
    fn row(&self, id: u32) -> Option<AetheryteRow> {
        self.aetherytes.get(&id).cloned()
    }

    fn row_count(&self) -> u32 {
        self.aetheryte_count
    }
}

/// Capture-backed teleport list. `update` is a no-op: the list was fixed at
/// capture time.
pub struct CapturedTeleportList {
    records: Vec<Vec<u8>>,
}

impl TeleportListProvider for CapturedTeleportList {
    fn update(&self) -> Result<()> {
        Ok(())
    }

    fn size(&self) -> usize {
        self.records.len()
    }

    fn record(&self, index: usize) -> Result<Vec<u8>> {
        self.records
            .get(index)
            .cloned()
            .ok_or(Error::RecordOutOfRange {
                index,
                size: self.records.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Capture {
        Capture {
            version: "2023.03.24.0000.0000".to_string(),
            captured_at: "2023-03-25T12:42:34Z".parse().unwrap(),
            territories: vec![CapturedTerritory {
                id: 339,
                row: TerritoryRow {
                    place_name: Some("Mist".to_string()),
                    zone_name: Some("Mist".to_string()),
                    region_name: Some("La Noscea".to_string()),
                    intended_use: 13,
                },
            }],
            aetherytes: vec![CapturedAetheryte {
                id: 8,
                row: AetheryteRow {
                    place_name: Some("Limsa Lominsa Aetheryte Plaza".to_string()),
                    aethernet_name: None,
                    territory_id: Some(339),
                    is_aetheryte: true,
                    group: 1,
                    order: 1,
                },
            }],
            teleport_list: vec![format_hex_record(&[0u8; 32])],
            position: Some(CapturedPosition {
                territory_id: 339,
                ward: 4,
                plot: 8,
                room: 0,
                is_inside: false,
                has_permissions: false,
            }),
            free_company: None,
        }
    }

    #[test]
    fn test_parse_hex_record_accepts_spacing() {
        assert_eq!(parse_hex_record("0A0B0C").unwrap(), vec![0x0A, 0x0B, 0x0C]);
        assert_eq!(parse_hex_record("0A 0B 0C").unwrap(), vec![0x0A, 0x0B, 0x0C]);
    }

    #[test]
    fn test_parse_hex_record_rejects_bad_input() {
        assert!(parse_hex_record("0A0").is_err());
        assert!(parse_hex_record("ZZ").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let bytes = vec![0x00, 0x7F, 0xFF];
        assert_eq!(parse_hex_record(&format_hex_record(&bytes)).unwrap(), bytes);
    }

    #[test]
    fn test_capture_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.json");

        let capture = sample();
        capture.save(&path).unwrap();
        let loaded = Capture::load(&path).unwrap();

        assert_eq!(loaded.version, capture.version);
        assert_eq!(loaded.territories.len(), 1);
        assert_eq!(loaded.territories[0].row.place_name.as_deref(), Some("Mist"));
        assert_eq!(loaded.teleport_list.len(), 1);
        assert_eq!(loaded.position.unwrap().ward, 4);
    }

    #[test]
    fn test_tables_require_both_sheets() {
        let mut capture = sample();
        capture.aetherytes.clear();
        let err = capture.tables().unwrap_err();
        assert!(matches!(err, Error::SheetUnavailable("Aetheryte")));

        let mut capture = sample();
        capture.territories.clear();
        let err = capture.tables().unwrap_err();
        assert!(matches!(err, Error::SheetUnavailable("Territory")));
    }

    #[test]
    fn test_table_row_count_spans_highest_id() {
        let tables = sample().tables().unwrap();
        assert_eq!(TerritorySheet::row_count(&tables), 340);
        assert_eq!(AetheryteSheet::row_count(&tables), 9);
        assert!(TerritorySheet::row(&tables, 339).is_some());
        assert!(TerritorySheet::row(&tables, 100).is_none());
    }

    #[test]
    fn test_captured_teleport_list_provider() {
        let teleports = sample().teleports().unwrap();
        assert_eq!(teleports.size(), 1);
        assert_eq!(teleports.record(0).unwrap().len(), 32);
        assert!(teleports.record(1).is_err());
        assert!(teleports.update().is_ok());
    }
}
