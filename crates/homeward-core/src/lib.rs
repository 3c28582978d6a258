//! # homeward-core
//!
//! Decode-and-classify engine for the host game's housing teleport data.
//!
//! This crate provides:
//! - Fixed-offset decoders for the host's raw records (teleport list
//!   entries, free-company info proxy)
//! - Memoizing caches over the row-indexed reference tables (territories,
//!   aetherytes)
//! - Classification of teleport records into location kinds and of the
//!   player's position into a semantic house
//! - Capture files: JSON byte dumps that replay all of the above with the
//!   game closed
//!
//! The host itself is never touched directly; every collaborator is an
//! injected trait (`TerritorySheet`, `AetheryteSheet`,
//! `TeleportListProvider`, `HousePosition`), so the engine runs identically
//! against a live adapter, a capture file, or a test fake.

pub mod cache;
pub mod capture;
pub mod decode;
pub mod error;
pub mod export;
pub mod game;
pub mod loc;
pub mod locate;
pub mod memory;
pub mod sheet;
pub mod teleport;

mod homeward;

pub use cache::{AetheryteCache, TerritoryCache};
pub use capture::{
    Capture, CapturedAetheryte, CapturedPosition, CapturedTerritory, CapturedTeleportList,
    Tables, format_hex_record, parse_hex_record,
};
pub use decode::{FreeCompany, TeleportRecord};
pub use error::{Error, Result};
pub use export::{LocationJson, format_tsv_header, format_tsv_row};
pub use game::{
    Aetheryte, CurrentHouse, GrandCompany, LocationInfo, TeleportLocation, Territory,
    TerritoryUse,
};
pub use homeward::Homeward;
pub use loc::{Loc, LocalizedMessage, MessageList, MessageReader};
pub use locate::{
    APARTMENT_PLOT, APARTMENT_WARD, HouseLocator, HousePosition, display_plot, display_ward,
};
pub use sheet::{AetheryteRow, AetheryteSheet, TerritoryRow, TerritorySheet};
pub use teleport::{
    ESTATE_HALL_FREE_COMPANY, ESTATE_HALL_PRIVATE, TeleportListProvider, TeleportLocations,
};
