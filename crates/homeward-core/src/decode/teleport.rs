use crate::decode::{check_len, u16_at, u32_at};
use crate::error::Result;
use crate::memory::layout::teleport as layout;

/// One decoded entry of the host's teleport list.
///
/// Ward and plot indices are stored zero-based by the host; the accessors
/// return display (1-based) coordinates. The shared ward/plot pair is only
/// meaningful for shared-house entries, where the host leaves it non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeleportRecord {
    pub aetheryte_id: u32,
    pub gil_cost: u32,
    pub territory_id: u16,
    plot: u8,
    ward: u8,
    shared_ward: u8,
    shared_plot: u8,
    sub_index: u8,
    favourite: u8,
}

impl TeleportRecord {
    pub const SIZE: usize = layout::RECORD_SIZE;

    /// Decode one record from a raw byte block.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        check_len("teleport", bytes, Self::SIZE)?;
        Ok(Self {
            aetheryte_id: u32_at(bytes, layout::AETHERYTE_ID),
            gil_cost: u32_at(bytes, layout::GIL_COST),
            territory_id: u16_at(bytes, layout::TERRITORY_ID),
            plot: bytes[layout::PLOT],
            ward: bytes[layout::WARD],
            shared_ward: bytes[layout::SHARED_WARD],
            shared_plot: bytes[layout::SHARED_PLOT],
            sub_index: bytes[layout::SUB_INDEX],
            favourite: bytes[layout::FAVOURITE],
        })
    }

    /// Ward in display coordinates.
    pub fn ward(&self) -> i32 {
        self.ward as i32 + 1
    }

    /// Plot in display coordinates.
    pub fn plot(&self) -> i32 {
        self.plot as i32 + 1
    }

    /// Shared-house ward in display coordinates.
    pub fn shared_ward(&self) -> i32 {
        self.shared_ward as i32 + 1
    }

    /// Shared-house plot in display coordinates.
    pub fn shared_plot(&self) -> i32 {
        self.shared_plot as i32 + 1
    }

    pub fn is_shared_house(&self) -> bool {
        self.shared_ward != 0 && self.shared_plot != 0
    }

    pub fn is_apartment(&self) -> bool {
        self.sub_index == layout::APARTMENT_SUB_INDEX && !self.is_shared_house()
    }

    pub fn is_favourite(&self) -> bool {
        self.favourite != 0
    }
}
