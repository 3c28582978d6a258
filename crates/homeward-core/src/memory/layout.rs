//! Memory layout constants for the host's housing data structures
//!
//! This module centralizes the byte offsets used to decode raw host records.
//! The offsets are reverse-engineered against a single host client version;
//! the record format carries no version marker of its own, so the version tag
//! travels with each capture instead (see `capture`).

/// Memory layout constants for one teleport list entry
pub mod teleport {
    /// Size of one teleport record
    pub const RECORD_SIZE: usize = 32;

    /// Aetheryte id (u32)
    pub const AETHERYTE_ID: usize = 0x00;
    /// Teleport cost in gil (u32)
    pub const GIL_COST: usize = 0x04;
    /// Territory id of the destination (u16)
    pub const TERRITORY_ID: usize = 0x08;
    /// Plot index, zero-based (u8)
    pub const PLOT: usize = 0x0A;
    /// Ward index, zero-based (u8)
    pub const WARD: usize = 0x0B;
    /// Ward index of a shared house, zero-based; 0 unless shared (u8)
    pub const SHARED_WARD: usize = 0x0C;
    /// Plot index of a shared house, zero-based; 0 unless shared (u8)
    pub const SHARED_PLOT: usize = 0x0D;
    /// Sub-index; 128 marks an apartment entry (u8)
    pub const SUB_INDEX: usize = 0x0E;
    /// Favourite flag (u8)
    pub const FAVOURITE: usize = 0x0F;

    /// Sub-index value the host uses for apartment entries
    pub const APARTMENT_SUB_INDEX: u8 = 128;
}

/// Memory layout constants for the free-company info proxy
pub mod free_company {
    /// Size of the info proxy record
    pub const RECORD_SIZE: usize = 0x6E8;

    /// Free company id (u64)
    pub const ID: usize = 0x30;
    /// Home world id (u16)
    pub const HOME_WORLD: usize = 0x46;
    /// Grand company allegiance (u8)
    pub const GRAND_COMPANY: usize = 0x69;
    /// Rank (u8)
    pub const RANK: usize = 0x6B;
    /// Crest id (u64)
    pub const CREST: usize = 0x70;
    /// Members currently online (u16)
    pub const ONLINE_MEMBERS: usize = 0x78;
    /// Total members (u16)
    pub const TOTAL_MEMBERS: usize = 0x7A;
    /// Company name, NUL-terminated (22 bytes)
    pub const NAME: usize = 0x7C;
    pub const NAME_LEN: usize = 22;
    /// Company master name, NUL-terminated (60 bytes)
    pub const MASTER: usize = 0x93;
    pub const MASTER_LEN: usize = 60;
}
