use crate::decode::{check_len, string_at, u16_at, u64_at};
use crate::error::Result;
use crate::game::GrandCompany;
use crate::memory::layout::free_company as layout;

/// Free-company identity decoded from the host's info proxy record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FreeCompany {
    pub id: u64,
    pub home_world: u16,
    pub grand_company: GrandCompany,
    pub rank: u8,
    pub crest: u64,
    pub online_members: u16,
    pub total_members: u16,
    pub name: String,
    pub master: String,
}

impl FreeCompany {
    pub const SIZE: usize = layout::RECORD_SIZE;

    /// Decode the info proxy record from a raw byte block.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        check_len("free company", bytes, Self::SIZE)?;
        Ok(Self {
            id: u64_at(bytes, layout::ID),
            home_world: u16_at(bytes, layout::HOME_WORLD),
            grand_company: GrandCompany::from_u8(bytes[layout::GRAND_COMPANY])
                .unwrap_or_default(),
            rank: bytes[layout::RANK],
            crest: u64_at(bytes, layout::CREST),
            online_members: u16_at(bytes, layout::ONLINE_MEMBERS),
            total_members: u16_at(bytes, layout::TOTAL_MEMBERS),
            name: string_at(bytes, layout::NAME, layout::NAME_LEN),
            master: string_at(bytes, layout::MASTER, layout::MASTER_LEN),
        })
    }
}
