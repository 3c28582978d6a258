use std::fmt;

use crate::game::{Territory, UNKNOWN_NAME};

/// Placeholder used when the host row has no aethernet name.
pub const UNKNOWN_AETHERNET_NAME: &str = "?[aethernetName]?";

/// A named teleport waypoint in the game world.
#[derive(Debug, Clone)]
pub struct Aetheryte {
    id: u32,
    name: String,
    aethernet_name: String,
    is_main: bool,
    group: i32,
    territory: Territory,
    order: u32,
}

impl Aetheryte {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        aethernet_name: impl Into<String>,
        is_main: bool,
        group: i32,
        territory: Territory,
        order: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            aethernet_name: aethernet_name.into(),
            is_main,
            group,
            territory,
            order,
        }
    }

    /// The sentinel returned for missing rows.
    pub fn empty() -> Self {
        Self::new(
            0,
            UNKNOWN_NAME,
            UNKNOWN_AETHERNET_NAME,
            false,
            -1,
            Territory::empty(),
            u32::MAX,
        )
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aethernet_name(&self) -> &str {
        &self.aethernet_name
    }

    /// Whether this is a full aetheryte rather than an aethernet shard.
    pub fn is_main(&self) -> bool {
        self.is_main
    }

    pub fn group(&self) -> i32 {
        self.group
    }

    pub fn territory(&self) -> &Territory {
        &self.territory
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    /// The name qualified by its territory, when the territory is known.
    pub fn long_name(&self) -> String {
        if self.territory.is_empty() {
            self.name.clone()
        } else {
            format!("{} in {}", self.name, self.territory.name())
        }
    }
}

impl fmt::Display for Aetheryte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.long_name())
    }
}
