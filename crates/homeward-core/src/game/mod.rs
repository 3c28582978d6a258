mod aetheryte;
mod enums;
mod location;
mod territory;

pub use aetheryte::*;
pub use enums::*;
pub use location::*;
pub use territory::*;
