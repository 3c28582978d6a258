//! Memoizing caches over the reference data sheets.
//!
//! Both caches are append-only maps from row id to an immutable domain
//! object, populated on demand and kept for the life of the process. The
//! tables are small (well under 1500 rows each), so there is no eviction.
//!
//! Access is single-threaded; the `RefCell` interior mutability lets `get`
//! memoize behind a shared reference. Any future multi-threaded use must put
//! a mutex around each cache, since check-then-insert is not atomic.

mod aetheryte;
mod territory;

pub use aetheryte::AetheryteCache;
pub use territory::TerritoryCache;
