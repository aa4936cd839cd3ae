//! Typed CLI value types.

pub mod ids;
pub mod roster;
pub mod time;

pub use ids::PlayerId;
pub use roster::RosterSpot;
pub use time::Season;
