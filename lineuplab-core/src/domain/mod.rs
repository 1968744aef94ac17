//! Domain types — at-bat outcomes, players, rosters.

pub mod outcome;
pub mod player;
pub mod roster;

pub use outcome::Outcome;
pub use player::{Player, PlayerError, PlayerGroup};
pub use roster::Roster;
