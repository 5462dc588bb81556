//! Service layer: the session lifecycle controller and background tasks.

pub mod duels;
pub mod sweeper;

pub use duels::DuelFlow;
