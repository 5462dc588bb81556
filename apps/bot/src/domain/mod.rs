//! Domain layer: pure game logic types and helpers.

pub mod choice;
pub mod resolve;
pub mod session;

pub use choice::{beats, shuffled_options, Choice, Outcome, CATALOG};
pub use resolve::{resolve, Resolution};
pub use session::{Participant, Session};

#[cfg(test)]
mod tests_choice;
#[cfg(test)]
mod tests_resolve;
