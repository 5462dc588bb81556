//! Choice catalog: the fixed option set and its win/lose/tie relation.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// Result of comparing two choices, always from the first choice's
/// perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

/// A selectable game option.
///
/// The wire id is the lowercase variant name (`"rock"`, `"spock"`, ...);
/// it appears in select-menu option values and command payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

/// Every catalog entry, in canonical order.
pub const CATALOG: [Choice; 5] = [
    Choice::Rock,
    Choice::Paper,
    Choice::Scissors,
    Choice::Lizard,
    Choice::Spock,
];

impl Choice {
    /// Wire id, stable across releases.
    pub fn id(self) -> &'static str {
        match self {
            Choice::Rock => "rock",
            Choice::Paper => "paper",
            Choice::Scissors => "scissors",
            Choice::Lizard => "lizard",
            Choice::Spock => "spock",
        }
    }

    /// Human-readable label used in messages and select options.
    pub fn label(self) -> &'static str {
        match self {
            Choice::Rock => "Rock",
            Choice::Paper => "Paper",
            Choice::Scissors => "Scissors",
            Choice::Lizard => "Lizard",
            Choice::Spock => "Spock",
        }
    }

    /// Parse a wire id back into a catalog entry.
    pub fn parse(id: &str) -> Result<Self, DomainError> {
        CATALOG
            .into_iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| DomainError::invalid_choice(format!("unknown choice id {id:?}")))
    }

    /// Verb describing how `self` defeats `other`. Only meaningful for
    /// winning pairs; any other pair falls back to a neutral "beats".
    pub fn takedown(self, other: Choice) -> &'static str {
        match (self, other) {
            (Choice::Rock, Choice::Scissors) => "crushes",
            (Choice::Rock, Choice::Lizard) => "crushes",
            (Choice::Paper, Choice::Rock) => "covers",
            (Choice::Paper, Choice::Spock) => "disproves",
            (Choice::Scissors, Choice::Paper) => "cuts",
            (Choice::Scissors, Choice::Lizard) => "decapitates",
            (Choice::Lizard, Choice::Paper) => "eats",
            (Choice::Lizard, Choice::Spock) => "poisons",
            (Choice::Spock, Choice::Rock) => "vaporizes",
            (Choice::Spock, Choice::Scissors) => "smashes",
            _ => "beats",
        }
    }

    /// The two entries this choice defeats.
    fn defeats(self) -> [Choice; 2] {
        match self {
            Choice::Rock => [Choice::Scissors, Choice::Lizard],
            Choice::Paper => [Choice::Rock, Choice::Spock],
            Choice::Scissors => [Choice::Paper, Choice::Lizard],
            Choice::Lizard => [Choice::Paper, Choice::Spock],
            Choice::Spock => [Choice::Rock, Choice::Scissors],
        }
    }
}

/// Win/lose/tie relation over the catalog, from `a`'s perspective.
///
/// Total and antisymmetric: `beats(a, b) == Win` exactly when
/// `beats(b, a) == Lose`, and `beats(a, a) == Tie`.
pub fn beats(a: Choice, b: Choice) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a.defeats().contains(&b) {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Catalog entries in a freshly randomized order.
///
/// The responder's select menu is rebuilt from this on every prompt so the
/// option ordering carries no information. The RNG is caller-supplied so
/// tests can pass a seeded generator.
pub fn shuffled_options<R: Rng + ?Sized>(rng: &mut R) -> Vec<Choice> {
    let mut options = CATALOG.to_vec();
    options.shuffle(rng);
    options
}
