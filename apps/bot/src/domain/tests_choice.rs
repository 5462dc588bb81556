use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::choice::{beats, shuffled_options, Choice, Outcome, CATALOG};

#[test]
fn identity_is_always_a_tie() {
    for c in CATALOG {
        assert_eq!(beats(c, c), Outcome::Tie);
    }
}

#[test]
fn relation_is_total_and_antisymmetric() {
    for a in CATALOG {
        for b in CATALOG {
            if a == b {
                continue;
            }
            // Exactly one direction wins for every distinct pair.
            match beats(a, b) {
                Outcome::Win => assert_eq!(beats(b, a), Outcome::Lose, "{a:?} vs {b:?}"),
                Outcome::Lose => assert_eq!(beats(b, a), Outcome::Win, "{a:?} vs {b:?}"),
                Outcome::Tie => panic!("distinct pair {a:?}/{b:?} must not tie"),
            }
        }
    }
}

#[test]
fn every_choice_wins_and_loses_twice() {
    for a in CATALOG {
        let wins = CATALOG
            .into_iter()
            .filter(|&b| beats(a, b) == Outcome::Win)
            .count();
        let losses = CATALOG
            .into_iter()
            .filter(|&b| beats(a, b) == Outcome::Lose)
            .count();
        assert_eq!(wins, 2, "{a:?} should defeat exactly two entries");
        assert_eq!(losses, 2, "{a:?} should lose to exactly two entries");
    }
}

#[test]
fn classic_pairs_hold() {
    assert_eq!(beats(Choice::Rock, Choice::Scissors), Outcome::Win);
    assert_eq!(beats(Choice::Scissors, Choice::Paper), Outcome::Win);
    assert_eq!(beats(Choice::Paper, Choice::Rock), Outcome::Win);
}

#[test]
fn ids_round_trip_through_parse() {
    for c in CATALOG {
        assert_eq!(Choice::parse(c.id()).unwrap(), c);
    }
    assert!(Choice::parse("banana").is_err());
}

#[test]
fn wire_ids_match_serde_representation() {
    for c in CATALOG {
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, format!("\"{}\"", c.id()));
    }
}

#[test]
fn shuffle_is_deterministic_for_a_seeded_rng() {
    let mut a = ChaCha8Rng::seed_from_u64(7);
    let mut b = ChaCha8Rng::seed_from_u64(7);
    assert_eq!(shuffled_options(&mut a), shuffled_options(&mut b));
}

#[test]
fn shuffle_preserves_the_catalog_and_varies_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut seen_orders = std::collections::HashSet::new();
    for _ in 0..20 {
        let options = shuffled_options(&mut rng);
        assert_eq!(options.len(), CATALOG.len());
        for c in CATALOG {
            assert!(options.contains(&c));
        }
        seen_orders.insert(options);
    }
    // 20 draws of 120 permutations collapsing to one would mean the
    // shuffle is not shuffling.
    assert!(seen_orders.len() > 1);
}
