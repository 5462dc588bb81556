use crate::domain::choice::{Choice, Outcome};
use crate::domain::resolve::resolve;
use crate::domain::session::Participant;

#[test]
fn rock_beats_scissors_for_the_challenger() {
    let challenger = Participant::with_choice("U1", Choice::Rock);
    let responder = Participant::with_choice("U2", Choice::Scissors);

    let resolution = resolve(&challenger, &responder).unwrap();
    assert_eq!(resolution.outcome, Outcome::Win);
    assert!(resolution.narrative.contains("U1"));
    assert!(resolution.narrative.contains("U2"));
    assert!(resolution.narrative.contains("Rock crushes"));
    assert!(resolution.narrative.contains("Scissors"));
}

#[test]
fn matching_paper_is_a_tie() {
    let challenger = Participant::with_choice("U1", Choice::Paper);
    let responder = Participant::with_choice("U2", Choice::Paper);

    let resolution = resolve(&challenger, &responder).unwrap();
    assert_eq!(resolution.outcome, Outcome::Tie);
    assert!(resolution.narrative.contains("tie"));
    assert!(resolution.narrative.contains("U1"));
    assert!(resolution.narrative.contains("U2"));
}

#[test]
fn loss_is_narrated_from_the_responder_as_winner() {
    let challenger = Participant::with_choice("U1", Choice::Paper);
    let responder = Participant::with_choice("U2", Choice::Scissors);

    let resolution = resolve(&challenger, &responder).unwrap();
    assert_eq!(resolution.outcome, Outcome::Lose);
    assert!(resolution.narrative.contains("<@U2> wins!"));
}

#[test]
fn identical_inputs_yield_identical_narratives() {
    let challenger = Participant::with_choice("U1", Choice::Spock);
    let responder = Participant::with_choice("U2", Choice::Lizard);

    let first = resolve(&challenger, &responder).unwrap();
    let second = resolve(&challenger, &responder).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_choice_fails_fast() {
    let challenger = Participant {
        id: "U1".into(),
        choice: None,
    };
    let responder = Participant::with_choice("U2", Choice::Rock);

    assert!(resolve(&challenger, &responder).is_err());
    assert!(resolve(&responder, &challenger).is_err());
}
