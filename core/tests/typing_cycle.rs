use folio_core::{Direction, TypingAnimator, TypingDelays};
use proptest::prelude::*;

fn delays() -> TypingDelays {
    TypingDelays {
        type_ms: 90,
        delete_ms: 40,
        pause_full_ms: 1500,
        pause_empty_ms: 300,
    }
}

fn cursor(anim: &TypingAnimator) -> (usize, usize, Direction) {
    (anim.phrase_index(), anim.char_count(), anim.direction())
}

/// Steps needed to type and fully delete a phrase of `len` chars.
fn cycle_len(len: usize) -> usize {
    (2 * len).max(2)
}

#[test]
fn one_cycle_moves_to_next_phrase() {
    let mut anim = TypingAnimator::new(["AB", "CD"], delays()).unwrap();
    assert_eq!(cursor(&anim), (0, 0, Direction::Forward));
    for _ in 0..4 {
        anim.step();
    }
    assert_eq!(cursor(&anim), (1, 0, Direction::Forward));
}

#[test]
fn two_cycles_wrap_to_start() {
    let mut anim = TypingAnimator::new(["AB", "CD"], delays()).unwrap();
    let texts: Vec<String> = (0..8).map(|_| anim.step().text).collect();
    assert_eq!(texts, ["A", "AB", "A", "", "C", "CD", "C", ""]);
    assert_eq!(cursor(&anim), (0, 0, Direction::Forward));
}

#[test]
fn pauses_are_longer_than_character_delays() {
    let d = TypingDelays::default();
    assert!(d.delete_ms < d.type_ms);
    assert!(d.pause_full_ms > d.type_ms);
    assert!(d.pause_empty_ms > d.type_ms);
    assert_ne!(d.pause_full_ms, d.pause_empty_ms);
}

proptest! {
    #[test]
    fn full_rotation_returns_to_start(phrases in prop::collection::vec("[a-zé ]{0,8}", 1..5)) {
        let total: usize = phrases.iter().map(|p| cycle_len(p.chars().count())).sum();
        let mut anim = TypingAnimator::new(phrases.clone(), delays()).unwrap();
        for _ in 0..total {
            anim.step();
        }
        prop_assert_eq!(cursor(&anim), (0, 0, Direction::Forward));
    }

    #[test]
    fn rendered_text_is_always_a_prefix(phrases in prop::collection::vec("[a-zé ]{1,8}", 1..4), steps in 0usize..64) {
        let mut anim = TypingAnimator::new(phrases.clone(), delays()).unwrap();
        for _ in 0..steps {
            let index = anim.phrase_index();
            let step = anim.step();
            prop_assert!(phrases[index].starts_with(&step.text));
        }
    }
}
