//! Property-based tests for the infinite carousel and form validation
//!
//! Uses proptest to check the wrap-around invariants for arbitrary list
//! sizes and navigation sequences.

use estate_core::carousel::{Carousel, Direction, SettleAction};
use estate_core::contact::{validate, ContactField, ContactFields};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn items_strategy() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(any::<u32>(), 1..40)
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Prev), Just(Direction::Next)]
}

/// Advance and settle, the way the UI drives the carousel.
fn step(carousel: &mut Carousel<u32>, direction: Direction) {
    carousel.advance(direction);
    if carousel.on_slide_settled() == SettleAction::Repositioned {
        carousel.enable_transition();
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The padded list is the source plus one clone at each end
    #[test]
    fn extended_layout(items in items_strategy()) {
        let n = items.len();
        let carousel = Carousel::new(items.clone());
        let extended = carousel.extended_items();

        prop_assert_eq!(extended.len(), n + 2);
        prop_assert_eq!(extended[0], items[n - 1]);
        prop_assert_eq!(extended[n + 1], items[0]);
        prop_assert_eq!(&extended[1..=n], &items[..]);
    }

    /// Walking forward past the end lands back on the first real item
    #[test]
    fn forward_wrap_lands_on_first(items in items_strategy()) {
        let n = items.len();
        let mut carousel = Carousel::new(items.clone());

        for _ in 0..n {
            carousel.advance(Direction::Next);
        }
        prop_assert_eq!(carousel.current_index(), carousel.extended_items().len() as isize - 1);
        prop_assert_eq!(carousel.on_slide_settled(), SettleAction::Repositioned);
        prop_assert_eq!(carousel.current_index(), 1);
        prop_assert_eq!(carousel.displayed_item(), Some(&items[0]));
    }

    /// Stepping back from the first item lands on the last real item
    #[test]
    fn backward_wrap_lands_on_last(items in items_strategy()) {
        let n = items.len();
        let mut carousel = Carousel::new(items.clone());

        carousel.advance(Direction::Prev);
        prop_assert_eq!(carousel.current_index(), 0);
        prop_assert_eq!(carousel.on_slide_settled(), SettleAction::Repositioned);
        prop_assert_eq!(carousel.current_index(), carousel.extended_items().len() as isize - 2);
        prop_assert_eq!(carousel.displayed_item(), Some(&items[n - 1]));
    }

    /// After any settled navigation the index is on a real item and the
    /// displayed item matches a modular walk over the source list
    #[test]
    fn settled_index_tracks_modular_position(
        items in items_strategy(),
        moves in prop::collection::vec(direction_strategy(), 0..200),
    ) {
        let n = items.len() as isize;
        let mut carousel = Carousel::new(items.clone());
        let mut expected: isize = 0;

        for direction in moves {
            step(&mut carousel, direction);
            expected = (expected + direction.step()).rem_euclid(n);

            prop_assert!(carousel.current_index() >= 1);
            prop_assert!(carousel.current_index() <= n);
            prop_assert!(carousel.transition_enabled());
            prop_assert_eq!(carousel.displayed_item(), Some(&items[expected as usize]));
            prop_assert!(carousel.is_active(expected as usize));
        }
    }

    /// Clicks that arrive before the slide settles never leave the padded list
    #[test]
    fn unsettled_moves_stay_in_bounds(
        items in items_strategy(),
        moves in prop::collection::vec(direction_strategy(), 0..50),
    ) {
        let mut carousel = Carousel::new(items);
        let last = carousel.extended_items().len() as isize - 1;

        for direction in moves {
            carousel.advance(direction);
            prop_assert!((0..=last).contains(&carousel.current_index()));
        }
        carousel.on_slide_settled();
        prop_assert!(carousel.displayed_item().is_some());
        prop_assert!((1..last).contains(&carousel.current_index()));
    }

    /// go_to always lights exactly the chosen dot
    #[test]
    fn go_to_lights_one_dot(items in items_strategy(), pick in any::<prop::sample::Index>()) {
        let mut carousel = Carousel::new(items.clone());
        let target = pick.index(items.len());
        carousel.go_to(target);

        let lit: Vec<usize> = (0..items.len()).filter(|&i| carousel.is_active(i)).collect();
        prop_assert_eq!(lit, vec![target]);
    }

    /// Ten digits with arbitrary interior spaces always pass the phone check
    #[test]
    fn spaced_ten_digit_phones_pass(
        digits in "[0-9]{10}",
        spaces in prop::collection::vec(0usize..3, 10),
    ) {
        let phone: String = digits
            .chars()
            .zip(spaces)
            .flat_map(|(d, s)| std::iter::once(d).chain(std::iter::repeat(' ').take(s)))
            .collect();
        let fields = ContactFields {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone_number: phone,
            ..Default::default()
        };
        prop_assert!(validate(&fields).is_empty());
    }

    /// Any digit count other than ten is rejected
    #[test]
    fn wrong_length_phones_fail(digits in "[0-9]{1,20}") {
        prop_assume!(digits.len() != 10);
        let fields = ContactFields {
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            phone_number: digits,
            ..Default::default()
        };
        let errors = validate(&fields);
        prop_assert_eq!(
            errors.get(&ContactField::PhoneNumber).map(String::as_str),
            Some("Please enter a valid 10-digit phone number")
        );
    }
}
