//! Glue between the [`Carousel`] state machine and the Dioxus runtime.

use dioxus::prelude::*;
use estate_core::carousel::{AUTOPLAY_INTERVAL, REENABLE_DELAY};
use estate_core::{Carousel, Direction, SettleAction};
use estate_ui::{track_class, track_transform};

/// Inline style and class for a carousel track.
pub fn track_attrs<T: Clone>(carousel: &Carousel<T>, visible: usize) -> (String, &'static str) {
    let style = format!(
        "transform: {};",
        track_transform(carousel.translate_percent(visible))
    );
    (style, track_class(carousel.transition_enabled()))
}

/// Card width so that `visible` cards fill the viewport.
pub fn card_style(visible: usize) -> String {
    format!("flex: 0 0 {:.4}%;", 100.0 / visible.max(1) as f64)
}

/// The lit dot. None while the track rests on a clone.
pub fn active_dot<T: Clone>(carousel: &Carousel<T>) -> Option<usize> {
    (0..carousel.len()).find(|&i| carousel.is_active(i))
}

pub fn slide<T: Clone + 'static>(mut carousel: Signal<Carousel<T>>, direction: Direction) {
    carousel.write().advance(direction);
}

/// Handle `transitionend` on the track.
///
/// After a silent jump the transition is switched back on once
/// [`REENABLE_DELAY`] has passed.
pub fn settle<T: Clone + 'static>(mut carousel: Signal<Carousel<T>>) {
    let action = carousel.write().on_slide_settled();
    if action == SettleAction::Repositioned {
        spawn(async move {
            tokio::time::sleep(REENABLE_DELAY).await;
            carousel.write().enable_transition();
        });
    }
}

/// Hook that advances `carousel` every [`AUTOPLAY_INTERVAL`] unless paused.
pub fn use_autoplay<T: Clone + 'static>(mut carousel: Signal<Carousel<T>>) {
    use_future(move || async move {
        loop {
            tokio::time::sleep(AUTOPLAY_INTERVAL).await;
            carousel.write().autoplay_tick();
        }
    });
}
