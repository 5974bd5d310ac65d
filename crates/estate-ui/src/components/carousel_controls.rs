//! Carousel navigation chrome: prev/next arrows and the dot row.

use dioxus::prelude::*;
use estate_core::Direction;

use super::button::{Button, ButtonVariant};

/// Glyph and accessible label for an arrow button.
pub fn arrow_glyph(direction: Direction) -> (&'static str, &'static str) {
    match direction {
        Direction::Prev => ("\u{2039}", "Previous"),
        Direction::Next => ("\u{203A}", "Next"),
    }
}

/// CSS `transform` value for a track at `percent` offset.
pub fn track_transform(percent: f64) -> String {
    format!("translateX(-{percent:.4}%)")
}

/// Track class; the `no-transition` modifier hides a silent jump.
pub fn track_class(transition_enabled: bool) -> &'static str {
    if transition_enabled {
        "carousel-track"
    } else {
        "carousel-track no-transition"
    }
}

#[component]
pub fn CarouselArrow(direction: Direction, onclick: EventHandler<Direction>) -> Element {
    let (glyph, label) = arrow_glyph(direction);
    let side = match direction {
        Direction::Prev => "carousel-arrow carousel-arrow--prev",
        Direction::Next => "carousel-arrow carousel-arrow--next",
    };

    rsx! {
        Button {
            variant: ButtonVariant::Round,
            class: side.to_string(),
            aria_label: label.to_string(),
            onclick: move |_| onclick.call(direction),
            "{glyph}"
        }
    }
}

/// Properties for the CarouselDots component
#[derive(Clone, PartialEq, Props)]
pub struct CarouselDotsProps {
    /// Number of real items
    pub count: usize,
    /// Index of the lit dot, if any
    pub active: Option<usize>,
    /// Called with the chosen real index
    pub onselect: EventHandler<usize>,
}

/// One dot per real item; exactly the displayed one is lit.
#[component]
pub fn CarouselDots(props: CarouselDotsProps) -> Element {
    rsx! {
        div { class: "carousel-dots", role: "tablist",
            for i in 0..props.count {
                button {
                    key: "{i}",
                    class: if props.active == Some(i) { "carousel-dot active" } else { "carousel-dot" },
                    "aria-label": "Go to slide {i + 1}",
                    "aria-selected": props.active == Some(i),
                    onclick: move |_| props.onselect.call(i),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_have_labels() {
        assert_eq!(arrow_glyph(Direction::Prev).1, "Previous");
        assert_eq!(arrow_glyph(Direction::Next).1, "Next");
    }

    #[test]
    fn transform_formatting() {
        assert_eq!(track_transform(0.0), "translateX(-0.0000%)");
        assert_eq!(track_transform(50.0), "translateX(-50.0000%)");
    }

    #[test]
    fn track_class_toggles() {
        assert_eq!(track_class(true), "carousel-track");
        assert_eq!(track_class(false), "carousel-track no-transition");
    }
}
