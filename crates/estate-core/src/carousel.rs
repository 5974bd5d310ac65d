//! Infinite carousel state machine.
//!
//! The source list is padded with a clone of its last item in front and a
//! clone of its first item at the back:
//!
//! ```text
//! items:     [A, B, C]
//! extended:  [C, A, B, C, A]
//!             0  1  2  3  4
//! ```
//!
//! Sliding onto either clone is animated normally. When the slide settles
//! on a clone, the carousel disables its transition, jumps to the real item
//! the clone mirrors and asks the UI to re-enable the transition after
//! [`REENABLE_DELAY`]. The jump is therefore invisible and the loop looks
//! endless in both directions.

use std::time::Duration;

/// Delay before transitions are switched back on after a silent jump.
pub const REENABLE_DELAY: Duration = Duration::from_millis(50);

/// Interval between automatic forward slides for autoplaying carousels.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);

/// Slide direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// What the UI must do after [`Carousel::on_slide_settled`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettleAction {
    /// Nothing to correct
    None,
    /// Index jumped with transitions off; call
    /// [`Carousel::enable_transition`] after [`REENABLE_DELAY`]
    Repositioned,
}

/// Number of cards visible at once for a viewport width in CSS pixels.
pub fn visible_cards(viewport_width: f64) -> usize {
    if viewport_width < 640.0 {
        1
    } else if viewport_width < 1024.0 {
        2
    } else {
        3
    }
}

/// Wrap-around sliding window over an ordered list of cards.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel<T> {
    items: Vec<T>,
    extended: Vec<T>,
    current_index: isize,
    transition_enabled: bool,
    paused: bool,
}

impl<T: Clone> Default for Carousel<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Clone> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        let mut carousel = Self {
            items: Vec::new(),
            extended: Vec::new(),
            current_index: 1,
            transition_enabled: true,
            paused: false,
        };
        carousel.set_items(items);
        carousel
    }

    /// Replace the source list and rebuild the padded sequence.
    ///
    /// Resets to the first real item with transitions enabled.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.extended = match (items.first(), items.last()) {
            (Some(first), Some(last)) => {
                let mut extended = Vec::with_capacity(items.len() + 2);
                extended.push(last.clone());
                extended.extend(items.iter().cloned());
                extended.push(first.clone());
                extended
            }
            _ => Vec::new(),
        };
        self.items = items;
        self.current_index = 1;
        self.transition_enabled = true;
    }
}

impl<T> Carousel<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Source list padded with boundary clones (empty when there are no items).
    pub fn extended_items(&self) -> &[T] {
        &self.extended
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extended.is_empty()
    }

    /// Position in the padded sequence.
    pub fn current_index(&self) -> isize {
        self.current_index
    }

    pub fn transition_enabled(&self) -> bool {
        self.transition_enabled
    }

    /// Move one slot. The index may step onto a boundary clone but never
    /// past it; a move that would leave the padded sequence is ignored until
    /// [`Carousel::on_slide_settled`] has repositioned.
    pub fn advance(&mut self, direction: Direction) -> bool {
        let next = self.current_index + direction.step();
        if next < 0 || next >= self.extended.len() as isize {
            return false;
        }
        self.current_index = next;
        true
    }

    /// Correct the position once a slide animation has finished.
    pub fn on_slide_settled(&mut self) -> SettleAction {
        if self.is_empty() {
            return SettleAction::None;
        }
        let last = self.extended.len() as isize - 1;
        let target = if self.current_index == 0 {
            last - 1
        } else if self.current_index == last {
            1
        } else {
            return SettleAction::None;
        };

        tracing::debug!(
            "Carousel settled on clone {}, jumping to {}",
            self.current_index,
            target
        );
        self.transition_enabled = false;
        self.current_index = target;
        SettleAction::Repositioned
    }

    /// Switch animations back on after a silent jump.
    pub fn enable_transition(&mut self) {
        self.transition_enabled = true;
    }

    /// Jump to a real item by its 0-based index. Out-of-range indices are ignored.
    pub fn go_to(&mut self, real_index: usize) {
        if real_index >= self.items.len() {
            return;
        }
        self.current_index = real_index as isize + 1;
    }

    /// Whether the indicator dot for real item `real_index` is lit.
    pub fn is_active(&self, real_index: usize) -> bool {
        self.current_index - 1 == real_index as isize
    }

    /// Real item currently shown in the leading slot.
    pub fn displayed_index(&self) -> Option<usize> {
        let n = self.items.len() as isize;
        if n == 0 {
            return None;
        }
        Some((self.current_index - 1).rem_euclid(n) as usize)
    }

    pub fn displayed_item(&self) -> Option<&T> {
        self.displayed_index().map(|i| &self.items[i])
    }

    /// Horizontal offset of the track, as a percentage of the viewport.
    pub fn translate_percent(&self, visible: usize) -> f64 {
        let visible = visible.max(1) as f64;
        self.current_index as f64 * 100.0 / visible
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause or resume autoplay (e.g. while the pointer hovers the viewport).
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// One autoplay step. Returns whether the carousel moved.
    pub fn autoplay_tick(&mut self) -> bool {
        if self.paused || self.is_empty() {
            return false;
        }
        self.advance(Direction::Next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Carousel<char> {
        Carousel::new(vec!['A', 'B', 'C'])
    }

    #[test]
    fn extended_layout() {
        let carousel = abc();
        assert_eq!(carousel.extended_items(), &['C', 'A', 'B', 'C', 'A']);
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.transition_enabled());
        assert_eq!(carousel.displayed_item(), Some(&'A'));
    }

    #[test]
    fn forward_wrap() {
        let mut carousel = abc();
        for _ in 0..3 {
            carousel.advance(Direction::Next);
            if carousel.current_index() < 4 {
                assert_eq!(carousel.on_slide_settled(), SettleAction::None);
            }
        }
        assert_eq!(carousel.current_index(), 4);
        assert_eq!(carousel.on_slide_settled(), SettleAction::Repositioned);
        assert_eq!(carousel.current_index(), 1);
        assert!(!carousel.transition_enabled());
        assert_eq!(carousel.displayed_item(), Some(&'A'));

        carousel.enable_transition();
        assert!(carousel.transition_enabled());
    }

    #[test]
    fn backward_wrap() {
        let mut carousel = abc();
        carousel.advance(Direction::Prev);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.displayed_item(), Some(&'C'));

        assert_eq!(carousel.on_slide_settled(), SettleAction::Repositioned);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.displayed_item(), Some(&'C'));
    }

    #[test]
    fn advance_stops_at_trailing_clone_until_settled() {
        let mut carousel = abc();
        carousel.go_to(2);
        assert!(carousel.advance(Direction::Next));
        assert!(!carousel.advance(Direction::Next));
        assert_eq!(carousel.current_index(), 4);

        assert_eq!(carousel.on_slide_settled(), SettleAction::Repositioned);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.displayed_item(), Some(&'A'));
    }

    #[test]
    fn advance_stops_at_leading_clone_until_settled() {
        let mut carousel = abc();
        assert!(carousel.advance(Direction::Prev));
        assert!(!carousel.advance(Direction::Prev));
        assert_eq!(carousel.current_index(), 0);

        assert_eq!(carousel.on_slide_settled(), SettleAction::Repositioned);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.displayed_item(), Some(&'C'));
    }

    #[test]
    fn single_item_wraps_both_ways() {
        let mut carousel = Carousel::new(vec!["only"]);
        assert_eq!(carousel.extended_items(), &["only", "only", "only"]);

        carousel.advance(Direction::Next);
        assert_eq!(carousel.on_slide_settled(), SettleAction::Repositioned);
        assert_eq!(carousel.current_index(), 1);

        carousel.advance(Direction::Prev);
        assert_eq!(carousel.on_slide_settled(), SettleAction::Repositioned);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn empty_is_inert() {
        let mut carousel: Carousel<u8> = Carousel::default();
        assert!(carousel.is_empty());
        assert!(carousel.extended_items().is_empty());

        carousel.advance(Direction::Next);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.on_slide_settled(), SettleAction::None);
        assert_eq!(carousel.displayed_item(), None);
        assert!(!carousel.autoplay_tick());
    }

    #[test]
    fn go_to_and_dots() {
        let mut carousel = abc();
        carousel.go_to(2);
        assert_eq!(carousel.current_index(), 3);
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(0));

        carousel.go_to(9);
        assert_eq!(carousel.current_index(), 3);
    }

    #[test]
    fn set_items_resets_position() {
        let mut carousel = abc();
        carousel.advance(Direction::Next);
        carousel.advance(Direction::Next);
        carousel.set_items(vec!['X', 'Y']);
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.extended_items(), &['Y', 'X', 'Y', 'X']);
    }

    #[test]
    fn breakpoints() {
        assert_eq!(visible_cards(320.0), 1);
        assert_eq!(visible_cards(639.9), 1);
        assert_eq!(visible_cards(640.0), 2);
        assert_eq!(visible_cards(1023.0), 2);
        assert_eq!(visible_cards(1024.0), 3);
        assert_eq!(visible_cards(1920.0), 3);
    }

    #[test]
    fn translate_percent_depends_on_visible_count() {
        let mut carousel = abc();
        carousel.go_to(1);
        assert_eq!(carousel.translate_percent(1), 200.0);
        assert_eq!(carousel.translate_percent(2), 100.0);
        assert!((carousel.translate_percent(3) - 66.666).abs() < 0.01);
        assert_eq!(carousel.translate_percent(0), 200.0);
    }

    #[test]
    fn autoplay_respects_pause() {
        let mut carousel = abc();
        assert!(carousel.autoplay_tick());
        assert_eq!(carousel.current_index(), 2);

        carousel.set_paused(true);
        assert!(!carousel.autoplay_tick());
        assert_eq!(carousel.current_index(), 2);
    }
}
