//! Button state tracking and press-edge detection.
//!
//! The frame loop polls a [`ButtonState`] once per frame and feeds it to an
//! [`EdgeDetector`], which only reports buttons that went from up to down.
//! Holding a button therefore triggers exactly one action.
//!
//! [`KeyTracker`] builds the polled state from terminal key events. Terminals
//! that never send key-release events get a timeout instead: a button with no
//! key event for `release_timeout_ms` is considered released. A press that is
//! released again before the next poll is still reported down for that one
//! poll, so quick taps are not lost between frames.

use arrayvec::ArrayVec;
use log::trace;

use crate::types::{Direction, FarmAction, KEY_RELEASE_TIMEOUT_MS};

/// Logical buttons read from the input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Tend,
}

impl Button {
    pub const COUNT: usize = 5;

    pub const ALL: [Button; Button::COUNT] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::Tend,
    ];

    #[inline(always)]
    fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Left => 2,
            Button::Right => 3,
            Button::Tend => 4,
        }
    }

    /// The farm action a press of this button triggers.
    pub fn action(self) -> FarmAction {
        match self {
            Button::Up => FarmAction::Move(Direction::Up),
            Button::Down => FarmAction::Move(Direction::Down),
            Button::Left => FarmAction::Move(Direction::Left),
            Button::Right => FarmAction::Move(Direction::Right),
            Button::Tend => FarmAction::Tend,
        }
    }
}

/// Raw up/down state of every button for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    held: [bool; Button::COUNT],
}

impl ButtonState {
    pub fn is_down(&self, button: Button) -> bool {
        self.held[button.index()]
    }

    pub fn set(&mut self, button: Button, down: bool) {
        self.held[button.index()] = down;
    }

    pub fn with(mut self, button: Button) -> Self {
        self.set(button, true);
        self
    }

    /// Buttons down in `self` that were up in `prev`, in [`Button::ALL`] order.
    pub fn pressed_since(&self, prev: &ButtonState) -> impl Iterator<Item = Button> + '_ {
        let prev = *prev;
        Button::ALL
            .into_iter()
            .filter(move |b| self.is_down(*b) && !prev.is_down(*b))
    }
}

/// Emits one action per press transition.
#[derive(Debug, Clone, Default)]
pub struct EdgeDetector {
    prev: ButtonState,
}

impl EdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's button state and collect the actions to apply.
    pub fn update(&mut self, now: ButtonState) -> ArrayVec<FarmAction, { Button::COUNT }> {
        let mut actions = ArrayVec::new();
        for button in now.pressed_since(&self.prev) {
            trace!("button {:?} pressed", button);
            actions.push(button.action());
        }
        self.prev = now;
        actions
    }
}

/// Builds [`ButtonState`] from key press/release events.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    state: ButtonState,
    pressed_since_poll: ButtonState,
    last_seen_ms: [u64; Button::COUNT],
    release_timeout_ms: u64,
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(KEY_RELEASE_TIMEOUT_MS as u64)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u64) -> Self {
        Self {
            state: ButtonState::default(),
            pressed_since_poll: ButtonState::default(),
            last_seen_ms: [0; Button::COUNT],
            release_timeout_ms,
        }
    }

    pub fn release_timeout_ms(&self) -> u64 {
        self.release_timeout_ms
    }

    /// Record a press (or auto-repeat) of `button` at `now_ms`.
    pub fn handle_press(&mut self, button: Button, now_ms: u64) {
        if !self.state.is_down(button) {
            self.pressed_since_poll.set(button, true);
        }
        self.state.set(button, true);
        self.last_seen_ms[button.index()] = now_ms;
    }

    pub fn handle_release(&mut self, button: Button) {
        self.state.set(button, false);
    }

    /// Current state, after expiring buttons not seen within the timeout.
    ///
    /// Buttons pressed since the previous poll are reported down even if they
    /// have been released or expired since.
    pub fn poll(&mut self, now_ms: u64) -> ButtonState {
        let mut polled = self.state;
        for button in Button::ALL {
            let seen = self.last_seen_ms[button.index()];
            if self.state.is_down(button) && now_ms.saturating_sub(seen) > self.release_timeout_ms {
                self.state.set(button, false);
            }
            polled.set(
                button,
                self.state.is_down(button) || self.pressed_since_poll.is_down(button),
            );
        }
        self.pressed_since_poll = ButtonState::default();
        polled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_fires_once_while_held() {
        let mut edges = EdgeDetector::new();
        let held = ButtonState::default().with(Button::Left);

        assert_eq!(
            edges.update(held).as_slice(),
            &[FarmAction::Move(Direction::Left)]
        );
        assert!(edges.update(held).is_empty());
        assert!(edges.update(held).is_empty());
    }

    #[test]
    fn release_then_press_fires_again() {
        let mut edges = EdgeDetector::new();
        let held = ButtonState::default().with(Button::Tend);

        assert_eq!(edges.update(held).len(), 1);
        assert!(edges.update(ButtonState::default()).is_empty());
        assert_eq!(edges.update(held).as_slice(), &[FarmAction::Tend]);
    }

    #[test]
    fn simultaneous_presses_fire_in_button_order() {
        let mut edges = EdgeDetector::new();
        let state = ButtonState::default().with(Button::Right).with(Button::Up);
        assert_eq!(
            edges.update(state).as_slice(),
            &[
                FarmAction::Move(Direction::Up),
                FarmAction::Move(Direction::Right)
            ]
        );
    }

    #[test]
    fn tracker_auto_releases_after_timeout() {
        let mut tracker = KeyTracker::with_release_timeout_ms(100);
        tracker.handle_press(Button::Down, 1_000);

        assert!(tracker.poll(1_050).is_down(Button::Down));
        assert!(tracker.poll(1_100).is_down(Button::Down));
        assert!(!tracker.poll(1_101).is_down(Button::Down));
    }

    #[test]
    fn tap_within_one_poll_is_reported_once() {
        let mut tracker = KeyTracker::with_release_timeout_ms(100);
        let mut edges = EdgeDetector::new();

        tracker.handle_press(Button::Right, 3);
        tracker.handle_release(Button::Right);
        assert_eq!(
            edges.update(tracker.poll(16)).as_slice(),
            &[FarmAction::Move(Direction::Right)]
        );
        assert!(!tracker.poll(32).is_down(Button::Right));
        assert!(edges.update(tracker.poll(48)).is_empty());
    }

    #[test]
    fn repeat_while_held_is_not_latched_again() {
        let mut tracker = KeyTracker::with_release_timeout_ms(100);
        tracker.handle_press(Button::Tend, 0);
        assert!(tracker.poll(16).is_down(Button::Tend));

        tracker.handle_press(Button::Tend, 20);
        tracker.handle_release(Button::Tend);
        assert!(!tracker.poll(32).is_down(Button::Tend));
    }

    #[test]
    fn tracker_repeat_keeps_button_held() {
        let mut tracker = KeyTracker::with_release_timeout_ms(100);
        tracker.handle_press(Button::Up, 0);
        tracker.handle_press(Button::Up, 90);
        assert!(tracker.poll(180).is_down(Button::Up));

        tracker.handle_release(Button::Up);
        assert!(!tracker.poll(181).is_down(Button::Up));
    }
}
