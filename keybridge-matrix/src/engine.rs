//! Target keyboard engine
//!
//! Owns the matrix state and the switch driver, and turns key actions into
//! crosspoint writes. Plain keys map to a single write. Combos press their
//! members left to right and release them right to left, so a modifier is
//! always down before and after its base key; toggle combos flip instead.
//! Macros type their strokes one after another, blocking for the whole
//! sequence.
//!
//! Every call runs to completion before the next event is accepted. There
//! is no cancellation: [`TargetKeyboard::reset`] is the way back to a known
//! state.

use tracing::{debug, trace, warn};

use crate::action::KeyAction;
use crate::address::MatrixAddress;
use crate::hal::{CrosspointSwitch, Delay};
use crate::key::{Combo, ComboKind, Key, Macro};
use crate::state::MatrixState;

/// Delays used when typing keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Hold time after pressing a macro stroke
    pub macro_press_ms: u32,
    /// Pause after releasing a macro stroke
    pub macro_release_ms: u32,
    /// Hold time for [`TargetKeyboard::type_key`]
    pub type_hold_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            macro_press_ms: 100,
            macro_release_ms: 200,
            type_hold_ms: 100,
        }
    }
}

/// Anything that accepts translated key events
pub trait KeySink {
    /// Handle `action` for `key`; `None` is an unassigned code and is dropped
    fn handle(&mut self, key: Option<Key>, action: KeyAction);
}

impl<T: KeySink + ?Sized> KeySink for &mut T {
    fn handle(&mut self, key: Option<Key>, action: KeyAction) {
        (**self).handle(key, action)
    }
}

/// The target's keyboard matrix, as driven through a crosspoint switch
pub struct TargetKeyboard<S, D> {
    switch: S,
    delay: D,
    state: MatrixState,
    timing: Timing,
}

impl<S: CrosspointSwitch, D: Delay> TargetKeyboard<S, D> {
    /// Create an engine with default timing.
    ///
    /// Call [`reset`](Self::reset) before first use to bring the chip in
    /// line with the (all open) state.
    pub fn new(switch: S, delay: D) -> Self {
        let state = MatrixState::new(switch.x_lines());
        Self {
            switch,
            delay,
            state,
            timing: Timing::default(),
        }
    }

    pub fn with_timing(mut self, timing: Timing) -> Self {
        self.timing = timing;
        self
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn set_timing(&mut self, timing: Timing) {
        self.timing = timing;
    }

    /// Current state of every crosspoint
    pub fn state(&self) -> &MatrixState {
        &self.state
    }

    pub fn is_closed(&self, address: MatrixAddress) -> bool {
        self.state.is_closed(address)
    }

    pub fn switch(&self) -> &S {
        &self.switch
    }

    /// The engine's delay, for front-ends that need to wait on the same clock
    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Take the engine apart, e.g. to inspect a recording switch
    pub fn into_parts(self) -> (S, D) {
        (self.switch, self.delay)
    }

    /// Open every crosspoint, in the state table and on the chip
    pub fn reset(&mut self) {
        debug!("Resetting target keyboard");
        self.state.clear();
        self.switch.reset();
    }

    pub fn press_key(&mut self, key: Key) {
        self.handle_key(key, KeyAction::Press);
    }

    pub fn release_key(&mut self, key: Key) {
        self.handle_key(key, KeyAction::Release);
    }

    pub fn flip_key(&mut self, key: Key) {
        self.handle_key(key, KeyAction::Flip);
    }

    /// Press, hold for `type_hold_ms`, release
    pub fn type_key(&mut self, key: Key) {
        self.press_key(key);
        self.delay.delay_ms(self.timing.type_hold_ms);
        self.release_key(key);
    }

    /// Apply an action to a key
    pub fn handle_key(&mut self, key: Key, action: KeyAction) {
        match key {
            Key::Plain(address) => self.handle_plain(address, action),
            Key::Combo(combo) => self.handle_combo(combo, action),
            Key::Macro(m) if action == KeyAction::Release => self.run_macro(m),
            Key::Macro(m) => trace!("Macro {} waits for release, ignoring {}", m.name, action),
        }
    }

    fn handle_combo(&mut self, combo: &Combo, action: KeyAction) {
        match combo.kind {
            ComboKind::Toggle => {
                // toggles don't need a matching release
                if action == KeyAction::Release {
                    trace!("Toggle {} ignores release", combo.name);
                    return;
                }
                let Some(&first) = combo.keys.first() else {
                    return;
                };
                let closed = !self.state.is_closed(first);
                debug!("Toggle {} -> {}", combo.name, if closed { "on" } else { "off" });
                for &address in combo.keys {
                    self.set_level(address, closed);
                }
            }
            ComboKind::Chord => {
                debug!("Combo {}: {}", combo.name, action);
                if action == KeyAction::Release {
                    for &address in combo.keys.iter().rev() {
                        self.handle_plain(address, action);
                    }
                } else {
                    for &address in combo.keys {
                        self.handle_plain(address, action);
                    }
                }
            }
        }
    }

    fn run_macro(&mut self, m: &Macro) {
        debug!("Macro {} ({} strokes)", m.name, m.strokes.len());
        for &stroke in m.strokes {
            let key = Key::from(stroke);
            self.handle_key(key, KeyAction::Press);
            self.delay.delay_ms(self.timing.macro_press_ms);
            self.handle_key(key, KeyAction::Release);
            self.delay.delay_ms(self.timing.macro_release_ms);
        }
    }

    fn handle_plain(&mut self, address: MatrixAddress, action: KeyAction) {
        let closed = match action {
            KeyAction::Press => true,
            KeyAction::Release => false,
            KeyAction::Flip => !self.state.is_closed(address),
        };
        self.set_level(address, closed);
    }

    fn set_level(&mut self, address: MatrixAddress, closed: bool) {
        let (ax, ay) = (address.ax(), address.ay());
        if !self.state.is_valid(ax, ay) {
            warn!(
                "Dropping {}: matrix has {} X lines",
                address,
                self.state.x_lines()
            );
            return;
        }
        trace!("Key {} (AX {}, AY {}) -> {}", address, ax, ay, closed);
        self.switch.set_switch(address, closed);
        self.state.set(ax, ay, closed);
    }
}

impl<S: CrosspointSwitch, D: Delay> KeySink for TargetKeyboard<S, D> {
    fn handle(&mut self, key: Option<Key>, action: KeyAction) {
        match key {
            Some(key) => self.handle_key(key, action),
            None => debug!("Unassigned key, dropping {}", action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Stroke;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Switch(MatrixAddress, bool),
        Reset,
        Wait(u32),
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    struct FakeSwitch {
        log: Log,
        x_lines: u8,
    }

    impl CrosspointSwitch for FakeSwitch {
        fn x_lines(&self) -> u8 {
            self.x_lines
        }

        fn reset(&mut self) {
            self.log.borrow_mut().push(Event::Reset);
        }

        fn set_switch(&mut self, address: MatrixAddress, closed: bool) {
            self.log.borrow_mut().push(Event::Switch(address, closed));
        }
    }

    struct FakeDelay(Log);

    impl Delay for FakeDelay {
        fn delay_us(&mut self, _us: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.0.borrow_mut().push(Event::Wait(ms));
        }
    }

    fn engine(x_lines: u8) -> (TargetKeyboard<FakeSwitch, FakeDelay>, Log) {
        let log = Log::default();
        let switch = FakeSwitch {
            log: log.clone(),
            x_lines,
        };
        let mut kbd = TargetKeyboard::new(switch, FakeDelay(log.clone()));
        kbd.reset();
        log.borrow_mut().clear();
        (kbd, log)
    }

    fn take(log: &Log) -> Vec<Event> {
        std::mem::take(&mut *log.borrow_mut())
    }

    const SHIFT: MatrixAddress = MatrixAddress::at(0, 0);
    const SYM: MatrixAddress = MatrixAddress::at(7, 1);
    const A: MatrixAddress = MatrixAddress::at(1, 0);
    const B: MatrixAddress = MatrixAddress::at(7, 4);
    const C: MatrixAddress = MatrixAddress::at(0, 3);
    const FAR: MatrixAddress = MatrixAddress::at(12, 0);

    static EXTENDED: Combo = Combo::chord("extended", &[SYM, SHIFT, B]);
    static CAPS_LOCK: Combo = Combo::toggle("caps lock", &[SHIFT]);
    static DOUBLE_LOCK: Combo = Combo::toggle("double lock", &[SHIFT, SYM]);
    static ABC: Macro = Macro {
        name: "abc",
        strokes: &[Stroke::Plain(A), Stroke::Plain(B), Stroke::Plain(C)],
    };
    static WITH_COMBO: Macro = Macro {
        name: "with combo",
        strokes: &[Stroke::Combo(&EXTENDED)],
    };

    #[test]
    fn test_plain_round_trip() {
        let (mut kbd, log) = engine(8);
        for x in 0..8 {
            for y in 0..8 {
                let a = MatrixAddress::at(x, y);
                let before = kbd.is_closed(a);
                kbd.press_key(Key::Plain(a));
                assert!(kbd.is_closed(a));
                kbd.release_key(Key::Plain(a));
                assert_eq!(kbd.is_closed(a), before);
            }
        }
        assert_eq!(take(&log).len(), 128);
    }

    #[test]
    fn test_flip_plain() {
        let (mut kbd, log) = engine(8);
        kbd.flip_key(Key::Plain(A));
        kbd.flip_key(Key::Plain(A));
        assert_eq!(
            take(&log),
            vec![Event::Switch(A, true), Event::Switch(A, false)]
        );
        assert!(!kbd.is_closed(A));
    }

    #[test]
    fn test_chord_press_and_release_order() {
        let (mut kbd, log) = engine(8);
        kbd.press_key(Key::Combo(&EXTENDED));
        assert_eq!(
            take(&log),
            vec![
                Event::Switch(SYM, true),
                Event::Switch(SHIFT, true),
                Event::Switch(B, true),
            ]
        );
        kbd.release_key(Key::Combo(&EXTENDED));
        assert_eq!(
            take(&log),
            vec![
                Event::Switch(B, false),
                Event::Switch(SHIFT, false),
                Event::Switch(SYM, false),
            ]
        );
        assert!(kbd.state().is_all_open());
    }

    #[test]
    fn test_toggle_press_twice() {
        let (mut kbd, log) = engine(8);
        kbd.press_key(Key::Combo(&CAPS_LOCK));
        assert!(kbd.is_closed(SHIFT));
        kbd.release_key(Key::Combo(&CAPS_LOCK));
        assert!(kbd.is_closed(SHIFT));
        kbd.press_key(Key::Combo(&CAPS_LOCK));
        assert!(!kbd.is_closed(SHIFT));
        assert_eq!(
            take(&log),
            vec![Event::Switch(SHIFT, true), Event::Switch(SHIFT, false)]
        );
    }

    #[test]
    fn test_toggle_follows_first_member() {
        let (mut kbd, log) = engine(8);
        // SYM already down: the toggle still follows SHIFT, the first member
        kbd.press_key(Key::Plain(SYM));
        take(&log);
        kbd.press_key(Key::Combo(&DOUBLE_LOCK));
        assert_eq!(
            take(&log),
            vec![Event::Switch(SHIFT, true), Event::Switch(SYM, true)]
        );
        kbd.flip_key(Key::Combo(&DOUBLE_LOCK));
        assert_eq!(
            take(&log),
            vec![Event::Switch(SHIFT, false), Event::Switch(SYM, false)]
        );
    }

    #[test]
    fn test_macro_fires_on_release_only() {
        let (mut kbd, log) = engine(8);
        kbd.press_key(Key::Macro(&ABC));
        kbd.flip_key(Key::Macro(&ABC));
        assert!(take(&log).is_empty());

        kbd.release_key(Key::Macro(&ABC));
        assert_eq!(
            take(&log),
            vec![
                Event::Switch(A, true),
                Event::Wait(100),
                Event::Switch(A, false),
                Event::Wait(200),
                Event::Switch(B, true),
                Event::Wait(100),
                Event::Switch(B, false),
                Event::Wait(200),
                Event::Switch(C, true),
                Event::Wait(100),
                Event::Switch(C, false),
                Event::Wait(200),
            ]
        );
        assert!(kbd.state().is_all_open());
    }

    #[test]
    fn test_macro_stroke_runs_combo() {
        let (mut kbd, log) = engine(8);
        kbd.set_timing(Timing {
            macro_press_ms: 5,
            macro_release_ms: 7,
            type_hold_ms: 1,
        });
        kbd.release_key(Key::Macro(&WITH_COMBO));
        assert_eq!(
            take(&log),
            vec![
                Event::Switch(SYM, true),
                Event::Switch(SHIFT, true),
                Event::Switch(B, true),
                Event::Wait(5),
                Event::Switch(B, false),
                Event::Switch(SHIFT, false),
                Event::Switch(SYM, false),
                Event::Wait(7),
            ]
        );
    }

    #[test]
    fn test_type_key() {
        let (mut kbd, log) = engine(8);
        kbd.type_key(Key::Plain(C));
        assert_eq!(
            take(&log),
            vec![
                Event::Switch(C, true),
                Event::Wait(100),
                Event::Switch(C, false),
            ]
        );
    }

    #[test]
    fn test_out_of_range_x_line_dropped() {
        let (mut kbd, log) = engine(8);
        kbd.press_key(Key::Plain(FAR));
        kbd.flip_key(Key::Plain(FAR));
        assert!(take(&log).is_empty());
        assert!(kbd.state().is_all_open());

        // the same address is fine on a 16 line chip
        let (mut kbd, log) = engine(16);
        kbd.press_key(Key::Plain(FAR));
        assert_eq!(take(&log), vec![Event::Switch(FAR, true)]);
    }

    #[test]
    fn test_unassigned_is_noop() {
        let (mut kbd, log) = engine(8);
        kbd.handle(None, KeyAction::Press);
        kbd.handle(None, KeyAction::Release);
        assert!(take(&log).is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut kbd, log) = engine(8);
        kbd.press_key(Key::Combo(&EXTENDED));
        kbd.press_key(Key::Combo(&CAPS_LOCK));
        kbd.press_key(Key::Plain(C));
        assert!(!kbd.state().is_all_open());
        kbd.reset();
        assert!(kbd.state().is_all_open());
        assert_eq!(take(&log).last(), Some(&Event::Reset));
        kbd.reset();
        assert!(kbd.state().is_all_open());
    }
}
