//! Held-key tracking for terminal environments.
//!
//! The player reads "which movement keys are down right now", but most
//! terminals only report presses and auto-repeats. Keys are therefore aged on
//! every tick and released once no press or repeat has arrived within the
//! timeout. As soon as the terminal delivers a real release event the timeout
//! is no longer applied.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::map_move_key;
use crate::types::{KeySet, MoveKey};

// Longer than the usual keyboard auto-repeat delay, so a held key does not
// flicker off between the first press and the first repeat.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 500;

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    key: MoveKey,
    age_ms: u32,
}

/// Tracks which movement keys are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    held: ArrayVec<HeldKey, 4>,
    key_release_timeout_ms: u32,
    release_events_seen: bool,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::with_key_release_timeout_ms(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_key_release_timeout_ms(timeout_ms: u32) -> Self {
        Self {
            held: ArrayVec::new(),
            key_release_timeout_ms: timeout_ms,
            release_events_seen: false,
        }
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// True once the terminal has reported at least one key release.
    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    /// Record a press or auto-repeat. Returns the movement key, if any.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<MoveKey> {
        let key = map_move_key(code)?;
        match self.held.iter_mut().find(|h| h.key == key) {
            Some(h) => h.age_ms = 0,
            None => {
                let _ = self.held.try_push(HeldKey { key, age_ms: 0 });
            }
        }
        Some(key)
    }

    /// Record a key release.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        self.release_events_seen = true;
        if let Some(key) = map_move_key(code) {
            self.held.retain(|h| h.key != key);
        }
    }

    /// Age held keys by `elapsed_ms` and drop the ones past the timeout.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.release_events_seen {
            return;
        }
        let timeout = self.key_release_timeout_ms;
        for h in self.held.iter_mut() {
            h.age_ms = h.age_ms.saturating_add(elapsed_ms);
        }
        self.held.retain(|h| h.age_ms <= timeout);
    }

    /// Keys held for the current tick.
    pub fn keys(&self) -> KeySet {
        let mut set = KeySet::empty();
        for h in &self.held {
            set.insert(h.key);
        }
        set
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
