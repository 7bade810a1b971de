//! Walk-cycle animation state.

use crate::types::{ANIMATION_FRAME_TICKS, WALK_SEQUENCE};

/// Frame selection for a four-step walk cycle.
///
/// The counter and sequence cursor survive idle periods; only the displayed
/// frame snaps back to 0 while standing still.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkAnimation {
    counter: u32,
    sequence_index: usize,
    frame: u8,
}

impl WalkAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick of movement.
    ///
    /// Returns true when the displayed frame changed.
    pub fn advance(&mut self) -> bool {
        self.counter += 1;
        if self.counter <= ANIMATION_FRAME_TICKS {
            return false;
        }

        self.sequence_index = (self.sequence_index + 1) % WALK_SEQUENCE.len();
        let prev = self.frame;
        self.frame = WALK_SEQUENCE[self.sequence_index];
        self.counter = 0;
        prev != self.frame
    }

    /// Show the standing frame.
    pub fn stand(&mut self) {
        self.frame = 0;
    }

    /// Column of the sprite sheet to sample.
    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn counter(&self) -> u32 {
        self.counter
    }
}
