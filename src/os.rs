//! Frame clock driving the whole firmware from one timer interrupt

use crate::config::REFRESH_DIVIDER;

/// Frame counter and display refresh phase
pub struct FrameClock {
    tick_count: u32,
}

impl FrameClock {
    pub const fn new() -> Self {
        Self { tick_count: 0 }
    }

    /// Counts one frame. Wraps on overflow.
    #[inline]
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    #[inline]
    pub fn get_ticks(&self) -> u32 {
        self.tick_count
    }

    /// True on the frames where the display moves to its next digit
    #[inline]
    pub fn refresh_due(&self) -> bool {
        self.tick_count % REFRESH_DIVIDER == 0
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
