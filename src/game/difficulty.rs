//! Bar speed and the game's randomness

use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;

use crate::config::{BAR_LENGTH, SPEED_JITTER_RANGE};

/// Ticks the bar dwells on each position for a given score and jitter.
///
/// Higher scores dwell shorter. Never below one tick.
pub fn speed_recip(score: u8, jitter: u8) -> u16 {
    let base = 30 - i32::from(score) / 5;
    let value = (base * (80 + i32::from(jitter)) + 50) / 100;
    value.max(1) as u16
}

/// Display index of a raw bar position: 0..=9 outward, 10..=18 back.
pub fn bar_index(position: u8) -> usize {
    if position < 10 {
        position as usize
    } else {
        (18 - position.min(18)) as usize
    }
}

pub struct Difficulty {
    rng: XorShiftRng,
}

impl Difficulty {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: XorShiftRng::seed_from_u64(u64::from(seed)),
        }
    }

    /// Restarts the sequence; called once per session with the tick count.
    pub fn reseed(&mut self, seed: u32) {
        self.rng = XorShiftRng::seed_from_u64(u64::from(seed));
    }

    pub fn next_speed_recip(&mut self, score: u8) -> u16 {
        let jitter = self.rng.gen_range(0..SPEED_JITTER_RANGE);
        speed_recip(score, jitter)
    }

    pub fn random_bar_index(&mut self) -> usize {
        self.rng.gen_range(0..BAR_LENGTH)
    }
}
