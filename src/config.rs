//! Configuration constants for the hokey firmware

/// CPU frequency in Hz (internal RC oscillator, PB6/PB7 are used as GPIO)
pub const CPU_FREQ_HZ: u32 = 8_000_000;

/// Timer0 clock divisor
pub const FRAME_TIMER_PRESCALE: u32 = 64;

/// Number of frame interrupts per second
pub const FRAME_PER_SEC: u16 = 500;

/// Display advances one digit slot every this many frames
pub const REFRESH_DIVIDER: u32 = 4;

/// Digit slots on the score display
pub const DISPLAY_DIGITS: usize = 2;

/// Lines on the bar indicator
pub const BAR_LENGTH: usize = 10;

/// Highest reachable score
pub const MAX_SCORE: u8 = 99;

/// Raw bar position at which a round is over
pub const ROUND_END_POSITION: u8 = 19;

/// First raw bar position where a press scores (bar index 6 and beyond on the way back)
pub const SCORING_POSITION: u8 = 16;

/// Ticks a held play button keeps scoring locked out
pub const LOCKOUT_TICKS: u16 = FRAME_PER_SEC / 10;

/// One on/off cycle of the score blink
pub const BLINK_PERIOD_TICKS: u16 = FRAME_PER_SEC;

/// Total length of the score blink
pub const BLINK_DURATION_TICKS: u16 = FRAME_PER_SEC * 3;

/// Bar jump interval of the high-score flourish
pub const FLOURISH_INTERVAL_TICKS: u16 = FRAME_PER_SEC / 20;

/// Upper bound (exclusive) of the difficulty jitter
pub const SPEED_JITTER_RANGE: u8 = 40;

/// EEPROM address of the persisted high score
pub const HIGH_SCORE_ADDRESS: u16 = 0;

/// Timer0 compare value for a CTC period of `1 / target_hz`.
///
/// F = clock / (prescale * (1 + top))
pub const fn compare_top(clock_hz: u32, target_hz: u32, prescale: u32) -> u32 {
    clock_hz / target_hz / prescale - 1
}

/// OCR0A value producing `FRAME_PER_SEC` interrupts
pub const FRAME_TIMER_TOP: u8 =
    compare_top(CPU_FREQ_HZ, FRAME_PER_SEC as u32, FRAME_TIMER_PRESCALE) as u8;

const _: () = assert!(
    compare_top(CPU_FREQ_HZ, FRAME_PER_SEC as u32, FRAME_TIMER_PRESCALE) <= u8::MAX as u32,
    "frame rate not reachable with an 8-bit timer at this prescale"
);
const _: () = assert!(LOCKOUT_TICKS > 0 && FLOURISH_INTERVAL_TICKS > 0);
