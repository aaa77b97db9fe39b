use embedded_hal::digital::v2::OutputPin;

pub const SEG_A: u8 = 0b_0000_0001;
pub const SEG_B: u8 = 0b_0000_0010;
pub const SEG_C: u8 = 0b_0000_0100;
pub const SEG_D: u8 = 0b_0000_1000;
pub const SEG_E: u8 = 0b_0001_0000;
pub const SEG_F: u8 = 0b_0010_0000;
pub const SEG_G: u8 = 0b_0100_0000;

/// Segment patterns for 0-9, bit i drives segment line i (A = bit 0)
pub const DIGITS: [u8; 10] = [
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F,
    SEG_B | SEG_C,
    SEG_A | SEG_B | SEG_D | SEG_E | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_G,
    SEG_B | SEG_C | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_F | SEG_G,
    SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_F,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G,
    SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G,
];

/// One seven-segment digit. Segment lines are active high.
pub struct SevenSegment<O> {
    segments: [O; 7],
}

impl<O: OutputPin> SevenSegment<O> {
    /// `segments` in A..G order
    pub fn new(segments: [O; 7]) -> Self {
        Self { segments }
    }

    /// Shows `digit`; anything above 9 leaves the segments untouched.
    pub fn set_number(&mut self, digit: u8) -> Result<(), O::Error> {
        let Some(&pattern) = DIGITS.get(digit as usize) else {
            return Ok(());
        };
        self.set_pattern(pattern)
    }

    pub fn erase_number(&mut self) -> Result<(), O::Error> {
        self.set_pattern(0)
    }

    fn set_pattern(&mut self, pattern: u8) -> Result<(), O::Error> {
        for (i, seg) in self.segments.iter_mut().enumerate() {
            if (pattern & (1 << i)) != 0 {
                seg.set_high()?;
            } else {
                seg.set_low()?;
            }
        }
        Ok(())
    }
}
