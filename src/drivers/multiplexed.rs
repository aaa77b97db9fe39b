//! Multi-digit display sharing one set of segment lines
//!
//! Digit slots are lit one at a time by the frame clock; persistence of vision
//! does the rest. Select lines are active low.

use embedded_hal::digital::v2::OutputPin;

use super::seven_segment::SevenSegment;

pub struct MultiplexedDisplay<O, const DIGITS: usize> {
    renderer: SevenSegment<O>,
    selects: [O; DIGITS],
    value: Option<u32>,
    slot: usize,
}

impl<O: OutputPin, const DIGITS: usize> MultiplexedDisplay<O, DIGITS> {
    const LIMIT: u32 = pow10(DIGITS);

    /// `selects[0]` is the least significant digit
    pub fn new(renderer: SevenSegment<O>, selects: [O; DIGITS]) -> Self {
        Self {
            renderer,
            selects,
            value: None,
            slot: 0,
        }
    }

    pub fn init(&mut self) -> Result<(), O::Error> {
        for select in self.selects.iter_mut() {
            select.set_high()?;
        }
        self.renderer.erase_number()
    }

    /// Latches `value` for the next refresh. Values that don't fit blank the display.
    pub fn set_number(&mut self, value: u32) -> Result<(), O::Error> {
        if value >= Self::LIMIT {
            return self.erase_number();
        }
        self.value = Some(value);
        Ok(())
    }

    pub fn erase_number(&mut self) -> Result<(), O::Error> {
        self.value = None;
        self.renderer.erase_number()
    }

    /// Moves to the next digit slot. Segments are written while every slot is dark.
    pub fn advance_slot(&mut self) -> Result<(), O::Error> {
        self.selects[self.slot].set_high()?;
        self.slot = (self.slot + 1) % DIGITS;
        if let Some(value) = self.value {
            let digit = value / pow10(self.slot) % 10;
            self.renderer.set_number(digit as u8)?;
        }
        self.selects[self.slot].set_low()
    }

    /// Latched value, `None` while blank
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    pub fn active_slot(&self) -> usize {
        self.slot
    }
}

const fn pow10(n: usize) -> u32 {
    if n == 0 {
        1
    } else {
        10 * pow10(n - 1)
    }
}
