//! Host-side stand-ins for pins and the EEPROM cell

use core::cell::{Cell, RefCell};
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::drivers::ByteCell;

/// Pin whose level is shared between clones, so a test can press a
/// button or look at an LED after handing the pin to a driver.
#[derive(Clone, Debug, Default)]
pub struct FakePin {
    high: Rc<Cell<bool>>,
}

impl FakePin {
    /// Idle pull-up input or dark active-low output
    pub fn high() -> Self {
        let pin = Self::default();
        pin.high.set(true);
        pin
    }

    pub fn press(&self) {
        self.high.set(false);
    }

    pub fn release(&self) {
        self.high.set(true);
    }

    pub fn is_set_high(&self) -> bool {
        self.high.get()
    }
}

impl OutputPin for FakePin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.high.set(true);
        Ok(())
    }
}

impl InputPin for FakePin {
    type Error = Infallible;

    fn is_high(&self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

/// Ordered record of writes across many pins: `(line, level_high)`.
#[derive(Clone, Default)]
pub struct Journal {
    writes: Rc<RefCell<Vec<(u8, bool)>>>,
    levels: Rc<RefCell<[bool; 16]>>,
}

impl Journal {
    pub fn pin(&self, line: u8) -> RecordingPin {
        RecordingPin {
            line,
            journal: self.clone(),
        }
    }

    pub fn take(&self) -> Vec<(u8, bool)> {
        self.writes.borrow_mut().drain(..).collect()
    }

    /// Current levels of lines 0..7 packed as a segment pattern
    pub fn pattern(&self) -> u8 {
        let levels = self.levels.borrow();
        (0..7).fold(0, |acc, i| if levels[i] { acc | (1 << i) } else { acc })
    }

    fn record(&self, line: u8, high: bool) {
        self.writes.borrow_mut().push((line, high));
        self.levels.borrow_mut()[line as usize] = high;
    }
}

pub struct RecordingPin {
    line: u8,
    journal: Journal,
}

impl OutputPin for RecordingPin {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.journal.record(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.journal.record(self.line, true);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct CellState {
    value: u8,
    writes: usize,
    busy_polls: u8,
    writes_while_busy: usize,
}

/// EEPROM byte in memory. Clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct MemCell {
    state: Rc<RefCell<CellState>>,
}

impl MemCell {
    pub fn new(value: u8) -> Self {
        let cell = Self::default();
        cell.state.borrow_mut().value = value;
        cell
    }

    pub fn value(&self) -> u8 {
        self.state.borrow().value
    }

    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    /// Makes the next `polls` readiness checks report busy
    pub fn set_busy_polls(&self, polls: u8) {
        self.state.borrow_mut().busy_polls = polls;
    }

    pub fn busy_polls(&self) -> u8 {
        self.state.borrow().busy_polls
    }

    pub fn writes_while_busy(&self) -> usize {
        self.state.borrow().writes_while_busy
    }
}

impl ByteCell for MemCell {
    type Error = Infallible;

    fn poll_ready(&mut self) -> nb::Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.busy_polls > 0 {
            state.busy_polls -= 1;
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }

    fn read(&mut self) -> Result<u8, Self::Error> {
        Ok(self.state.borrow().value)
    }

    fn write(&mut self, byte: u8) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.busy_polls > 0 {
            state.writes_while_busy += 1;
        }
        state.value = byte;
        state.writes += 1;
        Ok(())
    }
}
