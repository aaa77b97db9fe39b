//! High score kept in RAM and mirrored to one persisted byte

use crate::config::MAX_SCORE;

/// A single durable byte, e.g. one EEPROM cell.
pub trait ByteCell {
    type Error;

    /// `WouldBlock` while a previous write is still in progress
    fn poll_ready(&mut self) -> nb::Result<(), Self::Error>;

    fn read(&mut self) -> Result<u8, Self::Error>;

    /// Starts a write. Callers must have seen `poll_ready` succeed.
    fn write(&mut self, byte: u8) -> Result<(), Self::Error>;
}

/// Exclusive access to a cell that has finished any earlier write.
pub struct WriteGuard<'a, C: ByteCell> {
    cell: &'a mut C,
}

impl<'a, C: ByteCell> WriteGuard<'a, C> {
    /// Blocks until the cell is ready.
    pub fn acquire(cell: &'a mut C) -> Result<Self, C::Error> {
        nb::block!(cell.poll_ready())?;
        Ok(Self { cell })
    }

    /// Issues the write and gives the cell back.
    pub fn write(self, byte: u8) -> Result<(), C::Error> {
        self.cell.write(byte)
    }
}

pub struct HighScoreStore<C> {
    cell: C,
    high_score: u8,
}

impl<C: ByteCell> HighScoreStore<C> {
    /// Reads the stored score once. Anything above `MAX_SCORE` (a blank
    /// EEPROM reads 0xFF) counts as no high score yet.
    pub fn load(mut cell: C) -> Result<Self, C::Error> {
        nb::block!(cell.poll_ready())?;
        let stored = cell.read()?;
        let high_score = if stored > MAX_SCORE { 0 } else { stored };
        Ok(Self { cell, high_score })
    }

    pub fn get(&self) -> u8 {
        self.high_score
    }

    /// Stores `score` if it beats the current one. Returns whether it did.
    pub fn update(&mut self, score: u8) -> Result<bool, C::Error> {
        if score <= self.high_score {
            return Ok(false);
        }
        self.high_score = score;
        self.persist()?;
        Ok(true)
    }

    /// Resets to zero. Returns whether anything was written.
    pub fn erase(&mut self) -> Result<bool, C::Error> {
        if self.high_score == 0 {
            return Ok(false);
        }
        self.high_score = 0;
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> Result<(), C::Error> {
        WriteGuard::acquire(&mut self.cell)?.write(self.high_score)
    }
}
