//! In-RAM game event log
//!
//! The board has no free UART, so events are kept in a small ring that a
//! debugger (or a test) can read back and dump through any `ufmt` sink.

use ufmt::{uDisplay, uWrite, uwrite, Formatter};

// Buffer size must be power of 2 for efficient masking
const BUFFER_SIZE: usize = 16;
const BUFFER_MASK: usize = BUFFER_SIZE - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogType {
    SessionStart = 0,
    Scored = 1,
    RoundComplete = 2,
    NewHighScore = 3,
    HighScoreErased = 4,
}

impl LogType {
    pub fn as_str(self) -> &'static str {
        match self {
            LogType::SessionStart => "session",
            LogType::Scored => "scored",
            LogType::RoundComplete => "round",
            LogType::NewHighScore => "high",
            LogType::HighScoreErased => "erased",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Frame count when the event happened
    pub timestamp: u32,
    pub log_type: LogType,
    pub value: u8,
}

impl uDisplay for LogEntry {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        uwrite!(f, "[{}] {} {}", self.timestamp, self.log_type.as_str(), self.value)
    }
}

/// Keeps the newest `BUFFER_SIZE` entries.
pub struct Logger {
    buffer: [Option<LogEntry>; BUFFER_SIZE],
    write_idx: usize,
    len: usize,
}

impl Logger {
    pub const fn new() -> Self {
        Self {
            buffer: [None; BUFFER_SIZE],
            write_idx: 0,
            len: 0,
        }
    }

    pub fn log(&mut self, timestamp: u32, log_type: LogType, value: u8) {
        self.buffer[self.write_idx] = Some(LogEntry {
            timestamp,
            log_type,
            value,
        });
        self.write_idx = (self.write_idx + 1) & BUFFER_MASK;
        if self.len < BUFFER_SIZE {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<LogEntry> {
        if self.len == 0 {
            return None;
        }
        self.buffer[self.write_idx.wrapping_sub(1) & BUFFER_MASK]
    }

    /// Oldest first
    pub fn entries(&self) -> impl Iterator<Item = LogEntry> + '_ {
        let start = self.write_idx.wrapping_sub(self.len) & BUFFER_MASK;
        (0..self.len).filter_map(move |i| self.buffer[(start + i) & BUFFER_MASK])
    }

    /// Writes every entry, one per line.
    pub fn dump<W: uWrite + ?Sized>(&self, w: &mut W) -> Result<(), W::Error> {
        for entry in self.entries() {
            uwrite!(w, "{}\r\n", entry)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.write_idx = 0;
        self.len = 0;
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
