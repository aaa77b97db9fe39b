use embedded_hal::digital::v2::OutputPin;

/// Row of LEDs with at most one lit. Lines are active low.
pub struct BarIndicator<O, const N: usize> {
    lines: [O; N],
    position: Option<usize>,
}

impl<O: OutputPin, const N: usize> BarIndicator<O, N> {
    pub fn new(lines: [O; N]) -> Self {
        Self {
            lines,
            position: None,
        }
    }

    pub fn init(&mut self) -> Result<(), O::Error> {
        for line in self.lines.iter_mut() {
            line.set_high()?;
        }
        self.position = None;
        Ok(())
    }

    /// Lights line `pos`. Positions past the end are ignored.
    pub fn set_position(&mut self, pos: usize) -> Result<(), O::Error> {
        if pos >= N {
            return Ok(());
        }
        if let Some(prev) = self.position {
            self.lines[prev].set_high()?;
        }
        self.position = Some(pos);
        self.lines[pos].set_low()
    }

    pub fn erase(&mut self) -> Result<(), O::Error> {
        if let Some(prev) = self.position.take() {
            self.lines[prev].set_high()?;
        }
        Ok(())
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }
}
