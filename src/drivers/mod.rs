pub mod bar_indicator;
pub mod button_handler;
pub mod high_score;
pub mod multiplexed;
pub mod seven_segment;

pub use bar_indicator::BarIndicator;
pub use button_handler::{Button, ButtonHandler, ButtonState};
pub use high_score::{ByteCell, HighScoreStore, WriteGuard};
pub use multiplexed::MultiplexedDisplay;
pub use seven_segment::SevenSegment;

use crate::config::{BAR_LENGTH, DISPLAY_DIGITS};

/// Everything the game drives, wired for one board.
pub struct Board<O, I, C> {
    pub display: MultiplexedDisplay<O, DISPLAY_DIGITS>,
    pub bar: BarIndicator<O, BAR_LENGTH>,
    pub buttons: ButtonHandler<I>,
    pub high_score: HighScoreStore<C>,
}

impl<O: embedded_hal::digital::v2::OutputPin, I, C> Board<O, I, C> {
    /// Darkens every output before the first frame.
    pub fn init(&mut self) -> Result<(), O::Error> {
        self.bar.init()?;
        self.display.init()
    }
}
