//! Application layer: everything the frame interrupt owns

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::drivers::{Board, ByteCell};
use crate::error::Error;
use crate::game::Game;
use crate::os::FrameClock;

/// Built once before interrupts are enabled and then only touched from the
/// frame interrupt.
pub struct Application<O, I, C> {
    clock: FrameClock,
    board: Board<O, I, C>,
    game: Game,
}

impl<O, I, C> Application<O, I, C>
where
    O: OutputPin,
    I: InputPin<Error = O::Error>,
    C: ByteCell,
{
    /// Darkens the outputs and starts in the ready screen.
    pub fn new(mut board: Board<O, I, C>) -> Result<Self, O::Error> {
        board.init()?;
        Ok(Self {
            clock: FrameClock::new(),
            board,
            game: Game::new(),
        })
    }

    /// One frame: refresh the display when due, then run the game.
    pub fn on_tick(&mut self) -> Result<(), Error<O::Error, C::Error>> {
        self.clock.tick();
        if self.clock.refresh_due() {
            self.board.display.advance_slot().map_err(Error::Pin)?;
        }
        self.game.update(&mut self.board, self.clock.get_ticks())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn board(&self) -> &Board<O, I, C> {
        &self.board
    }

    pub fn ticks(&self) -> u32 {
        self.clock.get_ticks()
    }
}
