//! Game state machine, run once per frame

pub mod difficulty;

use embedded_hal::digital::v2::{InputPin, OutputPin};

use crate::config::{
    BLINK_DURATION_TICKS, BLINK_PERIOD_TICKS, FLOURISH_INTERVAL_TICKS, FRAME_PER_SEC,
    LOCKOUT_TICKS, MAX_SCORE, ROUND_END_POSITION, SCORING_POSITION,
};
use crate::drivers::{Board, ButtonState, ByteCell};
use crate::error::Error;
use crate::logger::{LogType, Logger};

pub use difficulty::{bar_index, speed_recip, Difficulty};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    ReadyToStart,
    ShowingHighScore,
    Playing,
    ScoreBlink,
    ShowingScore,
}

pub struct Game {
    state: GameState,
    score: u8,
    /// 0..=9 outward, 10..=18 back, 19 ends the round
    position: u8,
    dwell: u16,
    speed_recip: u16,
    /// Frames left before a press may score again
    lockout: u16,
    new_high_score: bool,
    blink_count: u16,
    difficulty: Difficulty,
    log: Logger,
}

type GameResult<O, C> = Result<(), Error<<O as OutputPin>::Error, <C as ByteCell>::Error>>;

impl Game {
    pub fn new() -> Self {
        Self {
            state: GameState::ReadyToStart,
            score: 0,
            position: 0,
            dwell: 0,
            speed_recip: 1,
            lockout: 0,
            new_high_score: false,
            blink_count: 0,
            difficulty: Difficulty::new(0),
            log: Logger::new(),
        }
    }

    /// Runs one frame. `now` is the frame counter, used as the session seed.
    pub fn update<O, I, C>(&mut self, board: &mut Board<O, I, C>, now: u32) -> GameResult<O, C>
    where
        O: OutputPin,
        I: InputPin<Error = O::Error>,
        C: ByteCell,
    {
        let buttons = board.buttons.poll().map_err(Error::Pin)?;
        match self.state {
            GameState::ReadyToStart => self.ready_to_start(board, buttons, now),
            GameState::ShowingHighScore => self.show_high_score(board, buttons, now),
            GameState::Playing => self.playing(board, buttons, now),
            GameState::ScoreBlink => self.score_blink(board),
            GameState::ShowingScore => self.show_score(board, buttons, now),
        }
    }

    fn ready_to_start<O, I, C>(
        &mut self,
        board: &mut Board<O, I, C>,
        buttons: ButtonState,
        now: u32,
    ) -> GameResult<O, C>
    where
        O: OutputPin,
        C: ByteCell,
    {
        board.display.set_number(0).map_err(Error::Pin)?;
        board.bar.set_position(0).map_err(Error::Pin)?;
        self.idle_buttons(board, buttons, now, true)
    }

    fn show_high_score<O, I, C>(
        &mut self,
        board: &mut Board<O, I, C>,
        buttons: ButtonState,
        now: u32,
    ) -> GameResult<O, C>
    where
        O: OutputPin,
        C: ByteCell,
    {
        let high_score = board.high_score.get();
        board.display.set_number(u32::from(high_score)).map_err(Error::Pin)?;
        self.idle_buttons(board, buttons, now, false)
    }

    fn show_score<O, I, C>(
        &mut self,
        board: &mut Board<O, I, C>,
        buttons: ButtonState,
        now: u32,
    ) -> GameResult<O, C>
    where
        O: OutputPin,
        C: ByteCell,
    {
        board.bar.set_position(0).map_err(Error::Pin)?;
        board.display.set_number(u32::from(self.score)).map_err(Error::Pin)?;
        self.idle_buttons(board, buttons, now, true)
    }

    /// Button handling shared by the idle screens. Erase first, then play,
    /// then (where offered) switching to the high score.
    fn idle_buttons<O, I, C>(
        &mut self,
        board: &mut Board<O, I, C>,
        buttons: ButtonState,
        now: u32,
        offer_high_score: bool,
    ) -> GameResult<O, C>
    where
        O: OutputPin,
        C: ByteCell,
    {
        if buttons.erase_high_score && board.high_score.erase().map_err(Error::Storage)? {
            self.log.log(now, LogType::HighScoreErased, 0);
        }
        if buttons.play {
            self.start_session(now);
        } else if offer_high_score && buttons.show_high_score {
            self.state = GameState::ShowingHighScore;
        }
        Ok(())
    }

    fn start_session(&mut self, now: u32) {
        self.difficulty.reseed(now);
        self.score = 0;
        self.position = 0;
        self.dwell = 0;
        self.speed_recip = self.difficulty.next_speed_recip(self.score);
        self.lockout = 0;
        self.state = GameState::Playing;
        self.log.log(now, LogType::SessionStart, self.speed_recip as u8);
    }

    fn playing<O, I, C>(
        &mut self,
        board: &mut Board<O, I, C>,
        buttons: ButtonState,
        now: u32,
    ) -> GameResult<O, C>
    where
        O: OutputPin,
        C: ByteCell,
    {
        board.display.set_number(u32::from(self.score)).map_err(Error::Pin)?;
        board.bar.set_position(bar_index(self.position)).map_err(Error::Pin)?;

        self.dwell += 1;
        if self.dwell >= self.speed_recip {
            self.dwell = 0;
            self.position += 1;
            if self.position >= ROUND_END_POSITION {
                return self.finish_round(board, now);
            }
        }

        if self.position >= SCORING_POSITION && self.lockout == 0 && buttons.play {
            self.score = (self.score + 1).min(MAX_SCORE);
            self.position = 0;
            self.dwell = 0;
            self.speed_recip = self.difficulty.next_speed_recip(self.score);
            self.log.log(now, LogType::Scored, self.score);
        }

        if buttons.play {
            self.lockout = LOCKOUT_TICKS;
        } else {
            self.lockout = self.lockout.saturating_sub(1);
        }
        Ok(())
    }

    fn finish_round<O, I, C>(&mut self, board: &mut Board<O, I, C>, now: u32) -> GameResult<O, C>
    where
        O: OutputPin,
        C: ByteCell,
    {
        self.log.log(now, LogType::RoundComplete, self.score);
        if self.score > board.high_score.get() {
            self.new_high_score = true;
            board.high_score.update(self.score).map_err(Error::Storage)?;
            self.log.log(now, LogType::NewHighScore, self.score);
        } else {
            // a perfect run still gets the flourish
            self.new_high_score = self.score == MAX_SCORE;
        }
        self.blink_count = 0;
        self.state = GameState::ScoreBlink;
        Ok(())
    }

    fn score_blink<O, I, C>(&mut self, board: &mut Board<O, I, C>) -> GameResult<O, C>
    where
        O: OutputPin,
        C: ByteCell,
    {
        if self.blink_count % BLINK_PERIOD_TICKS < BLINK_PERIOD_TICKS / 2 {
            board.display.set_number(u32::from(self.score)).map_err(Error::Pin)?;
        } else {
            board.display.erase_number().map_err(Error::Pin)?;
        }

        if self.blink_count > FRAME_PER_SEC && self.new_high_score {
            if self.blink_count % FLOURISH_INTERVAL_TICKS == 0 {
                let index = self.difficulty.random_bar_index();
                board.bar.set_position(index).map_err(Error::Pin)?;
            }
        } else {
            board.bar.erase().map_err(Error::Pin)?;
        }

        self.blink_count += 1;
        if self.blink_count >= BLINK_DURATION_TICKS {
            self.state = GameState::ShowingScore;
        }
        Ok(())
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn speed_recip(&self) -> u16 {
        self.speed_recip
    }

    pub fn lockout(&self) -> u16 {
        self.lockout
    }

    pub fn new_high_score(&self) -> bool {
        self.new_high_score
    }

    pub fn blink_count(&self) -> u16 {
        self.blink_count
    }

    pub fn log(&self) -> &Logger {
        &self.log
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Game {
    /// Puts a session mid-round for scenario tests.
    pub(crate) fn force_playing(&mut self, score: u8, position: u8, speed_recip: u16) {
        self.state = GameState::Playing;
        self.score = score;
        self.position = position;
        self.dwell = 0;
        self.speed_recip = speed_recip;
        self.lockout = 0;
    }
}

#[cfg(test)]
mod tests;
