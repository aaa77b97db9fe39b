use super::*;
use crate::config::{BAR_LENGTH, DISPLAY_DIGITS};
use crate::drivers::{BarIndicator, ButtonHandler, HighScoreStore, MultiplexedDisplay, SevenSegment};
use crate::testing::{FakePin, MemCell};

struct Rig {
    game: Game,
    board: Board<FakePin, FakePin, MemCell>,
    bar_lines: [FakePin; BAR_LENGTH],
    play: FakePin,
    show: FakePin,
    erase: FakePin,
    cell: MemCell,
    now: u32,
}

impl Rig {
    fn new(stored_high_score: u8) -> Self {
        let bar_lines: [FakePin; BAR_LENGTH] = core::array::from_fn(|_| FakePin::high());
        let selects: [FakePin; DISPLAY_DIGITS] = core::array::from_fn(|_| FakePin::high());
        let segments: [FakePin; 7] = Default::default();
        let (play, show, erase) = (FakePin::high(), FakePin::high(), FakePin::high());
        let cell = MemCell::new(stored_high_score);

        let board = Board {
            display: MultiplexedDisplay::new(SevenSegment::new(segments), selects),
            bar: BarIndicator::new(bar_lines.clone()),
            buttons: ButtonHandler::new(play.clone(), show.clone(), erase.clone()),
            high_score: HighScoreStore::load(cell.clone()).unwrap(),
        };
        Self {
            game: Game::new(),
            board,
            bar_lines,
            play,
            show,
            erase,
            cell,
            now: 0,
        }
    }

    fn tick(&mut self) {
        self.now = self.now.wrapping_add(1);
        self.game.update(&mut self.board, self.now).unwrap();
    }

    fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.tick();
        }
    }

    fn shown(&self) -> Option<u32> {
        self.board.display.value()
    }

    fn bar(&self) -> Option<usize> {
        self.board.bar.position()
    }

    fn lit_lines(&self) -> usize {
        self.bar_lines.iter().filter(|l| !l.is_set_high()).count()
    }

    fn start(&mut self) {
        self.play.press();
        self.tick();
        self.play.release();
        assert_eq!(self.game.state(), GameState::Playing);
    }
}

#[test]
fn boot_shows_zero_and_waits() {
    let mut rig = Rig::new(0);
    rig.ticks(10);
    assert_eq!(rig.game.state(), GameState::ReadyToStart);
    assert_eq!(rig.shown(), Some(0));
    assert_eq!(rig.bar(), Some(0));
    assert_eq!(rig.lit_lines(), 1);
}

#[test]
fn play_from_fresh_boot_starts_session() {
    let mut rig = Rig::new(0);
    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.state(), GameState::Playing);
    assert_eq!(rig.game.score(), 0);
    assert_eq!(rig.game.position(), 0);
    assert_eq!(rig.game.lockout(), 0);
    assert!((24..=36).contains(&rig.game.speed_recip()));
    assert_eq!(rig.game.log().last().map(|e| e.log_type), Some(LogType::SessionStart));
}

#[test]
fn show_high_score_then_play() {
    let mut rig = Rig::new(30);
    rig.show.press();
    rig.tick();
    assert_eq!(rig.game.state(), GameState::ShowingHighScore);
    rig.tick();
    assert_eq!(rig.shown(), Some(30));

    rig.show.release();
    rig.ticks(5);
    assert_eq!(rig.game.state(), GameState::ShowingHighScore);

    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.state(), GameState::Playing);
}

#[test]
fn erase_in_ready_to_start_writes_once() {
    let mut rig = Rig::new(30);
    rig.erase.press();
    rig.ticks(20);
    assert_eq!(rig.board.high_score.get(), 0);
    assert_eq!(rig.cell.value(), 0);
    assert_eq!(rig.cell.writes(), 1);
    let erased = rig
        .game
        .log()
        .entries()
        .filter(|e| e.log_type == LogType::HighScoreErased)
        .count();
    assert_eq!(erased, 1);
}

#[test]
fn erase_while_showing_high_score() {
    let mut rig = Rig::new(12);
    rig.show.press();
    rig.tick();
    rig.show.release();
    rig.erase.press();
    rig.tick();
    assert_eq!(rig.shown(), Some(12));
    rig.tick();
    assert_eq!(rig.shown(), Some(0));
    assert_eq!(rig.cell.writes(), 1);
}

#[test]
fn press_in_window_scores_once() {
    let mut rig = Rig::new(0);
    rig.game.force_playing(0, 16, 1000);
    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.score(), 1);
    assert_eq!(rig.game.position(), 0);
    assert!((24..=36).contains(&rig.game.speed_recip()));
    assert_eq!(rig.game.lockout(), LOCKOUT_TICKS);

    // still held: no second point
    rig.tick();
    assert_eq!(rig.game.score(), 1);
    assert_eq!(rig.game.lockout(), LOCKOUT_TICKS);
}

#[test]
fn press_outside_window_does_not_score() {
    let mut rig = Rig::new(0);
    rig.game.force_playing(3, 15, 1000);
    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.score(), 3);
    assert_eq!(rig.game.position(), 15);
}

#[test]
fn held_button_never_scores() {
    let mut rig = Rig::new(0);
    rig.game.force_playing(0, 14, 1);
    rig.play.press();
    rig.ticks(4);
    assert_eq!(rig.game.score(), 0);
    assert_eq!(rig.game.position(), 18);
    rig.tick();
    assert_eq!(rig.game.state(), GameState::ScoreBlink);
    assert_eq!(rig.game.score(), 0);
}

#[test]
fn lockout_counts_down_after_release() {
    let mut rig = Rig::new(0);
    rig.game.force_playing(0, 16, 10_000);
    rig.play.press();
    rig.tick();
    rig.play.release();
    rig.tick();
    assert_eq!(rig.game.lockout(), LOCKOUT_TICKS - 1);
    rig.ticks(LOCKOUT_TICKS as usize + 5);
    assert_eq!(rig.game.lockout(), 0);
}

#[test]
fn press_during_lockout_is_ignored() {
    let mut rig = Rig::new(0);
    rig.game.force_playing(0, 16, 10_000);
    rig.play.press();
    rig.tick();
    rig.play.release();
    rig.tick();
    // back in the window while the lockout is still running
    rig.game.force_playing(1, 16, 10_000);
    rig.game.lockout = 5;
    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.score(), 1);
    assert_eq!(rig.game.lockout(), LOCKOUT_TICKS);
}

#[test]
fn score_is_clamped() {
    let mut rig = Rig::new(0);
    rig.game.force_playing(MAX_SCORE, 17, 1000);
    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.score(), MAX_SCORE);
    assert_eq!(rig.game.position(), 0);
}

#[test]
fn full_round_sweeps_out_and_back() {
    let mut rig = Rig::new(0);
    rig.start();
    let mut seen: Vec<usize> = vec![];
    while rig.game.state() == GameState::Playing {
        rig.tick();
        let index = rig.bar().unwrap();
        assert!(index < BAR_LENGTH);
        assert_eq!(rig.lit_lines(), 1);
        if seen.last() != Some(&index) {
            seen.push(index);
        }
    }
    let expected: Vec<usize> = (0..10).chain((0..9).rev()).collect();
    assert_eq!(seen, expected);
    assert_eq!(rig.game.state(), GameState::ScoreBlink);
}

#[test]
fn round_end_with_new_high_score() {
    let mut rig = Rig::new(40);
    rig.game.force_playing(50, 18, 1);
    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.state(), GameState::ScoreBlink);
    assert_eq!(rig.game.blink_count(), 0);
    assert!(rig.game.new_high_score());
    assert_eq!(rig.game.score(), 50);
    assert_eq!(rig.board.high_score.get(), 50);
    assert_eq!(rig.cell.value(), 50);
    assert_eq!(rig.cell.writes(), 1);
    assert_eq!(rig.game.log().last().map(|e| e.log_type), Some(LogType::NewHighScore));
}

#[test]
fn round_end_without_improvement() {
    let mut rig = Rig::new(60);
    rig.game.force_playing(60, 18, 1);
    rig.tick();
    assert_eq!(rig.game.state(), GameState::ScoreBlink);
    assert!(!rig.game.new_high_score());
    assert_eq!(rig.board.high_score.get(), 60);
    assert_eq!(rig.cell.writes(), 0);
}

#[test]
fn perfect_score_gets_flourish_without_write() {
    let mut rig = Rig::new(MAX_SCORE);
    rig.game.force_playing(MAX_SCORE, 18, 1);
    rig.tick();
    assert!(rig.game.new_high_score());
    assert_eq!(rig.cell.writes(), 0);
}

#[test]
fn blink_alternates_for_three_seconds() {
    let mut rig = Rig::new(60);
    rig.game.force_playing(12, 18, 1);
    rig.tick();
    assert_eq!(rig.game.state(), GameState::ScoreBlink);

    let period = BLINK_PERIOD_TICKS as usize;
    for t in 0..BLINK_DURATION_TICKS as usize {
        assert_eq!(rig.game.state(), GameState::ScoreBlink, "tick {t}");
        rig.tick();
        let expected = if t % period < period / 2 { Some(12) } else { None };
        assert_eq!(rig.shown(), expected, "tick {t}");
        assert_eq!(rig.bar(), None);
    }
    assert_eq!(rig.game.state(), GameState::ShowingScore);
}

#[test]
fn new_high_score_flourish_moves_bar_after_first_second() {
    let mut rig = Rig::new(0);
    rig.game.force_playing(5, 18, 1);
    rig.tick();
    assert!(rig.game.new_high_score());

    // blink counts 0..=500 keep the bar dark
    for _ in 0..=FRAME_PER_SEC {
        rig.tick();
        assert_eq!(rig.bar(), None);
    }
    let mut positions = vec![];
    while rig.game.state() == GameState::ScoreBlink {
        rig.tick();
        if let Some(index) = rig.bar() {
            assert!(index < BAR_LENGTH);
            assert!(rig.lit_lines() <= 1);
            positions.push(index);
        }
    }
    assert!(!positions.is_empty());
}

#[test]
fn showing_score_handles_buttons() {
    let mut rig = Rig::new(60);
    rig.game.force_playing(7, 18, 1);
    rig.tick();
    rig.ticks(BLINK_DURATION_TICKS as usize);
    assert_eq!(rig.game.state(), GameState::ShowingScore);

    rig.tick();
    assert_eq!(rig.shown(), Some(7));
    assert_eq!(rig.bar(), Some(0));

    rig.show.press();
    rig.tick();
    assert_eq!(rig.game.state(), GameState::ShowingHighScore);
    rig.show.release();

    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.state(), GameState::Playing);
    assert_eq!(rig.game.score(), 0);
}

#[test]
fn play_beats_show_when_both_pressed() {
    let mut rig = Rig::new(0);
    rig.show.press();
    rig.play.press();
    rig.tick();
    assert_eq!(rig.game.state(), GameState::Playing);
}

#[test]
fn session_seed_comes_from_frame_counter() {
    let mut a = Rig::new(0);
    let mut b = Rig::new(0);
    a.now = 777;
    b.now = 777;
    a.start();
    b.start();
    assert_eq!(a.game.speed_recip(), b.game.speed_recip());
}
