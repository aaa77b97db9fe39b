use embedded_hal::digital::v2::InputPin;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Play,
    ShowHighScore,
    EraseHighScore,
}

/// Pressed state of every button, sampled once per frame.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub play: bool,
    pub show_high_score: bool,
    pub erase_high_score: bool,
}

impl ButtonState {
    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Play => self.play,
            Button::ShowHighScore => self.show_high_score,
            Button::EraseHighScore => self.erase_high_score,
        }
    }
}

/// Pull-up switches to ground; a pressed button reads low.
pub struct ButtonHandler<I> {
    play: I,
    show_high_score: I,
    erase_high_score: I,
}

impl<I: InputPin> ButtonHandler<I> {
    pub fn new(play: I, show_high_score: I, erase_high_score: I) -> Self {
        Self {
            play,
            show_high_score,
            erase_high_score,
        }
    }

    pub fn poll(&self) -> Result<ButtonState, I::Error> {
        Ok(ButtonState {
            play: self.play.is_low()?,
            show_high_score: self.show_high_score.is_low()?,
            erase_high_score: self.erase_high_score.is_low()?,
        })
    }
}
