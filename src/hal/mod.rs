pub mod eeprom;
pub mod gpio;
pub mod power;
pub mod timer;

// Re-export commonly used types
pub use eeprom::EepromCell;
pub use gpio::{AnyPin, Input, Output, Pin, Pins};
pub use power::{Power, SleepMode};
pub use timer::{FrameTimer, Prescaler};
