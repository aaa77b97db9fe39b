//! Reaction-timing bar game for the ATmega328P
//!
//! A light runs along a ten-LED bar and back; stop it near the end of its
//! return swing to score. Score and high score show on a two-digit
//! multiplexed seven-segment display. All timing comes from one 500 Hz frame
//! interrupt.
//!
//! The game core is generic over `embedded-hal` pins and a [`drivers::ByteCell`],
//! so it builds and tests on the host; the register-level layer in `hal` is
//! AVR only.
#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod config;
pub mod drivers;
pub mod error;
pub mod game;
pub mod logger;
pub mod os;

#[cfg(target_arch = "avr")]
pub mod hal;

#[cfg(test)]
pub(crate) mod testing;

pub use application::Application;
pub use error::Error;
