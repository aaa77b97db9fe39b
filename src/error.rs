//! Error type carried from the drivers up to the frame interrupt

/// Failure of a collaborator while running a frame.
///
/// `P` is the error of the pins (inputs and outputs share it), `S` the error
/// of the persisted byte. On the ATmega328P both are `Infallible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<P, S> {
    Pin(P),
    Storage(S),
}

