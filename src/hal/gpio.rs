use avr_device::atmega328p::{PORTB, PORTC, PORTD};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

/// A single port bit, typed by port, bit number and direction
#[derive(Debug)]
pub struct Pin<PORT, const PIN: u8, MODE> {
    _port: PhantomData<PORT>,
    _mode: PhantomData<MODE>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Port {
    B,
    C,
    D,
}

/// Pin with the port and bit moved to runtime, so one array can hold pins
/// from different ports.
#[derive(Debug)]
pub struct AnyPin<MODE> {
    port: Port,
    mask: u8,
    _mode: PhantomData<MODE>,
}

macro_rules! impl_port {
    ($PORT:ident, $Port:ident, $port:ident, $ddr:ident) => {
        impl<const P: u8, MODE: PinMode> Pin<$PORT, P, MODE> {
            pub fn into_output(self) -> Pin<$PORT, P, Output> {
                // Set DDRx bit
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin {
                    _port: PhantomData,
                    _mode: PhantomData,
                }
            }

            pub fn into_pull_up_input(self) -> Pin<$PORT, P, Input> {
                // Clear DDRx bit and enable pull-up
                unsafe {
                    (*$PORT::ptr()).$ddr.modify(|r, w| w.bits(r.bits() & !(1 << P)));
                    (*$PORT::ptr()).$port.modify(|r, w| w.bits(r.bits() | (1 << P)));
                }
                Pin {
                    _port: PhantomData,
                    _mode: PhantomData,
                }
            }

            pub fn downgrade(self) -> AnyPin<MODE> {
                AnyPin {
                    port: Port::$Port,
                    mask: 1 << P,
                    _mode: PhantomData,
                }
            }
        }
    };
}

impl_port!(PORTB, B, portb, ddrb);
impl_port!(PORTC, C, portc, ddrc);
impl_port!(PORTD, D, portd, ddrd);

impl AnyPin<Output> {
    #[inline]
    fn write(&mut self, high: bool) {
        let mask = self.mask;
        let apply = |bits: u8| if high { bits | mask } else { bits & !mask };
        unsafe {
            match self.port {
                Port::B => (*PORTB::ptr()).portb.modify(|r, w| w.bits(apply(r.bits()))),
                Port::C => (*PORTC::ptr()).portc.modify(|r, w| w.bits(apply(r.bits()))),
                Port::D => (*PORTD::ptr()).portd.modify(|r, w| w.bits(apply(r.bits()))),
            }
        }
    }
}

impl OutputPin for AnyPin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.write(false);
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.write(true);
        Ok(())
    }
}

impl InputPin for AnyPin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Self::Error> {
        let bits = unsafe {
            match self.port {
                Port::B => (*PORTB::ptr()).pinb.read().bits(),
                Port::C => (*PORTC::ptr()).pinc.read().bits(),
                Port::D => (*PORTD::ptr()).pind.read().bits(),
            }
        };
        Ok(bits & self.mask != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

macro_rules! pins {
    ($($name:ident: $PORT:ident, $bit:literal;)+) => {
        /// Every GPIO of the ATmega328P, in its reset state (floating input).
        pub struct Pins {
            $(pub $name: Pin<$PORT, $bit, Input>,)+
        }

        impl Pins {
            /// Taking the port peripherals guarantees this only happens once.
            pub fn new(_portb: PORTB, _portc: PORTC, _portd: PORTD) -> Self {
                Self {
                    $($name: Pin {
                        _port: PhantomData,
                        _mode: PhantomData,
                    },)+
                }
            }
        }
    };
}

pins! {
    pb0: PORTB, 0; pb1: PORTB, 1; pb2: PORTB, 2; pb3: PORTB, 3;
    pb4: PORTB, 4; pb5: PORTB, 5; pb6: PORTB, 6; pb7: PORTB, 7;
    pc0: PORTC, 0; pc1: PORTC, 1; pc2: PORTC, 2; pc3: PORTC, 3;
    pc4: PORTC, 4; pc5: PORTC, 5;
    pd0: PORTD, 0; pd1: PORTD, 1; pd2: PORTD, 2; pd3: PORTD, 3;
    pd4: PORTD, 4; pd5: PORTD, 5; pd6: PORTD, 6; pd7: PORTD, 7;
}
