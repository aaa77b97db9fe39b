use avr_device::atmega328p::TC0;

#[derive(Clone, Copy)]
pub enum Prescaler {
    Stop = 0,
    Direct = 1,
    Div8 = 2,
    Div64 = 3,
    Div256 = 4,
    Div1024 = 5,
}

impl Prescaler {
    pub const fn divisor(self) -> u32 {
        match self {
            Prescaler::Stop => 0,
            Prescaler::Direct => 1,
            Prescaler::Div8 => 8,
            Prescaler::Div64 => 64,
            Prescaler::Div256 => 256,
            Prescaler::Div1024 => 1024,
        }
    }
}

const PRESCALER_MASK: u8 = 0x07;
const WGM01_CTC: u8 = 1 << 1;
const OCIE0A: u8 = 1 << 1;

/// Timer0 as the frame clock: CTC mode, one compare-match A interrupt per period.
pub struct FrameTimer {
    tc0: TC0,
}

impl FrameTimer {
    pub fn new(tc0: TC0) -> Self {
        // Stopped, counter cleared, clear-on-compare mode
        tc0.tccr0b.write(|w| unsafe { w.bits(0) });
        tc0.tcnt0.write(|w| unsafe { w.bits(0) });
        tc0.tccr0a.write(|w| unsafe { w.bits(WGM01_CTC) });
        Self { tc0 }
    }

    /// Counts to `top` inclusive, so the period is `prescale * (top + 1)` cycles.
    pub fn start(&mut self, prescaler: Prescaler, top: u8) {
        self.tc0.ocr0a.write(|w| unsafe { w.bits(top) });
        self.tc0.tccr0b.modify(|r, w| unsafe {
            w.bits((r.bits() & !PRESCALER_MASK) | (prescaler as u8 & PRESCALER_MASK))
        });
    }

    pub fn enable_compare_interrupt(&mut self) {
        self.tc0
            .timsk0
            .modify(|r, w| unsafe { w.bits(r.bits() | OCIE0A) });
    }
}
