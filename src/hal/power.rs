use avr_device::atmega328p::CPU;

const SLEEP_ENABLE: u8 = 0x01;
const SLEEP_MODE_MASK: u8 = 0x0E;

#[derive(Clone, Copy)]
#[repr(u8)]
pub enum SleepMode {
    Idle = 0,
    AdcNoiseReduction = 1,
    PowerDown = 2,
    PowerSave = 3,
    Standby = 6,
    ExtendedStandby = 7,
}

pub struct Power {
    cpu: CPU,
}

impl Power {
    pub fn new(cpu: CPU) -> Self {
        Self { cpu }
    }

    #[inline]
    pub fn set_sleep_mode(&mut self, mode: SleepMode) {
        self.cpu.smcr.modify(|r, w| unsafe {
            w.bits((r.bits() & !SLEEP_MODE_MASK) | ((mode as u8) << 1))
        });
    }

    /// Sleeps until the next interrupt; timers keep running in idle.
    pub fn enter_idle_mode(&mut self) {
        self.set_sleep_mode(SleepMode::Idle);
        self.cpu.smcr.modify(|r, w| unsafe { w.bits(r.bits() | SLEEP_ENABLE) });
        avr_device::asm::sleep();
        self.cpu.smcr.modify(|r, w| unsafe { w.bits(r.bits() & !SLEEP_ENABLE) });
    }
}
