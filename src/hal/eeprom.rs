use avr_device::atmega328p::EEPROM;
use core::convert::Infallible;

use crate::drivers::ByteCell;

const EERE: u8 = 1 << 0;
const EEPE: u8 = 1 << 1;
const EEMPE: u8 = 1 << 2;

/// One byte of the on-chip EEPROM
pub struct EepromCell {
    eeprom: EEPROM,
    address: u16,
}

impl EepromCell {
    pub fn new(eeprom: EEPROM, address: u16) -> Self {
        Self { eeprom, address }
    }
}

impl ByteCell for EepromCell {
    type Error = Infallible;

    fn poll_ready(&mut self) -> nb::Result<(), Self::Error> {
        if self.eeprom.eecr.read().bits() & EEPE != 0 {
            return Err(nb::Error::WouldBlock);
        }
        Ok(())
    }

    fn read(&mut self) -> Result<u8, Self::Error> {
        self.eeprom.eear.write(|w| unsafe { w.bits(self.address) });
        self.eeprom.eecr.write(|w| unsafe { w.bits(EERE) });
        Ok(self.eeprom.eedr.read().bits())
    }

    fn write(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.eeprom.eear.write(|w| unsafe { w.bits(self.address) });
        self.eeprom.eedr.write(|w| unsafe { w.bits(byte) });
        // EEPE must follow EEMPE within four cycles
        avr_device::interrupt::free(|_| {
            self.eeprom.eecr.write(|w| unsafe { w.bits(EEMPE) });
            self.eeprom.eecr.write(|w| unsafe { w.bits(EEMPE | EEPE) });
        });
        Ok(())
    }
}
