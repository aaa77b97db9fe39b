#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

#[cfg(target_arch = "avr")]
mod firmware {
    use panic_halt as _;

    use avr_device::atmega328p::Peripherals;
    use avr_device::interrupt::{self, Mutex};
    use core::cell::RefCell;

    use hokey_firmware::config::{
        FRAME_TIMER_PRESCALE, FRAME_TIMER_TOP, HIGH_SCORE_ADDRESS,
    };
    use hokey_firmware::drivers::{
        BarIndicator, Board, ButtonHandler, HighScoreStore, MultiplexedDisplay, SevenSegment,
    };
    use hokey_firmware::hal::{AnyPin, EepromCell, FrameTimer, Input, Output, Pins, Power, Prescaler};
    use hokey_firmware::Application;

    type App = Application<AnyPin<Output>, AnyPin<Input>, EepromCell>;

    const FRAME_PRESCALER: Prescaler = Prescaler::Div64;
    const _: () = assert!(FRAME_PRESCALER.divisor() == FRAME_TIMER_PRESCALE);

    // Owned by the frame interrupt once interrupts are on
    static APP: Mutex<RefCell<Option<App>>> = Mutex::new(RefCell::new(None));

    #[avr_device::entry]
    fn main() -> ! {
        let dp = Peripherals::take().unwrap();
        let pins = Pins::new(dp.PORTB, dp.PORTC, dp.PORTD);

        // Pinout
        // Bar      PB2 PB3 PB4 PB5 PC0 PC1 PC2 PC3 PC4 PC5
        // Segment  A=PD1 B=PD0 C=PD7 D=PD6 E=PD5 F=PD3 G=PD2
        // Digit    PB7 (ones) PB6 (tens)
        // Switch   PB1 play, PB0 erase high score, PD4 show high score
        let segments = [
            pins.pd1.into_output().downgrade(),
            pins.pd0.into_output().downgrade(),
            pins.pd7.into_output().downgrade(),
            pins.pd6.into_output().downgrade(),
            pins.pd5.into_output().downgrade(),
            pins.pd3.into_output().downgrade(),
            pins.pd2.into_output().downgrade(),
        ];
        let selects = [
            pins.pb7.into_output().downgrade(),
            pins.pb6.into_output().downgrade(),
        ];
        let bar = [
            pins.pb2.into_output().downgrade(),
            pins.pb3.into_output().downgrade(),
            pins.pb4.into_output().downgrade(),
            pins.pb5.into_output().downgrade(),
            pins.pc0.into_output().downgrade(),
            pins.pc1.into_output().downgrade(),
            pins.pc2.into_output().downgrade(),
            pins.pc3.into_output().downgrade(),
            pins.pc4.into_output().downgrade(),
            pins.pc5.into_output().downgrade(),
        ];
        let buttons = ButtonHandler::new(
            pins.pb1.into_pull_up_input().downgrade(),
            pins.pd4.into_pull_up_input().downgrade(),
            pins.pb0.into_pull_up_input().downgrade(),
        );

        let cell = EepromCell::new(dp.EEPROM, HIGH_SCORE_ADDRESS);
        let high_score = HighScoreStore::load(cell).unwrap_or_else(|e| match e {});
        let board = Board {
            display: MultiplexedDisplay::new(SevenSegment::new(segments), selects),
            bar: BarIndicator::new(bar),
            buttons,
            high_score,
        };
        let app = Application::new(board).unwrap_or_else(|e| match e {});

        interrupt::free(|cs| {
            APP.borrow(cs).replace(Some(app));
        });

        let mut timer = FrameTimer::new(dp.TC0);
        timer.start(FRAME_PRESCALER, FRAME_TIMER_TOP);
        timer.enable_compare_interrupt();

        let mut power = Power::new(dp.CPU);

        // Enable interrupts globally
        unsafe { avr_device::interrupt::enable() };

        loop {
            // All work happens in TIMER0_COMPA
            power.enter_idle_mode();
        }
    }

    #[avr_device::interrupt(atmega328p)]
    fn TIMER0_COMPA() {
        interrupt::free(|cs| {
            if let Some(app) = APP.borrow(cs).borrow_mut().as_mut() {
                // Nothing to report a failure to
                app.on_tick().ok();
            }
        });
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    eprintln!("hokey_firmware only runs on AVR; use `cargo test` for the game core");
}
