use std::env;

fn main() {
    // Host builds only carry the game core for testing
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    if arch == "avr" {
        // Configure for ATmega328P
        println!("cargo:rustc-link-arg=-mmcu=atmega328p");
        println!("cargo:warning=Building for ATmega328P at 8MHz");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
