//! GPIO / peripheral pin assignments for the Roomwatch board (ESP32 DevKit).
//!
//! Single source of truth — the firmware entry point references this module
//! rather than hard-coding pin numbers.  On a different board (e.g. an
//! ATmega-class Uno clone) these are the only values that need to change.

// ---------------------------------------------------------------------------
// Sensors — Digital
// ---------------------------------------------------------------------------

/// HC-SR501 PIR motion sensor, middle (OUT) pin.  HIGH = motion.
pub const PIR_GPIO: i32 = 12;

/// KY-038 microphone module, D0 (comparator) output.  HIGH = sound above
/// the module's trim-pot threshold.
pub const MIC_GPIO: i32 = 33;

// ---------------------------------------------------------------------------
// Indicator LED (long leg to pin, short leg to GND)
// ---------------------------------------------------------------------------

pub const LED_GPIO: i32 = 32;

// ---------------------------------------------------------------------------
// I²C bus — PCF8574 backpack on the 16x2 LCD
// ---------------------------------------------------------------------------

pub const LCD_SDA_GPIO: i32 = 26;
pub const LCD_SCL_GPIO: i32 = 25;
