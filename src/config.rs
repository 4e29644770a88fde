//! System configuration parameters
//!
//! Fixed timing and device constants for the monitor.  Nothing here is
//! loaded at runtime; [`MonitorConfig`] only exists so the values travel
//! together, can be validated once at boot, and can be dumped to the
//! diagnostic log.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Quiet interval after the last sound detection before the sound state
/// falls back to "No Sound".
pub const SOUND_HOLD_MS: u64 = 5000;

/// How long the start-up splash stays on screen before polling begins.
pub const SPLASH_HOLD_MS: u32 = 2000;

/// Diagnostic serial console rate.
pub const SERIAL_BAUD: u32 = 115_200;

/// 7-bit I²C address of the PCF8574 LCD backpack.
pub const LCD_I2C_ADDR: u8 = 0x27;
pub const LCD_COLS: u8 = 16;
pub const LCD_ROWS: u8 = 2;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
    // --- Timing ---
    /// Sound latch hold time (milliseconds)
    pub sound_hold_ms: u64,
    /// Start-up splash pause (milliseconds)
    pub splash_hold_ms: u32,
    /// Per-iteration yield to the RTOS (milliseconds)
    pub poll_yield_ms: u32,

    // --- Diagnostics ---
    pub serial_baud: u32,

    // --- Display ---
    pub lcd_i2c_addr: u8,
    pub lcd_cols: u8,
    pub lcd_rows: u8,
    /// I²C bus clock (Hz)
    pub i2c_baud_hz: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            // Timing
            sound_hold_ms: SOUND_HOLD_MS,
            splash_hold_ms: SPLASH_HOLD_MS,
            poll_yield_ms: 1,

            // Diagnostics
            serial_baud: SERIAL_BAUD,

            // Display
            lcd_i2c_addr: LCD_I2C_ADDR,
            lcd_cols: LCD_COLS,
            lcd_rows: LCD_ROWS,
            i2c_baud_hz: 100_000, // standard mode, PCF8574 max
        }
    }
}

impl MonitorConfig {
    /// Reject values the hardware or the status text cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.sound_hold_ms == 0 {
            return Err(Error::Config("sound_hold_ms must be non-zero"));
        }
        if self.lcd_i2c_addr > 0x7F {
            return Err(Error::Config("lcd_i2c_addr is not a 7-bit address"));
        }
        // Status lines are placed on rows 0 and 1; the longest is 16 chars.
        if self.lcd_rows < 2 || self.lcd_rows > 4 {
            return Err(Error::Config("lcd_rows must be 2..=4"));
        }
        if self.lcd_cols < 16 || self.lcd_cols > 40 {
            return Err(Error::Config("lcd_cols must be 16..=40"));
        }
        if self.i2c_baud_hz == 0 || self.i2c_baud_hz > 400_000 {
            return Err(Error::Config("i2c_baud_hz must be 1..=400000"));
        }
        Ok(())
    }
}
