//! HD44780 character LCD behind a PCF8574 I²C backpack.
//!
//! The backpack maps the expander's eight outputs onto the LCD bus:
//!
//! | PCF8574 | P7..P4 | P3        | P2 | P1 | P0 |
//! |---------|--------|-----------|----|----|----|
//! | LCD     | D7..D4 | backlight | EN | RW | RS |
//!
//! so every byte is sent as two 4-bit nibbles, each latched by pulsing EN.
//! RW is never driven (write-only).  Generic over `embedded-hal` 1.0 I²C
//! and delay traits so it runs on ESP-IDF and against mocks on the host.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c};
use log::debug;

use crate::app::ports::DisplayPort;
use crate::error::DisplayError;

// ── HD44780 instruction set ───────────────────────────────────

const CMD_CLEAR: u8 = 0x01;
const CMD_HOME: u8 = 0x02;
const CMD_ENTRY_MODE: u8 = 0x04;
const CMD_DISPLAY_CONTROL: u8 = 0x08;
const CMD_FUNCTION_SET: u8 = 0x20;
const CMD_SET_DDRAM: u8 = 0x80;

const ENTRY_LEFT: u8 = 0x02;
const DISPLAY_ON: u8 = 0x04;
const TWO_LINE: u8 = 0x08;

/// DDRAM start address of each row.
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

// ── PCF8574 bit assignments ───────────────────────────────────

const RS: u8 = 0x01;
const EN: u8 = 0x04;
const BACKLIGHT: u8 = 0x08;

pub struct Lcd1602<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    cols: u8,
    rows: u8,
    backlight: u8,
    cursor_col: u8,
}

impl<I2C: I2c, D: DelayNs> Lcd1602<I2C, D> {
    /// Wrap the bus.  Does not touch the hardware; call [`init`](Self::init).
    pub fn new(i2c: I2C, delay: D, address: u8, cols: u8, rows: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
            cols,
            rows: rows.min(ROW_OFFSETS.len() as u8),
            backlight: BACKLIGHT,
            cursor_col: 0,
        }
    }

    /// Run the 4-bit power-on sequence and leave the display cleared,
    /// cursor hidden, backlight on.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        // Vcc must be above 2.7 V for 40 ms before the first command.
        self.delay.delay_ms(50);
        self.expander_write(0)?;

        // Three "8-bit mode" nibbles resynchronise the controller whatever
        // state it powered up in, then switch to 4-bit.
        for wait_us in [4500, 4500, 150] {
            self.write_nibble(0x30)?;
            self.delay.delay_us(wait_us);
        }
        self.write_nibble(0x20)?;

        self.command(CMD_FUNCTION_SET | TWO_LINE)?;
        self.command(CMD_DISPLAY_CONTROL | DISPLAY_ON)?;
        self.clear_screen()?;
        self.command(CMD_ENTRY_MODE | ENTRY_LEFT)?;
        self.command(CMD_HOME)?;
        self.delay.delay_us(2000);

        debug!(
            "lcd: ready at 0x{:02x} ({}x{})",
            self.address, self.cols, self.rows
        );
        Ok(())
    }

    pub fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError> {
        self.backlight = if on { BACKLIGHT } else { 0 };
        self.expander_write(0)
    }

    pub fn backlight_on(&self) -> bool {
        self.backlight != 0
    }

    /// Give the bus back (e.g. to share it with another device).
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    // ── Internal ──────────────────────────────────────────────

    fn clear_screen(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        // Clear is the slowest instruction (1.52 ms).
        self.delay.delay_us(2000);
        self.cursor_col = 0;
        Ok(())
    }

    fn command(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, 0)
    }

    fn data(&mut self, value: u8) -> Result<(), DisplayError> {
        self.send(value, RS)
    }

    fn send(&mut self, value: u8, mode: u8) -> Result<(), DisplayError> {
        self.write_nibble((value & 0xF0) | mode)?;
        self.write_nibble(((value << 4) & 0xF0) | mode)
    }

    fn write_nibble(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.expander_write(bits)?;
        self.expander_write(bits | EN)?;
        self.delay.delay_us(1);
        self.expander_write(bits & !EN)?;
        // Commands need > 37 µs to settle.
        self.delay.delay_us(50);
        Ok(())
    }

    fn expander_write(&mut self, bits: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[bits | self.backlight])
            .map_err(|e| DisplayError::Bus(e.kind()))
    }
}

/// Map a char onto the HD44780 A00 character ROM.  Only the printable
/// ASCII range matches; everything else shows as `?`.
fn rom_code(c: char) -> u8 {
    match c {
        ' '..='}' => c as u8,
        _ => b'?',
    }
}

impl<I2C: I2c, D: DelayNs> DisplayPort for Lcd1602<I2C, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.clear_screen()
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= self.rows || col >= self.cols {
            return Err(DisplayError::CursorOutOfRange { row, col });
        }
        self.command(CMD_SET_DDRAM | (col + ROW_OFFSETS[row as usize]))?;
        self.cursor_col = col;
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        for c in text.chars() {
            // Anything past the last column would land in invisible DDRAM.
            if self.cursor_col >= self.cols {
                break;
            }
            self.data(rom_code(c))?;
            self.cursor_col += 1;
        }
        Ok(())
    }
}
