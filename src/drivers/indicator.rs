//! Single-colour indicator LED on a push-pull GPIO.
//!
//! Dumb actuator: lit while motion is detected.  Tracks the last level it
//! successfully wrote so callers can query it without reading the pin back.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{Error, Result};

pub struct IndicatorLed<P> {
    pin: P,
    lit: bool,
}

impl<P: OutputPin> IndicatorLed<P> {
    /// Take ownership of the pin and drive it low.
    pub fn new(mut pin: P) -> Result<Self> {
        pin.set_low().map_err(|_| Error::Init("indicator GPIO"))?;
        Ok(Self { pin, lit: false })
    }

    pub fn set(&mut self, on: bool) -> Result<()> {
        self.pin
            .set_state(PinState::from(on))
            .map_err(|_| Error::Indicator)?;
        self.lit = on;
        Ok(())
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
