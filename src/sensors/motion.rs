//! HC-SR501 PIR motion sensor.
//!
//! The module already holds its output high for its own trim-pot delay, so
//! the firmware applies no extra debounce: the latched state follows the
//! raw level on every poll.

use embedded_hal::digital::InputPin;
use log::warn;

/// Motion state: true while the PIR output is high.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MotionLatch {
    detected: bool,
}

impl MotionLatch {
    pub const fn new() -> Self {
        Self { detected: false }
    }

    /// Apply one raw sample and return the latched state.
    pub fn update(&mut self, high: bool) -> bool {
        self.detected = high;
        self.detected
    }

    pub fn detected(&self) -> bool {
        self.detected
    }
}

pub struct MotionSensor<P> {
    pin: P,
    latch: MotionLatch,
}

impl<P: InputPin> MotionSensor<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            latch: MotionLatch::new(),
        }
    }

    /// Sample the pin and return the latched motion state.
    ///
    /// A failed read keeps the previous state.
    pub fn read(&mut self) -> bool {
        match self.pin.is_high() {
            Ok(high) => self.latch.update(high),
            Err(e) => {
                warn!("PIR read failed: {:?}", e);
                self.latch.detected()
            }
        }
    }

    pub fn detected(&self) -> bool {
        self.latch.detected()
    }
}
