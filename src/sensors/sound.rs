//! KY-038 sound sensor (digital D0 output).
//!
//! The comparator output only pulses while sound is above threshold, which
//! would flip the LCD back to "No Sound" before anyone could read it.  The
//! latch therefore holds a detection for a quiet interval after the last
//! high sample.
//!
//! ```text
//!  raw    ‾|_|‾‾|___________________________
//!  state  ‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾‾|_________
//!              ^ last high      ^ + hold_ms
//! ```

use embedded_hal::digital::InputPin;
use log::warn;

use crate::config::SOUND_HOLD_MS;

/// Sound state with decay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundLatch {
    detected: bool,
    last_detected_ms: u64,
    hold_ms: u64,
}

impl Default for SoundLatch {
    fn default() -> Self {
        Self::new(SOUND_HOLD_MS)
    }
}

impl SoundLatch {
    pub const fn new(hold_ms: u64) -> Self {
        Self {
            detected: false,
            last_detected_ms: 0,
            hold_ms,
        }
    }

    /// Apply one raw sample taken at `now_ms` and return the latched state.
    ///
    /// A high sample (re)arms the hold window.  The state clears only once
    /// strictly more than `hold_ms` has passed since the last high sample.
    pub fn update(&mut self, high: bool, now_ms: u64) -> bool {
        if high {
            self.detected = true;
            self.last_detected_ms = now_ms;
        } else if self.detected && now_ms.saturating_sub(self.last_detected_ms) > self.hold_ms {
            self.detected = false;
        }
        self.detected
    }

    pub fn detected(&self) -> bool {
        self.detected
    }

    /// Timestamp of the most recent high sample (0 if never triggered).
    pub fn last_detected_ms(&self) -> u64 {
        self.last_detected_ms
    }

    pub fn hold_ms(&self) -> u64 {
        self.hold_ms
    }
}

pub struct SoundSensor<P> {
    pin: P,
    latch: SoundLatch,
}

impl<P: InputPin> SoundSensor<P> {
    pub fn new(pin: P, hold_ms: u64) -> Self {
        Self {
            pin,
            latch: SoundLatch::new(hold_ms),
        }
    }

    /// Sample the pin at `now_ms` and return the latched sound state.
    ///
    /// A failed read counts as a quiet sample, so an active hold window
    /// still expires on time.
    pub fn read(&mut self, now_ms: u64) -> bool {
        let high = match self.pin.is_high() {
            Ok(high) => high,
            Err(e) => {
                warn!("Mic read failed: {:?}", e);
                false
            }
        };
        self.latch.update(high, now_ms)
    }

    pub fn detected(&self) -> bool {
        self.latch.detected()
    }
}
