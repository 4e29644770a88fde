//! Hardware adapter — bridges the GPIO drivers to the domain port traits.
//!
//! Owns both sensor readers and the indicator driver, exposing them
//! through [`SensorPort`] and [`IndicatorPort`].  Generic over the
//! `embedded-hal` pin traits: ESP-IDF `PinDriver`s on target, plain test
//! doubles on the host.

use embedded_hal::digital::{InputPin, OutputPin};
use log::warn;

use crate::app::ports::{IndicatorPort, SensorPort};
use crate::drivers::indicator::IndicatorLed;
use crate::sensors::{MotionSensor, SoundSensor};

/// Concrete adapter that combines all GPIO behind port traits.
pub struct HardwareAdapter<M, S, L> {
    motion: MotionSensor<M>,
    sound: SoundSensor<S>,
    indicator: IndicatorLed<L>,
}

impl<M, S, L> HardwareAdapter<M, S, L>
where
    M: InputPin,
    S: InputPin,
    L: OutputPin,
{
    pub fn new(motion: MotionSensor<M>, sound: SoundSensor<S>, indicator: IndicatorLed<L>) -> Self {
        Self {
            motion,
            sound,
            indicator,
        }
    }

    pub fn indicator_lit(&self) -> bool {
        self.indicator.is_lit()
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<M, S, L> SensorPort for HardwareAdapter<M, S, L>
where
    M: InputPin,
    S: InputPin,
    L: OutputPin,
{
    fn read_motion(&mut self) -> bool {
        self.motion.read()
    }

    fn read_sound(&mut self, now_ms: u64) -> bool {
        self.sound.read(now_ms)
    }
}

// ── IndicatorPort implementation ──────────────────────────────

impl<M, S, L> IndicatorPort for HardwareAdapter<M, S, L>
where
    M: InputPin,
    S: InputPin,
    L: OutputPin,
{
    fn set_indicator(&mut self, on: bool) {
        if let Err(e) = self.indicator.set(on) {
            warn!("LED write failed: {}", e);
        }
    }
}
