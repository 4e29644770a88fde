//! Sensor subsystem — the two digital sensor readers.
//!
//! Each reader owns its input pin and a latch that turns the instantaneous
//! level into the state the control loop reports.  The latches are plain
//! values with no pin attached, so the latching rules are testable without
//! any GPIO mock.

pub mod motion;
pub mod sound;

pub use motion::{MotionLatch, MotionSensor};
pub use sound::{SoundLatch, SoundSensor};
