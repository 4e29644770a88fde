//! Domain events emitted by the monitor through the
//! [`EventSink`](super::ports::EventSink) port.

use crate::error::DisplayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorEvent {
    /// Start-up finished; polling begins.
    Started,
    /// The latched motion state flipped.
    MotionChanged(bool),
    /// The latched sound state flipped.
    SoundChanged(bool),
    /// New status text reached the display.
    DisplayRedrawn,
    /// A display command failed; the next poll retries the redraw.
    DisplayFault(DisplayError),
}
