//! Port traits — the boundary between the monitor logic and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MonitorService (domain)
//! ```
//!
//! Driven adapters (sensors, indicator, display, event sinks) implement
//! these traits.  [`MonitorService`](super::service::MonitorService)
//! consumes them via generics, so the poll logic never touches a pin or a
//! bus directly and runs unchanged against test doubles.

use crate::error::DisplayError;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the latched sensor states.
pub trait SensorPort {
    /// Sample the motion input; the result follows the raw level.
    fn read_motion(&mut self) -> bool;

    /// Sample the sound input at `now_ms`; the result holds for the decay
    /// window after the last detection.
    fn read_sound(&mut self, now_ms: u64) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Indicator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

pub trait IndicatorPort {
    /// Drive the indicator output high (`true`) or low.
    fn set_indicator(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → character display)
// ───────────────────────────────────────────────────────────────

/// Minimal character-display primitives.
pub trait DisplayPort {
    /// Blank the screen and home the cursor.
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Move the cursor to `row`, `col` (both zero-based).
    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError>;

    /// Write text starting at the cursor.
    fn write_str(&mut self, text: &str) -> Result<(), DisplayError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits [`MonitorEvent`](super::events::MonitorEvent)s
/// through this port; adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::MonitorEvent);
}
