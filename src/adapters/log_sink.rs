//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one line per monitor event to the
//! logger (the ESP-IDF console UART in production).

use log::{info, warn};

use crate::app::events::MonitorEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`MonitorEvent`] to the serial console.
#[derive(Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &MonitorEvent) {
        match event {
            MonitorEvent::Started => {
                info!("START | polling");
            }
            MonitorEvent::MotionChanged(detected) => {
                info!("MOTION | {}", if *detected { "detected" } else { "clear" });
            }
            MonitorEvent::SoundChanged(detected) => {
                info!("SOUND | {}", if *detected { "detected" } else { "quiet" });
            }
            MonitorEvent::DisplayRedrawn => {
                log::debug!("LCD | redrawn");
            }
            MonitorEvent::DisplayFault(e) => {
                warn!("LCD | fault: {}", e);
            }
        }
    }
}
