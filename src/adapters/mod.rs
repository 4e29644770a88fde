//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements     | Connects to                    |
//! |------------|----------------|--------------------------------|
//! | `hardware` | SensorPort     | PIR + microphone GPIO inputs   |
//! |            | IndicatorPort  | LED GPIO output                |
//! | `log_sink` | EventSink      | Serial log output              |
//! | `time`     | —              | ESP32 system timer             |
//!
//! `DisplayPort` is implemented directly by
//! [`Lcd1602`](crate::drivers::lcd1602::Lcd1602).

pub mod hardware;
pub mod log_sink;
pub mod time;
