//! Application core — pure monitor logic, zero direct I/O.
//!
//! The poll loop, the status text and the display diff cache live here.
//! All interaction with hardware happens through the **port traits** in
//! [`ports`], keeping this layer testable without real peripherals.

pub mod display_cache;
pub mod events;
pub mod ports;
pub mod service;
