//! Roomwatch firmware library.
//!
//! Exposes the pure-logic modules for integration testing.  Nothing here
//! depends on ESP-IDF: drivers are generic over the `embedded-hal` 1.0
//! traits and the ESP-specific wiring lives in `main.rs`.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod pins;
pub mod sensors;
