//! Roomwatch Firmware — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter        Lcd1602          LogEventSink    │
//! │  (Sensor+Indicator)     (DisplayPort)    (EventSink)     │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ───────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │        MonitorService (pure logic)             │      │
//! │  │  latches · status text · display diff cache    │      │
//! │  └────────────────────────────────────────────────┘      │
//! │                                                          │
//! │  Esp32TimeAdapter (uptime_ms) drives every tick          │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::{Context, Result};
use esp_idf_hal::delay::{Delay, FreeRtos};
use esp_idf_hal::gpio::PinDriver;
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::info;

use roomwatch::adapters::hardware::HardwareAdapter;
use roomwatch::adapters::log_sink::LogEventSink;
use roomwatch::adapters::time::Esp32TimeAdapter;
use roomwatch::app::service::MonitorService;
use roomwatch::config::MonitorConfig;
use roomwatch::drivers::indicator::IndicatorLed;
use roomwatch::drivers::lcd1602::Lcd1602;
use roomwatch::error::Error;
use roomwatch::pins;
use roomwatch::sensors::{MotionSensor, SoundSensor};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Roomwatch v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = MonitorConfig::default();
    config.validate()?;
    info!("Config: {}", serde_json::to_string(&config)?);
    info!(
        "Pins: PIR=GPIO{} MIC=GPIO{} LED=GPIO{} SDA=GPIO{} SCL=GPIO{}",
        pins::PIR_GPIO,
        pins::MIC_GPIO,
        pins::LED_GPIO,
        pins::LCD_SDA_GPIO,
        pins::LCD_SCL_GPIO,
    );

    // ── 2. GPIO ───────────────────────────────────────────────
    // Typed pin fields must match the numbers in `pins.rs`.
    let p = Peripherals::take()?;
    let pir = PinDriver::input(p.pins.gpio12).context("PIR input")?;
    let mic = PinDriver::input(p.pins.gpio33).context("mic input")?;
    let led = PinDriver::output(p.pins.gpio32).context("LED output")?;

    let mut hw = HardwareAdapter::new(
        MotionSensor::new(pir),
        SoundSensor::new(mic, config.sound_hold_ms),
        IndicatorLed::new(led)?,
    );

    // ── 3. LCD on I²C0 ────────────────────────────────────────
    let i2c_cfg = I2cConfig::new().baudrate(Hertz(config.i2c_baud_hz));
    let i2c = I2cDriver::new(p.i2c0, p.pins.gpio26, p.pins.gpio25, &i2c_cfg)
        .context("I2C0 driver")?;

    let mut lcd = Lcd1602::new(
        i2c,
        Delay::new_default(),
        config.lcd_i2c_addr,
        config.lcd_cols,
        config.lcd_rows,
    );
    lcd.init()
        .map_err(Error::from)
        .context("LCD init (check backpack address and wiring)")?;

    // ── 4. Splash + start ─────────────────────────────────────
    let mut sink = LogEventSink::new();
    let mut app = MonitorService::new(config.clone());
    app.start(&mut lcd, &mut Delay::new_default(), &mut sink)?;

    info!(
        "Serial diagnostics at {} baud. Entering poll loop.",
        config.serial_baud
    );

    // ── 5. Poll loop ──────────────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    loop {
        app.tick(clock.uptime_ms(), &mut hw, &mut lcd, &mut sink)?;

        // Let the idle task run so the task watchdog stays fed.
        FreeRtos::delay_ms(config.poll_yield_ms);
    }
}
