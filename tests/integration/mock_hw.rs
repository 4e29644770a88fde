//! Mock peripherals for integration tests.
//!
//! Pins share their level through `Rc<Cell<_>>` so a test can flip a
//! sensor input or inspect the LED after the pin has been moved into the
//! real [`HardwareAdapter`].  The display records every call and keeps a
//! model of what a 16x2 panel would show.

use std::cell::Cell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorType, InputPin, OutputPin};
use roomwatch::adapters::hardware::HardwareAdapter;
use roomwatch::app::events::MonitorEvent;
use roomwatch::app::ports::{DisplayPort, EventSink};
use roomwatch::app::service::MonitorService;
use roomwatch::config::MonitorConfig;
use roomwatch::drivers::indicator::IndicatorLed;
use roomwatch::error::DisplayError;
use roomwatch::sensors::{MotionSensor, SoundSensor};

// ── Pins ──────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockInput {
    pub level: Rc<Cell<bool>>,
    pub broken: Rc<Cell<bool>>,
}

impl ErrorType for MockInput {
    type Error = digital::ErrorKind;
}

impl InputPin for MockInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.broken.get() {
            return Err(digital::ErrorKind::Other);
        }
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

#[derive(Clone, Default)]
pub struct MockOutput {
    pub level: Rc<Cell<bool>>,
}

impl ErrorType for MockOutput {
    type Error = digital::ErrorKind;
}

impl OutputPin for MockOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.level.set(true);
        Ok(())
    }
}

// ── Display ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayCall {
    Clear,
    SetCursor { row: u8, col: u8 },
    Write(String),
}

pub struct MockDisplay {
    pub calls: Vec<DisplayCall>,
    pub rows: [String; 2],
    pub fail: bool,
    cursor: (usize, usize),
}

#[allow(dead_code)]
impl MockDisplay {
    pub const COLS: usize = 16;

    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            rows: [String::new(), String::new()],
            fail: false,
            cursor: (0, 0),
        }
    }

    pub fn clear_count(&self) -> usize {
        self.calls.iter().filter(|c| **c == DisplayCall::Clear).count()
    }

    /// What a person standing in front of the panel would read.
    pub fn visible(&self) -> (&str, &str) {
        (self.rows[0].as_str(), self.rows[1].as_str())
    }

    fn check(&self) -> Result<(), DisplayError> {
        if self.fail {
            Err(DisplayError::Bus(embedded_hal::i2c::ErrorKind::NoAcknowledge(
                embedded_hal::i2c::NoAcknowledgeSource::Address,
            )))
        } else {
            Ok(())
        }
    }
}

impl Default for MockDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for MockDisplay {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.calls.push(DisplayCall::Clear);
        self.rows = [String::new(), String::new()];
        self.cursor = (0, 0);
        Ok(())
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        self.check()?;
        self.calls.push(DisplayCall::SetCursor { row, col });
        self.cursor = (row as usize, col as usize);
        Ok(())
    }

    fn write_str(&mut self, text: &str) -> Result<(), DisplayError> {
        self.check()?;
        self.calls.push(DisplayCall::Write(text.to_string()));
        let (row, col) = self.cursor;
        let mut cells: Vec<char> = self.rows[row].chars().collect();
        if cells.len() < col {
            cells.resize(col, ' ');
        }
        let mut written = 0;
        for (i, c) in text.chars().take(Self::COLS.saturating_sub(col)).enumerate() {
            match cells.get_mut(col + i) {
                Some(cell) => *cell = c,
                None => cells.push(c),
            }
            written += 1;
        }
        self.rows[row] = cells.into_iter().collect();
        self.cursor.1 = col + written;
        Ok(())
    }
}

// ── Delay ─────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
}

#[allow(dead_code)]
impl MockDelay {
    pub fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<MonitorEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &MonitorEvent) {
        self.events.push(*event);
    }
}

// ── Rig: real adapter + service over mock pins ────────────────

pub type MockHardware = HardwareAdapter<MockInput, MockInput, MockOutput>;

pub struct Rig {
    pub motion: MockInput,
    pub sound: MockInput,
    pub led: MockOutput,
    pub hw: MockHardware,
    pub lcd: MockDisplay,
    pub delay: MockDelay,
    pub sink: RecordingSink,
    pub app: MonitorService,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        let config = MonitorConfig::default();
        let motion = MockInput::default();
        let sound = MockInput::default();
        let led = MockOutput::default();
        let hw = HardwareAdapter::new(
            MotionSensor::new(motion.clone()),
            SoundSensor::new(sound.clone(), config.sound_hold_ms),
            IndicatorLed::new(led.clone()).unwrap(),
        );
        Self {
            motion,
            sound,
            led,
            hw,
            lcd: MockDisplay::new(),
            delay: MockDelay::default(),
            sink: RecordingSink::default(),
            app: MonitorService::new(config),
        }
    }

    /// A rig that has already shown the splash and entered polling.
    pub fn started() -> Self {
        let mut rig = Self::new();
        rig.app
            .start(&mut rig.lcd, &mut rig.delay, &mut rig.sink)
            .unwrap();
        rig.lcd.calls.clear();
        rig.sink.events.clear();
        rig
    }

    pub fn set_motion(&self, high: bool) {
        self.motion.level.set(high);
    }

    pub fn set_sound(&self, high: bool) {
        self.sound.level.set(high);
    }

    pub fn led_on(&self) -> bool {
        self.led.level.get()
    }

    pub fn tick(&mut self, now_ms: u64) -> roomwatch::app::service::PollReport {
        self.app
            .tick(now_ms, &mut self.hw, &mut self.lcd, &mut self.sink)
            .unwrap()
    }
}
