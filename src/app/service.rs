//! Monitor service — the control loop core.
//!
//! [`MonitorService`] owns everything the loop remembers between polls:
//! the lifecycle phase, the last reported sensor states and the display
//! diff cache.  All I/O flows through port traits injected at call sites,
//! and time arrives as a plain `now_ms` argument, so a test can drive the
//! loop tick by tick with a fake clock.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────┐ ──▶ IndicatorPort
//!                 │    MonitorService    │ ──▶ DisplayCache ──▶ DisplayPort
//!   now_ms ─────▶ └──────────────────────┘ ──▶ EventSink
//! ```

use embedded_hal::delay::DelayNs;
use log::{info, warn};

use crate::config::MonitorConfig;
use crate::error::{Error, Result};

use super::display_cache::DisplayCache;
use super::events::MonitorEvent;
use super::ports::{DisplayPort, EventSink, IndicatorPort, SensorPort};

// ── Status text ───────────────────────────────────────────────

pub const SPLASH_TOP: &str = "System Initialized";
pub const SPLASH_BOTTOM: &str = "No Sound";

pub const MOTION_DETECTED: &str = "Motion Detected!";
pub const NO_MOTION: &str = "No Motion";
pub const SOUND_DETECTED: &str = "Sound Detected!";
pub const NO_SOUND: &str = "No Sound";

/// Row 0 / row 1 text for a pair of sensor states.
pub fn status_lines(motion: bool, sound: bool) -> (&'static str, &'static str) {
    (
        if motion { MOTION_DETECTED } else { NO_MOTION },
        if sound { SOUND_DETECTED } else { NO_SOUND },
    )
}

// ───────────────────────────────────────────────────────────────
// MonitorService
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, splash not shown yet.
    Uninitialized,
    /// Start-up done; every call to `tick` is one poll.
    Ready,
}

/// Outcome of one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollReport {
    pub motion: bool,
    pub sound: bool,
    /// The display was rewritten during this poll.
    pub redrawn: bool,
}

pub struct MonitorService {
    config: MonitorConfig,
    phase: Phase,
    cache: DisplayCache,
    motion: bool,
    sound: bool,
    display_faulted: bool,
    poll_count: u64,
}

impl MonitorService {
    /// Construct the service.  Does **not** touch the display — call
    /// [`start`](Self::start) next.
    pub fn new(config: MonitorConfig) -> Self {
        Self {
            config,
            phase: Phase::Uninitialized,
            cache: DisplayCache::new(),
            motion: false,
            sound: false,
            display_faulted: false,
            poll_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Show the start-up splash, hold it for `splash_hold_ms`, then enter
    /// [`Phase::Ready`].
    ///
    /// Pins and the display controller must already be initialised by
    /// their drivers.  A display error here is fatal to start-up.
    pub fn start(
        &mut self,
        display: &mut impl DisplayPort,
        delay: &mut impl DelayNs,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if self.phase == Phase::Ready {
            warn!("MonitorService already started");
            return Ok(());
        }

        // Whatever was on screen before reset is unknown to the cache.
        display.clear()?;
        self.cache.invalidate();
        self.cache.update(display, SPLASH_TOP, SPLASH_BOTTOM)?;
        info!("{}", SPLASH_TOP);

        delay.delay_ms(self.config.splash_hold_ms);

        self.phase = Phase::Ready;
        sink.emit(&MonitorEvent::Started);
        Ok(())
    }

    // ── Per-poll orchestration ────────────────────────────────

    /// Run one poll: sensors → indicator → display.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`IndicatorPort`], mirroring how one adapter owns all the pins.
    /// Display failures are reported through `sink` and retried on the
    /// next poll; they never abort the loop.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl SensorPort + IndicatorPort),
        display: &mut impl DisplayPort,
        sink: &mut impl EventSink,
    ) -> Result<PollReport> {
        if self.phase != Phase::Ready {
            return Err(Error::NotStarted);
        }
        self.poll_count += 1;

        // 1-2. Sample both sensors
        let motion = hw.read_motion();
        let sound = hw.read_sound(now_ms);

        if motion != self.motion {
            self.motion = motion;
            sink.emit(&MonitorEvent::MotionChanged(motion));
        }
        if sound != self.sound {
            self.sound = sound;
            sink.emit(&MonitorEvent::SoundChanged(sound));
        }

        // 3. Derive text
        let (top, bottom) = status_lines(motion, sound);

        // 4. Indicator follows motion
        hw.set_indicator(motion);

        // 5. Push through the diff cache
        let redrawn = match self.cache.update(display, top, bottom) {
            Ok(redrawn) => {
                if self.display_faulted {
                    self.display_faulted = false;
                    info!("Display recovered");
                }
                if redrawn {
                    sink.emit(&MonitorEvent::DisplayRedrawn);
                }
                redrawn
            }
            Err(e) => {
                // Report once per outage; the loop keeps retrying silently.
                if !self.display_faulted {
                    self.display_faulted = true;
                    sink.emit(&MonitorEvent::DisplayFault(e));
                }
                false
            }
        };

        Ok(PollReport {
            motion,
            sound,
            redrawn,
        })
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Polls executed since start-up.
    pub fn poll_count(&self) -> u64 {
        self.poll_count
    }

    pub fn motion(&self) -> bool {
        self.motion
    }

    pub fn sound(&self) -> bool {
        self.sound
    }

    /// Text currently known to be on screen.
    pub fn displayed(&self) -> Option<(&str, &str)> {
        self.cache.lines()
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }
}
