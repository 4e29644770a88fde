//! Display diff cache.
//!
//! Redrawing a character LCD means clear + rewrite, which flickers
//! visibly.  The cache remembers the last two lines that reached the
//! screen and only touches the device when the text actually changes.

use heapless::String;

use super::ports::DisplayPort;
use crate::error::DisplayError;

/// One HD44780 DDRAM line; text beyond this can never be shown.
pub const LINE_CAPACITY: usize = 40;
/// Two lines plus the separator.
pub const KEY_CAPACITY: usize = 2 * LINE_CAPACITY + 1;

const SEPARATOR: char = '\n';

/// Last rendered text pair, stored as `line0 + '\n' + line1`.
///
/// `None` means the screen content is unknown (never drawn, or a redraw
/// failed part-way) and the next update must redraw.
#[derive(Debug, Default)]
pub struct DisplayCache {
    last: Option<String<KEY_CAPACITY>>,
}

impl DisplayCache {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Show `top` on row 0 and `bottom` on row 1 if they differ from what
    /// is on screen.  Returns `Ok(true)` when the device was written.
    pub fn update(
        &mut self,
        display: &mut impl DisplayPort,
        top: &str,
        bottom: &str,
    ) -> Result<bool, DisplayError> {
        let key = combined_key(top, bottom);
        if self.last.as_ref() == Some(&key) {
            return Ok(false);
        }

        // Until the redraw completes the screen may show anything.
        self.last = None;
        display.clear()?;
        display.set_cursor(0, 0)?;
        display.write_str(top)?;
        display.set_cursor(1, 0)?;
        display.write_str(bottom)?;
        self.last = Some(key);
        Ok(true)
    }

    /// Forget the cached text so the next update always redraws.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// The cached `(top, bottom)` pair, if the screen state is known.
    pub fn lines(&self) -> Option<(&str, &str)> {
        self.last
            .as_deref()
            .and_then(|key| key.split_once(SEPARATOR))
    }
}

fn combined_key(top: &str, bottom: &str) -> String<KEY_CAPACITY> {
    let mut key = String::new();
    push_clipped(&mut key, top);
    // Capacity reserves room for the separator after a full line.
    let _ = key.push(SEPARATOR);
    push_clipped(&mut key, bottom);
    key
}

/// Append at most one DDRAM line worth of `line`, stopping at a char
/// boundary.
fn push_clipped(key: &mut String<KEY_CAPACITY>, line: &str) {
    let mut used = 0;
    for c in line.chars() {
        used += c.len_utf8();
        if used > LINE_CAPACITY || key.push(c).is_err() {
            break;
        }
    }
}
