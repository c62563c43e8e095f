//! Rotation window state machine.
//!
//! Shows a fixed-size page of the filtered list and moves it forward by one
//! page on every tick, wrapping around so every entry is eventually shown.
//! The window owns no timer; the caller feeds it ticks (see
//! [`crate::ticker::RotationTicker`]).
//!
//! ## State Transitions
//!
//! ```text
//! offset = 0 --tick--> offset + window_size (mod n) --tick--> ...
//!     ^                                                          |
//!     +------------------- reset (filter change) ----------------+
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default number of entries per page.
pub const DEFAULT_WINDOW_SIZE: usize = 3;

/// Default time between page advances.
pub const DEFAULT_ROTATION_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationWindow {
    window_size: usize,
    #[serde(with = "duration_secs")]
    interval: Duration,
    /// Start of the visible page, kept reduced modulo the last known length.
    #[serde(default)]
    offset: usize,
}

impl RotationWindow {
    /// Create a window starting at offset 0.
    ///
    /// A zero window size or interval is a caller error.
    pub fn new(window_size: usize, interval: Duration) -> Result<Self, ValidationError> {
        if window_size == 0 {
            return Err(ValidationError::Zero {
                field: "window_size",
            });
        }
        if interval.is_zero() {
            return Err(ValidationError::Zero {
                field: "rotation_interval",
            });
        }
        Ok(Self {
            window_size,
            interval,
            offset: 0,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Raw offset. Read through [`Self::start_index`] for a list of known length.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Index of the first visible entry in a list of `len` entries.
    pub fn start_index(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.offset % len
        }
    }

    /// Indices of the visible entries, in display order.
    ///
    /// Yields `min(window_size, len)` distinct indices; empty when `len == 0`.
    pub fn indices(&self, len: usize) -> Vec<usize> {
        let start = self.start_index(len);
        (0..self.window_size.min(len))
            .map(|i| (start + i) % len)
            .collect()
    }

    /// The visible entries of `items`.
    pub fn page<'a, T>(&self, items: &'a [T]) -> Vec<&'a T> {
        self.indices(items.len())
            .into_iter()
            .filter_map(|i| items.get(i))
            .collect()
    }

    /// Number of ticks needed to show every entry of a `len`-entry list once.
    pub fn cycle_ticks(&self, len: usize) -> usize {
        len.div_ceil(self.window_size)
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Move forward one page. Returns `false` (and does nothing) for an
    /// empty list.
    pub fn advance(&mut self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        self.offset = (self.offset % len + self.window_size % len) % len;
        true
    }

    /// Go back to the first page.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

impl Default for RotationWindow {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            interval: DEFAULT_ROTATION_INTERVAL,
            offset: 0,
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
