//! Viewport visibility tracking
//!
//! Consumes host-reported intersection events and decides when an element
//! counts as revealed. One-shot trackers latch: once seen they stay seen no
//! matter what the viewport does afterwards, which is what entrance
//! animations want.

use unfurl_animation::{ConfigError, Result};

/// Whether an element has met its reveal threshold
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Never met the threshold (or slipped back below it, for live trackers)
    Unseen,
    /// Met the threshold
    Seen,
}

/// Configuration for a visibility tracker
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackerConfig {
    threshold: f32,
    once: bool,
}

impl TrackerConfig {
    /// Reveal when the intersection ratio reaches `threshold` (0.0..=1.0)
    pub fn new(threshold: f32) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "threshold",
                value: threshold,
            });
        }
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }
        Ok(Self {
            threshold,
            once: false,
        })
    }

    /// Latch on first reveal; later exits keep the element seen
    pub fn once(mut self) -> Self {
        self.once = true;
        self
    }

    /// The configured reveal threshold
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether the tracker latches on first reveal
    pub fn is_once(&self) -> bool {
        self.once
    }
}

/// Tracks one element's visibility against its threshold
#[derive(Clone, Copy, Debug)]
pub struct VisibilityTracker {
    config: TrackerConfig,
    state: Visibility,
}

impl VisibilityTracker {
    /// Start tracking in the unseen state
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: Visibility::Unseen,
        }
    }

    /// Current state
    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Feed a host intersection report; returns the new state when it changes
    ///
    /// An element meets its threshold while `is_intersecting` and the ratio
    /// is at least the configured threshold (plain `>=`, so a threshold of
    /// 1.0 fires on exact full intersection). Non-finite ratios are dropped.
    pub fn observe(&mut self, ratio: f32, is_intersecting: bool) -> Option<Visibility> {
        if !ratio.is_finite() {
            tracing::debug!(ratio, "ignoring non-finite intersection ratio");
            return None;
        }
        let meets = is_intersecting && ratio >= self.config.threshold;
        let next = match (self.state, meets) {
            (Visibility::Unseen, true) => Visibility::Seen,
            (Visibility::Seen, false) if !self.config.once => Visibility::Unseen,
            (current, _) => current,
        };
        if next == self.state {
            None
        } else {
            self.state = next;
            Some(next)
        }
    }
}
