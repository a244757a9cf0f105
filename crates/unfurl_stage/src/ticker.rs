//! Continuous marquee offset
//!
//! An endless wrap-around offset for marquee strips. Hosts render the strip
//! content twice and translate by the ticker offset; the wrap point is then
//! seamless.

use unfurl_animation::{ConfigError, Result};

/// Endless wrap-around offset, advanced by the frame clock
#[derive(Clone, Copy, Debug)]
pub struct Ticker {
    speed_px_s: f32,
    span_px: f32,
    offset_px: f32,
}

impl Ticker {
    /// Travel at `speed_px_s` (sign picks the direction), wrapping every `span_px`
    pub fn new(speed_px_s: f32, span_px: f32) -> Result<Self> {
        if !speed_px_s.is_finite() {
            return Err(ConfigError::NonFinite {
                what: "ticker speed",
                value: speed_px_s,
            });
        }
        if !span_px.is_finite() || span_px <= 0.0 {
            return Err(ConfigError::NonPositiveSpan(span_px));
        }
        Ok(Self {
            speed_px_s,
            span_px,
            offset_px: 0.0,
        })
    }

    /// Current offset; stays within `(-span, span)` on the travel side of zero
    pub fn offset_px(&self) -> f32 {
        self.offset_px
    }

    /// Advance by a frame delta; non-finite and non-positive deltas are ignored
    pub fn advance(&mut self, dt_ms: f32) {
        if !(dt_ms.is_finite() && dt_ms > 0.0) {
            return;
        }
        self.offset_px = (self.offset_px + self.speed_px_s * dt_ms / 1000.0) % self.span_px;
    }
}
