//! Virtual time source
//!
//! Nothing in unfurl reads wall-clock time. Hosts advance a [`Clock`] from
//! their frame loop; tests advance it in exact steps. Identical event and
//! advance sequences therefore produce identical published frames.

/// A manually advanced, monotonic clock measured in milliseconds
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Clock {
    now_ms: f32,
}

impl Clock {
    /// Create a clock at time zero
    pub fn new() -> Self {
        Self { now_ms: 0.0 }
    }

    /// Current time in milliseconds
    pub fn now_ms(&self) -> f32 {
        self.now_ms
    }

    /// Advance by a delta; non-finite and non-positive deltas are ignored
    pub fn advance(&mut self, dt_ms: f32) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.now_ms += dt_ms;
        }
    }

    /// Jump forward to an absolute time; the clock never moves backwards
    pub fn set(&mut self, now_ms: f32) {
        if now_ms.is_finite() && now_ms > self.now_ms {
            self.now_ms = now_ms;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = Clock::new();
        clock.advance(16.0);
        clock.advance(16.0);
        assert!((clock.now_ms() - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let mut clock = Clock::new();
        clock.advance(100.0);
        clock.advance(-50.0);
        clock.set(20.0);
        assert!((clock.now_ms() - 100.0).abs() < 1e-6);

        clock.set(250.0);
        assert!((clock.now_ms() - 250.0).abs() < 1e-6);
    }

    #[test]
    fn test_ignores_bad_deltas() {
        let mut clock = Clock::new();
        clock.advance(f32::NAN);
        clock.advance(f32::INFINITY);
        assert_eq!(clock.now_ms(), 0.0);
    }
}
