//! Scroll-linked property mapping
//!
//! A pure, clamped, piecewise-linear mapping from the page scroll offset to
//! a property value. No smoothing and no state: sampling the same offset
//! twice gives the same value, and sampling is allocation-free.

use smallvec::SmallVec;
use unfurl_animation::{ConfigError, Result};

/// Clamped piecewise-linear mapping from scroll offsets to property values
///
/// Domain stops must be strictly increasing; range values may run in either
/// direction (parallax mappings usually decrease).
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollMapping {
    domain: SmallVec<[f32; 2]>,
    range: SmallVec<[f32; 2]>,
}

impl ScrollMapping {
    /// Two-stop mapping from domain `[d0, d1]` to range `[r0, r1]`
    pub fn new(domain: [f32; 2], range: [f32; 2]) -> Result<Self> {
        Self::with_stops(&domain, &range)
    }

    /// Piecewise mapping across matched stop lists
    pub fn with_stops(domain: &[f32], range: &[f32]) -> Result<Self> {
        if domain.len() < 2 {
            return Err(ConfigError::TooFewStops(domain.len()));
        }
        if domain.len() != range.len() {
            return Err(ConfigError::StopCountMismatch {
                domain: domain.len(),
                range: range.len(),
            });
        }
        for &value in domain.iter().chain(range) {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite {
                    what: "mapping stop",
                    value,
                });
            }
        }
        for pair in domain.windows(2) {
            if pair[1] <= pair[0] {
                return Err(ConfigError::DomainNotIncreasing {
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self {
            domain: SmallVec::from_slice(domain),
            range: SmallVec::from_slice(range),
        })
    }

    /// Map an offset; outside the domain the edge values hold exactly
    pub fn map(&self, offset: f32) -> f32 {
        if offset <= self.domain[0] {
            return self.range[0];
        }
        let last = self.domain.len() - 1;
        if offset >= self.domain[last] {
            return self.range[last];
        }
        for i in 1..=last {
            if offset <= self.domain[i] {
                let span = self.domain[i] - self.domain[i - 1];
                let t = (offset - self.domain[i - 1]) / span;
                return self.range[i - 1] + (self.range[i] - self.range[i - 1]) * t;
            }
        }
        self.range[last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parallax_mapping_points() {
        let mapping = ScrollMapping::new([0.0, 300.0], [0.0, -50.0]).unwrap();
        assert_eq!(mapping.map(0.0), 0.0);
        assert_eq!(mapping.map(300.0), -50.0);
        assert_eq!(mapping.map(600.0), -50.0);
        assert_eq!(mapping.map(150.0), -25.0);
    }

    #[test]
    fn test_clamps_below_domain() {
        let mapping = ScrollMapping::new([100.0, 200.0], [10.0, 20.0]).unwrap();
        assert_eq!(mapping.map(-500.0), 10.0);
        assert_eq!(mapping.map(99.9), 10.0);
    }

    #[test]
    fn test_monotonic_inside_domain() {
        let mapping = ScrollMapping::new([0.0, 300.0], [0.0, -50.0]).unwrap();
        let mut prev = mapping.map(0.0);
        for i in 1..=60 {
            let next = mapping.map(i as f32 * 5.0);
            assert!(next <= prev);
            prev = next;
        }
    }

    #[test]
    fn test_multi_stop_segments() {
        // Dip to -50 by 300px, recover to 0 by 600px
        let mapping =
            ScrollMapping::with_stops(&[0.0, 300.0, 600.0], &[0.0, -50.0, 0.0]).unwrap();
        assert_eq!(mapping.map(150.0), -25.0);
        assert_eq!(mapping.map(300.0), -50.0);
        assert_eq!(mapping.map(450.0), -25.0);
        assert_eq!(mapping.map(600.0), 0.0);
        assert_eq!(mapping.map(900.0), 0.0);
    }

    #[test]
    fn test_rejects_bad_stops() {
        assert!(matches!(
            ScrollMapping::with_stops(&[0.0], &[0.0]),
            Err(ConfigError::TooFewStops(1))
        ));
        assert!(matches!(
            ScrollMapping::with_stops(&[0.0, 100.0], &[0.0]),
            Err(ConfigError::StopCountMismatch { .. })
        ));
        assert!(matches!(
            ScrollMapping::with_stops(&[0.0, 0.0], &[0.0, 1.0]),
            Err(ConfigError::DomainNotIncreasing { .. })
        ));
        assert!(matches!(
            ScrollMapping::with_stops(&[300.0, 0.0], &[0.0, 1.0]),
            Err(ConfigError::DomainNotIncreasing { .. })
        ));
        assert!(matches!(
            ScrollMapping::with_stops(&[0.0, f32::NAN], &[0.0, 1.0]),
            Err(ConfigError::NonFinite { .. })
        ));
    }
}
