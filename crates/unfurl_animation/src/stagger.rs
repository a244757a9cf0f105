//! Stagger sequencing for grouped reveals
//!
//! When a group of children reveals together, each child's window is pushed
//! back by a per-index delay so the group ripples instead of popping in at
//! once. The extra delay combines with each child's own configured delay.

/// Direction for stagger sequencing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StaggerDirection {
    /// First child starts first
    #[default]
    Forward,
    /// Last child starts first
    Reverse,
    /// Middle child starts first, rippling outward
    FromCenter,
}

/// Per-child extra delay configuration
///
/// The effective start offset of child `i` is `delay_for_index(i, total)`
/// plus the child's own delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    /// Delay between consecutive children (ms)
    pub step_ms: u32,
    /// Which end starts first
    pub direction: StaggerDirection,
    /// Optional cap on the number of distinct delay steps
    pub limit: Option<usize>,
}

impl Stagger {
    /// Stagger children by `step_ms` each, first to last
    pub fn new(step_ms: u32) -> Self {
        Self {
            step_ms,
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    /// Start from the last child
    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    /// Ripple outward from the center
    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Cap the number of distinct delay steps
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Extra delay for the child at `index` of `total`
    pub fn delay_for_index(&self, index: usize, total: usize) -> u32 {
        let effective_index = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                if index <= center {
                    center - index
                } else {
                    index - center
                }
            }
        };

        let capped_index = if let Some(limit) = self.limit {
            effective_index.min(limit)
        } else {
            effective_index
        };

        self.step_ms.saturating_mul(capped_index as u32)
    }
}
