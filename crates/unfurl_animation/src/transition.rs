//! Transition descriptors and their running state
//!
//! A [`TransitionSpec`] declares an element's initial styling plus a
//! dictionary of named states ("hidden"/"visible", "collapsed"/"expanded",
//! ...) sharing one delay/duration/easing. A [`Transition`] is the running
//! instance: decision logic retargets it whenever it picks a new state, and
//! the orchestrator samples it once per frame.
//!
//! Retargeting captures the value sampled *at the moment of the change* as
//! the new starting point, so reversing or redirecting mid-flight never
//! produces a visual jump.

use indexmap::IndexMap;

use crate::easing::Easing;
use crate::error::ConfigError;
use crate::values::{Interpolate, StyleProps};

/// Canonical state name for pre-reveal styling
pub const HIDDEN: &str = "hidden";
/// Canonical state name for the revealed look
pub const VISIBLE: &str = "visible";
/// Canonical state name for a closed accordion panel
pub const COLLAPSED: &str = "collapsed";
/// Canonical state name for an open accordion panel
pub const EXPANDED: &str = "expanded";
/// Canonical state name for the resting gesture state
pub const IDLE: &str = "idle";
/// Canonical state name while a pointer hovers
pub const HOVER: &str = "hover";
/// Canonical state name while a pointer presses
pub const PRESS: &str = "press";

const DEFAULT_DURATION_MS: u32 = 300;

/// Declarative description of an element's animated states
///
/// Immutable once built; validation happens in
/// [`TransitionSpecBuilder::build`].
#[derive(Clone, Debug)]
pub struct TransitionSpec {
    initial: StyleProps,
    states: IndexMap<Box<str>, StyleProps>,
    duration_ms: u32,
    delay_ms: u32,
    easing: Easing,
}

impl TransitionSpec {
    /// Start building from the element's initial styling
    pub fn builder(initial: StyleProps) -> TransitionSpecBuilder {
        TransitionSpecBuilder {
            initial,
            states: IndexMap::new(),
            duration_ms: DEFAULT_DURATION_MS,
            delay_ms: 0,
            easing: Easing::default(),
        }
    }

    /// The element's styling before any state change
    pub fn initial(&self) -> &StyleProps {
        &self.initial
    }

    /// Look up a named state
    pub fn state(&self, name: &str) -> Option<&StyleProps> {
        self.states.get(name)
    }

    /// Declared state names, in insertion order
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(|name| name.as_ref())
    }

    /// Tween duration in milliseconds
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Delay before the tween starts, in milliseconds
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Easing curve shared by every state change
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

/// Builder for [`TransitionSpec`]
#[derive(Clone, Debug)]
pub struct TransitionSpecBuilder {
    initial: StyleProps,
    states: IndexMap<Box<str>, StyleProps>,
    duration_ms: u32,
    delay_ms: u32,
    easing: Easing,
}

impl TransitionSpecBuilder {
    /// Add or replace a named state
    pub fn state(mut self, name: impl Into<String>, props: StyleProps) -> Self {
        self.states.insert(name.into().into_boxed_str(), props);
        self
    }

    /// Tween duration in milliseconds
    pub fn duration_ms(mut self, ms: u32) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Delay before the tween starts, in milliseconds
    pub fn delay_ms(mut self, ms: u32) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Easing curve shared by every state change
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Validate and finish
    pub fn build(self) -> Result<TransitionSpec, ConfigError> {
        self.initial.validate()?;
        for (name, props) in &self.states {
            if name.is_empty() {
                return Err(ConfigError::EmptyStateName);
            }
            props.validate()?;
        }
        Ok(TransitionSpec {
            initial: self.initial,
            states: self.states,
            duration_ms: self.duration_ms,
            delay_ms: self.delay_ms,
            easing: self.easing,
        })
    }
}

/// A running transition: one target state plus the tween window toward it
#[derive(Clone, Debug)]
pub struct Transition {
    spec: TransitionSpec,
    state: Option<Box<str>>,
    from: StyleProps,
    to: StyleProps,
    started_at_ms: Option<f32>,
    extra_delay_ms: u32,
}

impl Transition {
    /// Create a resting transition at the spec's initial styling
    pub fn new(spec: TransitionSpec) -> Self {
        let initial = *spec.initial();
        Self {
            spec,
            state: None,
            from: initial,
            to: initial,
            started_at_ms: None,
            extra_delay_ms: 0,
        }
    }

    /// The underlying descriptor
    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    /// Extra sequencing delay applied before the spec's own delay
    ///
    /// Set by stagger groups; it stays in effect for every later state
    /// change of this transition.
    pub fn set_extra_delay_ms(&mut self, ms: u32) {
        self.extra_delay_ms = ms;
    }

    /// Current extra sequencing delay in milliseconds
    pub fn extra_delay_ms(&self) -> u32 {
        self.extra_delay_ms
    }

    /// Name of the state currently targeted, if any change was requested yet
    pub fn target_state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    /// The styling the current window is heading toward
    pub fn target_props(&self) -> StyleProps {
        self.to
    }

    /// Retarget toward a named state
    ///
    /// The value sampled at `now_ms` becomes the new starting point and the
    /// delay+duration window restarts. Target fields the element has never
    /// carried appear at their target value immediately. Unknown state names
    /// leave the transition untouched.
    pub fn set_state(&mut self, name: &str, now_ms: f32) {
        let Some(target) = self.spec.state(name) else {
            tracing::warn!(state = name, "unknown transition state, ignoring");
            return;
        };
        let current = self.sample(now_ms);
        self.to = target.merge_over(&current);
        self.from = current;
        self.state = Some(name.into());
        self.started_at_ms = Some(now_ms);
    }

    /// Sample the transition at an absolute time
    ///
    /// Before any state change this is the spec's initial styling; inside
    /// the delay window it is the captured starting point; at or past the
    /// end of the window it is the stored target, returned exactly.
    pub fn sample(&self, now_ms: f32) -> StyleProps {
        let Some(start) = self.started_at_ms else {
            return self.from;
        };
        let wait_ms = self.extra_delay_ms as f32 + self.spec.delay_ms as f32;
        let elapsed = now_ms - start;
        if elapsed < wait_ms {
            return self.from;
        }
        if self.spec.duration_ms == 0 {
            return self.to;
        }
        let progress = (elapsed - wait_ms) / self.spec.duration_ms as f32;
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(&self.to, self.spec.easing.apply(progress))
    }

    /// Normalized progress of the current window at `now_ms`
    pub fn progress(&self, now_ms: f32) -> f32 {
        let Some(start) = self.started_at_ms else {
            return 0.0;
        };
        let wait_ms = self.extra_delay_ms as f32 + self.spec.delay_ms as f32;
        let elapsed = now_ms - start;
        if elapsed < wait_ms {
            return 0.0;
        }
        if self.spec.duration_ms == 0 {
            return 1.0;
        }
        ((elapsed - wait_ms) / self.spec.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Absolute time the current window completes, if one was started
    pub fn settle_at_ms(&self) -> Option<f32> {
        let start = self.started_at_ms?;
        Some(
            start
                + self.extra_delay_ms as f32
                + self.spec.delay_ms as f32
                + self.spec.duration_ms as f32,
        )
    }

    /// Whether the current window has fully settled at `now_ms`
    pub fn is_settled(&self, now_ms: f32) -> bool {
        match self.settle_at_ms() {
            Some(at) => now_ms >= at,
            None => true,
        }
    }

    /// Next instant the sampled value can change, `None` once settled
    ///
    /// Inside the delay window this is the moment the tween starts moving;
    /// while the tween runs it is `now_ms` itself, since motion is
    /// continuous.
    pub fn next_change_at_ms(&self, now_ms: f32) -> Option<f32> {
        let start = self.started_at_ms?;
        if self.is_settled(now_ms) {
            return None;
        }
        let wait_end = start + self.extra_delay_ms as f32 + self.spec.delay_ms as f32;
        if now_ms < wait_end {
            Some(wait_end)
        } else {
            Some(now_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_spec(duration_ms: u32, delay_ms: u32) -> TransitionSpec {
        TransitionSpec::builder(StyleProps::new().with_opacity(0.0).with_translate_y(50.0))
            .state(HIDDEN, StyleProps::new().with_opacity(0.0).with_translate_y(50.0))
            .state(VISIBLE, StyleProps::new().with_opacity(1.0).with_translate_y(0.0))
            .duration_ms(duration_ms)
            .delay_ms(delay_ms)
            .easing(Easing::Linear)
            .build()
            .unwrap()
    }

    #[test]
    fn test_resting_at_initial() {
        let transition = Transition::new(fade_spec(800, 0));
        let props = transition.sample(1234.5);
        assert_eq!(props.opacity, Some(0.0));
        assert_eq!(props.translate_y, Some(50.0));
        assert!(transition.is_settled(0.0));
        assert_eq!(transition.target_state(), None);
    }

    #[test]
    fn test_settles_exactly_on_target() {
        let mut transition = Transition::new(fade_spec(800, 0));
        transition.set_state(VISIBLE, 0.0);

        let target = transition.target_props();
        assert_eq!(transition.sample(800.0), target);
        assert_eq!(transition.sample(10_000.0), target);
        assert_eq!(target.opacity, Some(1.0));
        assert_eq!(target.translate_y, Some(0.0));
        assert!(transition.is_settled(800.0));
        assert!(!transition.is_settled(799.0));
    }

    #[test]
    fn test_delay_holds_starting_point() {
        let mut transition = Transition::new(fade_spec(400, 500));
        transition.set_state(VISIBLE, 100.0);

        // Inside the delay window nothing moves
        assert_eq!(transition.sample(100.0).opacity, Some(0.0));
        assert_eq!(transition.sample(599.0).opacity, Some(0.0));

        // Tween runs from 600 to 1000
        let mid = transition.sample(800.0);
        assert!((mid.opacity.unwrap() - 0.5).abs() < 1e-6);
        assert_eq!(transition.sample(1000.0).opacity, Some(1.0));
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut transition = Transition::new(fade_spec(0, 0));
        transition.set_state(VISIBLE, 50.0);
        assert_eq!(transition.sample(50.0).opacity, Some(1.0));
        assert!(transition.is_settled(50.0));
    }

    #[test]
    fn test_reversal_continues_from_current_value() {
        let mut transition = Transition::new(fade_spec(1000, 0));
        transition.set_state(VISIBLE, 0.0);

        let half = transition.sample(500.0);
        assert!((half.opacity.unwrap() - 0.5).abs() < 1e-6);

        // Reverse mid-flight: the new window starts at the sampled value
        transition.set_state(HIDDEN, 500.0);
        let at_reversal = transition.sample(500.0);
        assert!((at_reversal.opacity.unwrap() - 0.5).abs() < 1e-6);
        assert!((at_reversal.translate_y.unwrap() - 25.0).abs() < 1e-6);

        // Quarter of the way back down: 0.5 toward 0.0 at progress 0.25
        let later = transition.sample(750.0);
        assert!((later.opacity.unwrap() - 0.375).abs() < 1e-6);

        // And the reverse window settles exactly on hidden
        let settled = transition.sample(1500.0);
        assert_eq!(settled.opacity, Some(0.0));
        assert_eq!(settled.translate_y, Some(50.0));
    }

    #[test]
    fn test_retarget_during_delay_does_not_jump() {
        let mut transition = Transition::new(fade_spec(400, 300));
        transition.set_state(VISIBLE, 0.0);
        transition.set_state(HIDDEN, 150.0);

        // Still at the initial styling; nothing ever moved
        assert_eq!(transition.sample(150.0).opacity, Some(0.0));
        assert_eq!(transition.sample(2000.0).opacity, Some(0.0));
    }

    #[test]
    fn test_unknown_state_ignored() {
        let mut transition = Transition::new(fade_spec(400, 0));
        transition.set_state("vizible", 0.0);
        assert_eq!(transition.target_state(), None);
        assert!(transition.is_settled(0.0));
    }

    #[test]
    fn test_partial_state_leaves_other_properties() {
        let spec = TransitionSpec::builder(
            StyleProps::new().with_opacity(1.0).with_translate_y(10.0),
        )
        .state("dimmed", StyleProps::new().with_opacity(0.2))
        .duration_ms(100)
        .easing(Easing::Linear)
        .build()
        .unwrap();
        let mut transition = Transition::new(spec);
        transition.set_state("dimmed", 0.0);

        let mid = transition.sample(50.0);
        assert!((mid.opacity.unwrap() - 0.6).abs() < 1e-6);
        assert_eq!(mid.translate_y, Some(10.0));
    }

    #[test]
    fn test_extra_delay_shifts_window() {
        let mut transition = Transition::new(fade_spec(400, 100));
        transition.set_extra_delay_ms(200);
        transition.set_state(VISIBLE, 0.0);

        // extra 200 + own 100 = 300ms of holding still
        assert_eq!(transition.sample(299.0).opacity, Some(0.0));
        let mid = transition.sample(500.0);
        assert!((mid.opacity.unwrap() - 0.5).abs() < 1e-6);
        assert_eq!(transition.settle_at_ms(), Some(700.0));
    }

    #[test]
    fn test_next_change_at() {
        let mut transition = Transition::new(fade_spec(400, 500));
        assert_eq!(transition.next_change_at_ms(0.0), None);

        transition.set_state(VISIBLE, 100.0);
        // Waiting out the delay: nothing changes until 600
        assert_eq!(transition.next_change_at_ms(200.0), Some(600.0));
        // Tween in motion: changes continuously
        assert_eq!(transition.next_change_at_ms(700.0), Some(700.0));
        // Settled
        assert_eq!(transition.next_change_at_ms(1000.0), None);
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let err = TransitionSpec::builder(StyleProps::new().with_opacity(f32::NAN))
            .state(VISIBLE, StyleProps::new().with_opacity(1.0))
            .build();
        assert!(matches!(err, Err(ConfigError::NonFinite { .. })));

        let err = TransitionSpec::builder(StyleProps::new())
            .state("", StyleProps::new().with_opacity(1.0))
            .build();
        assert!(matches!(err, Err(ConfigError::EmptyStateName)));
    }
}
