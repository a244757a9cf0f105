//! Common transition presets
//!
//! The entrance, reveal, and feedback patterns that marketing pages reach
//! for constantly, pre-wired with the canonical state names so they can be
//! driven directly by visibility trackers, accordions, and gestures.

use crate::easing::Easing;
use crate::error::Result;
use crate::transition::{TransitionSpec, COLLAPSED, EXPANDED, HIDDEN, HOVER, IDLE, PRESS, VISIBLE};
use crate::values::StyleProps;

/// Namespace for preset transition constructors
pub struct MotionPreset;

impl MotionPreset {
    /// Fade in while rising from `rise_px` below the resting position
    pub fn fade_in_up(duration_ms: u32, rise_px: f32) -> Result<TransitionSpec> {
        let hidden = StyleProps::new().with_opacity(0.0).with_translate_y(rise_px);
        TransitionSpec::builder(hidden)
            .state(HIDDEN, hidden)
            .state(VISIBLE, StyleProps::new().with_opacity(1.0).with_translate_y(0.0))
            .duration_ms(duration_ms)
            .build()
    }

    /// Fade in while dropping from `drop_px` above the resting position
    pub fn drop_in(duration_ms: u32, drop_px: f32) -> Result<TransitionSpec> {
        let hidden = StyleProps::new().with_opacity(0.0).with_translate_y(-drop_px);
        TransitionSpec::builder(hidden)
            .state(HIDDEN, hidden)
            .state(VISIBLE, StyleProps::new().with_opacity(1.0).with_translate_y(0.0))
            .duration_ms(duration_ms)
            .build()
    }

    /// Fade in while sliding horizontally from `from_px` (signed)
    pub fn slide_in_x(duration_ms: u32, from_px: f32) -> Result<TransitionSpec> {
        let hidden = StyleProps::new().with_opacity(0.0).with_translate_x(from_px);
        TransitionSpec::builder(hidden)
            .state(HIDDEN, hidden)
            .state(VISIBLE, StyleProps::new().with_opacity(1.0).with_translate_x(0.0))
            .duration_ms(duration_ms)
            .build()
    }

    /// Drop a fixed header in from above the viewport edge
    pub fn header_reveal(duration_ms: u32) -> Result<TransitionSpec> {
        let hidden = StyleProps::new().with_translate_y(-100.0);
        TransitionSpec::builder(hidden)
            .state(HIDDEN, hidden)
            .state(VISIBLE, StyleProps::new().with_translate_y(0.0))
            .duration_ms(duration_ms)
            .easing(Easing::EaseOut)
            .build()
    }

    /// Curtain reveal: an opaque cover slides from 0 to 100 (percent of its
    /// own height; units are the host's concern) under the reveal curve
    pub fn cover_slide(duration_ms: u32) -> Result<TransitionSpec> {
        let covering = StyleProps::new().with_translate_y(0.0);
        TransitionSpec::builder(covering)
            .state(HIDDEN, covering)
            .state(VISIBLE, StyleProps::new().with_translate_y(100.0))
            .duration_ms(duration_ms)
            .easing(Easing::bezier(1.0, 0.6, 0.6, 0.6)?)
            .build()
    }

    /// Accordion panel growing open to a host-measured height
    pub fn accordion_panel(duration_ms: u32, expanded_height_px: f32) -> Result<TransitionSpec> {
        let closed = StyleProps::new().with_height(0.0).with_opacity(0.0);
        TransitionSpec::builder(closed)
            .state(COLLAPSED, closed)
            .state(
                EXPANDED,
                StyleProps::new().with_height(expanded_height_px).with_opacity(1.0),
            )
            .duration_ms(duration_ms)
            .easing(Easing::EaseInOut)
            .build()
    }

    /// Accordion indicator glyph rotating to `open_degrees` when its panel opens
    pub fn indicator_rotate(duration_ms: u32, open_degrees: f32) -> Result<TransitionSpec> {
        let closed = StyleProps::new().with_rotate(0.0);
        TransitionSpec::builder(closed)
            .state(COLLAPSED, closed)
            .state(EXPANDED, StyleProps::new().with_rotate(open_degrees))
            .duration_ms(duration_ms)
            .easing(Easing::EaseInOut)
            .build()
    }

    /// Hover/press scale feedback for interactive elements
    pub fn press_feedback(hover_scale: f32, press_scale: f32) -> Result<TransitionSpec> {
        let rest = StyleProps::new().with_scale(1.0);
        TransitionSpec::builder(rest)
            .state(IDLE, rest)
            .state(HOVER, StyleProps::new().with_scale(hover_scale))
            .state(PRESS, StyleProps::new().with_scale(press_scale))
            .duration_ms(150)
            .easing(Easing::EaseOut)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::Transition;

    #[test]
    fn test_fade_in_up_states() {
        let spec = MotionPreset::fade_in_up(800, 50.0).unwrap();
        assert_eq!(spec.initial().opacity, Some(0.0));
        assert_eq!(spec.initial().translate_y, Some(50.0));
        assert_eq!(spec.state(VISIBLE).unwrap().opacity, Some(1.0));
        assert_eq!(spec.duration_ms(), 800);
    }

    #[test]
    fn test_cover_slide_uses_reveal_curve() {
        let spec = MotionPreset::cover_slide(1000).unwrap();
        let mut transition = Transition::new(spec);
        transition.set_state(VISIBLE, 0.0);

        // The reveal curve lingers early (x1 = 1.0), then sweeps through
        let early = transition.sample(250.0).translate_y.unwrap();
        assert!(early < 20.0, "early sample already reached {early}");
        let late = transition.sample(750.0).translate_y.unwrap();
        assert!(late > 55.0, "late sample only reached {late}");
        assert_eq!(transition.sample(1000.0).translate_y, Some(100.0));
    }

    #[test]
    fn test_accordion_panel_heights() {
        let spec = MotionPreset::accordion_panel(300, 140.0).unwrap();
        assert_eq!(spec.state(COLLAPSED).unwrap().height, Some(0.0));
        assert_eq!(spec.state(EXPANDED).unwrap().height, Some(140.0));
    }

    #[test]
    fn test_press_feedback_states() {
        let spec = MotionPreset::press_feedback(1.05, 0.95).unwrap();
        assert_eq!(spec.state(HOVER).unwrap().scale, Some(1.05));
        assert_eq!(spec.state(PRESS).unwrap().scale, Some(0.95));
        assert_eq!(spec.state(IDLE).unwrap().scale, Some(1.0));
    }
}
