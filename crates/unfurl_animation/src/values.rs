//! Animatable values and style patches
//!
//! [`StyleProps`] is the shared vocabulary for declaring transition states
//! and for the patches published to hosts. Every field is optional: a state
//! that animates only `opacity` leaves the other properties of the element
//! untouched.

use crate::error::ConfigError;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Style Properties
// ============================================================================

/// Selector for a single property within [`StyleProps`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProp {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    Height,
}

/// A sparse set of animatable style properties
///
/// Units are the host's concern: translations are typically px (or percent
/// for curtain reveals), `rotate` is degrees, `height` px. Unset fields mean
/// "leave this property alone".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleProps {
    /// Opacity, 0.0..=1.0 by convention
    pub opacity: Option<f32>,
    /// Horizontal offset
    pub translate_x: Option<f32>,
    /// Vertical offset
    pub translate_y: Option<f32>,
    /// Uniform scale factor
    pub scale: Option<f32>,
    /// Rotation in degrees
    pub rotate: Option<f32>,
    /// Explicit height, for panels that grow open
    pub height: Option<f32>,
}

impl StyleProps {
    /// Empty patch; sets nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Set opacity (builder pattern)
    pub fn with_opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    /// Set horizontal offset (builder pattern)
    pub fn with_translate_x(mut self, value: f32) -> Self {
        self.translate_x = Some(value);
        self
    }

    /// Set vertical offset (builder pattern)
    pub fn with_translate_y(mut self, value: f32) -> Self {
        self.translate_y = Some(value);
        self
    }

    /// Set uniform scale (builder pattern)
    pub fn with_scale(mut self, value: f32) -> Self {
        self.scale = Some(value);
        self
    }

    /// Set rotation in degrees (builder pattern)
    pub fn with_rotate(mut self, value: f32) -> Self {
        self.rotate = Some(value);
        self
    }

    /// Set explicit height (builder pattern)
    pub fn with_height(mut self, value: f32) -> Self {
        self.height = Some(value);
        self
    }

    /// True when no property is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Read one property by selector
    pub fn get(&self, prop: StyleProp) -> Option<f32> {
        match prop {
            StyleProp::Opacity => self.opacity,
            StyleProp::TranslateX => self.translate_x,
            StyleProp::TranslateY => self.translate_y,
            StyleProp::Scale => self.scale,
            StyleProp::Rotate => self.rotate,
            StyleProp::Height => self.height,
        }
    }

    /// Set one property by selector
    pub fn set(&mut self, prop: StyleProp, value: f32) {
        let slot = match prop {
            StyleProp::Opacity => &mut self.opacity,
            StyleProp::TranslateX => &mut self.translate_x,
            StyleProp::TranslateY => &mut self.translate_y,
            StyleProp::Scale => &mut self.scale,
            StyleProp::Rotate => &mut self.rotate,
            StyleProp::Height => &mut self.height,
        };
        *slot = Some(value);
    }

    /// Fill unset fields from `base`; fields set here win
    pub fn merge_over(&self, base: &StyleProps) -> StyleProps {
        StyleProps {
            opacity: self.opacity.or(base.opacity),
            translate_x: self.translate_x.or(base.translate_x),
            translate_y: self.translate_y.or(base.translate_y),
            scale: self.scale.or(base.scale),
            rotate: self.rotate.or(base.rotate),
            height: self.height.or(base.height),
        }
    }

    /// Reject non-finite values
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (what, value) in [
            ("opacity", self.opacity),
            ("translate_x", self.translate_x),
            ("translate_y", self.translate_y),
            ("scale", self.scale),
            ("rotate", self.rotate),
            ("height", self.height),
        ] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(ConfigError::NonFinite { what, value });
                }
            }
        }
        Ok(())
    }
}

fn mix_field(a: Option<f32>, b: Option<f32>, t: f32) -> Option<f32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.lerp(&b, t)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

fn field_approx(a: Option<f32>, b: Option<f32>, epsilon: f32) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.approx_eq(&b, epsilon),
        (None, None) => true,
        _ => false,
    }
}

impl Interpolate for StyleProps {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        StyleProps {
            opacity: mix_field(self.opacity, other.opacity, t),
            translate_x: mix_field(self.translate_x, other.translate_x, t),
            translate_y: mix_field(self.translate_y, other.translate_y, t),
            scale: mix_field(self.scale, other.scale, t),
            rotate: mix_field(self.rotate, other.rotate, t),
            height: mix_field(self.height, other.height, t),
        }
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        field_approx(self.opacity, other.opacity, epsilon)
            && field_approx(self.translate_x, other.translate_x, epsilon)
            && field_approx(self.translate_y, other.translate_y, epsilon)
            && field_approx(self.scale, other.scale, epsilon)
            && field_approx(self.rotate, other.rotate, epsilon)
            && field_approx(self.height, other.height, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_props_lerp_pairwise() {
        let a = StyleProps::new().with_opacity(0.0).with_translate_y(50.0);
        let b = StyleProps::new().with_opacity(1.0).with_translate_y(0.0);
        let mid = a.lerp(&b, 0.5);

        assert!((mid.opacity.unwrap() - 0.5).abs() < 1e-6);
        assert!((mid.translate_y.unwrap() - 25.0).abs() < 1e-6);
        assert!(mid.scale.is_none());
    }

    #[test]
    fn test_lerp_holds_one_sided_fields() {
        let a = StyleProps::new().with_opacity(0.25).with_rotate(90.0);
        let b = StyleProps::new().with_opacity(0.75);
        let mid = a.lerp(&b, 0.5);

        assert!((mid.rotate.unwrap() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_merge_over() {
        let state = StyleProps::new().with_opacity(1.0);
        let base = StyleProps::new().with_opacity(0.0).with_translate_y(50.0);
        let merged = state.merge_over(&base);

        assert_eq!(merged.opacity, Some(1.0));
        assert_eq!(merged.translate_y, Some(50.0));
    }

    #[test]
    fn test_selector_roundtrip() {
        let mut props = StyleProps::new();
        props.set(StyleProp::TranslateY, -50.0);
        assert_eq!(props.get(StyleProp::TranslateY), Some(-50.0));
        assert_eq!(props.get(StyleProp::Opacity), None);
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let props = StyleProps::new().with_translate_x(f32::NAN);
        assert!(matches!(
            props.validate(),
            Err(ConfigError::NonFinite { what: "translate_x", .. })
        ));
        assert!(StyleProps::new().with_translate_x(12.0).validate().is_ok());
    }
}
