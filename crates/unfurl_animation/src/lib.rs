//! Unfurl Animation Primitives
//!
//! Deterministic, headless animation math for scroll-driven pages.
//!
//! # Features
//!
//! - **Virtual Clock**: manually advanced time; same inputs, same output
//! - **Easing**: linear and quadratic curves plus validated cubic beziers
//! - **Style Patches**: sparse per-property values merged over element state
//! - **Transitions**: named-state descriptors with delay, duration, easing,
//!   exact settling, and continuity-preserving mid-flight retargeting
//! - **Stagger**: per-index extra delays for grouped reveals
//! - **Presets**: the usual landing-page entrances and feedback patterns
//!
//! # Example
//!
//! ```
//! use unfurl_animation::{MotionPreset, Transition, VISIBLE};
//!
//! let spec = MotionPreset::fade_in_up(800, 50.0).unwrap();
//! let mut fade = Transition::new(spec);
//! fade.set_state(VISIBLE, 0.0);
//!
//! let halfway = fade.sample(400.0);
//! assert!(halfway.opacity.unwrap() > 0.0);
//! assert_eq!(fade.sample(800.0).opacity, Some(1.0));
//! ```

pub mod clock;
pub mod easing;
pub mod error;
pub mod presets;
pub mod stagger;
pub mod transition;
pub mod values;

pub use clock::Clock;
pub use easing::{CubicBezier, Easing};
pub use error::{ConfigError, Result};
pub use presets::MotionPreset;
pub use stagger::{Stagger, StaggerDirection};
pub use transition::{
    Transition, TransitionSpec, TransitionSpecBuilder, COLLAPSED, EXPANDED, HIDDEN, HOVER, IDLE,
    PRESS, VISIBLE,
};
pub use values::{Interpolate, StyleProp, StyleProps};
