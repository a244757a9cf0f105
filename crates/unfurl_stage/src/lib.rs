//! Unfurl Stage
//!
//! Viewport-triggered orchestration: visibility tracking, scroll-linked
//! mapping, exclusive toggles, gesture feedback, and the orchestrator that
//! composes them over the transition engine.
//!
//! # Features
//!
//! - **Visibility Tracking**: Threshold crossings with a one-shot latch
//! - **Scroll Mapping**: Clamped piecewise-linear scroll-to-property curves
//! - **Exclusive Toggles**: Accordion state where at most one item is open
//! - **Gesture Feedback**: Hover/press state for interactive elements
//! - **Marquee Tickers**: Constant-rate wrapping offsets for strips
//! - **Orchestration**: One event-driven root publishing sparse style patches
//!
//! # Example
//!
//! ```
//! use unfurl_animation::{MotionPreset, Stagger};
//! use unfurl_stage::{Orchestrator, TrackerConfig};
//!
//! let mut stage = Orchestrator::new();
//! let (cards, _ids) = stage.register_group(
//!     TrackerConfig::new(0.5).unwrap().once(),
//!     Stagger::new(200),
//!     vec![
//!         MotionPreset::fade_in_up(800, 50.0).unwrap(),
//!         MotionPreset::fade_in_up(800, 50.0).unwrap(),
//!     ],
//! );
//! stage.subscribe(|update| println!("{} styles at {}ms", update.styles.len(), update.now_ms));
//!
//! // Host wiring: forward viewport events, then step the clock each frame
//! stage.on_group_intersection(cards, 0.6, true);
//! stage.advance(16.7);
//! ```

pub mod gesture;
pub mod orchestrator;
pub mod scroll;
pub mod ticker;
pub mod toggle;
pub mod visibility;

pub use gesture::{PointerInput, PressState};
pub use orchestrator::{
    AccordionId, AccordionItem, ElementId, FrameUpdate, GroupId, InputEvent, Orchestrator,
    ScrollBindingId, SubscriptionId, TickerId,
};
pub use scroll::ScrollMapping;
pub use ticker::Ticker;
pub use toggle::{ExclusiveToggle, ToggleChange};
pub use visibility::{TrackerConfig, Visibility, VisibilityTracker};

// The animation vocabulary travels with the stage so hosts depend on one crate
pub use unfurl_animation::{
    Clock, ConfigError, Easing, MotionPreset, Stagger, StaggerDirection, StyleProp, StyleProps,
    Transition, TransitionSpec, COLLAPSED, EXPANDED, HIDDEN, HOVER, IDLE, PRESS, VISIBLE,
};
