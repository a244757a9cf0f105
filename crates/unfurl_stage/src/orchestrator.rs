//! Event-driven orchestration
//!
//! The composition root. It owns every registered element, consumes the
//! host's intersection, scroll, toggle, and pointer events plus frame
//! advances of the virtual clock, derives the current styling of the
//! affected elements, and publishes sparse patches to subscribers.
//!
//! Everything is single threaded and cooperatively scheduled. Pending
//! time-based work belongs to its registry entry: removing the entry
//! through its key cancels the work, and later events addressed to the
//! stale key are logged and dropped without disturbing anything else.

use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SecondaryMap, SlotMap};
use smallvec::SmallVec;

use unfurl_animation::{
    Clock, ConfigError, Result, Stagger, StyleProp, StyleProps, Transition, TransitionSpec,
    COLLAPSED, EXPANDED, HIDDEN, HOVER, IDLE, PRESS, VISIBLE,
};

use crate::gesture::{PointerInput, PressState};
use crate::scroll::ScrollMapping;
use crate::ticker::Ticker;
use crate::toggle::ExclusiveToggle;
use crate::visibility::{TrackerConfig, Visibility, VisibilityTracker};

new_key_type! {
    /// Handle to a registered element
    pub struct ElementId;
    /// Handle to a scroll binding
    pub struct ScrollBindingId;
    /// Handle to a stagger group
    pub struct GroupId;
    /// Handle to an accordion
    pub struct AccordionId;
    /// Handle to a marquee ticker
    pub struct TickerId;
    /// Handle to a frame subscriber
    pub struct SubscriptionId;
}

/// Wiring for one accordion item
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionItem {
    /// Panel element animating between collapsed and expanded
    pub panel: ElementId,
    /// Optional indicator glyph rotating with the open state
    pub indicator: Option<ElementId>,
}

impl AccordionItem {
    /// Panel-only item
    pub fn new(panel: ElementId) -> Self {
        Self {
            panel,
            indicator: None,
        }
    }

    /// Attach an indicator glyph (builder pattern)
    pub fn with_indicator(mut self, indicator: ElementId) -> Self {
        self.indicator = Some(indicator);
        self
    }
}

/// One published batch of derived values
///
/// `styles` carries the full current patch of every element whose value
/// changed since its last publication (an element's first appearance
/// establishes its baseline). `toggles` reports accordions whose open item
/// changed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    /// Clock time the batch was computed at
    pub now_ms: f32,
    /// Elements whose styling changed
    pub styles: Vec<(ElementId, StyleProps)>,
    /// Accordions whose open item changed
    pub toggles: Vec<(AccordionId, Option<usize>)>,
}

/// Host events, for queues that buffer input ahead of a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Intersection {
        element: ElementId,
        ratio: f32,
        is_intersecting: bool,
    },
    GroupIntersection {
        group: GroupId,
        ratio: f32,
        is_intersecting: bool,
    },
    Scroll {
        offset_px: f32,
    },
    Toggle {
        accordion: AccordionId,
        index: usize,
    },
    Pointer {
        element: ElementId,
        input: PointerInput,
    },
}

struct ElementEntry {
    transition: Transition,
    tracker: Option<VisibilityTracker>,
    press: Option<PressState>,
}

struct ScrollBinding {
    element: ElementId,
    property: StyleProp,
    mapping: ScrollMapping,
}

struct StaggerGroupEntry {
    tracker: VisibilityTracker,
    stagger: Stagger,
    children: SmallVec<[ElementId; 8]>,
}

struct AccordionEntry {
    toggle: ExclusiveToggle,
    items: Vec<AccordionItem>,
}

struct TickerEntry {
    ticker: Ticker,
    element: ElementId,
}

type FrameCallback = Box<dyn FnMut(&FrameUpdate)>;

/// The orchestrator: registries, event intake, and frame publishing
pub struct Orchestrator {
    clock: Clock,
    elements: SlotMap<ElementId, ElementEntry>,
    scroll_bindings: SlotMap<ScrollBindingId, ScrollBinding>,
    groups: SlotMap<GroupId, StaggerGroupEntry>,
    accordions: SlotMap<AccordionId, AccordionEntry>,
    tickers: SlotMap<TickerId, TickerEntry>,
    subscribers: SlotMap<SubscriptionId, FrameCallback>,
    published: SecondaryMap<ElementId, StyleProps>,
    active: FxHashSet<ElementId>,
    dirty: FxHashSet<ElementId>,
    pending_toggles: Vec<(AccordionId, Option<usize>)>,
    scroll_offset: f32,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Orchestrator {
    /// Empty orchestrator at clock zero
    pub fn new() -> Self {
        Self {
            clock: Clock::new(),
            elements: SlotMap::with_key(),
            scroll_bindings: SlotMap::with_key(),
            groups: SlotMap::with_key(),
            accordions: SlotMap::with_key(),
            tickers: SlotMap::with_key(),
            subscribers: SlotMap::with_key(),
            published: SecondaryMap::new(),
            active: FxHashSet::default(),
            dirty: FxHashSet::default(),
            pending_toggles: Vec::new(),
            scroll_offset: 0.0,
        }
    }

    /// Current clock time in milliseconds
    pub fn now_ms(&self) -> f32 {
        self.clock.now_ms()
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register an element; it rests at its spec's initial styling
    pub fn register(&mut self, spec: TransitionSpec) -> ElementId {
        self.elements.insert(ElementEntry {
            transition: Transition::new(spec),
            tracker: None,
            press: None,
        })
    }

    /// Register an element revealed by its own visibility tracker
    pub fn register_tracked(&mut self, spec: TransitionSpec, tracker: TrackerConfig) -> ElementId {
        self.elements.insert(ElementEntry {
            transition: Transition::new(spec),
            tracker: Some(VisibilityTracker::new(tracker)),
            press: None,
        })
    }

    /// Register a stagger group: one trigger tracker, children in order
    ///
    /// An empty group is valid; its trigger is a no-op.
    pub fn register_group(
        &mut self,
        tracker: TrackerConfig,
        stagger: Stagger,
        child_specs: Vec<TransitionSpec>,
    ) -> (GroupId, Vec<ElementId>) {
        let children: SmallVec<[ElementId; 8]> = child_specs
            .into_iter()
            .map(|spec| self.register(spec))
            .collect();
        let ids = children.to_vec();
        let group = self.groups.insert(StaggerGroupEntry {
            tracker: VisibilityTracker::new(tracker),
            stagger,
            children,
        });
        (group, ids)
    }

    /// Bind one property of an element to a scroll mapping
    ///
    /// The binding owns that property: whatever the element's transition
    /// says, the mapped value wins on every publish.
    pub fn bind_scroll(
        &mut self,
        element: ElementId,
        property: StyleProp,
        mapping: ScrollMapping,
    ) -> Result<ScrollBindingId> {
        if !self.elements.contains_key(element) {
            return Err(ConfigError::UnknownElement);
        }
        let id = self.scroll_bindings.insert(ScrollBinding {
            element,
            property,
            mapping,
        });
        self.dirty.insert(element);
        Ok(id)
    }

    /// Wire pre-registered panels (and indicators) into an accordion
    ///
    /// Every referenced element must declare both accordion states; that is
    /// checked here so toggling can never fail later.
    pub fn add_accordion(&mut self, items: Vec<AccordionItem>) -> Result<AccordionId> {
        if items.is_empty() {
            return Err(ConfigError::EmptyAccordion);
        }
        for item in &items {
            for id in [Some(item.panel), item.indicator].into_iter().flatten() {
                let entry = self.elements.get(id).ok_or(ConfigError::UnknownElement)?;
                for state in [COLLAPSED, EXPANDED] {
                    if entry.transition.spec().state(state).is_none() {
                        return Err(ConfigError::MissingState(state));
                    }
                }
            }
        }
        let toggle = ExclusiveToggle::new(items.len());
        Ok(self.accordions.insert(AccordionEntry { toggle, items }))
    }

    /// Attach a marquee ticker driving an element's horizontal offset
    pub fn add_ticker(
        &mut self,
        element: ElementId,
        speed_px_s: f32,
        span_px: f32,
    ) -> Result<TickerId> {
        if !self.elements.contains_key(element) {
            return Err(ConfigError::UnknownElement);
        }
        let ticker = Ticker::new(speed_px_s, span_px)?;
        let id = self.tickers.insert(TickerEntry { ticker, element });
        self.dirty.insert(element);
        Ok(id)
    }

    /// Enable hover/press feedback on an element
    ///
    /// The element's spec must declare the three gesture states.
    pub fn set_press_feedback(&mut self, element: ElementId) -> Result<()> {
        let entry = self
            .elements
            .get_mut(element)
            .ok_or(ConfigError::UnknownElement)?;
        for state in [IDLE, HOVER, PRESS] {
            if entry.transition.spec().state(state).is_none() {
                return Err(ConfigError::MissingState(state));
            }
        }
        entry.press = Some(PressState::Idle);
        Ok(())
    }

    /// Subscribe to published frames
    pub fn subscribe(&mut self, callback: impl FnMut(&FrameUpdate) + 'static) -> SubscriptionId {
        self.subscribers.insert(Box::new(callback))
    }

    /// Drop a subscription
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) {
        if self.subscribers.remove(subscription).is_none() {
            tracing::debug!(?subscription, "unsubscribe for unknown subscription, ignoring");
        }
    }

    // ========================================================================
    // Deregistration
    // ========================================================================

    /// Remove an element, cancelling all of its pending and future work
    ///
    /// Bindings and tickers attached to it are dropped with it. Groups and
    /// accordions that referenced it keep their other members; accordion
    /// item slots are kept in place so toggle indices stay stable.
    pub fn remove(&mut self, element: ElementId) {
        if self.elements.remove(element).is_none() {
            tracing::debug!(?element, "remove for unknown element, ignoring");
            return;
        }
        self.active.remove(&element);
        self.dirty.remove(&element);
        self.published.remove(element);
        self.scroll_bindings.retain(|_, binding| binding.element != element);
        self.tickers.retain(|_, entry| entry.element != element);
        for (_, group) in &mut self.groups {
            group.children.retain(|child| *child != element);
        }
    }

    /// Remove a stagger group; its children stay registered
    pub fn remove_group(&mut self, group: GroupId) {
        if self.groups.remove(group).is_none() {
            tracing::debug!(?group, "remove for unknown group, ignoring");
        }
    }

    /// Drop a scroll binding; the property returns to transition control
    pub fn unbind_scroll(&mut self, binding: ScrollBindingId) {
        match self.scroll_bindings.remove(binding) {
            Some(removed) => {
                self.dirty.insert(removed.element);
            }
            None => tracing::debug!(?binding, "unbind for unknown binding, ignoring"),
        }
    }

    /// Remove an accordion; its panels stay registered in whatever state
    /// they are in
    pub fn remove_accordion(&mut self, accordion: AccordionId) {
        if self.accordions.remove(accordion).is_none() {
            tracing::debug!(?accordion, "remove for unknown accordion, ignoring");
        }
    }

    /// Stop and remove a ticker
    pub fn remove_ticker(&mut self, ticker: TickerId) {
        match self.tickers.remove(ticker) {
            Some(removed) => {
                self.dirty.insert(removed.element);
            }
            None => tracing::debug!(?ticker, "remove for unknown ticker, ignoring"),
        }
    }

    // ========================================================================
    // Event intake
    // ========================================================================

    /// Route a buffered host event to its handler
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Intersection {
                element,
                ratio,
                is_intersecting,
            } => self.on_intersection(element, ratio, is_intersecting),
            InputEvent::GroupIntersection {
                group,
                ratio,
                is_intersecting,
            } => self.on_group_intersection(group, ratio, is_intersecting),
            InputEvent::Scroll { offset_px } => self.on_scroll(offset_px),
            InputEvent::Toggle { accordion, index } => self.on_toggle(accordion, index),
            InputEvent::Pointer { element, input } => self.on_pointer(element, input),
        }
    }

    /// Intersection report for a tracked element
    pub fn on_intersection(&mut self, element: ElementId, ratio: f32, is_intersecting: bool) {
        let now = self.clock.now_ms();
        let Some(entry) = self.elements.get_mut(element) else {
            tracing::debug!(?element, "intersection event for unknown element, ignoring");
            return;
        };
        let Some(tracker) = entry.tracker.as_mut() else {
            tracing::debug!(?element, "intersection event for untracked element, ignoring");
            return;
        };
        if let Some(visibility) = tracker.observe(ratio, is_intersecting) {
            entry.transition.set_state(state_for(visibility), now);
            self.active.insert(element);
            self.dirty.insert(element);
        }
        self.publish_frame();
    }

    /// Intersection report for a stagger group's container
    pub fn on_group_intersection(&mut self, group: GroupId, ratio: f32, is_intersecting: bool) {
        let now = self.clock.now_ms();
        let Some(entry) = self.groups.get_mut(group) else {
            tracing::debug!(?group, "intersection event for unknown group, ignoring");
            return;
        };
        if let Some(visibility) = entry.tracker.observe(ratio, is_intersecting) {
            let state = state_for(visibility);
            let total = entry.children.len();
            for (index, child) in entry.children.iter().enumerate() {
                let Some(element) = self.elements.get_mut(*child) else {
                    tracing::debug!(?child, "stagger child no longer registered, skipping");
                    continue;
                };
                // Retarget first so continuity is captured under the old
                // window, then shift the new window by the stagger delay
                element.transition.set_state(state, now);
                element
                    .transition
                    .set_extra_delay_ms(entry.stagger.delay_for_index(index, total));
                self.active.insert(*child);
                self.dirty.insert(*child);
            }
        }
        self.publish_frame();
    }

    /// Page scroll offset report
    pub fn on_scroll(&mut self, offset_px: f32) {
        if !offset_px.is_finite() {
            tracing::debug!(offset_px, "ignoring non-finite scroll offset");
            return;
        }
        self.scroll_offset = offset_px;
        for (_, binding) in &self.scroll_bindings {
            self.dirty.insert(binding.element);
        }
        self.publish_frame();
    }

    /// Toggle an accordion item
    pub fn on_toggle(&mut self, accordion: AccordionId, index: usize) {
        let now = self.clock.now_ms();
        let Some(entry) = self.accordions.get_mut(accordion) else {
            tracing::debug!(?accordion, "toggle event for unknown accordion, ignoring");
            return;
        };
        let change = entry.toggle.toggle(index);
        if change.is_noop() {
            tracing::debug!(?accordion, index, "toggle index out of range, ignoring");
            return;
        }
        for (slot, state) in [(change.closed, COLLAPSED), (change.opened, EXPANDED)] {
            let Some(item_index) = slot else { continue };
            let item = entry.items[item_index];
            for target in [Some(item.panel), item.indicator].into_iter().flatten() {
                match self.elements.get_mut(target) {
                    Some(element) => {
                        element.transition.set_state(state, now);
                        self.active.insert(target);
                        self.dirty.insert(target);
                    }
                    None => {
                        tracing::debug!(?target, "accordion references a removed element, skipping")
                    }
                }
            }
        }
        self.pending_toggles.push((accordion, entry.toggle.open()));
        self.publish_frame();
    }

    /// Pointer report for an element with press feedback enabled
    pub fn on_pointer(&mut self, element: ElementId, input: PointerInput) {
        let now = self.clock.now_ms();
        let Some(entry) = self.elements.get_mut(element) else {
            tracing::debug!(?element, "pointer event for unknown element, ignoring");
            return;
        };
        let Some(press) = entry.press.as_mut() else {
            tracing::debug!(?element, "pointer event without press feedback, ignoring");
            return;
        };
        if let Some(next) = press.on_input(input) {
            *press = next;
            entry.transition.set_state(next.state_name(), now);
            self.active.insert(element);
            self.dirty.insert(element);
            self.publish_frame();
        }
    }

    /// Advance the clock by a frame delta and publish what moved
    pub fn advance(&mut self, dt_ms: f32) {
        self.clock.advance(dt_ms);
        for (_, entry) in &mut self.tickers {
            entry.ticker.advance(dt_ms);
            self.dirty.insert(entry.element);
        }
        self.publish_frame();
    }

    // ========================================================================
    // Derived state
    // ========================================================================

    /// Current styling of an element, exactly as the next frame would publish it
    pub fn current_props(&self, element: ElementId) -> Option<StyleProps> {
        let entry = self.elements.get(element)?;
        Some(compose_props(
            &entry.transition,
            element,
            self.clock.now_ms(),
            self.scroll_offset,
            &self.scroll_bindings,
            &self.tickers,
        ))
    }

    /// Open item of an accordion, `None` for an unknown handle
    pub fn open_item(&self, accordion: AccordionId) -> Option<Option<usize>> {
        Some(self.accordions.get(accordion)?.toggle.open())
    }

    /// Earliest future instant published output can change without new input
    ///
    /// While everything is merely waiting out delays this is the nearest
    /// tween start; while any tween or ticker is moving it is the current
    /// time; `None` when fully idle.
    pub fn next_deadline_ms(&self) -> Option<f32> {
        let now = self.clock.now_ms();
        let mut deadline = if self.tickers.is_empty() {
            None
        } else {
            Some(now)
        };
        for id in &self.active {
            let Some(entry) = self.elements.get(*id) else {
                continue;
            };
            if let Some(at) = entry.transition.next_change_at_ms(now) {
                deadline = Some(match deadline {
                    Some(current) => current.min(at),
                    None => at,
                });
            }
        }
        deadline
    }

    /// Sample everything active or touched, publish changes, prune settled
    fn publish_frame(&mut self) {
        let now = self.clock.now_ms();
        let mut styles = Vec::new();
        for (id, entry) in &self.elements {
            if !(self.active.contains(&id) || self.dirty.contains(&id)) {
                continue;
            }
            let props = compose_props(
                &entry.transition,
                id,
                now,
                self.scroll_offset,
                &self.scroll_bindings,
                &self.tickers,
            );
            if self.published.get(id) != Some(&props) {
                styles.push((id, props));
                self.published.insert(id, props);
            }
        }
        self.dirty.clear();
        self.active.retain(|id| match self.elements.get(*id) {
            Some(entry) => !entry.transition.is_settled(now),
            None => false,
        });

        let toggles = std::mem::take(&mut self.pending_toggles);
        if styles.is_empty() && toggles.is_empty() {
            return;
        }
        let update = FrameUpdate {
            now_ms: now,
            styles,
            toggles,
        };
        tracing::trace!(
            now_ms = update.now_ms,
            styles = update.styles.len(),
            toggles = update.toggles.len(),
            "publishing frame"
        );
        for (_, callback) in &mut self.subscribers {
            callback(&update);
        }
    }
}

fn state_for(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::Seen => VISIBLE,
        Visibility::Unseen => HIDDEN,
    }
}

fn compose_props(
    transition: &Transition,
    element: ElementId,
    now_ms: f32,
    scroll_offset: f32,
    bindings: &SlotMap<ScrollBindingId, ScrollBinding>,
    tickers: &SlotMap<TickerId, TickerEntry>,
) -> StyleProps {
    let mut props = transition.sample(now_ms);
    for (_, binding) in bindings {
        if binding.element == element {
            props.set(binding.property, binding.mapping.map(scroll_offset));
        }
    }
    for (_, entry) in tickers {
        if entry.element == element {
            props.set(StyleProp::TranslateX, entry.ticker.offset_px());
        }
    }
    props
}
