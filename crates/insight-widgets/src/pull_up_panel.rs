#![forbid(unsafe_code)]

//! Pull-up schedule panel.
//!
//! Two layers live here:
//!
//! - [`PullUpPanelController`]: pure state transitions. Drag deltas become a
//!   clamped offset, a release snaps to one of two rest positions, and a tap
//!   on the handle toggles between them. No time, no I/O.
//! - [`PullUpPanel`]: what a screen actually owns. It remembers the last
//!   measured container height, tracks whether a gesture is in progress, and
//!   animates from the pre-snap offset to the snapped one.
//!
//! # Geometry
//!
//! With container height `H`:
//!
//! ```text
//! offset 0            Closed  (today's schedule)
//! offset H/2          snap threshold (release above → Closed, below → Open)
//! offset 0.75 × H     Open    (calendar), also the travel limit
//! ```
//!
//! The snap threshold and the travel limit are separate constants on purpose
//! and must not be unified.
//!
//! # Invariants
//!
//! 1. `0 <= offset <= 0.75 × H` for every state the controller returns,
//!    including mid-drag.
//! 2. `on_drag_ended` is a fixed point: applying it to its own output returns
//!    the same state.
//! 3. Releasing exactly at `H/2` snaps closed.
//! 4. `is_open` never changes during a drag.
//!
//! # Failure Modes
//!
//! None of the operations fail. NaN, infinite, or negative heights are
//! treated as 0; NaN deltas and offsets are treated as 0.

use std::time::Duration;

use insight_core::animation::{Animation, Easing, Spring, Tween};

/// Fraction of the container height the panel may travel.
pub const TRAVEL_FRACTION: f64 = 0.75;

/// Fraction of the container height past which a release snaps open.
pub const SNAP_FRACTION: f64 = 0.5;

/// Reveal state of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanelState {
    pub is_open: bool,
    /// Vertical displacement in layout units.
    pub offset: f64,
}

impl PanelState {
    /// The state a freshly mounted home screen starts in.
    pub const CLOSED: Self = Self {
        is_open: false,
        offset: 0.0,
    };

    #[must_use]
    pub const fn new(is_open: bool, offset: f64) -> Self {
        Self { is_open, offset }
    }

    /// Which content set the host should render.
    #[must_use]
    pub const fn content(&self) -> PanelContent {
        if self.is_open {
            PanelContent::Calendar
        } else {
            PanelContent::TodaySchedule
        }
    }

    /// Opacity of the header chrome and handle outline: hidden while open.
    #[must_use]
    pub const fn chrome_opacity(&self) -> f32 {
        if self.is_open { 0.0 } else { 1.0 }
    }
}

/// Logical phase of a [`PanelState`] for a given container height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelPhase {
    Closed,
    Open,
    /// Anywhere between the rest positions.
    Dragging { offset: f64 },
}

/// Alternate content sets shown inside the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelContent {
    TodaySchedule,
    Calendar,
}

/// Pure state transitions for the pull-up panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct PullUpPanelController;

impl PullUpPanelController {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Travel limit: `0.75 × H`.
    #[must_use]
    pub fn max_offset(&self, container_height: f64) -> f64 {
        sanitize_height(container_height) * TRAVEL_FRACTION
    }

    /// Snap threshold: `H / 2`.
    #[must_use]
    pub fn snap_threshold(&self, container_height: f64) -> f64 {
        sanitize_height(container_height) * SNAP_FRACTION
    }

    /// Apply an incremental vertical drag. `is_open` is untouched.
    #[must_use]
    pub fn on_drag_changed(
        &self,
        delta_y: f64,
        state: PanelState,
        container_height: f64,
    ) -> PanelState {
        let max = self.max_offset(container_height);
        let moved = finite_or_zero(state.offset) + finite_or_zero(delta_y);
        PanelState {
            is_open: state.is_open,
            offset: finite_or_zero(moved).clamp(0.0, max),
        }
    }

    /// Snap to a rest position at the end of a gesture.
    ///
    /// Strictly past `H / 2` opens; anything else, including exactly `H / 2`,
    /// closes.
    #[must_use]
    pub fn on_drag_ended(&self, state: PanelState, container_height: f64) -> PanelState {
        if finite_or_zero(state.offset) > self.snap_threshold(container_height) {
            self.opened(container_height)
        } else {
            PanelState::CLOSED
        }
    }

    /// Toggle between the rest positions, bypassing the drag substate.
    #[must_use]
    pub fn on_handle_tap(&self, state: PanelState, container_height: f64) -> PanelState {
        if state.is_open {
            PanelState::CLOSED
        } else {
            self.opened(container_height)
        }
    }

    /// Classify a state against the current geometry.
    #[must_use]
    pub fn phase(&self, state: PanelState, container_height: f64) -> PanelPhase {
        let max = self.max_offset(container_height);
        match (state.is_open, state.offset) {
            (false, offset) if offset == 0.0 => PanelPhase::Closed,
            (true, offset) if offset == max => PanelPhase::Open,
            (_, offset) => PanelPhase::Dragging { offset },
        }
    }

    fn opened(&self, container_height: f64) -> PanelState {
        PanelState {
            is_open: true,
            offset: self.max_offset(container_height),
        }
    }
}

fn sanitize_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}

// ---------------------------------------------------------------------------
// Animated panel
// ---------------------------------------------------------------------------

/// How the panel moves from its pre-snap offset to the snapped one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelMotion {
    /// Fixed-duration eased interpolation.
    Eased { duration: Duration, easing: Easing },
    /// Physically based spring. Damping below [`MIN_SPRING_DAMPING`] is
    /// raised to it, since an undamped spring never comes to rest.
    Spring { stiffness: f64, damping: f64 },
}

/// Smallest damping a spring snap runs with.
pub const MIN_SPRING_DAMPING: f64 = 1.0;

impl Default for PanelMotion {
    fn default() -> Self {
        Self::Eased {
            duration: Duration::from_millis(350),
            easing: Easing::EaseInOut,
        }
    }
}

#[derive(Debug, Clone)]
enum SnapAnimation {
    Eased(Tween),
    Spring(Spring),
}

impl SnapAnimation {
    fn start(motion: PanelMotion, from: f64, to: f64) -> Self {
        match motion {
            PanelMotion::Eased { duration, easing } => {
                Self::Eased(Tween::new(from, to, duration).easing(easing.function()))
            }
            PanelMotion::Spring { stiffness, damping } => Self::Spring(
                Spring::new(from, to)
                    .with_stiffness(stiffness)
                    .with_damping(damping.max(MIN_SPRING_DAMPING)),
            ),
        }
    }

    fn animation(&mut self) -> &mut dyn Animation {
        match self {
            Self::Eased(tween) => tween,
            Self::Spring(spring) => spring,
        }
    }

    fn current(&self) -> f64 {
        match self {
            Self::Eased(tween) => tween.current(),
            Self::Spring(spring) => spring.position(),
        }
    }
}

/// The pull-up panel as a screen owns it.
///
/// Feed it the measured container height, gesture callbacks, and ticks; read
/// back [`displayed_offset`](PullUpPanel::displayed_offset) and
/// [`content`](PullUpPanel::content) to render.
#[derive(Debug, Clone)]
pub struct PullUpPanel {
    controller: PullUpPanelController,
    state: PanelState,
    container_height: f64,
    dragging: bool,
    motion: PanelMotion,
    snap: Option<SnapAnimation>,
}

impl Default for PullUpPanel {
    fn default() -> Self {
        Self::new(PanelMotion::default())
    }
}

impl PullUpPanel {
    /// A closed panel with no measured geometry yet.
    #[must_use]
    pub fn new(motion: PanelMotion) -> Self {
        Self {
            controller: PullUpPanelController::new(),
            state: PanelState::CLOSED,
            container_height: 0.0,
            dragging: false,
            motion,
            snap: None,
        }
    }

    /// Record a new layout measurement.
    ///
    /// At rest the panel re-anchors to the new geometry. Mid-drag the offset
    /// is re-clamped to the new travel limit.
    pub fn set_container_height(&mut self, height: f64) {
        let height = sanitize_height(height);
        if height == self.container_height {
            return;
        }
        self.container_height = height;
        if self.dragging {
            self.state = self.controller.on_drag_changed(0.0, self.state, height);
        } else {
            self.snap = None;
            self.state = if self.state.is_open {
                PanelState::new(true, self.controller.max_offset(height))
            } else {
                PanelState::CLOSED
            };
        }
    }

    /// Start a drag gesture. An in-flight snap animation is interrupted and
    /// the drag continues from where the panel currently appears.
    pub fn begin_drag(&mut self) {
        if let Some(snap) = self.snap.take() {
            self.state.offset = snap.current();
            self.state = self
                .controller
                .on_drag_changed(0.0, self.state, self.container_height);
        }
        self.dragging = true;
    }

    /// Apply an incremental drag. Starts a gesture if none is active.
    pub fn drag_by(&mut self, delta_y: f64) -> PanelState {
        if !self.dragging {
            self.begin_drag();
        }
        self.state = self
            .controller
            .on_drag_changed(delta_y, self.state, self.container_height);
        self.state
    }

    /// Finish the gesture: snap and animate toward the rest position.
    pub fn end_drag(&mut self) -> PanelState {
        let from = self.displayed_offset();
        self.dragging = false;
        self.state = self
            .controller
            .on_drag_ended(self.state, self.container_height);
        self.animate_from(from);
        #[cfg(feature = "tracing")]
        self.trace_transition("drag_end", from);
        self.state
    }

    /// An interrupted gesture is finalized exactly like a release so the
    /// panel never rests between positions.
    pub fn cancel_drag(&mut self) -> PanelState {
        self.end_drag()
    }

    /// Toggle open/closed from the drag handle.
    pub fn tap_handle(&mut self) -> PanelState {
        let from = self.displayed_offset();
        self.dragging = false;
        self.state = self
            .controller
            .on_handle_tap(self.state, self.container_height);
        self.animate_from(from);
        #[cfg(feature = "tracing")]
        self.trace_transition("handle_tap", from);
        self.state
    }

    /// Advance the snap animation.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(snap) = self.snap.as_mut() {
            snap.animation().tick(dt);
            if snap.animation().is_complete() {
                self.snap = None;
            }
        }
    }

    /// Offset to render this frame, within `[0, 0.75 × H]`.
    #[must_use]
    pub fn displayed_offset(&self) -> f64 {
        let raw = self
            .snap
            .as_ref()
            .map_or(self.state.offset, SnapAnimation::current);
        raw.clamp(0.0, self.controller.max_offset(self.container_height))
    }

    /// Target state (the snapped state once a gesture ends).
    #[inline]
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        self.controller.phase(self.state, self.container_height)
    }

    #[inline]
    #[must_use]
    pub fn content(&self) -> PanelContent {
        self.state.content()
    }

    #[inline]
    #[must_use]
    pub fn chrome_opacity(&self) -> f32 {
        self.state.chrome_opacity()
    }

    #[inline]
    #[must_use]
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.snap.is_some()
    }

    /// No gesture, no animation, and resting at one of the two positions.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !self.dragging && self.snap.is_none() && !matches!(self.phase(), PanelPhase::Dragging { .. })
    }

    fn animate_from(&mut self, from: f64) {
        self.snap = if (from - self.state.offset).abs() > f64::EPSILON {
            Some(SnapAnimation::start(self.motion, from, self.state.offset))
        } else {
            None
        };
    }

    #[cfg(feature = "tracing")]
    fn trace_transition(&self, operation: &'static str, from: f64) {
        let _span = tracing::debug_span!(
            "panel.transition",
            operation,
            from,
            to = self.state.offset,
            is_open = self.state.is_open,
            container_height = self.container_height
        )
        .entered();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: f64 = 800.0;
    const MS_16: Duration = Duration::from_millis(16);

    fn ctl() -> PullUpPanelController {
        PullUpPanelController::new()
    }

    // --- Controller ---

    #[test]
    fn drag_then_release_past_midpoint_opens() {
        let dragged = ctl().on_drag_changed(500.0, PanelState::CLOSED, H);
        assert_eq!(dragged, PanelState::new(false, 500.0));

        let ended = ctl().on_drag_ended(dragged, H);
        assert_eq!(ended, PanelState::new(true, 600.0));
    }

    #[test]
    fn short_release_closes() {
        let ended = ctl().on_drag_ended(PanelState::new(false, 100.0), H);
        assert_eq!(ended, PanelState::CLOSED);
    }

    #[test]
    fn drag_is_clamped_to_three_quarters() {
        let dragged = ctl().on_drag_changed(1000.0, PanelState::CLOSED, H);
        assert_eq!(dragged.offset, 600.0);
        assert!(!dragged.is_open);
    }

    #[test]
    fn upward_drag_is_clamped_at_zero() {
        let dragged = ctl().on_drag_changed(-250.0, PanelState::new(true, 100.0), H);
        assert_eq!(dragged, PanelState::new(true, 0.0));
    }

    #[test]
    fn handle_tap_toggles() {
        let opened = ctl().on_handle_tap(PanelState::CLOSED, H);
        assert_eq!(opened, PanelState::new(true, 600.0));
        let closed = ctl().on_handle_tap(opened, H);
        assert_eq!(closed, PanelState::CLOSED);
    }

    #[test]
    fn midpoint_release_snaps_closed() {
        let ended = ctl().on_drag_ended(PanelState::new(false, H / 2.0), H);
        assert_eq!(ended, PanelState::CLOSED);
        let ended = ctl().on_drag_ended(PanelState::new(true, H / 2.0), H);
        assert_eq!(ended, PanelState::CLOSED);
    }

    #[test]
    fn drag_ended_is_a_fixed_point() {
        for offset in [0.0, 100.0, 400.0, 401.0, 600.0] {
            let once = ctl().on_drag_ended(PanelState::new(false, offset), H);
            let twice = ctl().on_drag_ended(once, H);
            assert_eq!(once, twice, "offset {offset}");
        }
    }

    #[test]
    fn degenerate_heights_collapse_to_zero_travel() {
        for h in [f64::NAN, -10.0, f64::INFINITY, 0.0] {
            let dragged = ctl().on_drag_changed(50.0, PanelState::CLOSED, h);
            assert_eq!(dragged.offset, 0.0, "height {h}");
            assert_eq!(ctl().on_drag_ended(dragged, h), PanelState::CLOSED);
            assert_eq!(ctl().on_handle_tap(PanelState::CLOSED, h), PanelState::new(true, 0.0));
        }
    }

    #[test]
    fn nan_delta_and_offset_are_ignored() {
        let dragged = ctl().on_drag_changed(f64::NAN, PanelState::new(false, 120.0), H);
        assert_eq!(dragged.offset, 120.0);
        let dragged = ctl().on_drag_changed(30.0, PanelState::new(false, f64::NAN), H);
        assert_eq!(dragged.offset, 30.0);
    }

    #[test]
    fn infinite_delta_clamps() {
        let dragged = ctl().on_drag_changed(f64::INFINITY, PanelState::CLOSED, H);
        assert_eq!(dragged.offset, 600.0);
        let dragged = ctl().on_drag_changed(f64::NEG_INFINITY, dragged, H);
        assert_eq!(dragged.offset, 0.0);
    }

    #[test]
    fn phases() {
        assert_eq!(ctl().phase(PanelState::CLOSED, H), PanelPhase::Closed);
        assert_eq!(ctl().phase(PanelState::new(true, 600.0), H), PanelPhase::Open);
        assert_eq!(
            ctl().phase(PanelState::new(false, 250.0), H),
            PanelPhase::Dragging { offset: 250.0 }
        );
    }

    #[test]
    fn content_and_chrome_follow_is_open() {
        assert_eq!(PanelState::CLOSED.content(), PanelContent::TodaySchedule);
        assert_eq!(PanelState::CLOSED.chrome_opacity(), 1.0);
        let open = PanelState::new(true, 600.0);
        assert_eq!(open.content(), PanelContent::Calendar);
        assert_eq!(open.chrome_opacity(), 0.0);
    }

    // --- Animated panel ---

    fn settle(panel: &mut PullUpPanel) {
        for _ in 0..200 {
            panel.tick(MS_16);
        }
    }

    #[test]
    fn panel_starts_closed_and_settled() {
        let mut panel = PullUpPanel::default();
        panel.set_container_height(24.0);
        assert_eq!(panel.state(), PanelState::CLOSED);
        assert!(panel.is_settled());
    }

    #[test]
    fn drag_release_animates_to_open() {
        let mut panel = PullUpPanel::default();
        panel.set_container_height(20.0);

        panel.begin_drag();
        panel.drag_by(11.0);
        assert_eq!(panel.displayed_offset(), 11.0);
        assert!(!panel.is_settled());

        let snapped = panel.end_drag();
        assert_eq!(snapped, PanelState::new(true, 15.0));
        assert!(panel.is_animating());
        assert_eq!(panel.displayed_offset(), 11.0);

        let mut prev = panel.displayed_offset();
        while panel.is_animating() {
            panel.tick(MS_16);
            assert!(panel.displayed_offset() >= prev);
            prev = panel.displayed_offset();
        }
        assert_eq!(panel.displayed_offset(), 15.0);
        assert!(panel.is_settled());
    }

    #[test]
    fn tap_animates_both_ways() {
        let mut panel = PullUpPanel::default();
        panel.set_container_height(20.0);

        panel.tap_handle();
        assert_eq!(panel.displayed_offset(), 0.0);
        settle(&mut panel);
        assert_eq!(panel.displayed_offset(), 15.0);

        panel.tap_handle();
        settle(&mut panel);
        assert_eq!(panel.displayed_offset(), 0.0);
        assert_eq!(panel.content(), PanelContent::TodaySchedule);
    }

    #[test]
    fn cancel_finalizes_like_release() {
        let mut panel = PullUpPanel::default();
        panel.set_container_height(20.0);
        panel.drag_by(4.0);
        assert_eq!(panel.cancel_drag(), PanelState::CLOSED);
        settle(&mut panel);
        assert!(panel.is_settled());
    }

    #[test]
    fn grabbing_mid_animation_continues_from_displayed_offset() {
        let mut panel = PullUpPanel::default();
        panel.set_container_height(20.0);
        panel.tap_handle();
        for _ in 0..10 {
            panel.tick(MS_16);
        }
        let shown = panel.displayed_offset();
        assert!(shown > 0.0 && shown < 15.0);

        panel.begin_drag();
        assert!(!panel.is_animating());
        assert_eq!(panel.state().offset, shown);
        assert!(panel.state().is_open);
    }

    #[test]
    fn resize_at_rest_reanchors_open_panel() {
        let mut panel = PullUpPanel::default();
        panel.set_container_height(20.0);
        panel.tap_handle();
        settle(&mut panel);

        panel.set_container_height(40.0);
        assert_eq!(panel.state(), PanelState::new(true, 30.0));
        assert!(panel.is_settled());
    }

    #[test]
    fn resize_mid_drag_reclamps() {
        let mut panel = PullUpPanel::default();
        panel.set_container_height(40.0);
        panel.drag_by(28.0);
        panel.set_container_height(20.0);
        assert_eq!(panel.state().offset, 15.0);
        assert!(panel.is_dragging());
    }

    #[test]
    fn spring_motion_settles_within_bounds() {
        let mut panel = PullUpPanel::new(PanelMotion::Spring {
            stiffness: 300.0,
            damping: 8.0,
        });
        panel.set_container_height(20.0);
        panel.tap_handle();
        for _ in 0..400 {
            panel.tick(MS_16);
            let shown = panel.displayed_offset();
            assert!((0.0..=15.0).contains(&shown));
        }
        assert!(panel.is_settled());
    }

    #[test]
    fn undamped_spring_still_settles() {
        for damping in [0.0, -5.0, f64::NAN] {
            let mut panel = PullUpPanel::new(PanelMotion::Spring {
                stiffness: 170.0,
                damping,
            });
            panel.set_container_height(20.0);
            panel.tap_handle();
            for _ in 0..10_000 {
                panel.tick(MS_16);
            }
            assert!(!panel.is_animating(), "damping {damping} never came to rest");
            assert!(panel.is_settled());
            assert_eq!(panel.displayed_offset(), 15.0);
        }
    }
}
