// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine: one state machine over gate, driver, highlights, focus, and
//! geometry tracking.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use limelight_focus::{AutoFocus, FocusCommand};
use limelight_locator::{PollSchedule, TargetFlags, TargetSource, resolve};
use limelight_overlay::{
    ActiveStep, PointerDisposition, SpotlightScene, route_pointer_down, scene,
};
use limelight_patch::{Highlight, HighlightSet, StyleHost};
use limelight_tour::gate::{Eligibility, LifecycleGate};
use limelight_tour::{AdvanceRule, Script, StepId, TourDriver, TourEvent, TourEvents};

/// Everything the engine needs from the host UI tree: geometry queries and
/// inline style read/write.
pub trait TourHost<K>: TargetSource<K> + StyleHost<K> {}

impl<K, T: TargetSource<K> + StyleHost<K>> TourHost<K> for T {}

/// Events the engine hands back to the host for side effects it cannot
/// perform itself.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent<K> {
    /// A driver transition.
    Tour(TourEvent),
    /// A pointer-down was swallowed by the backdrop. Informational; the host
    /// may flash the tooltip or ignore it.
    BlockedClick {
        /// Where the swallowed pointer-down landed.
        point: Point,
    },
    /// Move keyboard focus to this element now.
    FocusTarget(FocusCommand<K>),
    /// The script completed and the gate entered
    /// [`limelight_tour::gate::GatePhase::EndDialog`]; the host should
    /// present the closing modal.
    TourFinished,
}

/// Event batch returned by a single engine call.
pub type EngineEvents<K> = SmallVec<[EngineEvent<K>; 4]>;

/// The guided tour engine.
///
/// The engine owns no timers and spawns nothing: the host calls
/// [`TourEngine::sync`] after each application state change,
/// [`TourEngine::tick`] from its frame or timer loop with a millisecond
/// timestamp, [`TourEngine::on_scroll`] / [`TourEngine::on_resize`] from its
/// viewport listeners, and [`TourEngine::pointer_down`] before dispatching a
/// press. Rendering reads [`TourEngine::scene`]. All mutation happens inside
/// these calls, so step transitions, style patching, and focus moves can
/// never race one another.
pub struct TourEngine<K, S> {
    driver: TourDriver<K, S>,
    gate: LifecycleGate,
    highlights: HighlightSet<K>,
    auto_focus: AutoFocus<K>,
    schedule: PollSchedule,
    highlight_cfg: Highlight,
    target_rect: Option<Rect>,
    current_target: Option<K>,
    applied_step: Option<StepId>,
}

impl<K: fmt::Debug, S> fmt::Debug for TourEngine<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourEngine")
            .field("driver", &self.driver)
            .field("gate", &self.gate)
            .field("target_rect", &self.target_rect)
            .field("applied_step", &self.applied_step)
            .finish_non_exhaustive()
    }
}

impl<K: Clone + Eq + Hash, S> TourEngine<K, S> {
    /// Create an engine over a validated script, with default highlight
    /// styling and poll cadence.
    pub fn new(script: Script<K, S>) -> Self {
        Self {
            driver: TourDriver::new(script),
            gate: LifecycleGate::new(),
            highlights: HighlightSet::new(),
            auto_focus: AutoFocus::new(),
            schedule: PollSchedule::new(),
            highlight_cfg: Highlight::default(),
            target_rect: None,
            current_target: None,
            applied_step: None,
        }
    }

    /// Override the highlight styling.
    pub fn with_highlight(mut self, cfg: Highlight) -> Self {
        self.highlight_cfg = cfg;
        self
    }

    /// Override the geometry poll interval in milliseconds.
    pub fn with_poll_interval(mut self, interval_ms: u64) -> Self {
        self.schedule = PollSchedule::with_interval(interval_ms);
        self
    }

    /// The lifecycle gate, for reading the current phase.
    pub fn gate(&self) -> &LifecycleGate {
        &self.gate
    }

    /// Id of the active step, if the tour is running.
    pub fn current(&self) -> Option<StepId> {
        self.driver.current()
    }

    /// The active target's last resolved rectangle.
    pub fn target_rect(&self) -> Option<Rect> {
        self.target_rect
    }

    /// The user dismissed the welcome modal; the next [`TourEngine::sync`]
    /// starts the script.
    pub fn acknowledge_start(&mut self) {
        self.gate.acknowledge_start();
    }

    /// The user dismissed the closing modal.
    pub fn acknowledge_end(&mut self) {
        self.gate.acknowledge_end();
    }

    /// Re-check eligibility and the active step's guard against host state.
    ///
    /// Call after every application state change (and on startup). Handles
    /// the full lifecycle: a subscription activating mid-tour tears down all
    /// patches and focus scheduling on this call; an eligible, acknowledged
    /// gate starts the script.
    pub fn sync<H: TourHost<K>>(
        &mut self,
        now_ms: u64,
        elig: Eligibility,
        state: &S,
        host: &mut H,
    ) -> EngineEvents<K> {
        if self.gate.evaluate(elig) {
            self.teardown(host);
            return SmallVec::new();
        }
        if !self.gate.is_tour_active() {
            return SmallVec::new();
        }
        self.driver.begin();
        let events = self.driver.evaluate(state);
        self.settle(events, now_ms, host)
    }

    /// Advance time: on a due poll, re-resolve geometry and re-reconcile the
    /// highlight set (picking up targets that mounted late), then deliver
    /// any deferred focus move.
    ///
    /// Focus commands with `needs_tab_stop` have the tab stop patched here,
    /// through the highlight set, before the command is handed out; the host
    /// only has to scroll and focus.
    pub fn tick<H: TourHost<K>>(&mut self, now_ms: u64, host: &mut H) -> EngineEvents<K> {
        let mut out = SmallVec::new();
        if !self.gate.is_tour_active() {
            return out;
        }
        if self.schedule.due(now_ms)
            && let Some(target) = self.current_target.clone()
        {
            self.target_rect = resolve(host, &target);
            // Elements that mounted after the step became active (a result
            // card animating in) get their patch here; stayers keep their
            // snapshot, so repeated passes never stack.
            if let Some(ids) = self.highlight_ids() {
                self.highlights.apply(host, &ids, &self.highlight_cfg);
            }
        }
        if let Some(cmd) = self.auto_focus.take_due(now_ms) {
            if cmd.needs_tab_stop {
                self.highlights.patch_tab_index(host, &cmd.target);
            }
            out.push(EngineEvent::FocusTarget(cmd));
        }
        out
    }

    /// Record a scroll notice; the next [`TourEngine::tick`] re-resolves
    /// geometry immediately. Wire this to capture-phase scroll listeners so
    /// inner scroll containers are covered.
    pub fn on_scroll(&mut self) {
        self.schedule.notice();
    }

    /// Record a viewport resize notice.
    pub fn on_resize(&mut self) {
        self.schedule.notice();
    }

    /// The spotlight scene for the current frame, or `None` when nothing
    /// should render.
    pub fn scene(&self, viewport: Rect) -> Option<SpotlightScene> {
        if !self.gate.is_tour_active() {
            return None;
        }
        let step = self.driver.current_step()?;
        let active = ActiveStep {
            title: step.title,
            body: step.body,
            requires_target_click: matches!(step.advance, AdvanceRule::TargetClick),
        };
        scene(Some(&active), self.target_rect, viewport)
    }

    /// Route a pointer-down through the overlay before the host dispatches
    /// it.
    ///
    /// A press inside the hole passes through to the underlying UI. When
    /// the step requires a target click and the press lands on the target
    /// element itself (not merely in the hole's padding fringe, where the
    /// element's own click handler cannot fire), the tour advances, emitting
    /// [`TourEvent::AdvanceRequested`] so the host performs the instructed
    /// action. A press swallowed by the backdrop yields exactly one
    /// [`EngineEvent::BlockedClick`]; it is not an error and the host must
    /// not dispatch the press.
    pub fn pointer_down<H: TourHost<K>>(
        &mut self,
        point: Point,
        viewport: Rect,
        now_ms: u64,
        state: &S,
        host: &mut H,
    ) -> EngineEvents<K> {
        let Some(current_scene) = self.scene(viewport) else {
            return SmallVec::new();
        };
        match route_pointer_down(&current_scene, point) {
            PointerDisposition::Blocked => {
                let mut out: EngineEvents<K> = SmallVec::new();
                out.push(EngineEvent::BlockedClick { point });
                out
            }
            PointerDisposition::PassThrough => {
                if !current_scene.intercepts_pointer {
                    // Guard-driven step; the page handles the press and a
                    // later sync picks up any resulting state change.
                    return SmallVec::new();
                }
                let Some(target) = self.current_target.clone() else {
                    return SmallVec::new();
                };
                // The hole is padded beyond the target rect; a press in that
                // fringe reaches the page but never the target's own click
                // handler, so it must not count as the required click.
                if !self.target_rect.is_some_and(|r| r.contains(point)) {
                    return SmallVec::new();
                }
                let events = self.driver.notify_target_click(&target, state);
                self.settle(events, now_ms, host)
            }
        }
    }

    /// Fold driver events into engine events and bring patches, focus, and
    /// the poll schedule in line with the step the driver landed on.
    fn settle<H: TourHost<K>>(
        &mut self,
        events: TourEvents,
        now_ms: u64,
        host: &mut H,
    ) -> EngineEvents<K> {
        let mut out: EngineEvents<K> = SmallVec::new();
        let mut finished = false;
        for event in events {
            if matches!(event, TourEvent::Completed { .. }) {
                finished = true;
            }
            out.push(EngineEvent::Tour(event));
        }
        if finished {
            self.gate.on_completed();
            self.teardown(host);
            out.push(EngineEvent::TourFinished);
            return out;
        }
        self.apply_step_effects(now_ms, host);
        out
    }

    /// Apply the effect protocol for the step the driver is on, once per
    /// step: reconcile highlights over target plus co-highlights, resolve
    /// geometry, re-arm the poll schedule, and schedule the deferred focus
    /// move for click-required steps.
    fn apply_step_effects<H: TourHost<K>>(&mut self, now_ms: u64, host: &mut H) {
        let Some(step) = self.driver.current_step() else {
            return;
        };
        if self.applied_step == Some(step.id) {
            return;
        }
        let step_id = step.id;
        let target = step.target.clone();
        let requires_click = matches!(step.advance, AdvanceRule::TargetClick);
        let ids = self.highlight_ids().unwrap_or_default();

        self.highlights.apply(host, &ids, &self.highlight_cfg);
        self.target_rect = resolve(host, &target);
        self.schedule.reset();
        if requires_click {
            let focusable = host.flags_of(&target).contains(TargetFlags::FOCUSABLE);
            self.auto_focus.schedule(target.clone(), now_ms, !focusable);
        } else {
            self.auto_focus.cancel();
        }
        self.current_target = Some(target);
        self.applied_step = Some(step_id);
    }

    /// The active step's target plus co-highlights, target first,
    /// deduplicated.
    fn highlight_ids(&self) -> Option<Vec<K>> {
        let step = self.driver.current_step()?;
        let mut ids: Vec<K> = Vec::with_capacity(step.highlights.len() + 1);
        ids.push(step.target.clone());
        for id in &step.highlights {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        Some(ids)
    }

    /// Restore every patch and stop all tracking. Idempotent.
    fn teardown<H: StyleHost<K>>(&mut self, host: &mut H) {
        self.highlights.dispose(host);
        self.auto_focus.cancel();
        self.schedule.disarm();
        self.target_rect = None;
        self.current_target = None;
        self.applied_step = None;
    }
}
