// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tour driver: owns the current step and applies guarded transitions.

use core::fmt;

use smallvec::SmallVec;

use crate::script::{AdvanceRule, Continuation, NextStep, Script, Step, StepId};

/// Events produced by driver transitions, in emission order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TourEvent {
    /// A click-required step was satisfied: the host should now perform the
    /// instructed domain action (for example, actually invoke the analysis).
    /// The tour never calls backend logic itself.
    AdvanceRequested {
        /// The step whose click requirement was satisfied.
        step: StepId,
    },
    /// The active step changed.
    StepChanged {
        /// Previous step.
        from: StepId,
        /// New step.
        to: StepId,
    },
    /// The terminal continuation was reached. The lifecycle gate shows the
    /// end modal in response.
    Completed {
        /// The last step of the run.
        last: StepId,
    },
}

/// Event batch returned by a single driver call.
pub type TourEvents = SmallVec<[TourEvent; 2]>;

/// The step state machine.
///
/// At most one step is active at any instant. `current() == None` means the
/// tour is not displaying a step: not yet begun, or finished. Transitions
/// move strictly forward through the validated [`Script`], and every call
/// advances at most one step, so a single external state change can never
/// skip two steps.
pub struct TourDriver<K, S> {
    script: Script<K, S>,
    current: Option<StepId>,
    finished: bool,
}

impl<K: fmt::Debug, S> fmt::Debug for TourDriver<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourDriver")
            .field("current", &self.current)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

impl<K: PartialEq, S> TourDriver<K, S> {
    /// Create a driver over a validated script. The tour is not started;
    /// call [`TourDriver::begin`].
    pub fn new(script: Script<K, S>) -> Self {
        Self {
            script,
            current: None,
            finished: false,
        }
    }

    /// Enter the first step. A no-op if the tour already ran or is running.
    pub fn begin(&mut self) {
        if !self.finished && self.current.is_none() {
            self.current = Some(self.script.first());
        }
    }

    /// Id of the active step, if any.
    pub fn current(&self) -> Option<StepId> {
        self.current
    }

    /// The active step's full data, if any.
    pub fn current_step(&self) -> Option<&Step<K, S>> {
        self.current.and_then(|id| self.script.step(id))
    }

    /// Whether the tour has reached its terminal continuation.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The underlying script.
    pub fn script(&self) -> &Script<K, S> {
        &self.script
    }

    /// Re-evaluate the active step's guard against host state.
    ///
    /// Advances at most one step per call, and never advances a step whose
    /// rule is [`AdvanceRule::TargetClick`]: no sequence of state changes
    /// alone satisfies a required click. Safe to call on every host render
    /// or state change: once a guard fires, the step it guarded is no longer
    /// current, so a guard flapping true→false→true cannot re-trigger.
    pub fn evaluate(&mut self, state: &S) -> TourEvents {
        let Some(current) = self.current else {
            return SmallVec::new();
        };
        let Some(step) = self.script.step(current) else {
            return SmallVec::new();
        };
        match step.advance {
            AdvanceRule::TargetClick => SmallVec::new(),
            AdvanceRule::Guard(guard) => {
                if guard(state) {
                    self.advance(current, state, false)
                } else {
                    SmallVec::new()
                }
            }
        }
    }

    /// Report a click on a resolved target element.
    ///
    /// Advances only when the active step requires a target click and
    /// `clicked` is that step's target. Emits
    /// [`TourEvent::AdvanceRequested`] first, so the host performs the
    /// instructed domain action, then the transition.
    pub fn notify_target_click(&mut self, clicked: &K, state: &S) -> TourEvents {
        let Some(current) = self.current else {
            return SmallVec::new();
        };
        let Some(step) = self.script.step(current) else {
            return SmallVec::new();
        };
        if !matches!(step.advance, AdvanceRule::TargetClick) || step.target != *clicked {
            return SmallVec::new();
        }
        self.advance(current, state, true)
    }

    fn advance(&mut self, from: StepId, state: &S, via_click: bool) -> TourEvents {
        let mut out = SmallVec::new();
        if via_click {
            out.push(TourEvent::AdvanceRequested { step: from });
        }
        // The step exists: `from` came from `current`, which only ever holds
        // validated ids.
        let Some(step) = self.script.step(from) else {
            return out;
        };
        let continuation = match step.next {
            NextStep::Always(cont) => cont,
            NextStep::Branch {
                when,
                then,
                otherwise,
            } => {
                if when(state) { then } else { otherwise }
            }
        };
        match continuation {
            Continuation::Goto(to) => {
                self.current = Some(to);
                out.push(TourEvent::StepChanged { from, to });
            }
            Continuation::Finish => {
                self.current = None;
                self.finished = true;
                out.push(TourEvent::Completed { last: from });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use smallvec::smallvec;

    use super::*;

    #[derive(Default)]
    struct AppState {
        mode_selected: bool,
        text_len: usize,
        wants_reply: bool,
    }

    const SELECT_MODE: StepId = StepId(0);
    const PASTE_TEXT: StepId = StepId(1);
    const ANALYZE: StepId = StepId(2);
    const REVIEW: StepId = StepId(3);
    const REPLY: StepId = StepId(4);

    fn script() -> Script<&'static str, AppState> {
        Script::new(vec![
            Step {
                id: SELECT_MODE,
                target: "mode-picker",
                highlights: smallvec!["mode-picker"],
                title: "Pick a mode",
                body: "",
                advance: AdvanceRule::Guard(|s: &AppState| s.mode_selected),
                next: NextStep::Always(Continuation::Goto(PASTE_TEXT)),
            },
            Step {
                id: PASTE_TEXT,
                target: "text-input",
                highlights: smallvec!["text-input"],
                title: "Paste your text",
                body: "",
                advance: AdvanceRule::Guard(|s: &AppState| s.text_len >= 60),
                next: NextStep::Always(Continuation::Goto(ANALYZE)),
            },
            Step {
                id: ANALYZE,
                target: "analyze-button",
                highlights: smallvec!["analyze-button", "text-input"],
                title: "Analyze",
                body: "",
                advance: AdvanceRule::TargetClick,
                next: NextStep::Always(Continuation::Goto(REVIEW)),
            },
            Step {
                id: REVIEW,
                target: "result-card",
                highlights: smallvec!["result-card"],
                title: "Review",
                body: "",
                advance: AdvanceRule::Guard(|s: &AppState| s.text_len > 0),
                next: NextStep::Branch {
                    when: |s: &AppState| s.wants_reply,
                    then: Continuation::Goto(REPLY),
                    otherwise: Continuation::Finish,
                },
            },
            Step {
                id: REPLY,
                target: "reply-button",
                highlights: smallvec!["reply-button"],
                title: "Reply",
                body: "",
                advance: AdvanceRule::TargetClick,
                next: NextStep::Always(Continuation::Finish),
            },
        ])
        .unwrap()
    }

    #[test]
    fn begin_enters_the_first_step() {
        let mut driver = TourDriver::new(script());
        assert_eq!(driver.current(), None);
        driver.begin();
        assert_eq!(driver.current(), Some(SELECT_MODE));
        // begin is idempotent.
        driver.begin();
        assert_eq!(driver.current(), Some(SELECT_MODE));
    }

    #[test]
    fn guard_advances_exactly_once() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState {
            mode_selected: true,
            ..AppState::default()
        };
        let events = driver.evaluate(&state);
        assert_eq!(
            events.as_slice(),
            &[TourEvent::StepChanged {
                from: SELECT_MODE,
                to: PASTE_TEXT,
            }]
        );
        // Same state again: the fired guard is no longer current.
        assert!(driver.evaluate(&AppState::default()).is_empty());
        assert_eq!(driver.current(), Some(PASTE_TEXT));
    }

    #[test]
    fn at_most_one_step_advances_per_evaluation() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        // State satisfies the guards of both of the first two steps at once.
        let state = AppState {
            mode_selected: true,
            text_len: 100,
            ..AppState::default()
        };
        driver.evaluate(&state);
        assert_eq!(driver.current(), Some(PASTE_TEXT));
        driver.evaluate(&state);
        assert_eq!(driver.current(), Some(ANALYZE));
    }

    #[test]
    fn guard_flapping_does_not_re_trigger() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let on = AppState {
            mode_selected: true,
            ..AppState::default()
        };
        driver.evaluate(&on);
        assert_eq!(driver.current(), Some(PASTE_TEXT));
        // mode flips back off and on; the paste-text step stays current.
        driver.evaluate(&AppState::default());
        driver.evaluate(&on);
        assert_eq!(driver.current(), Some(PASTE_TEXT));
    }

    #[test]
    fn state_changes_never_advance_a_click_step() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState {
            mode_selected: true,
            text_len: 100,
            wants_reply: true,
        };
        driver.evaluate(&state);
        driver.evaluate(&state);
        assert_eq!(driver.current(), Some(ANALYZE));
        for _ in 0..5 {
            assert!(driver.evaluate(&state).is_empty());
        }
        assert_eq!(driver.current(), Some(ANALYZE));
    }

    #[test]
    fn click_on_the_target_advances_and_requests_the_action() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState {
            mode_selected: true,
            text_len: 100,
            ..AppState::default()
        };
        driver.evaluate(&state);
        driver.evaluate(&state);
        assert_eq!(driver.current(), Some(ANALYZE));

        let events = driver.notify_target_click(&"analyze-button", &state);
        assert_eq!(
            events.as_slice(),
            &[
                TourEvent::AdvanceRequested { step: ANALYZE },
                TourEvent::StepChanged {
                    from: ANALYZE,
                    to: REVIEW,
                },
            ]
        );
    }

    #[test]
    fn click_on_another_element_is_ignored() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState {
            mode_selected: true,
            text_len: 100,
            ..AppState::default()
        };
        driver.evaluate(&state);
        driver.evaluate(&state);
        assert!(driver.notify_target_click(&"result-card", &state).is_empty());
        assert_eq!(driver.current(), Some(ANALYZE));
    }

    #[test]
    fn click_on_a_guard_step_is_ignored() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState::default();
        assert!(driver.notify_target_click(&"mode-picker", &state).is_empty());
        assert_eq!(driver.current(), Some(SELECT_MODE));
    }

    #[test]
    fn branch_selects_the_reply_sub_script() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState {
            mode_selected: true,
            text_len: 100,
            wants_reply: true,
        };
        driver.evaluate(&state);
        driver.evaluate(&state);
        driver.notify_target_click(&"analyze-button", &state);
        assert_eq!(driver.current(), Some(REVIEW));
        let events = driver.evaluate(&state);
        assert_eq!(
            events.as_slice(),
            &[TourEvent::StepChanged {
                from: REVIEW,
                to: REPLY,
            }]
        );
    }

    #[test]
    fn branch_can_complete_the_tour() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState {
            mode_selected: true,
            text_len: 100,
            wants_reply: false,
        };
        driver.evaluate(&state);
        driver.evaluate(&state);
        driver.notify_target_click(&"analyze-button", &state);
        let events = driver.evaluate(&state);
        assert_eq!(
            events.as_slice(),
            &[TourEvent::Completed { last: REVIEW }]
        );
        assert_eq!(driver.current(), None);
        assert!(driver.is_finished());
    }

    #[test]
    fn finished_tour_cannot_restart_or_advance() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState {
            mode_selected: true,
            text_len: 100,
            wants_reply: false,
        };
        driver.evaluate(&state);
        driver.evaluate(&state);
        driver.notify_target_click(&"analyze-button", &state);
        driver.evaluate(&state);
        assert!(driver.is_finished());

        driver.begin();
        assert_eq!(driver.current(), None);
        assert!(driver.evaluate(&state).is_empty());
        assert!(driver.notify_target_click(&"reply-button", &state).is_empty());
    }

    #[test]
    fn transitions_are_strictly_forward() {
        let mut driver = TourDriver::new(script());
        driver.begin();
        let state = AppState {
            mode_selected: true,
            text_len: 100,
            wants_reply: true,
        };
        let mut seen: Vec<StepId> = vec![driver.current().unwrap()];
        loop {
            let mut events = driver.evaluate(&state);
            if events.is_empty() {
                if let Some(step) = driver.current_step() {
                    let target = step.target;
                    events = driver.notify_target_click(&target, &state);
                }
            }
            if events.is_empty() {
                break;
            }
            match driver.current() {
                Some(id) => seen.push(id),
                None => break,
            }
        }
        // Every visited step appears once, in script order.
        assert_eq!(seen, vec![SELECT_MODE, PASTE_TEXT, ANALYZE, REVIEW, REPLY]);
    }
}
