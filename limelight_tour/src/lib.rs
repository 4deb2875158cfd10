// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Tour: the step state machine behind the guided tour.
//!
//! A tour is a [`Script`]: an ordered list of [`Step`]s, each naming its
//! target element, co-highlights, tooltip copy, an advance rule, and a
//! guarded edge to what comes next. The script is data, not code: guards
//! are plain `fn(&S) -> bool` predicates over host application state, and
//! the single observed branch point (continue into the reply sub-script, or
//! finish) is a [`NextStep::Branch`] edge rather than a special-cased id.
//!
//! The [`TourDriver`] owns `current_step`: at most one step is active at any
//! instant, transitions move strictly forward through the script (enforced
//! structurally by [`Script::new`] validation), and each call advances at
//! most one step. Steps advance one of two ways:
//!
//! - [`AdvanceRule::Guard`]: the transition fires automatically, exactly
//!   once, when the predicate over host state first holds. Guards are
//!   idempotent: re-evaluating with unchanged state cannot re-trigger,
//!   because firing moves `current_step` past the guard.
//! - [`AdvanceRule::TargetClick`]: *only* a click on the resolved target
//!   advances the step. No sequence of external state changes can skip a
//!   required click.
//!
//! The [`gate`] module wraps the driver in the trial lifecycle: eligibility
//! (an active subscription disables the tour outright), and the start/end
//! modal dialogs that bookend the script.
//!
//! ## Example
//!
//! ```rust
//! use limelight_tour::{
//!     AdvanceRule, Continuation, NextStep, Script, Step, StepId, TourDriver, TourEvent,
//! };
//! use smallvec::smallvec;
//!
//! struct AppState {
//!     mode_selected: bool,
//! }
//!
//! const SELECT_MODE: StepId = StepId(0);
//! const DONE: StepId = StepId(1);
//!
//! let script = Script::new(vec![
//!     Step {
//!         id: SELECT_MODE,
//!         target: "mode-picker",
//!         highlights: smallvec!["mode-picker"],
//!         title: "Pick a mode",
//!         body: "Choose how to analyze your text.",
//!         advance: AdvanceRule::Guard(|s: &AppState| s.mode_selected),
//!         next: NextStep::Always(Continuation::Goto(DONE)),
//!     },
//!     Step {
//!         id: DONE,
//!         target: "analyze-button",
//!         highlights: smallvec!["analyze-button"],
//!         title: "Analyze",
//!         body: "Click the highlighted button.",
//!         advance: AdvanceRule::TargetClick,
//!         next: NextStep::Always(Continuation::Finish),
//!     },
//! ])
//! .unwrap();
//!
//! let mut driver = TourDriver::new(script);
//! driver.begin();
//! assert_eq!(driver.current(), Some(SELECT_MODE));
//!
//! // External state satisfies the guard: auto-advance, exactly once.
//! let events = driver.evaluate(&AppState { mode_selected: true });
//! assert!(matches!(events[0], TourEvent::StepChanged { .. }));
//! assert_eq!(driver.current(), Some(DONE));
//!
//! // State changes alone never advance a click-required step.
//! assert!(driver.evaluate(&AppState { mode_selected: true }).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod driver;
pub mod gate;
mod script;

pub use driver::{TourDriver, TourEvent, TourEvents};
pub use script::{
    AdvanceRule, Continuation, NextStep, Script, ScriptError, Step, StepId,
};
