// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reference script: an eight-step walkthrough of a text-analysis
//! workflow, with a reply sub-script behind the branch point.
//!
//! Element identifiers here are `&'static str` tags; a host assigns them to
//! its widgets through its [`limelight_locator::TargetSource`]
//! implementation. The script doubles as an executable example of authoring
//! guards and edges, and backs the engine's own tests and the workspace
//! demo.

use alloc::vec;

use smallvec::smallvec;

use limelight_tour::{
    AdvanceRule, Continuation, NextStep, Script, Step, StepId,
};

/// Minimum pasted-text length before the paste step advances.
pub const MIN_TEXT_LEN: usize = 60;

/// Tag of the analysis-mode picker.
pub const MODE_PICKER: &str = "mode-picker";
/// Tag of the main text input.
pub const TEXT_INPUT: &str = "text-input";
/// Tag of the category picker.
pub const CATEGORY_PICKER: &str = "category-picker";
/// Tag of the primary analyze button.
pub const ANALYZE_BUTTON: &str = "analyze-button";
/// Tag of the result card.
pub const RESULT_CARD: &str = "result-card";
/// Tag of the reply button.
pub const REPLY_BUTTON: &str = "reply-button";

/// Which analysis mode the user has picked.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Analyze the pasted text directly.
    Primary,
    /// Compose a reply to the pasted text.
    Secondary,
}

/// The slice of application state the demo script's guards read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DemoState {
    /// Selected analysis mode, if any.
    pub mode: Option<Mode>,
    /// Length of the pasted text, in characters.
    pub text_len: usize,
    /// A category has been picked.
    pub category_selected: bool,
    /// An analysis request is currently running.
    pub analysis_in_flight: bool,
    /// An analysis result is on screen.
    pub result_present: bool,
    /// The user indicated they want to compose a reply.
    pub wants_reply: bool,
}

/// Step ids of the demo script, in script order.
pub mod steps {
    use super::StepId;

    /// Pick an analysis mode.
    pub const SELECT_MODE: StepId = StepId(0);
    /// Paste the text to analyze.
    pub const PASTE_TEXT: StepId = StepId(1);
    /// Pick a category.
    pub const SELECT_CATEGORY: StepId = StepId(2);
    /// Click the analyze button.
    pub const TRIGGER_PRIMARY: StepId = StepId(3);
    /// Review the analysis result; branch point.
    pub const REVIEW_PRIMARY: StepId = StepId(4);
    /// Switch into reply mode.
    pub const SWITCH_MODE: StepId = StepId(5);
    /// Click the reply button.
    pub const TRIGGER_SECONDARY: StepId = StepId(6);
    /// Review the generated reply; last step.
    pub const REVIEW_SECONDARY: StepId = StepId(7);
}

/// Build the reference walkthrough script.
///
/// The script passes [`Script::new`] validation by construction, so the
/// panic in the `expect` is unreachable.
pub fn demo_script() -> Script<&'static str, DemoState> {
    use steps::*;

    Script::new(vec![
        Step {
            id: SELECT_MODE,
            target: MODE_PICKER,
            highlights: smallvec![MODE_PICKER],
            title: "Pick an analysis mode",
            body: "Choose how you want your text analyzed.",
            advance: AdvanceRule::Guard(|s: &DemoState| s.mode.is_some()),
            next: NextStep::Always(Continuation::Goto(PASTE_TEXT)),
        },
        Step {
            id: PASTE_TEXT,
            target: TEXT_INPUT,
            highlights: smallvec![TEXT_INPUT],
            title: "Paste your text",
            body: "Paste the text you want analyzed. A few sentences work best.",
            advance: AdvanceRule::Guard(|s: &DemoState| s.text_len >= MIN_TEXT_LEN),
            next: NextStep::Always(Continuation::Goto(SELECT_CATEGORY)),
        },
        Step {
            id: SELECT_CATEGORY,
            target: CATEGORY_PICKER,
            highlights: smallvec![CATEGORY_PICKER],
            title: "Pick a category",
            body: "Tell us what kind of text this is.",
            advance: AdvanceRule::Guard(|s: &DemoState| s.category_selected),
            next: NextStep::Always(Continuation::Goto(TRIGGER_PRIMARY)),
        },
        Step {
            id: TRIGGER_PRIMARY,
            target: ANALYZE_BUTTON,
            highlights: smallvec![ANALYZE_BUTTON],
            title: "Run the analysis",
            body: "Click the highlighted button to analyze your text.",
            advance: AdvanceRule::TargetClick,
            next: NextStep::Always(Continuation::Goto(REVIEW_PRIMARY)),
        },
        Step {
            id: REVIEW_PRIMARY,
            target: RESULT_CARD,
            highlights: smallvec![RESULT_CARD],
            title: "Review your result",
            body: "Here is what the analysis found.",
            advance: AdvanceRule::Guard(|s: &DemoState| {
                s.result_present && !s.analysis_in_flight
            }),
            next: NextStep::Branch {
                when: |s: &DemoState| s.wants_reply,
                then: Continuation::Goto(SWITCH_MODE),
                otherwise: Continuation::Finish,
            },
        },
        Step {
            id: SWITCH_MODE,
            target: MODE_PICKER,
            highlights: smallvec![MODE_PICKER],
            title: "Switch to reply mode",
            body: "Change the mode to compose a reply.",
            advance: AdvanceRule::Guard(|s: &DemoState| {
                s.mode == Some(Mode::Secondary) && !s.result_present
            }),
            next: NextStep::Always(Continuation::Goto(TRIGGER_SECONDARY)),
        },
        Step {
            id: TRIGGER_SECONDARY,
            target: REPLY_BUTTON,
            highlights: smallvec![REPLY_BUTTON],
            title: "Generate a reply",
            body: "Click the highlighted button to compose your reply.",
            advance: AdvanceRule::TargetClick,
            next: NextStep::Always(Continuation::Goto(REVIEW_SECONDARY)),
        },
        Step {
            id: REVIEW_SECONDARY,
            target: RESULT_CARD,
            highlights: smallvec![RESULT_CARD],
            title: "Review your reply",
            body: "Here is the reply we composed for you.",
            advance: AdvanceRule::Guard(|s: &DemoState| {
                s.result_present && !s.analysis_in_flight
            }),
            next: NextStep::Always(Continuation::Finish),
        },
    ])
    .expect("reference script is valid by construction")
}
