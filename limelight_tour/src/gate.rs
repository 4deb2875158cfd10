// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trial lifecycle gate: eligibility plus the modal dialogs bookending a run.
//!
//! The gate decides *whether* the tour machinery runs at all; the driver
//! decides *where* in the script it is. Eligibility is re-checked on every
//! [`LifecycleGate::evaluate`] call, so a subscription activating mid-tour
//! tears the whole experience down on the next tick, and the disablement is
//! sticky for the rest of the session, even if eligibility later reports the
//! subscription gone again.

/// Host-reported eligibility inputs, sampled each evaluation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Eligibility {
    /// The user holds an active subscription; trial guidance is unwanted.
    pub subscription_active: bool,
    /// The user already dismissed the welcome dialog in a previous session,
    /// so the tour starts running without showing it again.
    pub previously_acknowledged: bool,
}

/// Where the experience is in its lifecycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GatePhase {
    /// Not running and never will this session.
    Disabled,
    /// The welcome modal is up; the script has not begun.
    #[default]
    StartDialog,
    /// The tour is live and the driver owns progression.
    Running,
    /// The script completed; the closing modal is up.
    EndDialog,
    /// The closing modal was dismissed. Nothing further happens.
    Done,
}

/// The lifecycle state machine around a single tour run.
#[derive(Clone, Debug, Default)]
pub struct LifecycleGate {
    phase: GatePhase,
    disabled_sticky: bool,
}

impl LifecycleGate {
    /// A gate at its initial phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    /// Whether the driver should be running and the overlay visible.
    pub fn is_tour_active(&self) -> bool {
        self.phase == GatePhase::Running
    }

    /// Re-check eligibility and settle the phase.
    ///
    /// Returns `true` when this call transitioned into [`GatePhase::Disabled`]
    /// from a live phase, which is the host's cue to tear down highlights,
    /// focus, and overlay.
    pub fn evaluate(&mut self, elig: Eligibility) -> bool {
        if self.disabled_sticky {
            return false;
        }
        if elig.subscription_active {
            let was_live = matches!(
                self.phase,
                GatePhase::StartDialog | GatePhase::Running | GatePhase::EndDialog
            );
            self.phase = GatePhase::Disabled;
            self.disabled_sticky = true;
            return was_live;
        }
        if self.phase == GatePhase::StartDialog && elig.previously_acknowledged {
            self.phase = GatePhase::Running;
        }
        false
    }

    /// The user dismissed the welcome modal: start the run.
    pub fn acknowledge_start(&mut self) {
        if self.phase == GatePhase::StartDialog {
            self.phase = GatePhase::Running;
        }
    }

    /// The driver reported [`crate::TourEvent::Completed`].
    pub fn on_completed(&mut self) {
        if self.phase == GatePhase::Running {
            self.phase = GatePhase::EndDialog;
        }
    }

    /// The user dismissed the closing modal.
    pub fn acknowledge_end(&mut self) {
        if self.phase == GatePhase::EndDialog {
            self.phase = GatePhase::Done;
        }
    }
}
