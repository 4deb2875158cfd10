// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferred focus moves for click-required steps.

/// Instruction to the host to move keyboard focus to a tour target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusCommand<K> {
    /// The element to focus.
    pub target: K,
    /// Scroll the target to the center of the viewport (smooth) before
    /// focusing.
    pub scroll_to_center: bool,
    /// The target is not natively focus-capable; an explicit tab stop must be
    /// patched first (via `limelight_patch::HighlightSet::patch_tab_index`,
    /// so the patch is restored when the step ends).
    pub needs_tab_stop: bool,
}

/// One-shot, one-tick-deferred focus scheduling.
///
/// A step transition schedules a focus move; the host collects it with
/// [`AutoFocus::take_due`] on a strictly later timestamp. The deferral keeps
/// the tour from fighting the toolkit's own initial-render focus assignment,
/// and from interrupting a click already in flight at transition time. A
/// subsequent step change cancels any pending move.
#[derive(Clone, Debug, Default)]
pub struct AutoFocus<K> {
    pending: Option<Pending<K>>,
}

#[derive(Clone, Debug)]
struct Pending<K> {
    target: K,
    armed_at: u64,
    needs_tab_stop: bool,
}

impl<K: Clone> AutoFocus<K> {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule a focus move onto `target`, replacing any pending one.
    pub fn schedule(&mut self, target: K, now_ms: u64, needs_tab_stop: bool) {
        self.pending = Some(Pending {
            target,
            armed_at: now_ms,
            needs_tab_stop,
        });
    }

    /// Whether a focus move is pending.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Collect the pending focus move, if at least one tick has passed.
    ///
    /// Yields the command exactly once; the same schedule never produces two
    /// commands. A query at the arming timestamp itself yields nothing.
    pub fn take_due(&mut self, now_ms: u64) -> Option<FocusCommand<K>> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| now_ms > pending.armed_at);
        if !due {
            return None;
        }
        self.pending.take().map(|pending| FocusCommand {
            target: pending.target,
            scroll_to_center: true,
            needs_tab_stop: pending.needs_tab_stop,
        })
    }

    /// Drop any pending focus move. Called on step change or unmount.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_is_deferred_by_one_tick() {
        let mut auto = AutoFocus::new();
        auto.schedule(7_u32, 1_000, false);
        assert_eq!(auto.take_due(1_000), None);
        let cmd = auto.take_due(1_001).expect("due after one tick");
        assert_eq!(cmd.target, 7);
        assert!(cmd.scroll_to_center);
        assert!(!cmd.needs_tab_stop);
    }

    #[test]
    fn command_is_yielded_exactly_once() {
        let mut auto = AutoFocus::new();
        auto.schedule(7_u32, 1_000, true);
        assert!(auto.take_due(1_010).is_some());
        assert_eq!(auto.take_due(1_020), None);
        assert!(!auto.is_pending());
    }

    #[test]
    fn reschedule_replaces_pending_target() {
        let mut auto = AutoFocus::new();
        auto.schedule(7_u32, 1_000, false);
        auto.schedule(9_u32, 1_005, true);
        let cmd = auto.take_due(1_010).expect("pending");
        assert_eq!(cmd.target, 9);
        assert!(cmd.needs_tab_stop);
    }

    #[test]
    fn cancel_drops_pending_move() {
        let mut auto = AutoFocus::new();
        auto.schedule(7_u32, 1_000, false);
        auto.cancel();
        assert_eq!(auto.take_due(2_000), None);
    }
}
