// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Poll/notice scheduling for geometry tracking.
//!
//! The overlay re-resolves the active target's geometry on a fixed cadence
//! and immediately after scroll/resize notices. There are no timers or
//! threads here: the host feeds millisecond timestamps into [`PollSchedule`]
//! from its own event loop and performs a resolution pass whenever
//! [`PollSchedule::due`] answers `true`.
//!
//! A step transition or overlay unmount disarms the schedule; a disarmed
//! schedule is never due, so no stale resolution work can leak past the step
//! that requested it.

/// Default poll interval between geometry re-resolutions, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 250;

/// Decides when the active target's geometry should be re-resolved.
///
/// Two sources of re-evaluation feed this schedule:
///
/// 1. A fixed-interval poll: [`PollSchedule::due`] answers `true` once per
///    interval. The first query after arming is due immediately so a fresh
///    step never waits a full interval for its highlight.
/// 2. Scroll/resize notices: [`PollSchedule::notice`] forces the next
///    [`PollSchedule::due`] query to answer `true` regardless of cadence.
///    Scroll notices are expected from capture-phase listeners so inner
///    scroll containers are covered, not only the window.
#[derive(Clone, Debug)]
pub struct PollSchedule {
    interval_ms: u64,
    last_tick: Option<u64>,
    pending_notice: bool,
    armed: bool,
}

impl PollSchedule {
    /// Create an armed schedule with the default interval.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_POLL_INTERVAL_MS)
    }

    /// Create an armed schedule with a custom poll interval in milliseconds.
    pub fn with_interval(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_tick: None,
            pending_notice: false,
            armed: true,
        }
    }

    /// Poll interval in milliseconds.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Whether the schedule is currently armed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Answer whether a resolution pass should run now, recording the tick.
    ///
    /// Disarmed schedules are never due. The first query after arming is due
    /// immediately; afterwards a query is due when at least the configured
    /// interval has elapsed since the last due tick, or when a notice is
    /// pending.
    pub fn due(&mut self, now_ms: u64) -> bool {
        if !self.armed {
            return false;
        }
        if self.pending_notice {
            self.pending_notice = false;
            self.last_tick = Some(now_ms);
            return true;
        }
        match self.last_tick {
            None => {
                self.last_tick = Some(now_ms);
                true
            }
            Some(last) if now_ms.saturating_sub(last) >= self.interval_ms => {
                self.last_tick = Some(now_ms);
                true
            }
            Some(_) => false,
        }
    }

    /// Record a scroll or resize notice.
    ///
    /// The next [`PollSchedule::due`] query answers `true` immediately.
    /// Notices on a disarmed schedule are dropped.
    pub fn notice(&mut self) {
        if self.armed {
            self.pending_notice = true;
        }
    }

    /// Re-arm the schedule for a new step, clearing any recorded cadence.
    pub fn reset(&mut self) {
        self.armed = true;
        self.last_tick = None;
        self.pending_notice = false;
    }

    /// Disarm the schedule. Subsequent [`PollSchedule::due`] queries answer
    /// `false` until [`PollSchedule::reset`] is called.
    pub fn disarm(&mut self) {
        self.armed = false;
        self.last_tick = None;
        self.pending_notice = false;
    }
}

impl Default for PollSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_due_immediately() {
        let mut schedule = PollSchedule::new();
        assert!(schedule.due(1_000));
    }

    #[test]
    fn poll_cadence_respects_interval() {
        let mut schedule = PollSchedule::with_interval(250);
        assert!(schedule.due(1_000));
        assert!(!schedule.due(1_100));
        assert!(!schedule.due(1_249));
        assert!(schedule.due(1_250));
        assert!(!schedule.due(1_400));
        assert!(schedule.due(1_500));
    }

    #[test]
    fn notice_forces_next_query() {
        let mut schedule = PollSchedule::with_interval(250);
        assert!(schedule.due(1_000));
        schedule.notice();
        assert!(schedule.due(1_001));
        // The notice tick restarts the cadence.
        assert!(!schedule.due(1_100));
        assert!(schedule.due(1_251));
    }

    #[test]
    fn notice_is_consumed_once() {
        let mut schedule = PollSchedule::with_interval(250);
        assert!(schedule.due(1_000));
        schedule.notice();
        assert!(schedule.due(1_001));
        assert!(!schedule.due(1_002));
    }

    #[test]
    fn disarmed_schedule_is_never_due() {
        let mut schedule = PollSchedule::new();
        schedule.disarm();
        assert!(!schedule.due(1_000));
        schedule.notice(); // dropped while disarmed
        assert!(!schedule.due(2_000));
        assert!(!schedule.is_armed());
    }

    #[test]
    fn reset_rearms_and_clears_cadence() {
        let mut schedule = PollSchedule::with_interval(250);
        assert!(schedule.due(1_000));
        schedule.disarm();
        schedule.reset();
        assert!(schedule.is_armed());
        // Fresh step: due immediately again.
        assert!(schedule.due(1_050));
    }
}
