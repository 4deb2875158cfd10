// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modal focus trap: Tab cycling, outside-focus containment, restore.

/// Outcome of a Tab/Shift+Tab key press while a trap is active.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TabMove<K> {
    /// Move focus to this member.
    MoveTo(K),
    /// Swallow the key event entirely; focus must not move. Returned when
    /// the modal has no focusable descendants.
    Swallow,
}

/// Focus confinement for a modal dialog.
///
/// The trap operates over a snapshot of the modal's focusable descendants in
/// document order, supplied by the host on each query; membership may change
/// while the modal is open and the trap stays correct.
///
/// Containment is enforced on focus events, not key presses:
/// [`FocusTrap::contain`] answers a redirect for every focus change landing
/// outside the member list, which also defeats programmatic and
/// assistive-technology focus escapes.
#[derive(Clone, Debug, Default)]
pub struct FocusTrap<K> {
    prev: Option<K>,
    active: bool,
}

impl<K: Clone + Eq> FocusTrap<K> {
    /// Create an inactive trap.
    pub fn new() -> Self {
        Self {
            prev: None,
            active: false,
        }
    }

    /// Whether the trap is currently active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate the trap for a modal that just opened.
    ///
    /// `prev_focus` is the element holding focus before the modal opened, to
    /// be restored on release. Returns the element the host should focus now:
    /// the modal's primary action control.
    pub fn activate(&mut self, prev_focus: Option<K>, primary: K) -> K {
        self.prev = prev_focus;
        self.active = true;
        primary
    }

    /// Answer a redirect for a focus event.
    ///
    /// `landed` is where focus just arrived (`None` when focus was lost
    /// entirely). Returns `Some(member)` when focus must be pulled back into
    /// the modal, `None` when the event is fine. With zero members there is
    /// no redirect target; the host keeps focus on the modal container.
    pub fn contain(&self, landed: Option<&K>, members: &[K]) -> Option<K> {
        if !self.active {
            return None;
        }
        if let Some(landed) = landed
            && members.contains(landed)
        {
            return None;
        }
        members.first().cloned()
    }

    /// Compute the focus move for a Tab (`backwards == false`) or Shift+Tab
    /// (`backwards == true`) press inside the modal.
    ///
    /// Cycles through `members` in document order, wrapping last→first and
    /// first→last. When `current` is not a member (or `None`), moves to the
    /// first member (last for Shift+Tab). With zero members the key event is
    /// swallowed so focus can never leave.
    pub fn on_tab(&self, current: Option<&K>, members: &[K], backwards: bool) -> TabMove<K> {
        let (Some(first), Some(last)) = (members.first(), members.last()) else {
            return TabMove::Swallow;
        };
        let pos = current.and_then(|c| members.iter().position(|m| m == c));
        let next = match (pos, backwards) {
            (Some(i), false) => {
                if i + 1 < members.len() {
                    members[i + 1].clone()
                } else {
                    first.clone()
                }
            }
            (Some(i), true) => {
                if i > 0 {
                    members[i - 1].clone()
                } else {
                    last.clone()
                }
            }
            (None, false) => first.clone(),
            (None, true) => last.clone(),
        };
        TabMove::MoveTo(next)
    }

    /// Deactivate the trap when the modal closes.
    ///
    /// Returns the element to restore focus to: the pre-open holder, if the
    /// host reports it is still present.
    pub fn release(&mut self, still_present: bool) -> Option<K> {
        self.active = false;
        let prev = self.prev.take();
        if still_present { prev } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MEMBERS: [&str; 3] = ["ok", "cancel", "learn-more"];

    #[test]
    fn activate_focuses_primary_and_remembers_previous() {
        let mut trap = FocusTrap::new();
        let focus = trap.activate(Some("editor"), "ok");
        assert_eq!(focus, "ok");
        assert!(trap.is_active());
        assert_eq!(trap.release(true), Some("editor"));
        assert!(!trap.is_active());
    }

    #[test]
    fn tab_wraps_last_to_first() {
        let mut trap = FocusTrap::new();
        trap.activate(None, "ok");
        assert_eq!(
            trap.on_tab(Some(&"learn-more"), &MEMBERS, false),
            TabMove::MoveTo("ok")
        );
    }

    #[test]
    fn shift_tab_wraps_first_to_last() {
        let mut trap = FocusTrap::new();
        trap.activate(None, "ok");
        assert_eq!(
            trap.on_tab(Some(&"ok"), &MEMBERS, true),
            TabMove::MoveTo("learn-more")
        );
    }

    #[test]
    fn tab_cycles_in_document_order() {
        let mut trap = FocusTrap::new();
        trap.activate(None, "ok");
        assert_eq!(
            trap.on_tab(Some(&"ok"), &MEMBERS, false),
            TabMove::MoveTo("cancel")
        );
        assert_eq!(
            trap.on_tab(Some(&"cancel"), &MEMBERS, true),
            TabMove::MoveTo("ok")
        );
    }

    #[test]
    fn tab_with_no_members_is_swallowed() {
        let mut trap = FocusTrap::<&str>::new();
        trap.activate(None, "container");
        assert_eq!(trap.on_tab(None, &[], false), TabMove::Swallow);
        assert_eq!(trap.on_tab(None, &[], true), TabMove::Swallow);
    }

    #[test]
    fn tab_from_unknown_element_enters_at_an_edge() {
        let mut trap = FocusTrap::new();
        trap.activate(None, "ok");
        assert_eq!(trap.on_tab(None, &MEMBERS, false), TabMove::MoveTo("ok"));
        assert_eq!(
            trap.on_tab(Some(&"outsider"), &MEMBERS, true),
            TabMove::MoveTo("learn-more")
        );
    }

    #[test]
    fn contain_redirects_outside_focus() {
        let mut trap = FocusTrap::new();
        trap.activate(Some("editor"), "ok");
        // Focus landing inside the modal is fine.
        assert_eq!(trap.contain(Some(&"cancel"), &MEMBERS), None);
        // Focus escaping, by any means, is pulled back in.
        assert_eq!(trap.contain(Some(&"editor"), &MEMBERS), Some("ok"));
        assert_eq!(trap.contain(None, &MEMBERS), Some("ok"));
    }

    #[test]
    fn contain_is_inert_when_inactive() {
        let trap = FocusTrap::new();
        assert_eq!(trap.contain(Some(&"editor"), &MEMBERS), None);
    }

    #[test]
    fn contain_with_no_members_has_no_redirect() {
        let mut trap = FocusTrap::<&str>::new();
        trap.activate(None, "container");
        assert_eq!(trap.contain(Some(&"editor"), &[]), None);
    }

    #[test]
    fn release_skips_restore_when_holder_is_gone() {
        let mut trap = FocusTrap::new();
        trap.activate(Some("editor"), "ok");
        assert_eq!(trap.release(false), None);
    }
}
