// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Focus: keyboard focus control for the guided tour.
//!
//! Two separate responsibilities live here:
//!
//! - [`AutoFocus`]: when a step requires a click on its target, keyboard
//!   focus should move there (scrolled to the center of the viewport)
//!   without fighting the toolkit's own initial-render focus assignment.
//!   The move is deferred by one tick: the host schedules it when the step
//!   becomes active and collects the [`FocusCommand`] on a strictly later
//!   timestamp.
//! - [`FocusTrap`]: the start/end lifecycle modals confine focus to their
//!   focusable descendants. The trap cycles Tab/Shift+Tab with wrap-around,
//!   redirects *any* focus event that lands outside the modal subtree back
//!   inside (defeating programmatic and assistive-tech escapes, not just Tab
//!   keys), and restores the previously focused element on close.
//!
//! Both types are pure state machines over host-supplied snapshots: the host
//! passes the modal's focusable descendants in document order, the way a
//! focus space is a read-only snapshot of candidates. Nothing here installs
//! listeners; the host wires its capture-phase focus listener to
//! [`FocusTrap::contain`] on modal open and removes it on close.
//!
//! ## Example
//!
//! ```rust
//! use limelight_focus::{FocusTrap, TabMove};
//!
//! let mut trap = FocusTrap::new();
//! let first = trap.activate(Some("editor"), "ok-button");
//! assert_eq!(first, "ok-button");
//!
//! let members = ["ok-button", "cancel-button"];
//! // Tab from the last member wraps to the first.
//! assert_eq!(
//!     trap.on_tab(Some(&"cancel-button"), &members, false),
//!     TabMove::MoveTo("ok-button"),
//! );
//! // Focus escaping the modal is redirected back in.
//! assert_eq!(trap.contain(Some(&"editor"), &members), Some("ok-button"));
//!
//! // Closing restores the previous holder if it is still present.
//! assert_eq!(trap.release(true), Some("editor"));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod auto_focus;
mod trap;

pub use auto_focus::{AutoFocus, FocusCommand};
pub use trap::{FocusTrap, TabMove};
