// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Locator: runtime target resolution for the spotlight overlay.
//!
//! A guided tour refers to UI elements by opaque identifiers assigned by the
//! host. This crate answers the one question the overlay keeps asking: *where
//! is that element right now, if anywhere?*
//!
//! - [`TargetSource`] is the host-implemented view of the live UI tree. It
//!   reports the viewport-space bounding box and [`TargetFlags`] of the first
//!   element matching an identifier, in document order.
//! - [`resolve`] applies the visibility rules on top of a source: absent,
//!   zero-sized, hidden, or disabled elements resolve to `None`. Absence is
//!   never an error; the overlay simply withholds its cut-out until geometry
//!   becomes available again.
//! - [`PollSchedule`] models geometry tracking as "poll at a fixed interval,
//!   react immediately to scroll/resize notices". General-purpose toolkits
//!   have no reliable layout-change notification (animated entrances, scroll
//!   containers), so the overlay re-resolves on a cadence and lets notices
//!   jump the queue.
//!
//! The core types are generic over the element identifier `K`, so callers can
//! use interned symbols, widget ids, or strings. Geometry is expressed in
//! terms of [`kurbo::Rect`] in viewport coordinates, which matches the rest
//! of the Limelight crates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use limelight_locator::{PollSchedule, TargetFlags, TargetSource, resolve};
//!
//! struct OneButton;
//!
//! impl TargetSource<&'static str> for OneButton {
//!     fn bounds_of(&self, id: &&'static str) -> Option<Rect> {
//!         (*id == "analyze-button").then(|| Rect::new(10.0, 10.0, 110.0, 40.0))
//!     }
//!     fn flags_of(&self, _id: &&'static str) -> TargetFlags {
//!         TargetFlags::default()
//!     }
//! }
//!
//! let source = OneButton;
//! assert!(resolve(&source, &"analyze-button").is_some());
//! assert!(resolve(&source, &"missing").is_none());
//!
//! let mut schedule = PollSchedule::new();
//! assert!(schedule.due(0)); // first tick resolves immediately
//! assert!(!schedule.due(100)); // within the poll interval
//! schedule.notice(); // scroll or resize
//! assert!(schedule.due(101)); // notices jump the cadence
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std`.

#![no_std]

mod schedule;
mod target;

pub use schedule::{DEFAULT_POLL_INTERVAL_MS, PollSchedule};
pub use target::{TargetFlags, TargetSource, resolve};
