// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Patch: temporary element elevation with exact restoration.
//!
//! Highlighting a live element means mutating its inline presentation:
//! establishing a positioning context, raising it above the spotlight
//! backdrop, outlining it, and adding a pulse cue. All of that must be
//! undone *exactly* when the element leaves the highlight set or the tour
//! unmounts: not by removing a class, but by writing back the values that
//! were read at apply time.
//!
//! - [`InlineStyle`] is the typed capture of every inline property the
//!   patcher may touch. `None` means "no inline value set", and restoration
//!   writes the captured struct back verbatim (the round-trip law).
//! - [`StyleHost`] is the host-implemented read/write port onto element
//!   inline state.
//! - [`HighlightSet`] owns one snapshot per highlighted element and
//!   reconciles set changes: leavers are restored, stayers keep their
//!   original snapshot untouched (repeated renders of the same step never
//!   stack patches), newcomers are snapshotted then patched.
//!
//! The pulse animation cue accompanies the outline so the highlight never
//! relies on color perception alone.
//!
//! ## Example
//!
//! ```rust
//! use limelight_patch::{Highlight, HighlightSet, InlineStyle, StyleHost};
//! # use hashbrown::HashMap;
//! # struct Host { styles: HashMap<u32, InlineStyle> }
//! # impl StyleHost<u32> for Host {
//! #     fn is_mounted(&self, id: &u32) -> bool { self.styles.contains_key(id) }
//! #     fn read_inline(&self, id: &u32) -> InlineStyle {
//! #         self.styles.get(id).cloned().unwrap_or_default()
//! #     }
//! #     fn write_inline(&mut self, id: &u32, style: &InlineStyle) {
//! #         self.styles.insert(*id, style.clone());
//! #     }
//! # }
//! # let mut host = Host { styles: HashMap::new() };
//! # host.styles.insert(7, InlineStyle::default());
//! let before = host.read_inline(&7);
//!
//! let mut set = HighlightSet::new();
//! set.apply(&mut host, &[7], &Highlight::default());
//! assert_ne!(host.read_inline(&7), before); // elevated and outlined
//!
//! set.dispose(&mut host);
//! assert_eq!(host.read_inline(&7), before); // restored verbatim
//! set.dispose(&mut host); // second dispose is a no-op
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod set;
mod style;

pub use set::{HighlightSet, StyleHost};
pub use style::{
    AnimationKind, CursorKind, HIGHLIGHT_ELEVATION, Highlight, InlineStyle, Outline, OutlineKind,
    PositionKind,
};
