// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapshot-owning highlight set with reconciled apply and idempotent
//! disposal.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::style::{Highlight, InlineStyle, PositionKind};

/// Host-implemented read/write port onto element inline style state.
///
/// The patcher only ever writes values it previously read (possibly with its
/// own patches layered on top), so hosts must report inline values exactly as
/// they would re-apply them.
pub trait StyleHost<K> {
    /// Whether the element is currently mounted.
    fn is_mounted(&self, id: &K) -> bool;

    /// Read the element's current inline values.
    fn read_inline(&self, id: &K) -> InlineStyle;

    /// Replace the element's inline values wholesale.
    fn write_inline(&mut self, id: &K, style: &InlineStyle);
}

/// The set of currently highlighted elements and their pre-patch snapshots.
///
/// Lifecycle per element: a snapshot is created when the element enters the
/// highlight set, and destroyed (with its values written back) when the
/// element leaves the set or the set is disposed. Re-applying with the same
/// id keeps the original snapshot and does not re-patch, so repeated renders
/// of the same step never stack.
#[derive(Clone, Debug, Default)]
pub struct HighlightSet<K> {
    snapshots: HashMap<K, InlineStyle>,
}

impl<K: Clone + Eq + Hash> HighlightSet<K> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            snapshots: HashMap::new(),
        }
    }

    /// Number of elements currently highlighted.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether no elements are currently highlighted.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Whether `id` is currently part of the highlight set.
    pub fn contains(&self, id: &K) -> bool {
        self.snapshots.contains_key(id)
    }

    /// Reconcile the highlight set against `ids`.
    ///
    /// Elements tracked here but absent from `ids` are restored to their
    /// snapshot and dropped. Elements present in both keep their existing
    /// snapshot untouched. New resolvable elements are snapshotted and then
    /// patched per `cfg`. Restoration of leavers completes before any
    /// newcomer is patched.
    pub fn apply<H: StyleHost<K>>(&mut self, host: &mut H, ids: &[K], cfg: &Highlight) {
        let leavers: Vec<K> = self
            .snapshots
            .keys()
            .filter(|k| !ids.contains(k))
            .cloned()
            .collect();
        for id in leavers {
            if let Some(snapshot) = self.snapshots.remove(&id)
                && host.is_mounted(&id)
            {
                host.write_inline(&id, &snapshot);
            }
        }

        for id in ids {
            if self.snapshots.contains_key(id) || !host.is_mounted(id) {
                continue;
            }
            let prior = host.read_inline(id);
            let patched = patch_style(&prior, cfg);
            host.write_inline(id, &patched);
            self.snapshots.insert(id.clone(), prior);
        }
    }

    /// Record an explicit tab stop on a highlighted (or about-to-be-focused)
    /// element, on behalf of the focus controller.
    ///
    /// Returns `true` when a tab stop was introduced by this call. The patch
    /// is captured in the same snapshot as the visual highlight, so disposal
    /// reverts exactly the tab stops this subsystem introduced and nothing
    /// the application set itself.
    pub fn patch_tab_index<H: StyleHost<K>>(&mut self, host: &mut H, id: &K) -> bool {
        if !host.is_mounted(id) {
            return false;
        }
        let current = host.read_inline(id);
        if current.tab_index.is_some() {
            // The element already has an explicit tab stop; nothing to patch
            // and nothing for disposal to scope.
            return false;
        }
        self.snapshots
            .entry(id.clone())
            .or_insert_with(|| current.clone());
        let mut patched = current;
        patched.tab_index = Some(0);
        host.write_inline(id, &patched);
        true
    }

    /// Restore every tracked element to its snapshot and clear the set.
    ///
    /// Calling this twice is a no-op: the second call finds nothing tracked.
    /// Unmounted elements are skipped; their snapshots are dropped.
    pub fn dispose<H: StyleHost<K>>(&mut self, host: &mut H) {
        for (id, snapshot) in self.snapshots.drain() {
            if host.is_mounted(&id) {
                host.write_inline(&id, &snapshot);
            }
        }
    }
}

/// Compute the patched style for an element given its prior inline values.
///
/// A positioning context is established only when the element has none, so an
/// already-positioned element keeps its own context. The tab stop is left
/// untouched; that patch is owned by [`HighlightSet::patch_tab_index`].
fn patch_style(prior: &InlineStyle, cfg: &Highlight) -> InlineStyle {
    InlineStyle {
        position: prior.position.or(Some(PositionKind::Relative)),
        z_index: Some(cfg.elevation),
        outline: Some(cfg.outline),
        cursor: cfg.cursor.or(prior.cursor),
        animation: if cfg.pulse {
            Some(crate::style::AnimationKind::Pulse)
        } else {
            prior.animation
        },
        tab_index: prior.tab_index,
    }
}
