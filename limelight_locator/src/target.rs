// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target flags, the host source trait, and the resolution rules.

use kurbo::Rect;

bitflags::bitflags! {
    /// Flags describing whether a target can be highlighted or focused.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TargetFlags: u8 {
        /// Element is rendered (not `display:none` / `visibility:hidden` or
        /// the toolkit equivalent).
        const VISIBLE   = 0b0000_0001;
        /// Element is an enabled interactive control, or not a control at all.
        const ENABLED   = 0b0000_0010;
        /// Element is natively focus-capable (control, link, field, or an
        /// explicit tab stop).
        const FOCUSABLE = 0b0000_0100;
    }
}

impl Default for TargetFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::ENABLED
    }
}

/// Host-implemented view of the live UI tree.
///
/// Identifiers are opaque to Limelight: the host assigns them to specific
/// elements (an attribute/tag convention, widget ids, interned symbols) and
/// this trait locates them at query time. Implementations must be cheap
/// enough to call on every poll tick.
pub trait TargetSource<K> {
    /// Viewport-space bounding box of the element matching `id`.
    ///
    /// When multiple elements match, implementations must report the first in
    /// document order so repeated queries are deterministic. Returns `None`
    /// when no matching element is currently mounted.
    fn bounds_of(&self, id: &K) -> Option<Rect>;

    /// Current flags of the element matching `id`.
    ///
    /// Only meaningful when [`TargetSource::bounds_of`] returns `Some`; the
    /// value for an unmounted id is unspecified.
    fn flags_of(&self, id: &K) -> TargetFlags;
}

/// Resolve an identifier to its current viewport rectangle.
///
/// Returns `None` (never an error) when the element is absent, has zero
/// width or height, is not visible, or is disabled as an interactive control.
/// Given an unchanged source, repeated calls return the same rectangle.
pub fn resolve<K, S>(source: &S, id: &K) -> Option<Rect>
where
    S: TargetSource<K> + ?Sized,
{
    let rect = source.bounds_of(id)?;
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let flags = source.flags_of(id);
    if !flags.contains(TargetFlags::VISIBLE) || !flags.contains(TargetFlags::ENABLED) {
        return None;
    }
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapSource<'a> {
        entries: &'a [(&'static str, Rect, TargetFlags)],
    }

    impl TargetSource<&'static str> for MapSource<'_> {
        fn bounds_of(&self, id: &&'static str) -> Option<Rect> {
            self.entries.iter().find(|e| e.0 == *id).map(|e| e.1)
        }
        fn flags_of(&self, id: &&'static str) -> TargetFlags {
            self.entries
                .iter()
                .find(|e| e.0 == *id)
                .map(|e| e.2)
                .unwrap_or(TargetFlags::empty())
        }
    }

    const BUTTON: Rect = Rect::new(10.0, 20.0, 110.0, 60.0);

    #[test]
    fn resolves_visible_enabled_target() {
        let source = MapSource {
            entries: &[("btn", BUTTON, TargetFlags::all())],
        };
        assert_eq!(resolve(&source, &"btn"), Some(BUTTON));
    }

    #[test]
    fn absent_target_resolves_to_none() {
        let source = MapSource { entries: &[] };
        assert_eq!(resolve(&source, &"btn"), None);
    }

    #[test]
    fn zero_sized_target_resolves_to_none() {
        let source = MapSource {
            entries: &[
                ("flat", Rect::new(10.0, 20.0, 110.0, 20.0), TargetFlags::all()),
                ("thin", Rect::new(10.0, 20.0, 10.0, 60.0), TargetFlags::all()),
            ],
        };
        assert_eq!(resolve(&source, &"flat"), None);
        assert_eq!(resolve(&source, &"thin"), None);
    }

    #[test]
    fn hidden_target_resolves_to_none() {
        let source = MapSource {
            entries: &[("btn", BUTTON, TargetFlags::ENABLED)],
        };
        assert_eq!(resolve(&source, &"btn"), None);
    }

    #[test]
    fn disabled_target_resolves_to_none() {
        let source = MapSource {
            entries: &[("btn", BUTTON, TargetFlags::VISIBLE)],
        };
        assert_eq!(resolve(&source, &"btn"), None);
    }

    #[test]
    fn resolution_is_pure_per_tick() {
        let source = MapSource {
            entries: &[("btn", BUTTON, TargetFlags::all())],
        };
        let first = resolve(&source, &"btn");
        let second = resolve(&source, &"btn");
        assert_eq!(first, second);
    }

    #[test]
    fn first_match_in_document_order_wins() {
        // Two entries share an id; the source contract picks the first.
        let other = Rect::new(200.0, 200.0, 300.0, 240.0);
        let source = MapSource {
            entries: &[
                ("dup", BUTTON, TargetFlags::all()),
                ("dup", other, TargetFlags::all()),
            ],
        };
        assert_eq!(resolve(&source, &"dup"), Some(BUTTON));
    }
}
