// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed inline-style model and highlight configuration.

/// Inline z-order applied to highlighted elements.
///
/// One above the spotlight backdrop's z-order (`10_000` in
/// `limelight_overlay`), so highlighted elements paint through the dimming
/// layer.
pub const HIGHLIGHT_ELEVATION: i32 = 10_001;

/// Positioning context of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PositionKind {
    /// Normal flow; no positioning context.
    Static,
    /// Offset from normal flow; establishes a positioning context.
    Relative,
    /// Positioned against the nearest positioned ancestor.
    Absolute,
    /// Positioned against the viewport.
    Fixed,
    /// Scroll-container-relative positioning.
    Sticky,
}

/// Outline stroke style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutlineKind {
    /// Continuous stroke.
    Solid,
    /// Dashed stroke.
    Dashed,
    /// Dotted stroke.
    Dotted,
}

/// A visible outline drawn outside an element's border box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    /// Stroke width in logical pixels.
    pub width: f64,
    /// Gap between the element edge and the stroke, in logical pixels.
    pub offset: f64,
    /// Stroke style.
    pub kind: OutlineKind,
}

/// Pointer cursor affordance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorKind {
    /// Toolkit default cursor.
    Default,
    /// Interactive-element cursor.
    Pointer,
}

/// Animation cue applied alongside the outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Breathing/pulsing emphasis so the highlight does not rely on color
    /// perception alone.
    Pulse,
}

/// The inline properties the patcher may touch on an element.
///
/// `None` means the element has no inline value set for that property.
/// [`crate::HighlightSet`] captures this struct before patching and writes it
/// back verbatim on restore, so the captured value must round-trip through
/// the host unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    /// Inline positioning context, if any.
    pub position: Option<PositionKind>,
    /// Inline z-order, if any.
    pub z_index: Option<i32>,
    /// Inline outline, if any.
    pub outline: Option<Outline>,
    /// Inline cursor override, if any.
    pub cursor: Option<CursorKind>,
    /// Inline animation cue, if any.
    pub animation: Option<AnimationKind>,
    /// Explicit tab stop, if any. A non-negative value makes an element
    /// focus-reachable even when it is not natively a control.
    pub tab_index: Option<i32>,
}

impl InlineStyle {
    /// Whether no inline values are set at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Configuration of the visual treatment applied to highlighted elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Highlight {
    /// z-order to elevate highlighted elements to.
    pub elevation: i32,
    /// Outline drawn around each highlighted element.
    pub outline: Outline,
    /// Whether to apply the pulsing emphasis cue.
    pub pulse: bool,
    /// Cursor override for the highlighted elements, if any.
    pub cursor: Option<CursorKind>,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            elevation: HIGHLIGHT_ELEVATION,
            outline: Outline {
                width: 2.0,
                offset: 4.0,
                kind: OutlineKind::Solid,
            },
            pulse: true,
            cursor: Some(CursorKind::Pointer),
        }
    }
}
