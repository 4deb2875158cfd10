// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Overlay: the spotlight scene as a pure value.
//!
//! The overlay owns no business state. Given the active step (or none) and
//! the target's live rectangle (or none), [`scene`] computes a
//! [`SpotlightScene`]: a full-viewport dimmed backdrop, an optional cut-out
//! hole inflated by [`HOLE_PADDING`] around the target, and a tooltip panel
//! anchored to a fixed screen region so it never clips against the target.
//!
//! Geometry may be momentarily unavailable (mid re-render, animated
//! entrance) and the scene simply withholds the hole until it resolves
//! again. Stale rectangles are never drawn and nothing panics.
//!
//! Pointer-down routing is part of the scene contract:
//!
//! - Steps that advance on external state do not intercept pointers at all;
//!   the backdrop is pass-through and the user interacts with the page
//!   normally.
//! - Steps that require a target click swallow pointer-downs outside the
//!   hole, reported as a blocked click rather than an error, and pass
//!   through pointer-downs inside the hole so the real element receives
//!   them.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use limelight_overlay::{ActiveStep, PointerDisposition, route_pointer_down, scene};
//!
//! let step = ActiveStep {
//!     title: "Run the analysis",
//!     body: "Click the highlighted button to analyze your text.",
//!     requires_target_click: true,
//! };
//! let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
//! let target = Rect::new(100.0, 100.0, 200.0, 140.0);
//!
//! let scene = scene(Some(&step), Some(target), viewport).unwrap();
//! assert!(scene.hole.unwrap().contains(Point::new(150.0, 120.0)));
//!
//! // Inside the hole: the real click handler fires.
//! assert_eq!(
//!     route_pointer_down(&scene, Point::new(150.0, 120.0)),
//!     PointerDisposition::PassThrough,
//! );
//! // Outside: swallowed and reported.
//! assert_eq!(
//!     route_pointer_down(&scene, Point::new(600.0, 600.0)),
//!     PointerDisposition::Blocked,
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect};

/// Padding around the target rectangle when cutting the hole, in logical
/// pixels.
pub const HOLE_PADDING: f64 = 8.0;

/// z-order of the dimming backdrop. Highlighted elements are elevated one
/// above this (`limelight_patch::HIGHLIGHT_ELEVATION`).
pub const BACKDROP_Z: i32 = 10_000;

/// Fixed screen region the tooltip panel is anchored to.
///
/// The tooltip deliberately does not track the target: anchoring to a fixed
/// region avoids clipping when the target sits at a viewport edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipAnchor {
    /// Centered along the bottom edge of the viewport.
    #[default]
    BottomCenter,
    /// Centered along the top edge of the viewport.
    TopCenter,
}

/// The short progression instruction shown under the step copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// "Click the highlighted element to continue."
    ClickHighlighted,
    /// "Follow the instructions to continue."
    FollowInstructions,
}

/// Tooltip panel contents and placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    /// Step title.
    pub title: &'static str,
    /// Step body copy.
    pub body: &'static str,
    /// Progression instruction, chosen by the step's advance rule.
    pub instruction: Instruction,
    /// Fixed screen region the panel is anchored to.
    pub anchor: TooltipAnchor,
}

/// The slice of an active step the overlay needs to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveStep {
    /// Step title.
    pub title: &'static str,
    /// Step body copy.
    pub body: &'static str,
    /// Whether the step only advances on a click of its target.
    pub requires_target_click: bool,
}

/// A fully computed spotlight frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotlightScene {
    /// Full-viewport dimming layer.
    pub backdrop: Rect,
    /// Cut-out exempting the target from dimming; `None` while the target's
    /// geometry is unresolvable.
    pub hole: Option<Rect>,
    /// Tooltip panel.
    pub tooltip: Tooltip,
    /// Whether the backdrop intercepts pointer events at all. False for
    /// steps driven by external state, where blocking interaction would be
    /// wrong.
    pub intercepts_pointer: bool,
}

/// Routing decision for a pointer-down against a scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerDisposition {
    /// Let the event reach the underlying UI.
    PassThrough,
    /// Swallow the event and report a blocked click. Never advances the
    /// tour and never surfaces as an error.
    Blocked,
}

/// Compute the spotlight scene for the current frame.
///
/// Returns `None` when there is no active step: the overlay renders nothing
/// at all. With a step but no resolvable geometry, the backdrop and tooltip
/// render while the hole is withheld until the next poll or listener tick
/// resolves it.
pub fn scene(
    step: Option<&ActiveStep>,
    target_rect: Option<Rect>,
    viewport: Rect,
) -> Option<SpotlightScene> {
    let step = step?;
    let instruction = if step.requires_target_click {
        Instruction::ClickHighlighted
    } else {
        Instruction::FollowInstructions
    };
    Some(SpotlightScene {
        backdrop: viewport,
        hole: target_rect.map(|r| r.inflate(HOLE_PADDING, HOLE_PADDING)),
        tooltip: Tooltip {
            title: step.title,
            body: step.body,
            instruction,
            anchor: TooltipAnchor::default(),
        },
        intercepts_pointer: step.requires_target_click,
    })
}

/// Route a pointer-down against the scene.
///
/// Non-intercepting scenes pass everything through. Intercepting scenes pass
/// through pointer-downs inside the hole, so the target's own click handler
/// fires, and block everything else, including the case where the hole is
/// currently withheld.
pub fn route_pointer_down(scene: &SpotlightScene, point: Point) -> PointerDisposition {
    if !scene.intercepts_pointer {
        return PointerDisposition::PassThrough;
    }
    match scene.hole {
        Some(hole) if hole.contains(point) => PointerDisposition::PassThrough,
        _ => PointerDisposition::Blocked,
    }
}
