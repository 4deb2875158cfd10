// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Limelight Engine: the guided tour, assembled.
//!
//! This crate wires the five Limelight primitives into one host-driven
//! state machine, [`TourEngine`]:
//!
//! - `limelight_tour` decides *where* the tour is (script, driver, gate);
//! - `limelight_locator` resolves the active target's live rectangle and
//!   decides when to re-resolve it;
//! - `limelight_patch` applies and restores the highlight styling;
//! - `limelight_focus` schedules the deferred focus move onto click targets;
//! - `limelight_overlay` turns the result into a renderable scene and routes
//!   pointer-downs.
//!
//! The engine owns no threads or timers. The host feeds it state changes
//! ([`TourEngine::sync`]), millisecond timestamps ([`TourEngine::tick`]),
//! scroll/resize notices, and pointer-downs; it answers with a
//! [`limelight_overlay::SpotlightScene`] to draw and a batch of
//! [`EngineEvent`]s to act on. Every mutation happens inside one of those
//! calls on a single `&mut` borrow, so highlight patching, focus moves, and
//! step transitions are serialized by construction.
//!
//! ## Example
//!
//! See the [`demo`] module for the reference script, and the workspace's
//! `demos` member for a complete scripted run against an in-memory host.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod demo;
mod engine;

pub use engine::{EngineEvent, EngineEvents, TourEngine, TourHost};
