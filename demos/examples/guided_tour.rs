// Copyright 2025 the Limelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A full scripted tour run against an in-memory host.
//!
//! This example stands in for a real toolkit: elements are rows in two hash
//! maps, the "user" is a list of timed actions, and the render loop prints
//! the spotlight scene instead of drawing it. It exercises the whole
//! pipeline: gate, driver, highlight patching, deferred focus, geometry
//! polling, and pointer routing.
//!
//! Run:
//! - `cargo run -p limelight_demos --example guided_tour`

use std::collections::HashMap;

use kurbo::{Point, Rect};
use limelight_engine::demo::{
    ANALYZE_BUTTON, CATEGORY_PICKER, DemoState, MIN_TEXT_LEN, MODE_PICKER, Mode, REPLY_BUTTON,
    RESULT_CARD, TEXT_INPUT, demo_script,
};
use limelight_engine::{EngineEvent, TourEngine};
use limelight_focus::{FocusTrap, TabMove};
use limelight_locator::{TargetFlags, TargetSource};
use limelight_patch::{InlineStyle, StyleHost};
use limelight_tour::gate::{Eligibility, GatePhase};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

/// A fake page: element geometry, flags, and inline styles by tag.
#[derive(Default)]
struct Page {
    bounds: HashMap<&'static str, Rect>,
    flags: HashMap<&'static str, TargetFlags>,
    styles: HashMap<&'static str, InlineStyle>,
}

impl Page {
    fn new() -> Self {
        let mut page = Self::default();
        let mut y = 20.0;
        for tag in [
            MODE_PICKER,
            TEXT_INPUT,
            CATEGORY_PICKER,
            ANALYZE_BUTTON,
            RESULT_CARD,
            REPLY_BUTTON,
        ] {
            page.bounds.insert(tag, Rect::new(40.0, y, 360.0, y + 48.0));
            page.flags.insert(tag, TargetFlags::all());
            page.styles.insert(tag, InlineStyle::default());
            y += 70.0;
        }
        page
    }

    fn center_of(&self, tag: &'static str) -> Point {
        let r = self.bounds[tag];
        Point::new((r.x0 + r.x1) / 2.0, (r.y0 + r.y1) / 2.0)
    }
}

impl TargetSource<&'static str> for Page {
    fn bounds_of(&self, id: &&'static str) -> Option<Rect> {
        self.bounds.get(id).copied()
    }
    fn flags_of(&self, id: &&'static str) -> TargetFlags {
        self.flags.get(id).copied().unwrap_or(TargetFlags::empty())
    }
}

impl StyleHost<&'static str> for Page {
    fn is_mounted(&self, id: &&'static str) -> bool {
        self.styles.contains_key(id)
    }
    fn read_inline(&self, id: &&'static str) -> InlineStyle {
        self.styles.get(id).cloned().unwrap_or_default()
    }
    fn write_inline(&mut self, id: &&'static str, style: &InlineStyle) {
        self.styles.insert(id, style.clone());
    }
}

fn report(events: &[EngineEvent<&'static str>]) {
    for event in events {
        match event {
            EngineEvent::Tour(tour) => println!("  tour: {tour:?}"),
            EngineEvent::BlockedClick { point } => {
                println!("  blocked click at ({:.0}, {:.0})", point.x, point.y);
            }
            EngineEvent::FocusTarget(cmd) => {
                println!(
                    "  focus -> {} (scroll: {}, patched tab stop: {})",
                    cmd.target, cmd.scroll_to_center, cmd.needs_tab_stop
                );
            }
            EngineEvent::TourFinished => println!("  tour finished; showing end dialog"),
        }
    }
}

fn render(engine: &TourEngine<&'static str, DemoState>) {
    match engine.scene(VIEWPORT) {
        Some(scene) => {
            let hole = scene
                .hole
                .map_or("withheld".to_string(), |h| format!("{h:?}"));
            println!(
                "  scene: \"{}\" ({:?}) | hole {} | intercepts: {}",
                scene.tooltip.title, scene.tooltip.instruction, hole, scene.intercepts_pointer
            );
        }
        None => println!("  scene: (nothing rendered)"),
    }
}

fn main() {
    let mut page = Page::new();
    let mut state = DemoState::default();
    let mut engine = TourEngine::new(demo_script());
    let elig = Eligibility::default();
    let mut now: u64 = 0;

    // Startup: the trial gate shows the welcome dialog first. The dialog
    // traps focus to its own controls while it is up.
    engine.sync(now, elig, &state, &mut page);
    assert_eq!(engine.gate().phase(), GatePhase::StartDialog);
    println!("welcome dialog shown");

    let mut trap = FocusTrap::new();
    let dialog_members = ["start-button", "skip-button"];
    let mut focused = trap.activate(Some(TEXT_INPUT), "start-button");
    println!("  dialog focus -> {focused}");
    if let TabMove::MoveTo(next) = trap.on_tab(Some(&focused), &dialog_members, false) {
        focused = next;
        println!("  Tab -> {focused}");
    }
    // Focus escaping the dialog is pulled back in.
    if let Some(redirect) = trap.contain(Some(&TEXT_INPUT), &dialog_members) {
        println!("  escape redirected -> {redirect}");
    }
    println!("user clicks Start");
    let restored = trap.release(true);
    println!("  dialog closed; focus restored to {restored:?}");
    engine.acknowledge_start();

    // A tiny event loop: each entry advances the clock, mutates the world,
    // and then syncs + ticks like a host render pass would.
    let frame = |now: &mut u64,
                     page: &mut Page,
                     engine: &mut TourEngine<&'static str, DemoState>,
                     state: &DemoState,
                     label: &str| {
        *now += 300;
        println!("\n[{:>5} ms] {label}", *now);
        let events = engine.sync(*now, elig, state, page);
        report(&events);
        let events = engine.tick(*now, page);
        report(&events);
        render(engine);
    };

    frame(&mut now, &mut page, &mut engine, &state, "tour begins");

    state.mode = Some(Mode::Primary);
    frame(&mut now, &mut page, &mut engine, &state, "user picks a mode");

    state.text_len = MIN_TEXT_LEN + 20;
    frame(&mut now, &mut page, &mut engine, &state, "user pastes text");

    state.category_selected = true;
    frame(&mut now, &mut page, &mut engine, &state, "user picks a category");

    // The analyze step requires a click. First try the backdrop: swallowed.
    now += 300;
    println!("\n[{now:>5} ms] user clicks the dimmed backdrop");
    let events = engine.pointer_down(Point::new(900.0, 700.0), VIEWPORT, now, &state, &mut page);
    report(&events);

    // The deferred focus move lands on the next tick.
    let events = engine.tick(now + 1, &mut page);
    report(&events);

    // Then the real click, inside the spotlight hole.
    now += 300;
    println!("\n[{now:>5} ms] user clicks the analyze button");
    let events = engine.pointer_down(page.center_of(ANALYZE_BUTTON), VIEWPORT, now, &state, &mut page);
    report(&events);

    state.analysis_in_flight = true;
    frame(&mut now, &mut page, &mut engine, &state, "analysis running; review waits");

    state.analysis_in_flight = false;
    state.result_present = true;
    state.wants_reply = true;
    frame(&mut now, &mut page, &mut engine, &state, "analysis completes; user wants a reply");

    state.mode = Some(Mode::Secondary);
    state.result_present = false;
    frame(&mut now, &mut page, &mut engine, &state, "user switches to reply mode");

    now += 300;
    println!("\n[{now:>5} ms] user clicks the reply button");
    let events = engine.pointer_down(page.center_of(REPLY_BUTTON), VIEWPORT, now, &state, &mut page);
    report(&events);

    state.result_present = true;
    frame(&mut now, &mut page, &mut engine, &state, "reply appears; last step satisfied");
    assert_eq!(engine.gate().phase(), GatePhase::EndDialog);
    engine.acknowledge_end();
    println!("\nend dialog dismissed; phase: {:?}", engine.gate().phase());

    // Every inline style patch was restored on completion.
    for (tag, style) in &page.styles {
        assert_eq!(*style, InlineStyle::default(), "style of {tag} restored");
    }
    println!("all inline styles restored");
}
