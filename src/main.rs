//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the carousel library and
//! the Zellij plugin system. It owns the only clock in the plugin, translates
//! Zellij events into library events and executes the resulting actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, mount the carousel
//! 2. **Subscribe**: Register for `Key`, `Mouse` and `Timer` events
//! 3. **Update**: Map events, delegate to `handle_event`, run actions
//! 4. **Render**: Apply the pane size, then draw
//!
//! # Event Mapping
//!
//! - `Key(l | Right)` → `Event::Next`, `Key(h | Left)` → `Event::Previous`
//! - `Key(1..=9)` → `Event::GoTo`
//! - `Key(Space)` → `Event::TogglePause`
//! - `Key(q | Esc)` → `Event::CloseFocus`
//! - `Mouse(LeftClick)` on `‹`/`›`/a dot → `Next`/`Previous`/`GoTo`
//! - `Mouse(LeftClick | Hold | Release)` in the card area → drag events
//! - `Mouse(Hover)` → `PointerEnter`/`PointerLeave`
//! - `Timer` → `Event::Tick`

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use zellij_tile::prelude::*;

use testimonial_carousel::ui::Hit;
use testimonial_carousel::{handle_event, Action, AppState, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: AppState,

    /// Origin of the carousel's clock.
    mounted_at: Instant,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: testimonial_carousel::initialize(&Config::default(), Duration::ZERO),
            mounted_at: Instant::now(),
        }
    }
}

impl Drop for State {
    fn drop(&mut self) {
        if let Some(carousel) = self.app.carousel.take() {
            carousel.unmount();
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// No permissions are needed: the plugin only reads its own input and
    /// asks for timers.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        testimonial_carousel::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            testimonials_file = ?config.testimonials_file,
            cell_width = config.cell_width,
            "parsed configuration"
        );

        if let Some(carousel) = self.app.carousel.take() {
            carousel.unmount();
        }
        self.mounted_at = Instant::now();
        self.app = testimonial_carousel::initialize(&config, Duration::ZERO);

        subscribe(&[EventType::Key, EventType::Mouse, EventType::Timer]);

        if let Some(action) = self.app.plan_wake(Duration::ZERO) {
            execute_action(&action);
        }
        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should
    /// re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let now = self.now();
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let events = match event {
            zellij_tile::prelude::Event::Key(ref key) => {
                Self::map_key_event(key).into_iter().collect()
            }
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse),
            zellij_tile::prelude::Event::Timer(_) => vec![Event::Tick],
            _ => return false,
        };

        let mut should_render = false;
        for our_event in &events {
            let (render, actions) = handle_event(&mut self.app, our_event, now);
            tracing::debug!(
                action_count = actions.len(),
                should_render = render,
                "event handled"
            );
            should_render |= render;
            for action in &actions {
                execute_action(action);
            }
        }
        should_render
    }

    /// Renders the plugin UI.
    ///
    /// Zellij reports pane size changes only through `render`, so the size
    /// is applied to the carousel first.
    fn render(&mut self, rows: usize, cols: usize) {
        let now = self.now();
        let (_, actions) = handle_event(&mut self.app, &Event::Resize { rows, cols }, now);
        for action in &actions {
            execute_action(action);
        }
        testimonial_carousel::ui::render(&self.app, rows, cols, now);
    }
}

impl State {
    fn now(&self) -> Duration {
        self.mounted_at.elapsed()
    }

    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        Some(match key.bare_key {
            BareKey::Right | BareKey::Char('l') => Event::Next,
            BareKey::Left | BareKey::Char('h') => Event::Previous,
            BareKey::Char(c @ '1'..='9') => Event::GoTo(c as usize - '1' as usize),
            BareKey::Char(' ') => Event::TogglePause,
            BareKey::Char('q') | BareKey::Esc => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps mouse reports to application events.
    ///
    /// Presses in the card area start a drag; while one is active, holds and
    /// the release feed it wherever the pointer is. Hover reports become
    /// enter/leave transitions.
    fn map_mouse_event(&self, mouse: Mouse) -> Vec<Event> {
        let dragging = self
            .app
            .carousel
            .as_ref()
            .is_some_and(|carousel| carousel.is_dragging());
        let hovering = self
            .app
            .carousel
            .as_ref()
            .is_some_and(|carousel| carousel.is_hovering());

        match mouse {
            Mouse::LeftClick(line, col) => match self.app.hit_test(line, col) {
                Hit::Previous => vec![Event::Previous],
                Hit::Next => vec![Event::Next],
                Hit::Indicator(index) => vec![Event::GoTo(index)],
                Hit::Cards => vec![Event::DragStart {
                    x: self.app.drag_position(col),
                }],
                Hit::Carousel | Hit::Outside => vec![],
            },
            Mouse::Hold(_, col) if dragging => vec![Event::DragMove {
                x: self.app.drag_position(col),
            }],
            Mouse::Release(_, col) if dragging => vec![
                Event::DragMove {
                    x: self.app.drag_position(col),
                },
                Event::DragEnd,
            ],
            Mouse::Hover(line, col) => {
                let inside = self.app.hit_test(line, col).is_carousel();
                match (inside, hovering) {
                    (true, false) => vec![Event::PointerEnter],
                    (false, true) => vec![Event::PointerLeave],
                    _ => vec![],
                }
            }
            _ => vec![],
        }
    }
}

/// Executes an action returned from event handling.
#[tracing::instrument(level = "debug")]
fn execute_action(action: &Action) {
    match action {
        Action::CloseFocus => {
            tracing::debug!("closing plugin focus");
            hide_self();
        }
        Action::ScheduleWake { after } => {
            set_timeout(after.as_secs_f64());
        }
    }
}
