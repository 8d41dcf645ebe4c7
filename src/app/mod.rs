//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the carousel and
//! UI layers. It turns user input and timer wake-ups into carousel operations,
//! decides when to re-render, and plans the next host wake-up.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → Carousel Operations → Actions → Side Effects
//!                           ↑                                      ↓
//!                           └──────────── Timer Wake-ups ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and render decisions
//! - [`state`]: Application state container, wake planning and view model computation
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use testimonial_carousel::app::{handle_event, Event};
//! use testimonial_carousel::{initialize, Config};
//!
//! let mut state = initialize(&Config::default(), Duration::ZERO);
//! let (should_render, _actions) =
//!     handle_event(&mut state, &Event::Resize { rows: 24, cols: 100 }, Duration::ZERO);
//! assert!(should_render);
//! ```

pub mod actions;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{AppState, PROGRESS_FRAME};
