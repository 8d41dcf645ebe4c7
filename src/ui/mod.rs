//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled terminal output
//! through composable rendering components, and maps mouse positions back to
//! the elements drawn there.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//!                                    Layout ↗        ↘ hit_test ← Mouse
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Pane geometry and mouse hit-testing
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (wrapping, truncation, cursor moves)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{Hit, Layout};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{CardItem, EmptyState, FooterInfo, HeaderInfo, UIViewModel};
