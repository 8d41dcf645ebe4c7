//! Testimonial Carousel: a Zellij plugin showing customer reviews as an
//! auto-advancing, swipeable carousel.
//!
//! The plugin provides:
//! - A responsive window of one to three testimonial cards, depending on width
//! - Autoplay that pauses on interaction and resumes after a delay
//! - Keyboard, click and drag ("swipe") navigation with indicator dots
//! - A contact link for quote requests in the footer

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling                                   │
//! │  - Wake-up planning                                 │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌──────────────────────┐        ┌──────────────────────┐
//! │ Carousel (carousel/) │        │ UI Layer (ui/)       │
//! │ - Index + autoplay   │        │ - Layout + hit-test  │
//! │ - Owned timers       │        │ - Components         │
//! │ - Swipe gestures     │        │ - Theming            │
//! └──────────────────────┘        └──────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Testimonials, contact links, errors (domain/)    │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Time
//!
//! Nothing in the library reads a clock. Every operation takes `now`, the
//! time since the plugin loaded; the shim measures it and turns
//! [`Action::ScheduleWake`] into host timers.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/testimonial-carousel.wasm" {
//!         testimonials_file "~/reviews.toml"
//!         theme "catppuccin-mocha"
//!         cell_width "8"
//!         autoplay_interval_ms "4000"
//!         contact_number "+34 666 754 608"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use testimonial_carousel::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default(), Duration::ZERO);
//! handle_event(&mut state, &Event::Resize { rows: 24, cols: 140 }, Duration::ZERO);
//! handle_event(&mut state, &Event::Next, Duration::from_millis(500));
//!
//! let carousel = state.carousel.as_ref().unwrap();
//! assert_eq!(carousel.current_index(), 1);
//! assert!(!carousel.is_auto_playing());
//! ```

pub mod app;
pub mod carousel;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event};
pub use carousel::{CarouselController, CarouselSettings};
pub use domain::{CarouselError, ContactChannel, Result, Testimonial, TestimonialSet};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

/// Default viewport units per terminal column.
pub const DEFAULT_CELL_WIDTH: f64 = 8.0;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// TOML file with `[[testimonial]]` entries. The built-in set is used
    /// when unset or unreadable.
    pub testimonials_file: Option<String>,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,

    /// Viewport units per terminal column. Default: 8
    pub cell_width: f64,

    /// Carousel timing and gesture tunables.
    pub settings: CarouselSettings,

    /// Destination number for the contact link.
    pub contact_number: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            testimonials_file: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            cell_width: DEFAULT_CELL_WIDTH,
            settings: CarouselSettings::default(),
            contact_number: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Numeric values must be positive; anything else falls back to the
    /// default with a debug log.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use testimonial_carousel::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("autoplay_interval_ms".to_string(), "6000".to_string());
    /// map.insert("cell_width".to_string(), "ten".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.settings.autoplay_interval, Duration::from_millis(6000));
    /// assert_eq!(config.cell_width, 8.0);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = CarouselSettings::default();
        let settings = CarouselSettings {
            autoplay_interval: parse_millis(
                config,
                "autoplay_interval_ms",
                defaults.autoplay_interval,
            ),
            manual_resume_delay: parse_millis(
                config,
                "resume_delay_ms",
                defaults.manual_resume_delay,
            ),
            swipe_resume_delay: parse_millis(
                config,
                "swipe_resume_delay_ms",
                defaults.swipe_resume_delay,
            ),
            swipe_threshold: parse_positive(config, "swipe_threshold", defaults.swipe_threshold),
            breakpoints: defaults.breakpoints,
        };

        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        Self {
            testimonials_file: text("testimonials_file"),
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            cell_width: parse_positive(config, "cell_width", DEFAULT_CELL_WIDTH),
            settings,
            contact_number: text("contact_number"),
        }
    }
}

fn parse_positive(config: &BTreeMap<String, String>, key: &str, default: f64) -> f64 {
    let Some(raw) = config.get(key) else {
        return default;
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => {
            tracing::debug!(key, value = %raw, default, "invalid config value, using default");
            default
        }
    }
}

fn parse_millis(config: &BTreeMap<String, String>, key: &str, default: Duration) -> Duration {
    let Some(raw) = config.get(key) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Duration::from_millis(ms),
        _ => {
            tracing::debug!(
                key,
                value = %raw,
                default_ms = default.as_millis() as u64,
                "invalid config value, using default"
            );
            default
        }
    }
}

/// Loads the configured testimonial set, falling back to the built-in one.
///
/// Returns `None` only if the built-in set itself fails to load.
fn load_testimonials(config: &Config) -> Option<TestimonialSet> {
    if let Some(file) = &config.testimonials_file {
        let path = infrastructure::resolve(file);
        match TestimonialSet::from_file(&path) {
            Ok(items) => {
                tracing::debug!(path = %path.display(), count = items.len(), "testimonials loaded");
                return Some(items);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load testimonials, using built-in set");
            }
        }
    }

    TestimonialSet::builtin()
        .map_err(|e| tracing::error!(error = %e, "built-in testimonials failed to load"))
        .ok()
}

fn load_theme(config: &Config) -> Theme {
    if let Some(theme_file) = &config.theme_file {
        return Theme::from_file(infrastructure::resolve(theme_file)).unwrap_or_else(|e| {
            tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
            Theme::default()
        });
    }

    config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
        Theme::from_name(theme_name).unwrap_or_else(|| {
            tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
            Theme::default()
        })
    })
}

fn load_contact(config: &Config) -> ContactChannel {
    config.contact_number.as_ref().map_or_else(ContactChannel::default, |number| {
        ContactChannel::new(number, domain::contact::DEFAULT_RECIPIENT).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "invalid contact number, using default");
            ContactChannel::default()
        })
    })
}

/// Initializes the plugin state and mounts the carousel at `now`.
///
/// The carousel starts with a zero viewport width (one card) until the first
/// render reports the pane size.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use testimonial_carousel::{initialize, Config};
///
/// let state = initialize(&Config::default(), Duration::ZERO);
/// assert!(state.carousel.as_ref().unwrap().is_auto_playing());
/// ```
pub fn initialize(config: &Config, now: Duration) -> AppState {
    tracing::debug!("initializing testimonial carousel plugin");

    let carousel = load_testimonials(config)
        .map(|items| CarouselController::mount(items, config.settings, 0.0, now));

    AppState::new(
        carousel,
        load_theme(config),
        load_contact(config),
        config.cell_width,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn values_are_parsed() {
        let config = Config::from_zellij(&map(&[
            ("testimonials_file", " ~/reviews.toml "),
            ("theme", "catppuccin-latte"),
            ("cell_width", "10"),
            ("resume_delay_ms", "7000"),
            ("swipe_resume_delay_ms", "1500"),
            ("swipe_threshold", "80"),
            ("contact_number", "+34 600 000 000"),
        ]));

        assert_eq!(config.testimonials_file.as_deref(), Some("~/reviews.toml"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.cell_width, 10.0);
        assert_eq!(config.settings.manual_resume_delay, Duration::from_millis(7000));
        assert_eq!(config.settings.swipe_resume_delay, Duration::from_millis(1500));
        assert_eq!(config.settings.swipe_threshold, 80.0);
        assert_eq!(config.contact_number.as_deref(), Some("+34 600 000 000"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("autoplay_interval_ms", "0"),
            ("resume_delay_ms", "-5"),
            ("cell_width", "NaN"),
            ("swipe_threshold", "0"),
            ("theme", "   "),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn initialize_uses_builtin_testimonials() {
        let state = initialize(&Config::default(), Duration::ZERO);
        let carousel = state.carousel.as_ref().unwrap();
        assert_eq!(carousel.items().len(), 4);
        assert_eq!(state.theme.name, "catppuccin-mocha");
    }

    #[test]
    fn initialize_loads_testimonials_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"[[testimonial]]\ncontent = \"Great\"\nauthor = \"Ana\"\nrating = 4\n",
        )
        .unwrap();

        let config = Config {
            testimonials_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        let state = initialize(&config, Duration::ZERO);
        let carousel = state.carousel.as_ref().unwrap();
        assert_eq!(carousel.items().len(), 1);
        assert_eq!(carousel.visible_window().len(), 1);
    }

    #[test]
    fn unreadable_file_falls_back_to_builtin() {
        let config = Config {
            testimonials_file: Some("/nonexistent/reviews.toml".to_string()),
            theme_name: Some("no-such-theme".to_string()),
            contact_number: Some("call me".to_string()),
            ..Config::default()
        };
        let state = initialize(&config, Duration::ZERO);
        assert_eq!(state.carousel.as_ref().unwrap().items().len(), 4);
        assert_eq!(state.theme, Theme::default());
        assert_eq!(state.contact, ContactChannel::default());
    }

    #[test]
    fn contact_number_is_normalized() {
        let config = Config {
            contact_number: Some("+34 600-000-000".to_string()),
            ..Config::default()
        };
        let state = initialize(&config, Duration::ZERO);
        assert_eq!(state.contact.number(), "34600000000");
    }
}
