//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin runtime executes them in order. Keeping effects out of the handler
//! lets the whole application layer run under plain unit tests.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use testimonial_carousel::Action;
//!
//! let actions = vec![Action::ScheduleWake { after: Duration::from_millis(250) }];
//! assert_eq!(actions.len(), 1);
//! ```

use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Asks the host to deliver a timer event after `after`.
    ///
    /// Host timers cannot be cancelled. A wake that arrives after its
    /// deadline was cancelled simply fires nothing in the controller.
    ScheduleWake {
        /// Delay from now until the wake-up.
        after: Duration,
    },
}
