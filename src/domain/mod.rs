//! Domain layer for the testimonial carousel.
//!
//! Holds the data the carousel shows and the validation rules around it,
//! independent of Zellij APIs and of the timing logic in [`crate::carousel`].
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`testimonial`]: Testimonial records and non-empty testimonial sets
//! - [`contact`]: Contact requests turned into messaging links
//!
//! # Examples
//!
//! ```
//! use testimonial_carousel::domain::{Result, Testimonial, TestimonialSet};
//!
//! fn one_review() -> Result<TestimonialSet> {
//!     TestimonialSet::new(vec![Testimonial::new("On time, every time.", "Local Shop", 5)])
//! }
//! # assert_eq!(one_review().unwrap().len(), 1);
//! ```

pub mod contact;
pub mod error;
pub mod testimonial;

pub use contact::{ContactChannel, ContactRequest};
pub use error::{CarouselError, Result};
pub use testimonial::{Testimonial, TestimonialSet};
