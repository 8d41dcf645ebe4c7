//! Error types for the testimonial carousel.
//!
//! This module defines the centralized error type [`CarouselError`] and a type alias
//! [`Result`] used throughout the crate. Navigation itself never fails; errors only
//! arise while loading data (testimonial sets, themes) or validating input that
//! comes from outside the plugin (configuration, contact requests).

use thiserror::Error;

/// The main error type for carousel operations.
///
/// Most variants describe rejected input. `Io` and `Parse` wrap errors from the
/// standard library and the `toml` crate using `#[from]` for automatic conversion.
///
/// # Examples
///
/// ```
/// use testimonial_carousel::CarouselError;
///
/// let err = CarouselError::InvalidRating { index: 2, rating: 7 };
/// assert_eq!(err.to_string(), "Testimonial 2 has rating 7, expected 1 to 5");
/// ```
#[derive(Debug, Error)]
pub enum CarouselError {
    /// A testimonial set was built from an empty list.
    ///
    /// The carousel needs at least one item to have a valid current index.
    #[error("Testimonial set is empty")]
    EmptyTestimonials,

    /// A testimonial carries a rating outside `1..=5`.
    #[error("Testimonial {index} has rating {rating}, expected 1 to 5")]
    InvalidRating {
        /// Position of the offending testimonial in its source list.
        index: usize,
        /// The rejected rating value.
        rating: u8,
    },

    /// A required contact field was blank.
    #[error("Contact field '{field}' is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. reading a
    /// testimonial file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML content could not be parsed into the expected shape.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for carousel operations.
///
/// This is a type alias for `std::result::Result<T, CarouselError>`.
pub type Result<T> = std::result::Result<T, CarouselError>;
