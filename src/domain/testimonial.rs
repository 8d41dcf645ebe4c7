//! Testimonial records and validated, non-empty testimonial sets.
//!
//! A [`TestimonialSet`] is the carousel's item list. It is fixed once built and
//! is guaranteed to hold at least one entry, so every index arithmetic in the
//! controller can divide by its length without a zero check.
//!
//! # TOML Format
//!
//! ```toml
//! [[testimonial]]
//! content = "Always on schedule."
//! author = "Frequent Client"
//! rating = 5
//! ```

use crate::domain::error::{CarouselError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Lowest accepted rating.
const MIN_RATING: u8 = 1;

/// Highest accepted rating.
const MAX_RATING: u8 = 5;

/// A single customer review shown on one carousel card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    /// Quoted review text.
    pub content: String,
    /// Who wrote the review.
    pub author: String,
    /// Star rating, `1..=5` once part of a [`TestimonialSet`].
    pub rating: u8,
}

impl Testimonial {
    /// Creates a testimonial. The rating is validated when the testimonial is
    /// added to a [`TestimonialSet`].
    #[must_use]
    pub fn new(content: impl Into<String>, author: impl Into<String>, rating: u8) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            rating,
        }
    }

    /// Returns the avatar letter for the card: the author's first character,
    /// upper-cased, or `?` for an anonymous review.
    ///
    /// ```
    /// use testimonial_carousel::Testimonial;
    ///
    /// assert_eq!(Testimonial::new("x", "élodie", 5).initial(), 'É');
    /// assert_eq!(Testimonial::new("x", "", 5).initial(), '?');
    /// ```
    #[must_use]
    pub fn initial(&self) -> char {
        self.author
            .trim()
            .chars()
            .next()
            .and_then(|c| c.to_uppercase().next())
            .unwrap_or('?')
    }

    /// Returns the rating drawn as a row of stars.
    #[must_use]
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating))
    }
}

/// On-disk layout of a testimonial TOML file.
#[derive(Debug, Deserialize)]
struct TestimonialFile {
    #[serde(default)]
    testimonial: Vec<Testimonial>,
}

/// An ordered, non-empty list of testimonials with validated ratings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialSet {
    items: Vec<Testimonial>,
}

impl TestimonialSet {
    /// Builds a set from a list of testimonials.
    ///
    /// # Errors
    ///
    /// - [`CarouselError::EmptyTestimonials`] if `items` is empty
    /// - [`CarouselError::InvalidRating`] for the first rating outside `1..=5`
    pub fn new(items: Vec<Testimonial>) -> Result<Self> {
        if items.is_empty() {
            return Err(CarouselError::EmptyTestimonials);
        }

        if let Some((index, bad)) = items
            .iter()
            .enumerate()
            .find(|(_, t)| !(MIN_RATING..=MAX_RATING).contains(&t.rating))
        {
            return Err(CarouselError::InvalidRating {
                index,
                rating: bad.rating,
            });
        }

        Ok(Self { items })
    }

    /// Loads the testimonials shipped with the plugin.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled TOML is broken, which the unit tests guard against.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(include_str!("../../testimonials/default.toml"))
    }

    /// Parses a set from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Parse`] for malformed TOML, plus the validation
    /// errors of [`TestimonialSet::new`].
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: TestimonialFile = toml::from_str(contents)?;
        Self::new(file.testimonial)
    }

    /// Reads and parses a TOML testimonial file.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Io`] if the file cannot be read, otherwise the
    /// errors of [`TestimonialSet::from_toml_str`].
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Number of testimonials (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the testimonial at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Testimonial> {
        self.items.get(index)
    }

    /// Iterates the testimonials in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Testimonial> {
        self.items.iter()
    }
}
