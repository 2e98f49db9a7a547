//! WCAG color contrast evaluation for Accessibility Build
//!
//! This crate computes relative luminance and contrast ratios following the
//! WCAG 2.x formula, and classifies color pairs against the AA and AAA
//! thresholds. Every operation is a pure function of its arguments.
//!
//! # Example
//!
//! ```rust
//! use contrast::{contrast_ratio, passes_threshold, Color, AA_NORMAL_TEXT};
//!
//! let text = Color::new(0.0, 0.0, 1.0);
//! let background = Color::WHITE;
//!
//! let ratio = contrast_ratio(&text, &background);
//! assert!((ratio - 8.59).abs() < 0.01);
//! assert!(passes_threshold(&text, &background, AA_NORMAL_TEXT));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod error;
pub mod palette;
pub mod wcag;

pub use color::Color;
pub use error::{ContrastError, Result};
pub use wcag::{
    checked_passes_threshold, contrast_ratio, evaluate, passes_aa, passes_aaa, passes_threshold,
    relative_luminance, ContrastResult, TextSize, WcagLevel, AAA_LARGE_TEXT, AAA_NORMAL_TEXT,
    AA_LARGE_TEXT, AA_NORMAL_TEXT,
};
