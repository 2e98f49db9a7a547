//! WCAG 2.x relative luminance, contrast ratio and threshold checks
//!
//! # Formula
//!
//! Each sRGB channel is linearized (`c / 12.92` at or below `0.03928`,
//! `((c + 0.055) / 1.055)^2.4` above), weighted with the BT.709 coefficients
//! and summed into a relative luminance. The contrast ratio of two colors is
//! `(L1 + 0.05) / (L2 + 0.05)` with `L1` the lighter of the two, so the
//! result is in `[1, 21]` and does not depend on argument order.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ContrastError, Result};

/// WCAG AA minimum for normal-size text
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// WCAG AA minimum for large text
pub const AA_LARGE_TEXT: f64 = 3.0;

/// WCAG AAA minimum for normal-size text
pub const AAA_NORMAL_TEXT: f64 = 7.0;

/// WCAG AAA minimum for large text
pub const AAA_LARGE_TEXT: f64 = 4.5;

const LINEAR_CUTOFF: f64 = 0.03928;
const RED_WEIGHT: f64 = 0.2126;
const GREEN_WEIGHT: f64 = 0.7152;
const BLUE_WEIGHT: f64 = 0.0722;
const FLARE: f64 = 0.05;

fn linearize(channel: f64) -> f64 {
    if channel <= LINEAR_CUTOFF {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in `[0, 1]` for in-range channels
pub fn relative_luminance(color: &Color) -> f64 {
    let (r, g, b) = color.channels();
    RED_WEIGHT * linearize(r) + GREEN_WEIGHT * linearize(g) + BLUE_WEIGHT * linearize(b)
}

/// Contrast ratio between two colors, in `[1, 21]`
///
/// Symmetric in its arguments.
pub fn contrast_ratio(foreground: &Color, background: &Color) -> f64 {
    let a = relative_luminance(foreground);
    let b = relative_luminance(background);
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + FLARE) / (darker + FLARE)
}

/// Whether the pair's contrast ratio is at least `threshold`
pub fn passes_threshold(foreground: &Color, background: &Color, threshold: f64) -> bool {
    contrast_ratio(foreground, background) >= threshold
}

/// Validating variant of [`passes_threshold`]
///
/// Rejects colors with channels outside `[0, 1]` and negative or NaN
/// thresholds instead of producing a meaningless answer.
pub fn checked_passes_threshold(
    foreground: &Color,
    background: &Color,
    threshold: f64,
) -> Result<bool> {
    for color in [foreground, background] {
        let (r, g, b) = color.channels();
        Color::try_new(r, g, b)?;
    }
    if threshold.is_nan() || threshold < 0.0 {
        return Err(ContrastError::InvalidInput(format!(
            "threshold {} must be a non-negative number",
            threshold
        )));
    }
    Ok(passes_threshold(foreground, background, threshold))
}

/// WCAG AA check for normal text (4.5:1)
pub fn passes_aa(foreground: &Color, background: &Color) -> bool {
    passes_threshold(foreground, background, AA_NORMAL_TEXT)
}

/// WCAG AAA check for normal text (7:1)
pub fn passes_aaa(foreground: &Color, background: &Color) -> bool {
    passes_threshold(foreground, background, AAA_NORMAL_TEXT)
}

/// Text size category, which selects between the normal and large thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    /// Body text
    #[default]
    Normal,
    /// Large text (18pt, or 14pt bold)
    Large,
}

/// WCAG conformance level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WcagLevel {
    /// Level AA
    #[default]
    Aa,
    /// Level AAA
    Aaa,
}

impl WcagLevel {
    /// Minimum contrast ratio for this level at the given text size
    pub fn threshold(&self, size: TextSize) -> f64 {
        match (self, size) {
            (WcagLevel::Aa, TextSize::Normal) => AA_NORMAL_TEXT,
            (WcagLevel::Aa, TextSize::Large) => AA_LARGE_TEXT,
            (WcagLevel::Aaa, TextSize::Normal) => AAA_NORMAL_TEXT,
            (WcagLevel::Aaa, TextSize::Large) => AAA_LARGE_TEXT,
        }
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WcagLevel::Aa => write!(f, "AA"),
            WcagLevel::Aaa => write!(f, "AAA"),
        }
    }
}

impl std::str::FromStr for WcagLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "aa" => Ok(WcagLevel::Aa),
            "aaa" => Ok(WcagLevel::Aaa),
            _ => Err(format!("Unknown WCAG level: {}", s)),
        }
    }
}

/// Contrast ratio of a color pair with its AA and AAA classification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Contrast ratio, at least 1.0
    pub ratio: f64,
    /// Text size the classifications were made for
    pub text_size: TextSize,
    /// Meets WCAG AA for `text_size`
    pub passes_aa: bool,
    /// Meets WCAG AAA for `text_size`
    pub passes_aaa: bool,
}

impl ContrastResult {
    /// Whether the given level is met
    pub fn passes(&self, level: WcagLevel) -> bool {
        match level {
            WcagLevel::Aa => self.passes_aa,
            WcagLevel::Aaa => self.passes_aaa,
        }
    }

    /// Highest level met, if any
    pub fn grade(&self) -> Option<WcagLevel> {
        if self.passes_aaa {
            Some(WcagLevel::Aaa)
        } else if self.passes_aa {
            Some(WcagLevel::Aa)
        } else {
            None
        }
    }
}

/// Compute the contrast ratio once and classify it for `text_size`
pub fn evaluate(foreground: &Color, background: &Color, text_size: TextSize) -> ContrastResult {
    let ratio = contrast_ratio(foreground, background);
    ContrastResult {
        ratio,
        text_size,
        passes_aa: ratio >= WcagLevel::Aa.threshold(text_size),
        passes_aaa: ratio >= WcagLevel::Aaa.threshold(text_size),
    }
}
