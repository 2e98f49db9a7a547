//! Plain RGB color value used by the contrast evaluator
//!
//! Channels are stored as `f64` normalized to `[0, 1]`. Alpha is not part of
//! the contrast computation and is not represented. Conversion helpers from
//! 8-bit channels and hex strings live here so the UI layer can hand over
//! whatever representation it has.

use serde::{Deserialize, Serialize};

use crate::error::{ContrastError, Result};

/// An immutable RGB color with channels normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
}

impl Color {
    /// Pure black
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// Pure white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Create a color from normalized channels without validation
    ///
    /// Out-of-range channels are the caller's responsibility.
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Create a color, rejecting channels outside `[0, 1]` or NaN
    pub fn try_new(red: f64, green: f64, blue: f64) -> Result<Self> {
        for (name, value) in [("red", red), ("green", green), ("blue", blue)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ContrastError::InvalidInput(format!(
                    "{} channel {} is outside [0, 1]",
                    name, value
                )));
            }
        }
        Ok(Self::new(red, green, blue))
    }

    /// Create a color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Parse a `#RRGGBB` or `#RRGGBBAA` hex string
    ///
    /// The leading `#` is optional and the alpha pair is ignored.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ContrastError::InvalidHex(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ContrastError::InvalidHex(hex.to_string()))
        };
        Ok(Self::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Red channel in `[0, 1]`
    pub fn red(&self) -> f64 {
        self.red
    }

    /// Green channel in `[0, 1]`
    pub fn green(&self) -> f64 {
        self.green
    }

    /// Blue channel in `[0, 1]`
    pub fn blue(&self) -> f64 {
        self.blue
    }

    /// Channels as an `(r, g, b)` tuple
    pub fn channels(&self) -> (f64, f64, f64) {
        (self.red, self.green, self.blue)
    }

    /// Convert to 8-bit channels, clamping and rounding each one
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        (quantize(self.red), quantize(self.green), quantize(self.blue))
    }

    /// Format as an uppercase `#RRGGBB` string
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// WCAG relative luminance of this color
    pub fn relative_luminance(&self) -> f64 {
        crate::wcag::relative_luminance(self)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::from_rgb8(r, g, b)
    }
}

impl std::str::FromStr for Color {
    type Err = ContrastError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
