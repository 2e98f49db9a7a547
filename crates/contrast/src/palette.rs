//! Named platform colors used by the Contrast Hero question bank
//!
//! Values are the light-appearance sRGB values of the mobile platform's
//! standard and system colors.

use crate::color::Color;

/// White
pub const WHITE: Color = Color::WHITE;

/// Black
pub const BLACK: Color = Color::BLACK;

/// Standard blue (#007AFF)
///
/// Same value as [`SYSTEM_BLUE`] in light appearance; the question bank
/// names both because the platform treats them as distinct colors.
pub const BLUE: Color = Color::new(0.0, 122.0 / 255.0, 1.0);

/// System blue (#007AFF)
pub const SYSTEM_BLUE: Color = Color::new(0.0, 122.0 / 255.0, 1.0);

/// System gray (#8E8E93)
pub const SYSTEM_GRAY: Color = Color::new(142.0 / 255.0, 142.0 / 255.0, 147.0 / 255.0);

/// System gray 2 (#AEAEB2)
pub const SYSTEM_GRAY2: Color = Color::new(174.0 / 255.0, 174.0 / 255.0, 178.0 / 255.0);

/// System gray 6 (#F2F2F7)
pub const SYSTEM_GRAY6: Color = Color::new(242.0 / 255.0, 242.0 / 255.0, 247.0 / 255.0);

/// Standard yellow (#FFCC00)
pub const YELLOW: Color = Color::new(1.0, 204.0 / 255.0, 0.0);

/// Standard red (#FF3B30)
pub const RED: Color = Color::new(1.0, 59.0 / 255.0, 48.0 / 255.0);

/// System pink (#FF2D55)
pub const SYSTEM_PINK: Color = Color::new(1.0, 45.0 / 255.0, 85.0 / 255.0);

/// System orange (#FF9500)
pub const SYSTEM_ORANGE: Color = Color::new(1.0, 149.0 / 255.0, 0.0);

/// Standard purple (#AF52DE)
pub const PURPLE: Color = Color::new(175.0 / 255.0, 82.0 / 255.0, 222.0 / 255.0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_matches_hex() {
        let cases = [
            (BLUE, "#007AFF"),
            (SYSTEM_BLUE, "#007AFF"),
            (SYSTEM_GRAY, "#8E8E93"),
            (SYSTEM_GRAY2, "#AEAEB2"),
            (SYSTEM_GRAY6, "#F2F2F7"),
            (YELLOW, "#FFCC00"),
            (RED, "#FF3B30"),
            (SYSTEM_PINK, "#FF2D55"),
            (SYSTEM_ORANGE, "#FF9500"),
            (PURPLE, "#AF52DE"),
        ];
        for (color, hex) in cases {
            assert_eq!(color.to_hex(), hex);
        }
    }
}
