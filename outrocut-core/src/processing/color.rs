//! Pixel color model and the outro background predicate.

use std::fmt;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts a limited-range BT.601 luma/chroma sample to RGB.
    ///
    /// Halfway values round to even, matching the rounding the detection
    /// thresholds were tuned against.
    #[must_use]
    pub fn from_yuv(y: u8, u: u8, v: u8) -> Self {
        let y = f32::from(y) - 16.0;
        let u = f32::from(u) - 128.0;
        let v = f32::from(v) - 128.0;

        let r = 1.164 * y + 1.596 * v;
        let g = 1.164 * y - 0.392 * u - 0.813 * v;
        let b = 1.164 * y + 2.017 * u;

        Self {
            r: to_channel(r),
            g: to_channel(g),
            b: to_channel(b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn to_channel(value: f32) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Exclusive bounds for one color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRange {
    pub above: u8,
    pub below: u8,
}

impl ChannelRange {
    #[must_use]
    pub const fn contains(self, value: u8) -> bool {
        value > self.above && value < self.below
    }
}

/// Red bounds of the outro background.
pub const OUTRO_RED: ChannelRange = ChannelRange { above: 10, below: 30 };
/// Green bounds of the outro background.
pub const OUTRO_GREEN: ChannelRange = ChannelRange { above: 10, below: 30 };
/// Blue bounds of the outro background.
pub const OUTRO_BLUE: ChannelRange = ChannelRange { above: 15, below: 35 };

/// True when the color lies strictly inside the outro background box.
#[must_use]
pub const fn is_outro_color(color: Color) -> bool {
    OUTRO_RED.contains(color.r) && OUTRO_GREEN.contains(color.g) && OUTRO_BLUE.contains(color.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outro_color_interior() {
        for r in 11..30 {
            for g in 11..30 {
                for b in 16..35 {
                    assert!(is_outro_color(Color::new(r, g, b)), "({r},{g},{b})");
                }
            }
        }
    }

    #[test]
    fn test_outro_color_bounds_are_exclusive() {
        let inside = Color::new(20, 20, 25);
        assert!(is_outro_color(inside));

        for r in [10, 30] {
            assert!(!is_outro_color(Color { r, ..inside }));
        }
        for g in [10, 30] {
            assert!(!is_outro_color(Color { g, ..inside }));
        }
        for b in [15, 35] {
            assert!(!is_outro_color(Color { b, ..inside }));
        }
        assert!(!is_outro_color(Color::new(0, 0, 0)));
        assert!(!is_outro_color(Color::new(255, 255, 255)));
    }

    #[test]
    fn test_yuv_conversion_of_outro_background() {
        // BT.601 encoding of roughly rgb(21, 20, 25).
        let color = Color::from_yuv(34, 130, 128);
        assert_eq!(color, Color::new(21, 20, 25));
        assert!(is_outro_color(color));
    }

    #[test]
    fn test_yuv_conversion_is_stable() {
        let first = Color::from_yuv(34, 130, 128);
        for _ in 0..100 {
            let again = Color::from_yuv(34, 130, 128);
            assert_eq!(again, first);
            assert_eq!(is_outro_color(again), is_outro_color(first));
        }
    }

    #[test]
    fn test_yuv_conversion_clamps() {
        assert_eq!(Color::from_yuv(0, 128, 128), Color::new(0, 0, 0));
        assert_eq!(Color::from_yuv(255, 128, 128), Color::new(255, 255, 255));
        let saturated = Color::from_yuv(235, 128, 255);
        assert_eq!(saturated.r, 255);
    }

    #[test]
    fn test_yuv_black_and_white_levels() {
        assert_eq!(Color::from_yuv(16, 128, 128), Color::new(0, 0, 0));
        // 1.164 * 219 = 254.916
        assert_eq!(Color::from_yuv(235, 128, 128), Color::new(255, 255, 255));
    }
}
