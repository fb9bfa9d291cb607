//! HSV (hue, saturation, value) view of a packed color
//!
//! The hue formula is not the textbook one. Its red-dominant branch
//! truncates the hue sextant to an integer and then takes a floating-point
//! remainder:
//!
//! ```text
//! h = (60 * trunc((g - b) / chroma)) % 6
//! ```
//!
//! `60 * k` is a multiple of 6 for every integer `k`, so this branch always
//! yields `0.0` or `-0.0`. The crayon palette matching was tuned against this
//! output; replacing it with the continuous hue wheel changes which palette
//! entry wins for most reds, oranges and pinks.

use super::argb::Argb;

/// A color in HSV space.
///
/// Derived from an [`Argb`]; the alpha channel is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees. Nominally `0.0..360.0`; never wrapped or clamped.
    pub h: f64,
    /// Saturation, `0.0..=1.0`
    pub s: f64,
    /// Value (brightness), `0.0..=1.0`
    pub v: f64,
}

impl Hsv {
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// True if the color carries no hue information.
    #[inline]
    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0
    }
}

impl From<Argb> for Hsv {
    fn from(color: Argb) -> Self {
        let r = color.red() as f64 / 255.0;
        let g = color.green() as f64 / 255.0;
        let b = color.blue() as f64 / 255.0;

        let max = r.max(g.max(b));
        let min = r.min(g.min(b));
        let chroma = max - min;

        let h = if chroma == 0.0 {
            0.0
        } else if max == r {
            (60.0 * ((g - b) / chroma).trunc()) % 6.0
        } else if max == g {
            60.0 * ((b - r) / chroma + 2.0)
        } else {
            60.0 * ((r - g) / chroma + 4.0)
        };

        let s = if max == 0.0 { 0.0 } else { chroma / max };

        Self { h, s, v: max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsv(r: u8, g: u8, b: u8) -> Hsv {
        Hsv::from(Argb::from_channels(r, g, b, 255))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_achromatic() {
        for v in [0u8, 1, 128, 254, 255] {
            let c = hsv(v, v, v);
            assert_eq!(c.h, 0.0);
            assert_eq!(c.s, 0.0);
            assert_close(c.v, v as f64 / 255.0);
            assert!(c.is_achromatic());
        }
    }

    #[test]
    fn test_black_has_zero_saturation() {
        let c = hsv(0, 0, 0);
        assert_eq!(c, Hsv::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_green_dominant_branch() {
        let c = hsv(0, 255, 0);
        assert_close(c.h, 120.0);
        assert_close(c.s, 1.0);
        assert_close(c.v, 1.0);

        // Cyan-ish green: b > r pushes hue past 120.
        let c = hsv(0, 255, 128);
        assert_close(c.h, 60.0 * (128.0 / 255.0 + 2.0));
    }

    #[test]
    fn test_blue_dominant_branch() {
        let c = hsv(0, 0, 255);
        assert_close(c.h, 240.0);

        let c = hsv(255, 0, 255);
        // Red ties blue at max; red is checked first.
        assert_eq!(c.h, 0.0);

        let c = hsv(128, 0, 255);
        assert_close(c.h, 60.0 * (128.0 / 255.0 + 4.0));
    }

    #[test]
    fn test_red_dominant_branch_collapses_to_zero() {
        // Conventional hue for these would be 0, 30, 330 and 60 degrees.
        for (r, g, b) in [(255, 0, 0), (255, 128, 0), (255, 0, 128), (255, 255, 0)] {
            let c = hsv(r, g, b);
            assert_eq!(c.h, 0.0, "rgb({r},{g},{b}) hue");
        }
    }

    #[test]
    fn test_red_dominant_negative_sextant_is_negative_zero() {
        // Magenta: red wins the tie with blue, (g - b) / chroma == -1
        // exactly, and the remainder keeps the dividend's sign.
        let c = hsv(255, 0, 255);
        assert_eq!(c.h, 0.0);
        assert!(c.h.is_sign_negative());

        let c = hsv(255, 0, 0);
        assert!(c.h.is_sign_positive());
    }

    #[test]
    fn test_saturation() {
        let c = hsv(200, 100, 50);
        assert_close(c.s, 150.0 / 200.0);
        assert_close(c.v, 200.0 / 255.0);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = Hsv::from(Argb::from_channels(12, 200, 90, 255));
        let clear = Hsv::from(Argb::from_channels(12, 200, 90, 0));
        assert_eq!(opaque, clear);
    }
}
