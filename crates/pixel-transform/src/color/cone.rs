//! Perceptual distance on the HSV cone
//!
//! HSV is a cylinder in name only: hue is an angle, and a hue difference
//! between two dark or washed-out colors is barely visible. Projecting onto
//! Cartesian coordinates scaled by `s * v` turns the cylinder into a cone
//! where a grey has no hue contribution at all, and plain Euclidean distance
//! becomes meaningful:
//!
//! ```text
//! x = sin(h) * s * v
//! y = cos(h) * s * v
//! z = v
//! ```

use super::argb::Argb;
use super::hsv::Hsv;

/// Distance conventionally treated as the smallest visible difference.
pub const JUST_NOTICEABLE_DISTANCE: f64 = 2.3;

/// A point on the linearized HSV cone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl ConePoint {
    /// Euclidean distance to another cone point.
    #[inline]
    pub fn distance(self, other: ConePoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = other.z - self.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<Hsv> for ConePoint {
    fn from(hsv: Hsv) -> Self {
        let radius = hsv.s * hsv.v;
        let angle = hsv.h.to_radians();
        Self {
            x: angle.sin() * radius,
            y: angle.cos() * radius,
            z: hsv.v,
        }
    }
}

impl From<Argb> for ConePoint {
    #[inline]
    fn from(color: Argb) -> Self {
        ConePoint::from(Hsv::from(color))
    }
}

/// Perceptual distance between two packed colors.
///
/// Alpha is ignored. The result is not normalized; compare distances
/// against each other rather than against a fixed threshold.
///
/// # Example
///
/// ```
/// use pixel_transform::{color_distance, Argb};
///
/// let navy = Argb::from_channels(0, 0, 128, 255);
/// let blue = Argb::from_channels(0, 0, 255, 255);
///
/// assert_eq!(color_distance(navy, navy), 0.0);
/// assert_eq!(color_distance(navy, blue), color_distance(blue, navy));
/// assert!(color_distance(blue, navy) < color_distance(blue, Argb::WHITE));
/// ```
#[inline]
pub fn color_distance(a: Argb, b: Argb) -> f64 {
    ConePoint::from(a).distance(ConePoint::from(b))
}
