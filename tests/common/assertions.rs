//! Assertion helpers for tests.

use pixel_transform::{Argb, PixelGrid};
use pretty_assertions::assert_eq;

/// Assert every pixel equals `expected`
pub fn assert_uniform(grid: &PixelGrid, expected: Argb) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            assert_eq!(grid.get(x, y), expected, "pixel ({x},{y})");
        }
    }
}

/// Assert red, green and blue are equal at every pixel
pub fn assert_gray(grid: &PixelGrid) {
    for (idx, px) in grid.pixels().iter().enumerate() {
        let [r, g, b] = px.rgb();
        assert!(r == g && g == b, "pixel {idx} is not gray: {r},{g},{b}");
    }
}

/// Assert every pixel has full alpha
pub fn assert_opaque(grid: &PixelGrid) {
    assert!(
        grid.pixels().iter().all(|px| px.alpha() == 255),
        "expected fully opaque image"
    );
}
