//! PixelGrid: an owned, row-major grid of packed colors.
//!
//! The grid is the boundary between this crate and whatever image codec the
//! application uses: decoders build one from RGBA bytes or packed values,
//! transforms mutate it in place, encoders read it back out.

use thiserror::Error;

use crate::color::Argb;

/// Error type for grid construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The pixel buffer does not hold exactly `width * height` pixels
    #[error("pixel buffer holds {actual} pixels, {width}x{height} needs {expected}")]
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    /// A crop rectangle extends past the grid
    #[error("region {width}x{height} at ({x},{y}) exceeds {grid_width}x{grid_height} grid")]
    RegionOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        grid_width: usize,
        grid_height: usize,
    },
}

/// A 2-D grid of packed colors addressed by `(x, y)`.
///
/// `x` runs over `0..width`, `y` over `0..height`. Storage is row-major, so
/// `pixels()[y * width + x]` is the pixel at `(x, y)`.
///
/// # Example
///
/// ```
/// use pixel_transform::{Argb, PixelGrid};
///
/// let mut grid = PixelGrid::filled(3, 2, Argb::BLACK);
/// grid.set(2, 1, Argb::WHITE);
///
/// assert_eq!(grid.get(2, 1), Argb::WHITE);
/// assert_eq!(grid.pixels()[5], Argb::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl PixelGrid {
    /// A grid with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Argb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Wrap an existing row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`] if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Argb>) -> Result<Self, GridError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(GridError::LengthMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from a flat `[R, G, B, A, R, G, B, A, ...]` buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::LengthMismatch`] if the buffer does not hold
    /// exactly `width * height` four-byte pixels.
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, GridError> {
        if bytes.len() != width * height * 4 {
            return Err(GridError::LengthMismatch {
                width,
                height,
                expected: width * height,
                actual: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Argb::from_rgba_bytes([px[0], px[1], px[2], px[3]]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Flatten to `[R, G, B, A, ...]` bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            out.extend_from_slice(&px.to_rgba_bytes());
        }
        out
    }

    /// Flatten to `[R, G, B, ...]` bytes, dropping alpha.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            out.extend_from_slice(&px.rgb());
        }
        out
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// True if `other` fits inside this grid in both dimensions.
    #[inline]
    pub fn contains(&self, other: &PixelGrid) -> bool {
        other.width <= self.width && other.height <= self.height
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Argb {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Overwrite the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the grid.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, color: Argb) {
        assert!(x < self.width && y < self.height, "({x},{y}) out of bounds");
        self.pixels[y * self.width + x] = color;
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Argb] {
        &self.pixels
    }

    /// All pixels, row-major, mutable.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Argb] {
        &mut self.pixels
    }

    /// Copy out the `width`x`height` region whose top-left corner is `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::RegionOutOfBounds`] if the region does not fit.
    pub fn crop(&self, x: usize, y: usize, width: usize, height: usize) -> Result<Self, GridError> {
        if x + width > self.width || y + height > self.height {
            return Err(GridError::RegionOutOfBounds {
                x,
                y,
                width,
                height,
                grid_width: self.width,
                grid_height: self.height,
            });
        }

        let mut pixels = Vec::with_capacity(width * height);
        for row in y..y + height {
            let start = row * self.width + x;
            pixels.extend_from_slice(&self.pixels[start..start + width]);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Consume the grid and return its row-major buffer.
    pub fn into_pixels(self) -> Vec<Argb> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 4x3 grid where each pixel's blue channel is its index.
    fn indexed_grid() -> PixelGrid {
        let pixels = (0..12).map(|i| Argb::from_channels(0, 0, i, 255)).collect();
        PixelGrid::from_pixels(4, 3, pixels).unwrap()
    }

    #[test]
    fn test_row_major_addressing() {
        let grid = indexed_grid();
        assert_eq!(grid.get(0, 0).blue(), 0);
        assert_eq!(grid.get(3, 0).blue(), 3);
        assert_eq!(grid.get(0, 1).blue(), 4);
        assert_eq!(grid.get(3, 2).blue(), 11);
    }

    #[test]
    fn test_from_pixels_length_mismatch() {
        let err = PixelGrid::from_pixels(2, 2, vec![Argb::BLACK; 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::LengthMismatch {
                width: 2,
                height: 2,
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_rgba_bytes_round_trip() {
        let bytes: Vec<u8> = (0..24).collect();
        let grid = PixelGrid::from_rgba_bytes(3, 2, &bytes).unwrap();
        assert_eq!(grid.get(0, 0), Argb::from_channels(0, 1, 2, 3));
        assert_eq!(grid.to_rgba_bytes(), bytes);
        assert_eq!(grid.to_rgb_bytes().len(), 18);
        assert!(PixelGrid::from_rgba_bytes(3, 2, &bytes[..23]).is_err());
    }

    #[test]
    fn test_crop_copies_region() {
        let grid = indexed_grid();
        let cropped = grid.crop(1, 1, 2, 2).unwrap();
        assert_eq!(cropped.dimensions(), (2, 2));
        let blues: Vec<u8> = cropped.pixels().iter().map(|p| p.blue()).collect();
        assert_eq!(blues, vec![5, 6, 9, 10]);
    }

    #[test]
    fn test_crop_full_and_empty() {
        let grid = indexed_grid();
        assert_eq!(grid.crop(0, 0, 4, 3).unwrap(), grid);
        assert_eq!(grid.crop(4, 3, 0, 0).unwrap().pixels().len(), 0);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let grid = indexed_grid();
        assert!(matches!(
            grid.crop(3, 0, 2, 1),
            Err(GridError::RegionOutOfBounds { .. })
        ));
        assert!(matches!(
            grid.crop(0, 2, 1, 2),
            Err(GridError::RegionOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_contains() {
        let base = PixelGrid::filled(10, 10, Argb::BLACK);
        assert!(base.contains(&PixelGrid::filled(10, 10, Argb::WHITE)));
        assert!(base.contains(&PixelGrid::filled(3, 10, Argb::WHITE)));
        assert!(!base.contains(&PixelGrid::filled(11, 1, Argb::WHITE)));
        assert!(!base.contains(&PixelGrid::filled(1, 11, Argb::WHITE)));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        indexed_grid().get(4, 0);
    }
}
