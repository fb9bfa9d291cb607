//! Palette struct with precomputed cone points and nearest-color matching.
//!
//! A palette is an ordered list of packed colors. Order matters: when two
//! entries are equally close to a pixel, the one with the lower index wins.

use std::fs;
use std::io;
use std::path::Path;

use super::error::{PaletteError, ParseColorError};
use crate::color::{Argb, ConePoint};

/// Number of entries in the crayon palette resource.
pub const CRAYON_PALETTE_SIZE: usize = 120;

/// An immutable, ordered color palette.
///
/// Every entry has its alpha channel forced to 0; alpha never takes part in
/// matching. The cone projection of each entry is computed once at
/// construction, so [`find_nearest()`](Palette::find_nearest) only projects
/// the query pixel.
///
/// `Palette` is `Send + Sync` and is meant to be shared read-only across
/// clustering workers.
///
/// # Example
///
/// ```
/// use pixel_transform::{Argb, Palette};
///
/// let palette = Palette::new(&[Argb::BLACK, Argb::WHITE]).unwrap();
/// assert_eq!(palette.len(), 2);
///
/// // Alpha is dropped on the way in.
/// assert_eq!(palette.color(1), Argb::from_channels(255, 255, 255, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Argb>,
    points: Vec<ConePoint>,
}

impl Palette {
    /// Create a palette from colors in index order.
    ///
    /// Duplicate entries are allowed; the first occurrence always wins
    /// the nearest-color search.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty.
    pub fn new(colors: &[Argb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }

        let colors: Vec<Argb> = colors.iter().map(|c| c.with_alpha(0)).collect();
        let points = colors.iter().map(|&c| ConePoint::from(c)).collect();

        Ok(Self { colors, points })
    }

    /// Parse a crayon palette: [`CRAYON_PALETTE_SIZE`] lines of `R,G,B`.
    ///
    /// # Errors
    ///
    /// See [`Palette::parse_sized`].
    pub fn parse(text: &str) -> Result<Self, PaletteError> {
        Self::parse_sized(text, CRAYON_PALETTE_SIZE)
    }

    /// Parse exactly `expected` entries, one `R,G,B` per line.
    ///
    /// Lines after the first `expected` are ignored. Whitespace around each
    /// component is trimmed; `\r\n` line endings are accepted.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::TooFewEntries`] if the text has fewer lines
    /// - [`PaletteError::InvalidEntry`] for the first malformed line
    /// - [`PaletteError::Empty`] if `expected` is 0
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_transform::{Argb, Palette};
    ///
    /// let palette = Palette::parse_sized("237,10,63\n0,102,204\n", 2).unwrap();
    /// assert_eq!(palette.color(0), Argb::from_channels(237, 10, 63, 0));
    /// ```
    pub fn parse_sized(text: &str, expected: usize) -> Result<Self, PaletteError> {
        let mut colors = Vec::with_capacity(expected);

        for (i, line) in text.lines().take(expected).enumerate() {
            let color = Self::parse_entry(line)
                .map_err(|source| PaletteError::InvalidEntry { line: i + 1, source })?;
            colors.push(color);
        }

        if colors.len() < expected {
            return Err(PaletteError::TooFewEntries {
                expected,
                found: colors.len(),
            });
        }

        Self::new(&colors)
    }

    /// Parse one `R,G,B` entry into a packed color with alpha 0.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_transform::{Argb, Palette};
    ///
    /// assert_eq!(
    ///     Palette::parse_entry("255, 136, 51").unwrap(),
    ///     Argb::from_channels(255, 136, 51, 0)
    /// );
    /// assert!(Palette::parse_entry("255,136").is_err());
    /// assert!(Palette::parse_entry("256,0,0").is_err());
    /// ```
    pub fn parse_entry(line: &str) -> Result<Argb, ParseColorError> {
        const NAMES: [&str; 3] = ["red", "green", "blue"];

        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 3 {
            return Err(ParseColorError::ComponentCount {
                found: fields.len(),
            });
        }

        let mut rgb = [0u8; 3];
        for (slot, (field, component)) in rgb.iter_mut().zip(fields.iter().zip(NAMES)) {
            let text = field.trim();
            *slot = text
                .parse::<u8>()
                .map_err(|source| ParseColorError::InvalidComponent {
                    component,
                    text: text.to_string(),
                    source,
                })?;
        }

        Ok(Argb::from_rgb(rgb, 0))
    }

    /// Load a crayon palette file.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::NotFound`] if `path` does not exist
    /// - [`PaletteError::Io`] for any other read failure
    /// - the parse errors of [`Palette::parse`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PaletteError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PaletteError::NotFound {
                path: path.to_path_buf(),
            },
            _ => PaletteError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        Self::parse(&text)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Argb {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    /// Find the palette entry perceptually closest to `color`.
    ///
    /// Scans in index order and only moves to a later entry when it is
    /// strictly closer, so ties resolve to the lowest index.
    ///
    /// Returns `(index, distance)`.
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_transform::{Argb, Palette};
    ///
    /// let palette = Palette::new(&[Argb::BLACK, Argb::WHITE]).unwrap();
    /// let (idx, _) = palette.find_nearest(Argb::from_channels(40, 40, 40, 255));
    /// assert_eq!(idx, 0);
    /// ```
    #[inline]
    pub fn find_nearest(&self, color: Argb) -> (usize, f64) {
        let pixel = ConePoint::from(color);

        let mut best_idx = 0;
        let mut best_dist = pixel.distance(self.points[0]);

        for (i, &point) in self.points.iter().enumerate().skip(1) {
            let dist = pixel.distance(point);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// The palette color closest to `color`.
    #[inline]
    pub fn nearest_color(&self, color: Argb) -> Argb {
        self.colors[self.find_nearest(color).0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::color_distance;
    use std::io::Write;

    fn crayon_text(lines: usize) -> String {
        (0..lines)
            .map(|i| format!("{},{},{}\n", i * 2, 255 - i * 2, (i * 7) % 256))
            .collect()
    }

    #[test]
    fn test_palette_basic_construction() {
        let palette = Palette::new(&[
            Argb::BLACK,
            Argb::WHITE,
            Argb::from_channels(255, 0, 0, 255),
        ])
        .unwrap();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert!(palette.colors().iter().all(|c| c.alpha() == 0));
    }

    #[test]
    fn test_palette_empty_error() {
        assert!(matches!(Palette::new(&[]), Err(PaletteError::Empty)));
        assert!(matches!(
            Palette::parse_sized("1,2,3\n", 0),
            Err(PaletteError::Empty)
        ));
    }

    #[test]
    fn test_parse_preserves_line_order() {
        let text = crayon_text(CRAYON_PALETTE_SIZE);
        let palette = Palette::parse(&text).unwrap();

        assert_eq!(palette.len(), CRAYON_PALETTE_SIZE);
        for i in 0..CRAYON_PALETTE_SIZE {
            let expected =
                Argb::encode((i * 2) as u32, (255 - i * 2) as u32, ((i * 7) % 256) as u32, 0);
            assert_eq!(palette.color(i), expected, "entry {i}");
        }
    }

    #[test]
    fn test_parse_too_few_lines() {
        let text = crayon_text(CRAYON_PALETTE_SIZE - 1);
        match Palette::parse(&text) {
            Err(PaletteError::TooFewEntries { expected, found }) => {
                assert_eq!(expected, 120);
                assert_eq!(found, 119);
            }
            other => panic!("expected TooFewEntries, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_ignores_extra_lines() {
        let mut text = crayon_text(CRAYON_PALETTE_SIZE);
        text.push_str("not,a,color\n");
        assert_eq!(Palette::parse(&text).unwrap().len(), CRAYON_PALETTE_SIZE);
    }

    #[test]
    fn test_parse_reports_bad_line_number() {
        let text = "0,0,0\n1,2\n3,4,5\n";
        match Palette::parse_sized(text, 3) {
            Err(PaletteError::InvalidEntry { line, source }) => {
                assert_eq!(line, 2);
                assert_eq!(source, ParseColorError::ComponentCount { found: 2 });
            }
            other => panic!("expected InvalidEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_blank_line_is_invalid() {
        let result = Palette::parse_sized("0,0,0\n\n1,1,1\n", 3);
        assert!(matches!(
            result,
            Err(PaletteError::InvalidEntry { line: 2, .. })
        ));
    }

    #[test]
    fn test_parse_entry_rejects_out_of_range_and_text() {
        assert!(matches!(
            Palette::parse_entry("12,300,0"),
            Err(ParseColorError::InvalidComponent {
                component: "green",
                ..
            })
        ));
        assert!(matches!(
            Palette::parse_entry("red,0,0"),
            Err(ParseColorError::InvalidComponent {
                component: "red",
                ..
            })
        ));
        assert!(matches!(
            Palette::parse_entry("-1,0,0"),
            Err(ParseColorError::InvalidComponent { .. })
        ));
        assert!(matches!(
            Palette::parse_entry("1,2,3,4"),
            Err(ParseColorError::ComponentCount { found: 4 })
        ));
    }

    #[test]
    fn test_parse_accepts_crlf_and_spaces() {
        let palette = Palette::parse_sized("1, 2 ,3\r\n4,5,6\r\n", 2).unwrap();
        assert_eq!(palette.color(0), Argb::from_channels(1, 2, 3, 0));
        assert_eq!(palette.color(1), Argb::from_channels(4, 5, 6, 0));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Palette::load(dir.path().join("palette.txt")).unwrap_err();
        assert!(err.is_not_found(), "got {err:?}");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(crayon_text(CRAYON_PALETTE_SIZE).as_bytes())
            .unwrap();

        let palette = Palette::load(&path).unwrap();
        assert_eq!(palette.color(3), Argb::from_channels(6, 249, 21, 0));
    }

    #[test]
    fn test_load_short_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palette.txt");
        std::fs::write(&path, crayon_text(CRAYON_PALETTE_SIZE - 1)).unwrap();

        let err = Palette::load(&path).unwrap_err();
        assert!(err.is_parse_error(), "got {err:?}");
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = Palette::new(&[
            Argb::from_channels(0, 0, 255, 0),
            Argb::from_channels(0, 255, 0, 0),
        ])
        .unwrap();
        let (idx, dist) = palette.find_nearest(Argb::from_channels(0, 255, 0, 255));
        assert_eq!(idx, 1);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_find_nearest_matches_color_distance() {
        let palette = Palette::parse(&crayon_text(CRAYON_PALETTE_SIZE)).unwrap();
        let pixel = Argb::from_channels(90, 30, 200, 255);

        let (idx, dist) = palette.find_nearest(pixel);
        assert_eq!(dist, color_distance(pixel, palette.color(idx)));
        for &entry in palette.colors() {
            assert!(color_distance(pixel, entry) >= dist);
        }
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        // Both are red-dominant with full saturation and value, so the hue
        // collapses to zero and they project onto the same cone point.
        let orange = Argb::from_channels(255, 100, 0, 0);
        let pink = Argb::from_channels(255, 0, 100, 0);
        let grey = Argb::from_channels(100, 100, 100, 255);
        assert_eq!(color_distance(grey, orange), color_distance(grey, pink));

        let forward = Palette::new(&[orange, pink]).unwrap();
        let reversed = Palette::new(&[pink, orange]).unwrap();
        assert_eq!(forward.find_nearest(grey).0, 0);
        assert_eq!(forward.nearest_color(grey), orange);
        assert_eq!(reversed.find_nearest(grey).0, 0);
        assert_eq!(reversed.nearest_color(grey), pink);
    }

    #[test]
    fn test_duplicate_entries_first_wins() {
        let palette = Palette::new(&[Argb::BLACK, Argb::WHITE, Argb::WHITE]).unwrap();
        assert_eq!(palette.find_nearest(Argb::WHITE).0, 1);
    }
}
