//! Transform pipeline: applies a list of operations to one image.

use crate::assets::AssetLoader;
use crate::error::{AppError, OverlayKind};
use crate::models::OutputConfig;
use crate::services::image_io;
use pixel_transform::{transform, Operation, Palette, PixelGrid};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Where `cartoonify` gets its palette
#[derive(Debug, Clone)]
pub enum PaletteSource {
    /// Load through the asset loader each time a cartoonify step runs
    Assets(AssetLoader),
    /// Use an already loaded palette
    Preloaded(Arc<Palette>),
}

impl PaletteSource {
    fn load(&self) -> Result<Arc<Palette>, AppError> {
        match self {
            PaletteSource::Assets(loader) => {
                let location = loader.palette_location();
                let palette = loader.load_palette()?;
                tracing::info!(source = %location, colors = palette.len(), "Loaded palette");
                Ok(Arc::new(palette))
            }
            PaletteSource::Preloaded(palette) => Ok(palette.clone()),
        }
    }
}

impl From<Palette> for PaletteSource {
    fn from(palette: Palette) -> Self {
        PaletteSource::Preloaded(Arc::new(palette))
    }
}

/// Applies operations in order to a grid
///
/// Overlay images are decoded when their step runs; the palette is loaded
/// only by cartoonify steps.
#[derive(Debug, Clone)]
pub struct TransformPipeline {
    palette: PaletteSource,
    frame: Option<PathBuf>,
    sticker: Option<PathBuf>,
}

impl TransformPipeline {
    pub fn new(palette: PaletteSource) -> Self {
        Self {
            palette,
            frame: None,
            sticker: None,
        }
    }

    /// Image used by `addframe`.
    pub fn with_frame(mut self, path: impl Into<PathBuf>) -> Self {
        self.frame = Some(path.into());
        self
    }

    /// Image used by `addsticker`.
    pub fn with_sticker(mut self, path: impl Into<PathBuf>) -> Self {
        self.sticker = Some(path.into());
        self
    }

    /// Check that every compositing step has its overlay configured.
    pub fn check(&self, operations: &[Operation]) -> Result<(), AppError> {
        for &operation in operations {
            if let Some(kind) = OverlayKind::for_operation(operation) {
                if self.overlay_path(kind).is_none() {
                    return Err(AppError::MissingOverlay { operation, kind });
                }
            }
        }
        Ok(())
    }

    /// Apply `operations` to `grid` in order.
    ///
    /// Stops at the first failing step. Steps before it stay applied; the
    /// failing step leaves the grid as it found it.
    pub fn run(&self, grid: &mut PixelGrid, operations: &[Operation]) -> Result<(), AppError> {
        self.check(operations)?;

        for &operation in operations {
            let start = Instant::now();
            self.apply(grid, operation)?;
            tracing::info!(
                operation = %operation,
                width = grid.width(),
                height = grid.height(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Applied operation"
            );
        }
        Ok(())
    }

    /// Apply a single operation.
    pub fn apply(&self, grid: &mut PixelGrid, operation: Operation) -> Result<(), AppError> {
        match operation {
            Operation::Grayscale => transform::grayscale(grid),
            Operation::Negative => transform::negative(grid),
            Operation::Cartoonify => {
                let palette = self.palette.load()?;
                transform::cartoonify(grid, &palette);
            }
            Operation::AddFrame => {
                let frame = self.decode_overlay(operation, OverlayKind::Frame)?;
                transform::add_frame(grid, &frame)
                    .map_err(|e| AppError::overlay_too_large(OverlayKind::Frame, e))?;
            }
            Operation::AddSticker => {
                let sticker = self.decode_overlay(operation, OverlayKind::Sticker)?;
                transform::add_sticker(grid, &sticker)
                    .map_err(|e| AppError::overlay_too_large(OverlayKind::Sticker, e))?;
            }
        }
        Ok(())
    }

    /// Decode `input`, run the operations, encode to `output`.
    ///
    /// Operations and overlays are checked before `input` is read. Nothing
    /// is written if any step fails.
    pub fn process_file(
        &self,
        input: &Path,
        output: &Path,
        operations: &[Operation],
        options: &OutputConfig,
    ) -> Result<PixelGrid, AppError> {
        self.check(operations)?;

        let mut grid = image_io::decode(input)?;
        tracing::info!(
            path = %input.display(),
            width = grid.width(),
            height = grid.height(),
            "Loaded input image"
        );

        self.run(&mut grid, operations)?;
        image_io::encode(&grid, output, options)?;
        tracing::info!(path = %output.display(), "Wrote output image");

        Ok(grid)
    }

    fn overlay_path(&self, kind: OverlayKind) -> Option<&Path> {
        match kind {
            OverlayKind::Frame => self.frame.as_deref(),
            OverlayKind::Sticker => self.sticker.as_deref(),
        }
    }

    fn decode_overlay(
        &self,
        operation: Operation,
        kind: OverlayKind,
    ) -> Result<PixelGrid, AppError> {
        let path = self
            .overlay_path(kind)
            .ok_or(AppError::MissingOverlay { operation, kind })?;
        image_io::decode(path)
    }
}
