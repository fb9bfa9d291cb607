//! Asset loading with embedded fallbacks
//!
//! The palette and a sample config ship inside the binary. Lookup order for
//! the palette:
//!
//! - An explicitly configured path (CLI, `PALETTE_FILE` or config): that
//!   file only. A missing file is an error, never replaced by the embedded
//!   copy.
//! - Otherwise `palette.txt` in the base directory, if present.
//! - Otherwise the embedded crayon palette.

use pixel_transform::{Palette, PaletteError};
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const PALETTE_FILE_NAME: &str = "palette.txt";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Embedded default assets
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "*.txt"]
#[include = "*.yaml"]
struct EmbeddedAssets;

/// Asset category for selective operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetCategory {
    Palette,
    Config,
}

impl AssetCategory {
    fn file_name(self) -> &'static str {
        match self {
            AssetCategory::Palette => PALETTE_FILE_NAME,
            AssetCategory::Config => CONFIG_FILE_NAME,
        }
    }
}

/// Where a palette comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteLocation {
    /// A path that was asked for explicitly
    Configured(PathBuf),
    /// `palette.txt` found in the base directory
    WorkingDir(PathBuf),
    /// The copy compiled into the binary
    Embedded,
}

impl fmt::Display for PaletteLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteLocation::Configured(path) | PaletteLocation::WorkingDir(path) => {
                write!(f, "{}", path.display())
            }
            PaletteLocation::Embedded => f.write_str("embedded"),
        }
    }
}

/// Report of init (extraction) operations
#[derive(Debug, Default)]
pub struct InitReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Asset loader with optional filesystem overrides
#[derive(Debug, Clone)]
pub struct AssetLoader {
    /// Explicit palette path (from --palette, PALETTE_FILE or config)
    palette_file: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
    /// Directory searched for default files and used by `init`
    base_dir: PathBuf,
}

impl Default for AssetLoader {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl AssetLoader {
    /// Create a new asset loader rooted at the working directory.
    pub fn new(palette_file: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            palette_file,
            config_file,
            base_dir: PathBuf::from("."),
        }
    }

    /// Look for default files in `dir` instead of the working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    /// Replace the explicit palette path.
    pub fn with_palette_file(mut self, path: Option<PathBuf>) -> Self {
        self.palette_file = path;
        self
    }

    pub fn palette_file(&self) -> Option<&Path> {
        self.palette_file.as_deref()
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Decide where the palette will be read from, without reading it.
    pub fn palette_location(&self) -> PaletteLocation {
        if let Some(ref path) = self.palette_file {
            return PaletteLocation::Configured(path.clone());
        }
        let local = self.base_dir.join(PALETTE_FILE_NAME);
        if local.is_file() {
            PaletteLocation::WorkingDir(local)
        } else {
            PaletteLocation::Embedded
        }
    }

    /// Load and validate the palette.
    pub fn load_palette(&self) -> Result<Palette, PaletteError> {
        match self.palette_location() {
            PaletteLocation::Configured(path) | PaletteLocation::WorkingDir(path) => {
                tracing::debug!(path = %path.display(), "Loading palette from filesystem");
                Palette::load(path)
            }
            PaletteLocation::Embedded => {
                tracing::debug!("Loading palette from embedded assets");
                let text = Self::embedded_string(PALETTE_FILE_NAME).ok_or_else(|| {
                    PaletteError::NotFound {
                        path: PathBuf::from(PALETTE_FILE_NAME),
                    }
                })?;
                Palette::parse(&text)
            }
        }
    }

    /// Read the config file
    ///
    /// Uses `CONFIG_FILE` if set, else `config.yaml` in the base directory.
    /// Falls back to the embedded sample if neither exists.
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        let path = self.config_path();
        if path.is_file() {
            tracing::trace!(path = %path.display(), "Loading config from filesystem");
            return Ok(Cow::Owned(fs::read(&path)?));
        }

        EmbeddedAssets::get(CONFIG_FILE_NAME)
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// The config path that `read_config` checks first.
    pub fn config_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .unwrap_or_else(|| self.base_dir.join(CONFIG_FILE_NAME))
    }

    /// Extract embedded assets to filesystem (init command)
    ///
    /// The palette goes to `palette.txt` in the base directory, the config to
    /// the configured config path. Existing files are skipped unless `force`.
    pub fn init(&self, categories: &[AssetCategory], force: bool) -> io::Result<InitReport> {
        let mut report = InitReport::default();

        for &category in categories {
            let path = match category {
                AssetCategory::Palette => self.base_dir.join(PALETTE_FILE_NAME),
                AssetCategory::Config => self.config_path(),
            };

            if !force && path.exists() {
                report.skipped.push(path.display().to_string());
                continue;
            }
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if let Some(data) = EmbeddedAssets::get(category.file_name()) {
                fs::write(&path, &*data.data)?;
                tracing::debug!(path = %path.display(), "Extracted embedded asset");
                report.written.push(path.display().to_string());
            }
        }

        Ok(report)
    }

    /// List embedded assets by category (for display)
    pub fn list_embedded(category: AssetCategory) -> Vec<String> {
        EmbeddedAssets::iter()
            .filter(|name| *name == category.file_name())
            .map(|name| name.to_string())
            .collect()
    }

    fn embedded_string(name: &str) -> Option<String> {
        EmbeddedAssets::get(name).map(|f| String::from_utf8_lossy(&f.data).into_owned())
    }
}
