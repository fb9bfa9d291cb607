use crate::assets::AssetLoader;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Palette file for cartoonify (relative to the working directory)
    #[serde(default)]
    pub palette: Option<PathBuf>,

    /// Encoder settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// How result images are written
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Keep alpha for formats that support it. JPEG ignores this.
    #[serde(default)]
    pub preserve_alpha: bool,

    /// JPEG quality, 1-100
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
}

fn default_jpeg_quality() -> u8 {
    90
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            preserve_alpha: false,
            jpeg_quality: default_jpeg_quality(),
        }
    }
}

impl AppConfig {
    /// Parse a YAML document. An empty or comment-only document gives the
    /// defaults.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        let blank = content
            .lines()
            .map(str::trim)
            .all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        palette = ?config.palette,
                        preserve_alpha = config.output.preserve_alpha,
                        jpeg_quality = config.output.jpeg_quality,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Pick the palette path: CLI flag, then `PALETTE_FILE`, then config.
    ///
    /// `None` means "use the default lookup".
    pub fn resolve_palette(&self, cli: Option<&Path>, env: Option<&Path>) -> Option<PathBuf> {
        cli.or(env)
            .map(Path::to_path_buf)
            .or_else(|| self.palette.clone())
    }
}
