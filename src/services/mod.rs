pub mod image_io;
pub mod pipeline;

pub use pipeline::{PaletteSource, TransformPipeline};
