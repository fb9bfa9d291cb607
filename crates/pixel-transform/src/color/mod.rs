//! Packed colors and the color math built on them
//!
//! - [`Argb`]: a packed 32-bit pixel with [`Channel`] accessors
//! - [`Hsv`]: hue/saturation/value derived from a packed color
//! - [`ConePoint`] and [`color_distance`]: the perceptual metric used for
//!   palette matching
//!
//! # Example
//!
//! ```
//! use pixel_transform::{Argb, Hsv};
//!
//! let teal = Argb::from_channels(0, 128, 128, 255);
//! let hsv = Hsv::from(teal);
//! assert_eq!(hsv.s, 1.0);
//! ```

mod argb;
mod cone;
mod hsv;

pub use argb::{decode_channel, Argb, Channel, InvalidChannel};
pub use cone::{color_distance, ConePoint, JUST_NOTICEABLE_DISTANCE};
pub use hsv::Hsv;
