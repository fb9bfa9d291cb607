//! Packed 32-bit ARGB color and its channel codec
//!
//! Every pixel in a [`PixelGrid`](crate::grid::PixelGrid) is stored as a
//! single `u32` with four 8-bit channels at fixed bit offsets:
//!
//! ```text
//!  31      24 23      16 15       8 7        0
//! +----------+----------+----------+----------+
//! |  alpha   |   red    |  green   |   blue   |
//! +----------+----------+----------+----------+
//! ```

use thiserror::Error;

/// One of the four 8-bit channels of a packed color.
///
/// The discriminant is the channel's bit offset inside the packed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channel {
    /// Bits 16..=23
    Red = 16,
    /// Bits 8..=15
    Green = 8,
    /// Bits 0..=7
    Blue = 0,
    /// Bits 24..=31
    Alpha = 24,
}

impl Channel {
    /// All channels, in the order red, green, blue, alpha.
    pub const ALL: [Channel; 4] = [Channel::Red, Channel::Green, Channel::Blue, Channel::Alpha];

    /// Bit offset of this channel inside a packed color.
    #[inline]
    pub const fn offset(self) -> u32 {
        self as u32
    }
}

/// Returned when a raw bit offset does not name one of the four channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid channel offset {0} (expected 0, 8, 16 or 24)")]
pub struct InvalidChannel(pub u32);

impl TryFrom<u32> for Channel {
    type Error = InvalidChannel;

    fn try_from(offset: u32) -> Result<Self, Self::Error> {
        match offset {
            16 => Ok(Channel::Red),
            8 => Ok(Channel::Green),
            0 => Ok(Channel::Blue),
            24 => Ok(Channel::Alpha),
            other => Err(InvalidChannel(other)),
        }
    }
}

/// A packed 32-bit ARGB color.
///
/// # Example
///
/// ```
/// use pixel_transform::{Argb, Channel};
///
/// let orange = Argb::from_channels(255, 136, 51, 255);
/// assert_eq!(orange.0, 0xFFFF_8833);
/// assert_eq!(orange.channel(Channel::Green), 136);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Argb = Argb(0);

    /// Pack four channel values.
    ///
    /// This is the permissive encoder: values are shifted into place and
    /// OR-ed together without any range check. A value above 255 bleeds into
    /// the neighbouring channel. Use [`Argb::from_channels`] when the inputs
    /// are already bytes.
    ///
    /// ```
    /// use pixel_transform::Argb;
    ///
    /// // 256 in the blue slot sets the lowest green bit.
    /// assert_eq!(Argb::encode(0, 0, 256, 0), Argb::encode(0, 1, 0, 0));
    /// ```
    #[inline]
    pub const fn encode(red: u32, green: u32, blue: u32, alpha: u32) -> Self {
        Argb((alpha << 24) | (red << 16) | (green << 8) | blue)
    }

    /// Pack four byte channels. Always an exact inverse of [`Argb::channel`].
    #[inline]
    pub const fn from_channels(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::encode(red as u32, green as u32, blue as u32, alpha as u32)
    }

    /// Pack an RGB triple with the given alpha.
    #[inline]
    pub const fn from_rgb(rgb: [u8; 3], alpha: u8) -> Self {
        Self::from_channels(rgb[0], rgb[1], rgb[2], alpha)
    }

    /// Extract one channel.
    #[inline]
    pub const fn channel(self, channel: Channel) -> u8 {
        decode_channel(self.0, channel.offset())
    }

    #[inline]
    pub const fn red(self) -> u8 {
        self.channel(Channel::Red)
    }

    #[inline]
    pub const fn green(self) -> u8 {
        self.channel(Channel::Green)
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.channel(Channel::Blue)
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        self.channel(Channel::Alpha)
    }

    /// The color channels as `[R, G, B]`.
    #[inline]
    pub const fn rgb(self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()]
    }

    /// The channels in `[R, G, B, A]` byte order, as image buffers store them.
    #[inline]
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Inverse of [`Argb::to_rgba_bytes`].
    #[inline]
    pub const fn from_rgba_bytes(bytes: [u8; 4]) -> Self {
        Self::from_channels(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Same color with the alpha channel replaced.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// True if the alpha channel is exactly zero.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.alpha() == 0
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

/// Extract the byte at a raw bit offset.
///
/// `offset` must be one of the [`Channel`] offsets (0, 8, 16, 24). Any other
/// value is a caller bug; it trips a debug assertion and in release builds
/// returns whatever byte the shift lands on. Use `Channel::try_from` to
/// validate offsets coming from outside the program.
#[inline]
pub const fn decode_channel(color: u32, offset: u32) -> u8 {
    debug_assert!(offset == 0 || offset == 8 || offset == 16 || offset == 24);
    ((color >> offset) & 0xFF) as u8
}
