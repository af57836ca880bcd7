//! Pixel and channel types
//!
//! A [`Pixel`] is a plain RGB value, always materialized by copy from or to
//! buffer storage. [`Channel`] names the three component indices so that
//! per-channel loops iterate [`Channel::ALL`] instead of unrolling the same
//! logic three times with magic offsets.

/// Number of color channels in every pixmap (fixed 8-bit RGB layout).
pub const CHANNELS: usize = 3;

/// A single RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    /// Red component
    pub r: u8,
    /// Green component
    pub g: u8,
    /// Blue component
    pub b: u8,
}

impl Pixel {
    /// Black (0, 0, 0)
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    /// White (255, 255, 255)
    pub const WHITE: Pixel = Pixel {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a pixel from its three components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }

    /// Get one component by channel.
    #[inline]
    pub fn channel(self, ch: Channel) -> u8 {
        match ch {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
        }
    }
}

impl From<[u8; CHANNELS]> for Pixel {
    fn from(c: [u8; CHANNELS]) -> Self {
        Pixel::new(c[0], c[1], c[2])
    }
}

impl From<Pixel> for [u8; CHANNELS] {
    fn from(p: Pixel) -> Self {
        [p.r, p.g, p.b]
    }
}

/// Index of one color channel within a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Channel {
    /// Red, byte offset 0
    Red = 0,
    /// Green, byte offset 1
    Green = 1,
    /// Blue, byte offset 2
    Blue = 2,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; CHANNELS] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset of this channel within a pixel.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_index_matches_layout() {
        let p = Pixel::new(10, 20, 30);
        let bytes: [u8; CHANNELS] = p.into();
        for ch in Channel::ALL {
            assert_eq!(bytes[ch.index()], p.channel(ch));
        }
    }

    #[test]
    fn test_pixel_array_round_trip() {
        let p = Pixel::from([1, 2, 3]);
        assert_eq!(p, Pixel::new(1, 2, 3));
    }
}
