//! Channel operators: swirl, range extraction, single-channel extraction

use pixmap_core::{CHANNELS, Channel, Pixel, Pixmap};

/// Cyclically permute the channels of every pixel: the output red takes the
/// source green, green takes blue, and blue takes red.
pub fn swirl(src: &Pixmap) -> Pixmap {
    let mut out = Pixmap::new(src.width(), src.height());
    for (o, px) in out
        .data_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(src.data().chunks_exact(CHANNELS))
    {
        o[0] = px[1];
        o[1] = px[2];
        o[2] = px[0];
    }
    out
}

/// Keep only pixels whose every channel lies within `[low, high]`
/// (per-channel, inclusive); all other pixels become black.
pub fn extract(src: &Pixmap, low: Pixel, high: Pixel) -> Pixmap {
    let mut out = Pixmap::new(src.width(), src.height());
    for (o, px) in out
        .data_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(src.data().chunks_exact(CHANNELS))
    {
        let inside = Channel::ALL.iter().all(|&ch| {
            let v = px[ch.index()];
            v >= low.channel(ch) && v <= high.channel(ch)
        });
        if inside {
            o.copy_from_slice(px);
        }
    }
    out
}

/// Keep one channel, zeroing the other two.
pub fn extract_channel(src: &Pixmap, ch: Channel) -> Pixmap {
    let mut out = Pixmap::new(src.width(), src.height());
    let keep = ch.index();
    for (o, px) in out
        .data_mut()
        .chunks_exact_mut(CHANNELS)
        .zip(src.data().chunks_exact(CHANNELS))
    {
        o[keep] = px[keep];
    }
    out
}

/// Keep the red channel, zeroing green and blue.
pub fn extract_red(src: &Pixmap) -> Pixmap {
    extract_channel(src, Channel::Red)
}

/// Keep the green channel, zeroing red and blue.
pub fn extract_green(src: &Pixmap) -> Pixmap {
    extract_channel(src, Channel::Green)
}

/// Keep the blue channel, zeroing red and green.
pub fn extract_blue(src: &Pixmap) -> Pixmap {
    extract_channel(src, Channel::Blue)
}
