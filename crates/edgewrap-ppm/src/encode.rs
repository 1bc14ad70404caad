//! PPM (P6) serialization.

use image::RgbImage;

/// Encode an [`RgbImage`] as P6 PPM bytes.
///
/// The header is the literal `P6 <width> <height> 255\n` — fields
/// space-separated, one trailing newline — followed by the raw
/// row-major RGB triples with no padding. Existing PPM viewers depend
/// on this exact byte layout, so the header is never reformatted.
#[must_use = "returns the encoded ppm bytes"]
pub fn encode(image: &RgbImage) -> Vec<u8> {
    let header = format!("P6 {} {} 255\n", image.width(), image.height());
    let mut out = Vec::with_capacity(header.len() + image.as_raw().len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(image.as_raw());
    out
}
