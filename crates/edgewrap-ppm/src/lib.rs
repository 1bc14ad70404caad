//! edgewrap-ppm: pure PPM (P6) codec (sans-IO).
//!
//! Decodes and encodes raw binary portable-pixmap bytes — a short text
//! header (magic number, width, height, max channel value) followed by
//! uncompressed row-major RGB triples. Only the P6 variant with a max
//! channel value of 255 is supported; anything else is a format error.
//!
//! Both directions operate on in-memory byte buffers and return
//! structured data; all file handling lives in the `edgewrap` binary.

mod decode;
mod encode;

pub use decode::decode;
pub use encode::encode;

/// Errors produced while decoding a PPM byte stream.
///
/// Every variant reflects unrecoverably malformed input: callers are
/// expected to report the error and abort the run — there is no
/// partial-result salvage.
#[derive(Debug, thiserror::Error)]
pub enum PpmError {
    /// The magic number was not the literal `P6`.
    #[error("not a P6 ppm file")]
    BadMagic,

    /// The header ended before all four fields were read, or the
    /// mandatory whitespace byte after the max value was missing.
    #[error("not enough information in header of ppm file")]
    TruncatedHeader,

    /// A width or height token was not a positive decimal integer.
    #[error("invalid image dimension: {0}")]
    BadDimension(String),

    /// The max color value token was not the literal `255`.
    #[error("rgb max value is not 255")]
    UnsupportedMaxValue,

    /// The pixel payload ended before `width * height` RGB triples.
    #[error("truncated pixel data: expected {expected} bytes, found {found}")]
    TruncatedPixelData {
        /// Payload length the header promised.
        expected: usize,
        /// Payload length actually present.
        found: usize,
    },

    /// `width * height * 3` does not fit in addressable memory.
    #[error("image dimensions overflow addressable memory")]
    ImageTooLarge,
}
