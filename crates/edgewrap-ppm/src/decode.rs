//! PPM (P6) header parsing and pixel payload extraction.
//!
//! The header grammar is whitespace- and comment-tolerant: any run of
//! ASCII whitespace separates tokens, and `#` starts a comment that
//! extends to the end of the line. The four header fields — magic,
//! width, height, max value — are followed by exactly one whitespace
//! byte, then the raw pixel payload begins (its first byte may itself
//! look like whitespace and must not be skipped).
//!
//! Tokens accumulate into growable slices; there is no fixed-capacity
//! field buffer to overflow.

use image::RgbImage;

use crate::PpmError;

/// Bytes per RGB pixel in the payload.
const BYTES_PER_PIXEL: usize = 3;

/// Decode a P6 PPM byte stream into an [`RgbImage`].
///
/// Bytes beyond the `width * height` RGB triples are ignored.
///
/// # Errors
///
/// - [`PpmError::BadMagic`] if the first token is not `P6`.
/// - [`PpmError::TruncatedHeader`] if the header ends early.
/// - [`PpmError::BadDimension`] if width or height is not a positive
///   decimal integer.
/// - [`PpmError::UnsupportedMaxValue`] if the max value token is not
///   the literal `255`.
/// - [`PpmError::TruncatedPixelData`] if fewer pixel bytes follow the
///   header than the dimensions require.
/// - [`PpmError::ImageTooLarge`] if the payload size overflows `usize`.
pub fn decode(bytes: &[u8]) -> Result<RgbImage, PpmError> {
    let mut header = HeaderReader::new(bytes);

    if header.next_token()? != b"P6" {
        return Err(PpmError::BadMagic);
    }
    let width = header.dimension()?;
    let height = header.dimension()?;
    if header.next_token()? != b"255" {
        return Err(PpmError::UnsupportedMaxValue);
    }
    let payload = header.into_payload()?;

    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
        .ok_or(PpmError::ImageTooLarge)?;
    if payload.len() < expected {
        return Err(PpmError::TruncatedPixelData {
            expected,
            found: payload.len(),
        });
    }

    RgbImage::from_raw(width, height, payload[..expected].to_vec())
        .ok_or(PpmError::ImageTooLarge)
}

/// Incremental tokenizer over the header portion of the byte stream.
struct HeaderReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderReader<'a> {
    const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Advance past whitespace runs and `#` comments.
    fn skip_separators(&mut self) {
        while let Some(&byte) = self.bytes.get(self.pos) {
            if byte.is_ascii_whitespace() {
                self.pos += 1;
            } else if byte == b'#' {
                while let Some(&comment_byte) = self.bytes.get(self.pos) {
                    self.pos += 1;
                    if comment_byte == b'\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Next header token: a maximal run of bytes up to the next
    /// whitespace or comment marker.
    fn next_token(&mut self) -> Result<&'a [u8], PpmError> {
        self.skip_separators();
        let start = self.pos;
        while let Some(&byte) = self.bytes.get(self.pos) {
            if byte.is_ascii_whitespace() || byte == b'#' {
                break;
            }
            self.pos += 1;
        }
        if self.pos == start {
            return Err(PpmError::TruncatedHeader);
        }
        Ok(&self.bytes[start..self.pos])
    }

    /// Parse the next token as a positive image dimension.
    fn dimension(&mut self) -> Result<u32, PpmError> {
        let token = self.next_token()?;
        let value = std::str::from_utf8(token)
            .ok()
            .and_then(|text| text.parse::<u32>().ok())
            .ok_or_else(|| PpmError::BadDimension(String::from_utf8_lossy(token).into_owned()))?;
        if value == 0 {
            return Err(PpmError::BadDimension(value.to_string()));
        }
        Ok(value)
    }

    /// Consume the single mandatory whitespace byte after the max-value
    /// token and return everything that follows as the pixel payload.
    fn into_payload(self) -> Result<&'a [u8], PpmError> {
        match self.bytes.get(self.pos) {
            Some(byte) if byte.is_ascii_whitespace() => Ok(&self.bytes[self.pos + 1..]),
            _ => Err(PpmError::TruncatedHeader),
        }
    }
}
