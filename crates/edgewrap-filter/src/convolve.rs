//! Per-pixel Laplacian convolution with toroidal boundary wrap.
//!
//! The convolution engine is a pure, total function: for every pixel of
//! a W×H image (W, H ≥ 1) it places the 3×3 kernel over the pixel,
//! multiplies each covered sample by the matching weight, sums the
//! products per channel, and clamps the sums into the valid color
//! range. Neighbor coordinates that fall outside the image wrap around
//! to the opposite edge, as if the image tiled infinitely — edge and
//! corner pixels borrow samples from the far side.

use image::{Rgb, RgbImage};

use crate::kernel::LAPLACIAN;

/// Wrap a neighbor coordinate toroidally.
///
/// `coord` is the target pixel coordinate, `tap` the kernel tap index
/// (0..3, i.e. an offset of tap − 1 pixels), `extent` the image
/// dimension along that axis. Adding `extent` before the modulo keeps
/// the intermediate value non-negative for the −1 offset at coord 0.
#[allow(clippy::cast_possible_truncation)] // result is < extent, a u32
fn wrap(coord: u32, tap: usize, extent: u32) -> u32 {
    let shifted = u64::from(coord) + u64::from(extent) - 1 + tap as u64;
    (shifted % u64::from(extent)) as u32
}

/// Compute the filtered value of the pixel at `(x, y)`.
///
/// Each channel accumulates independently as a signed sum (free to go
/// negative or exceed 255 mid-flight) and is clamped to `[0, 255]`
/// before storing. Deterministic: same input, same output, always.
///
/// # Panics
///
/// Panics if `(x, y)` lies outside the image — callers are expected to
/// iterate only valid coordinates, so an out-of-range access is a
/// programming error, not a recoverable condition.
#[must_use = "returns the filtered pixel"]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=255
pub fn filtered_pixel(input: &RgbImage, x: u32, y: u32) -> Rgb<u8> {
    let (width, height) = input.dimensions();
    let mut sum = [0i32; 3];

    for (dy, row) in LAPLACIAN.iter().enumerate() {
        let sample_y = wrap(y, dy, height);
        for (dx, &weight) in row.iter().enumerate() {
            let sample_x = wrap(x, dx, width);
            let sample = input.get_pixel(sample_x, sample_y);
            for (acc, &channel) in sum.iter_mut().zip(sample.0.iter()) {
                *acc += i32::from(channel) * weight;
            }
        }
    }

    Rgb(sum.map(|channel| channel.clamp(0, 255) as u8))
}
