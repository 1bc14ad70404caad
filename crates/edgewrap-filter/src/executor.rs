//! Parallel executor: one scoped worker thread per row band.
//!
//! The output buffer is allocated in full up front, then split into
//! disjoint per-band row slices with `split_at_mut`, so each worker
//! holds exclusive access to exactly the bytes it will write while all
//! workers share the input read-only. No lock guards the filtering
//! loop — the disjointness of the bands is the correctness argument,
//! and the borrow checker enforces it. The thread scope is the join
//! barrier: [`run`] returns only once every worker has finished, so a
//! partially filtered image is never observable.

use image::RgbImage;

use crate::convolve;
use crate::partition::{RowBand, partition_rows};
use crate::types::FilterConfig;

/// Bytes per pixel in the RGB buffer.
const BYTES_PER_PIXEL: usize = 3;

/// Filter `input` into a freshly allocated image of the same size.
///
/// Spawns `config.workers` scoped threads, one per row band (bands with
/// zero rows spawn a worker that completes immediately). Every output
/// element is written exactly once by exactly one worker.
#[must_use = "returns the filtered image"]
pub fn run(input: &RgbImage, config: &FilterConfig) -> RgbImage {
    let (width, height) = input.dimensions();
    let bands = partition_rows(height, config.workers);

    let mut output = RgbImage::new(width, height);
    let row_stride = width as usize * BYTES_PER_PIXEL;

    std::thread::scope(|scope| {
        let mut rest: &mut [u8] = &mut output;
        for band in bands {
            let (rows, tail) = rest.split_at_mut(band.rows as usize * row_stride);
            rest = tail;
            scope.spawn(move || fill_band(input, band, rows, row_stride));
        }
    });

    output
}

/// Worker body: filter every pixel of `band` into its output slice.
///
/// `rows` holds exactly `band.rows` rows of `row_stride` bytes each,
/// starting at image row `band.start`.
#[allow(clippy::cast_possible_truncation)] // row/column indices are < the u32 image extents
fn fill_band(input: &RgbImage, band: RowBand, rows: &mut [u8], row_stride: usize) {
    for (offset, row) in rows.chunks_exact_mut(row_stride).enumerate() {
        let y = band.start + offset as u32;
        for (x, dst) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
            let pixel = convolve::filtered_pixel(input, x as u32, y);
            dst.copy_from_slice(&pixel.0);
        }
    }
}
