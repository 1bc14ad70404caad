//! edgewrap-filter: parallel Laplacian convolution engine (sans-IO).
//!
//! Applies a fixed 3×3 Laplacian edge-detection kernel to an RGB image
//! with toroidal (wrap-around) boundary handling:
//! partition rows into bands -> convolve per pixel -> join workers.
//!
//! This crate has **no I/O dependencies** — it operates on in-memory
//! `image::RgbImage` buffers. The PPM codec lives in `edgewrap-ppm`,
//! and file/terminal handling in the `edgewrap` binary.

pub mod convolve;
pub mod executor;
pub mod kernel;
pub mod partition;
pub mod types;

pub use partition::{MIN_WORKERS, RowBand, partition_rows};
pub use types::{FilterConfig, RgbImage};

/// Apply the Laplacian edge filter to `input`.
///
/// The work is split into `config.workers` contiguous row bands, each
/// filtered by its own thread; the call returns only after every worker
/// has finished, with a fully populated output.
///
/// # Guarantees
///
/// - Output dimensions equal input dimensions.
/// - Every output channel is in `[0, 255]` (clamped before storing).
/// - Deterministic: byte-identical output for a given input,
///   independent of the worker count.
/// - Boundary pixels wrap toroidally — a neighborhood extending past an
///   image edge borrows samples from the opposite side.
#[must_use = "returns the filtered image"]
pub fn filter(input: &RgbImage, config: &FilterConfig) -> RgbImage {
    executor::run(input, config)
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;

    #[test]
    fn all_black_input_stays_all_black() {
        let img = RgbImage::from_pixel(3, 3, Rgb([0, 0, 0]));
        let out = filter(&img, &FilterConfig::default());
        assert!(out.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn uniform_input_filters_to_black() {
        // Constant field + zero-sum kernel = zero everywhere.
        let img = RgbImage::from_pixel(16, 16, Rgb([99, 150, 201]));
        let out = filter(&img, &FilterConfig::default());
        assert!(out.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn sharp_boundary_produces_edge_response() {
        // Left half black, right half white: the filter should light
        // up along the boundary columns and stay black well inside the
        // uniform halves.
        let img = RgbImage::from_fn(20, 20, |x, _y| {
            if x < 10 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let out = filter(&img, &FilterConfig::default());

        let lit: u32 = out.pixels().map(|p| u32::from(p.0[0] > 0)).sum();
        assert!(lit > 0, "expected edge response at the boundary");
        // Interior of the uniform halves stays dark.
        assert_eq!(out.get_pixel(5, 10), &Rgb([0, 0, 0]));
        assert_eq!(out.get_pixel(15, 10), &Rgb([0, 0, 0]));
    }

    #[test]
    fn dimensions_preserved() {
        let img = RgbImage::new(23, 7);
        let out = filter(&img, &FilterConfig::default());
        assert_eq!((out.width(), out.height()), (23, 7));
    }
}
