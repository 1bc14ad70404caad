//! The fixed Laplacian convolution kernel.
//!
//! A 3×3 Laplacian: center 8, all eight neighbors −1. The weights sum
//! to zero, so convolving a constant region yields zero in every
//! channel — only intensity discontinuities (edges) survive.

/// Kernel side length. The kernel is always square.
pub const KERNEL_SIZE: usize = 3;

/// The Laplacian edge-detection kernel, row-major (top-left to
/// bottom-right), indexed as `LAPLACIAN[dy][dx]`.
///
/// Symmetric under 180° rotation, so the tap iteration order inside the
/// convolution loop is not observable in the final sums.
pub const LAPLACIAN: [[i32; KERNEL_SIZE]; KERNEL_SIZE] = [
    [-1, -1, -1],
    [-1, 8, -1],
    [-1, -1, -1],
];

/// Sum of all kernel weights, evaluated at compile time.
const fn weight_sum() -> i32 {
    let mut sum = 0;
    let mut dy = 0;
    while dy < KERNEL_SIZE {
        let mut dx = 0;
        while dx < KERNEL_SIZE {
            sum += LAPLACIAN[dy][dx];
            dx += 1;
        }
        dy += 1;
    }
    sum
}

// A zero weight sum is what maps uniform regions to black.
const _: () = assert!(weight_sum() == 0);
