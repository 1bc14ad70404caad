//! Shared configuration types for the edgewrap filter.

use serde::{Deserialize, Serialize};

/// Re-export `RgbImage` so downstream crates can reference the pixel
/// buffer type without depending on `image` directly.
pub use image::RgbImage;

/// Configuration for the parallel Laplacian filter.
///
/// Fields are public; out-of-range values are clamped at the point of
/// use rather than rejected at construction (see
/// [`partition::MIN_WORKERS`](crate::partition::MIN_WORKERS)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Number of worker threads the executor spawns. The image's rows
    /// are split into this many contiguous bands, one per worker.
    ///
    /// Values below [`MIN_WORKERS`](crate::partition::MIN_WORKERS) are
    /// clamped up. Raising the count past the row count is harmless —
    /// surplus workers receive empty bands and finish immediately.
    pub workers: u32,
}

impl FilterConfig {
    /// Default worker count, matching the historical fixed pool of 5.
    pub const DEFAULT_WORKERS: u32 = 5;
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            workers: Self::DEFAULT_WORKERS,
        }
    }
}
