//! Row partitioning for the parallel executor.
//!
//! Splits the image's rows into one contiguous band per worker. The
//! bands are ordered, non-overlapping, and cover exactly `[0, height)`
//! — that disjointness is what lets the executor hand each worker an
//! exclusive slice of the output buffer and run with no locking.

/// Minimum worker count. Zero workers would leave rows unassigned.
pub const MIN_WORKERS: u32 = 1;
const _: () = assert!(MIN_WORKERS >= 1);

/// A contiguous half-open range of image rows assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBand {
    /// First row of the band.
    pub start: u32,
    /// Number of rows in the band. Zero when the image has fewer rows
    /// than there are workers; such bands are no-ops.
    pub rows: u32,
}

impl RowBand {
    /// One past the last row of the band.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.start + self.rows
    }
}

/// Split `height` image rows into exactly `workers` contiguous bands.
///
/// When `height` divides evenly, every band gets `height / workers`
/// rows. Otherwise the first `workers − 1` bands each get
/// `(height − height % (workers − 1)) / (workers − 1)` rows and the
/// last band gets the remainder — a deliberately front-loaded split,
/// kept for parity with the historical behavior rather than replaced
/// by a balanced ceiling division.
///
/// A `workers` value below [`MIN_WORKERS`] is clamped up to it.
#[must_use]
pub fn partition_rows(height: u32, workers: u32) -> Vec<RowBand> {
    let workers = workers.max(MIN_WORKERS);
    if workers == 1 {
        return vec![RowBand {
            start: 0,
            rows: height,
        }];
    }

    let (size, last) = if height % workers == 0 {
        (height / workers, height / workers)
    } else {
        let remainder = height % (workers - 1);
        ((height - remainder) / (workers - 1), remainder)
    };

    let mut bands = Vec::new();
    for index in 0..workers - 1 {
        bands.push(RowBand {
            start: size * index,
            rows: size,
        });
    }
    bands.push(RowBand {
        start: size * (workers - 1),
        rows: last,
    });

    debug_assert_eq!(bands.iter().map(|band| band.rows).sum::<u32>(), height);
    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Coverage invariant: `workers` ordered bands, contiguous, no
    /// overlaps, union exactly `[0, height)`.
    fn assert_covers(height: u32, workers: u32, bands: &[RowBand]) {
        assert_eq!(bands.len(), workers as usize);
        let mut expected_start = 0;
        for band in bands {
            assert_eq!(
                band.start, expected_start,
                "gap or overlap before row {expected_start} (h={height}, n={workers})",
            );
            expected_start = band.end();
        }
        assert_eq!(expected_start, height, "rows not fully covered");
    }

    #[test]
    fn even_split() {
        let bands = partition_rows(10, 5);
        assert!(bands.iter().all(|band| band.rows == 2));
        assert_covers(10, 5, &bands);
    }

    #[test]
    fn uneven_split_front_loads_full_bands() {
        // 11 rows over 5 workers: remainder = 11 % 4 = 3, size = 2.
        let bands = partition_rows(11, 5);
        assert_eq!(
            bands,
            [
                RowBand { start: 0, rows: 2 },
                RowBand { start: 2, rows: 2 },
                RowBand { start: 4, rows: 2 },
                RowBand { start: 6, rows: 2 },
                RowBand { start: 8, rows: 3 },
            ],
        );
    }

    #[test]
    fn single_worker_takes_everything() {
        let bands = partition_rows(37, 1);
        assert_eq!(bands, [RowBand { start: 0, rows: 37 }]);
    }

    #[test]
    fn fewer_rows_than_workers_yields_empty_bands() {
        // 3 rows over 5 workers: remainder = 3 % 4 = 3, size = 0, so
        // the first four bands are empty no-ops and the last holds all
        // three rows.
        let bands = partition_rows(3, 5);
        assert_eq!(bands.iter().filter(|band| band.rows == 0).count(), 4);
        assert_eq!(bands[4], RowBand { start: 0, rows: 3 });
        assert_covers(3, 5, &bands);
    }

    #[test]
    fn zero_workers_clamps_to_minimum() {
        let bands = partition_rows(8, 0);
        assert_eq!(bands, partition_rows(8, MIN_WORKERS));
    }

    #[test]
    fn coverage_holds_for_all_small_shapes() {
        for height in 1..=64 {
            for workers in 1..=9 {
                let bands = partition_rows(height, workers);
                assert_covers(height, workers, &bands);
            }
        }
    }

    #[test]
    fn single_row_image() {
        let bands = partition_rows(1, 5);
        assert_covers(1, 5, &bands);
        assert_eq!(bands.iter().map(|band| band.rows).sum::<u32>(), 1);
    }
}
