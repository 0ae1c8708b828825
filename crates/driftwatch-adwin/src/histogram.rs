//! Exponential histogram of bucket rows.
//!
//! Rows live in a `VecDeque`: front is row 0 (unit buckets, newest data),
//! back is the highest row (most aggregated, oldest data). Inside a row the
//! buckets are ordered oldest first, so indices 0 and 1 are the merge pair.
//! Every bucket in row `i` summarizes `2^i` original observations.

use std::collections::VecDeque;

/// Aggregate of `2^row` consecutive observations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bucket {
    /// Arithmetic total of the constituent values (not their mean).
    pub sum: f64,
    /// Sum of squared deviations from the bucket mean.
    pub variance: f64,
}

#[derive(Debug, Clone, Default)]
struct BucketRow {
    buckets: VecDeque<Bucket>,
}

/// Number of original observations held by one bucket of `row`.
#[inline]
pub fn bucket_size(row: usize) -> u64 {
    1u64 << row
}

/// Bounded-memory summary of the ADWIN window.
#[derive(Debug, Clone)]
pub struct ExponentialHistogram {
    rows: VecDeque<BucketRow>,
    max_buckets: usize,
    bucket_count: usize,
}

impl ExponentialHistogram {
    /// Create an empty histogram holding up to `max_buckets` buckets per row.
    /// A zero `max_buckets` is bumped to 1.
    pub fn new(max_buckets: usize) -> Self {
        let mut rows = VecDeque::new();
        rows.push_back(BucketRow::default());
        Self {
            rows,
            max_buckets: max_buckets.max(1),
            bucket_count: 0,
        }
    }

    pub fn max_buckets(&self) -> usize {
        self.max_buckets
    }

    /// Total buckets stored across all rows.
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Buckets currently held by `row`, zero if the row does not exist.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |r| r.buckets.len())
    }

    pub fn is_empty(&self) -> bool {
        self.bucket_count == 0
    }

    /// Original observations represented: `Σ 2^row` over every bucket.
    pub fn total_observations(&self) -> u64 {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, r)| bucket_size(row) * r.buckets.len() as u64)
            .sum()
    }

    /// Insert a new unit bucket at row 0.
    pub fn push_front(&mut self, value: f64, variance: f64) {
        if self.rows.is_empty() {
            self.rows.push_back(BucketRow::default());
        }
        self.rows[0].buckets.push_back(Bucket {
            sum: value,
            variance,
        });
        self.bucket_count += 1;
    }

    /// Merge the two oldest buckets of the first overflowing row into one
    /// bucket of the next row. Returns the repaired row, if any.
    ///
    /// A single insert overflows at most one row, so one merge per call
    /// keeps every row at `max_buckets + 1` buckets or fewer.
    pub fn compress(&mut self) -> Option<usize> {
        let row = self
            .rows
            .iter()
            .position(|r| r.buckets.len() > self.max_buckets && r.buckets.len() >= 2)?;

        let buckets = &mut self.rows[row].buckets;
        let (first, second) = match (buckets.pop_front(), buckets.pop_front()) {
            (Some(first), Some(second)) => (first, second),
            _ => return None,
        };

        let n = bucket_size(row) as f64;
        let mean_diff = first.sum / n - second.sum / n;
        // Between-bucket term n1*n2*(u1-u2)^2/(n1+n2) with n1 == n2 == n.
        let between = n * n * mean_diff * mean_diff / (n + n);
        let merged = Bucket {
            sum: first.sum + second.sum,
            variance: first.variance + second.variance + between,
        };

        if row + 1 == self.rows.len() {
            self.rows.push_back(BucketRow::default());
        }
        self.rows[row + 1].buckets.push_back(merged);
        self.bucket_count -= 1;
        Some(row)
    }

    /// Index of the oldest row still holding buckets.
    pub fn tail_row(&self) -> Option<usize> {
        self.rows.iter().rposition(|r| !r.buckets.is_empty())
    }

    /// Oldest bucket of the whole histogram.
    pub fn tail_bucket(&self) -> Option<&Bucket> {
        let row = self.tail_row()?;
        self.rows[row].buckets.front()
    }

    /// Remove and return the oldest bucket together with its row index.
    pub fn pop_tail(&mut self) -> Option<(usize, Bucket)> {
        let row = self.tail_row()?;
        let bucket = *self.rows[row].buckets.front()?;
        self.drop_from_tail(1);
        Some((row, bucket))
    }

    /// Remove up to `n` of the oldest buckets of the tail row, returning how
    /// many were removed. An emptied tail row is dropped from the histogram.
    pub fn drop_from_tail(&mut self, n: usize) -> usize {
        let Some(row) = self.tail_row() else {
            return 0;
        };
        let buckets = &mut self.rows[row].buckets;
        let removed = n.min(buckets.len());
        buckets.drain(..removed);
        self.bucket_count -= removed;
        self.trim_empty_tail();
        removed
    }

    /// Buckets from oldest to newest, each paired with its row index.
    pub fn iter_from_tail(&self) -> impl Iterator<Item = (usize, &Bucket)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .rev()
            .flat_map(|(row, r)| r.buckets.iter().map(move |b| (row, b)))
    }

    /// Drop all buckets, keeping a single empty head row.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.rows.push_back(BucketRow::default());
        self.bucket_count = 0;
    }

    fn trim_empty_tail(&mut self) {
        while self.rows.len() > 1 && self.rows.back().is_some_and(|r| r.buckets.is_empty()) {
            self.rows.pop_back();
        }
    }
}
