use crate::floored_stddev;

/// Fixed-capacity circular store of the most recent values.
#[derive(Debug, Clone)]
pub struct Buffer {
    values: Vec<f64>,
    size: usize,
    sliding_index: usize,
    is_full: bool,
    total: f64,
}

impl Buffer {
    /// Create an empty buffer. A zero `size` is bumped to 1.
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        Self {
            values: vec![0.0; size],
            size,
            sliding_index: 0,
            is_full: false,
            total: 0.0,
        }
    }

    /// Store `value`, returning the value it evicted.
    ///
    /// Nothing is evicted until the buffer has wrapped once: the add after
    /// the `size`-th one flips [`Buffer::is_full`] and evicts the oldest slot.
    pub fn add(&mut self, value: f64) -> Option<f64> {
        if self.sliding_index == self.size {
            self.is_full = true;
            self.sliding_index = 0;
        }

        let removed = self.is_full.then(|| self.values[self.sliding_index]);
        if let Some(old) = removed {
            self.total -= old;
        }

        self.values[self.sliding_index] = value;
        self.sliding_index += 1;
        self.total += value;
        removed
    }

    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Number of valid slots.
    pub fn len(&self) -> usize {
        if self.is_full {
            self.size
        } else {
            self.sliding_index
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the buffer has wrapped at least once.
    pub fn is_full(&self) -> bool {
        self.is_full
    }

    pub fn mean(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            n => self.total / n as f64,
        }
    }

    /// Population standard deviation over the valid slots, never exactly zero.
    pub fn stddev(&self) -> f64 {
        floored_stddev(&self.values[..self.len()], self.mean())
    }

    pub fn clear(&mut self) {
        self.values.fill(0.0);
        self.sliding_index = 0;
        self.is_full = false;
        self.total = 0.0;
    }
}
