//! Shared helpers for integration tests

/// Minimal fixed-width accumulating histogram used as the stored value
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram1D {
    low: f64,
    high: f64,
    counts: Vec<u64>,
    entries: u64,
    sum: f64,
}

#[allow(dead_code)]
impl Histogram1D {
    pub fn new(bins: usize, low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            counts: vec![0; bins],
            entries: 0,
            sum: 0.0,
        }
    }

    pub fn fill(&mut self, value: f64) {
        self.entries += 1;
        self.sum += value;
        if value >= self.low && value < self.high {
            let width = (self.high - self.low) / self.counts.len() as f64;
            let last = self.counts.len() - 1;
            let bin = ((value - self.low) / width) as usize;
            self.counts[bin.min(last)] += 1;
        }
    }

    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn mean(&self) -> f64 {
        if self.entries == 0 {
            0.0
        } else {
            self.sum / self.entries as f64
        }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}
