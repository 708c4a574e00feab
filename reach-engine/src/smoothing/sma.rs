//! Simple moving average.

use std::collections::VecDeque;

use reach_core::{ConfigError, Vec3};

/// Fixed-capacity ring of the last `window` samples with running
/// per-axis sums, updated in O(1) by subtracting the evicted value.
#[derive(Debug, Clone)]
pub struct Sma {
    window: usize,
    buffer: VecDeque<Vec3>,
    sum: Vec3,
}

impl Sma {
    pub fn new(window: usize) -> Result<Self, ConfigError> {
        if window < 1 {
            return Err(ConfigError::InvalidWindow { window });
        }
        Ok(Self {
            window,
            buffer: VecDeque::with_capacity(window),
            sum: Vec3::zeros(),
        })
    }

    pub fn add(&mut self, position: Vec3) {
        if self.buffer.len() == self.window {
            if let Some(evicted) = self.buffer.pop_front() {
                self.sum -= evicted;
            }
        }
        self.buffer.push_back(position);
        self.sum += position;
    }

    pub fn get(&self) -> Option<Vec3> {
        let count = self.buffer.len();
        if count == 0 {
            return None;
        }
        Some(self.sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_window() {
        let mut sma = Sma::new(3).unwrap();
        for x in [1.0, 2.0, 3.0] {
            sma.add(Vec3::new(x, 2.0 * x, 0.0));
        }
        let avg = sma.get().unwrap();
        assert!((avg - Vec3::new(2.0, 4.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn evicts_oldest_sample() {
        let mut sma = Sma::new(2).unwrap();
        sma.add(Vec3::new(10.0, 0.0, 0.0));
        sma.add(Vec3::new(2.0, 0.0, 0.0));
        sma.add(Vec3::new(4.0, 0.0, 0.0));
        // The 10.0 sample left the window.
        assert!((sma.get().unwrap().x - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_buffer_yields_none() {
        let sma = Sma::new(3).unwrap();
        assert_eq!(sma.get(), None);
    }

    #[test]
    fn partial_window_averages_what_is_buffered() {
        let mut sma = Sma::new(5).unwrap();
        sma.add(Vec3::new(1.0, 0.0, 0.0));
        sma.add(Vec3::new(3.0, 0.0, 0.0));
        assert!((sma.get().unwrap().x - 2.0).abs() < 1e-12);
    }
}
