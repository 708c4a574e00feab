//! Weighted moving average.

use std::collections::VecDeque;

use reach_core::{ConfigError, Vec3};

/// Ring of the last `window` samples with a linear weight ramp 1..=window.
///
/// Weights are right-aligned to the most recent sample; the divisor is
/// always the full-window weight sum, so a partially filled buffer reads
/// low rather than overweighting early samples.
#[derive(Debug, Clone)]
pub struct Wma {
    window: usize,
    weight_sum: f64,
    buffer: VecDeque<Vec3>,
}

impl Wma {
    pub fn new(window: usize) -> Result<Self, ConfigError> {
        if window < 1 {
            return Err(ConfigError::InvalidWindow { window });
        }
        // 1 + 2 + ... + window
        let weight_sum = (window * (window + 1) / 2) as f64;
        Ok(Self {
            window,
            weight_sum,
            buffer: VecDeque::with_capacity(window),
        })
    }

    pub fn add(&mut self, position: Vec3) {
        if self.buffer.len() == self.window {
            self.buffer.pop_front();
        }
        self.buffer.push_back(position);
    }

    pub fn get(&self) -> Option<Vec3> {
        let count = self.buffer.len();
        if count == 0 {
            return None;
        }
        let first_weight = self.window - count + 1;
        let weighted = self
            .buffer
            .iter()
            .enumerate()
            .fold(Vec3::zeros(), |acc, (i, p)| {
                acc + (first_weight + i) as f64 * *p
            });
        Some(weighted / self.weight_sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_window_weights_recent_samples_harder() {
        let mut wma = Wma::new(3).unwrap();
        for x in [1.0, 2.0, 3.0] {
            wma.add(Vec3::new(x, 0.0, 0.0));
        }
        // (1*1 + 2*2 + 3*3) / 6
        assert!((wma.get().unwrap().x - 14.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn partial_window_uses_full_divisor() {
        let mut wma = Wma::new(3).unwrap();
        wma.add(Vec3::new(6.0, 0.0, 0.0));
        // Right-aligned weight 3, divisor 6.
        assert!((wma.get().unwrap().x - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_buffer_yields_none() {
        let wma = Wma::new(3).unwrap();
        assert_eq!(wma.get(), None);
    }
}
