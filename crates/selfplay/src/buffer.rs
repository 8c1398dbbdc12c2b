use std::collections::VecDeque;

use rand::Rng;

use crate::data::TrainingSample;

/// Fixed-capacity store of finished training samples.
///
/// Once full, every new sample evicts the oldest one.
#[derive(Debug, Clone)]
pub struct ReplayBuffer {
    samples: VecDeque<TrainingSample>,
    capacity: usize,
}

impl ReplayBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn add(&mut self, sample: TrainingSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    /// Up to `n` distinct samples drawn uniformly at random
    pub fn sample<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<&TrainingSample> {
        let amount = n.min(self.samples.len());
        rand::seq::index::sample(rng, self.samples.len(), amount)
            .into_iter()
            .map(|i| &self.samples[i])
            .collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrainingSample> {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
