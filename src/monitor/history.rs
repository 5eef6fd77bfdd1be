use std::collections::VecDeque;

/// One charted point: sensor value plus the wall-clock time it arrived
#[derive(Debug, Clone)]
pub struct SensorSample {
    pub value: f64,
    pub timestamp: String,
}

/// Fixed-capacity rolling buffer of the most recent samples for one series.
/// Oldest entry is evicted on overflow.
pub struct SampleHistory {
    samples: VecDeque<SensorSample>,
    capacity: usize,
}

impl SampleHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, sample: SensorSample) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
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

    pub fn latest(&self) -> Option<&SensorSample> {
        self.samples.back()
    }

    pub fn oldest(&self) -> Option<&SensorSample> {
        self.samples.front()
    }

    /// Index-based points for the chart, oldest → newest
    pub fn series(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .enumerate()
            .map(|(i, s)| (i as f64, s.value))
            .collect()
    }

    /// Min/max across held values, for axis scaling
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in &self.samples {
            lo = lo.min(s.value);
            hi = hi.max(s.value);
        }
        (!self.samples.is_empty()).then_some((lo, hi))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(value: f64) -> SensorSample {
        SensorSample {
            value,
            timestamp: "10:00:00".to_string(),
        }
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut history = SampleHistory::new(5);
        for i in 0..40 {
            history.push(sample(i as f64));
            assert!(history.len() <= 5);
        }
        assert_eq!(history.len(), 5);
    }

    #[test]
    fn evicts_oldest_first() {
        let mut history = SampleHistory::new(3);
        for v in [1.0, 2.0, 3.0, 4.0] {
            history.push(sample(v));
        }
        let values: Vec<f64> = history.series().iter().map(|&(_, v)| v).collect();
        assert_eq!(values, vec![2.0, 3.0, 4.0]);
        assert_eq!(history.oldest().unwrap().value, 2.0);
        assert_eq!(history.latest().unwrap().value, 4.0);
    }

    #[test]
    fn series_is_indexed_from_zero() {
        let mut history = SampleHistory::new(3);
        history.push(sample(7.5));
        history.push(sample(8.5));
        assert_eq!(history.series(), vec![(0.0, 7.5), (1.0, 8.5)]);
    }

    #[test]
    fn value_bounds_track_min_and_max() {
        let mut history = SampleHistory::new(10);
        assert!(history.value_bounds().is_none());
        for v in [22.0, 31.5, 18.25] {
            history.push(sample(v));
        }
        assert_eq!(history.value_bounds(), Some((18.25, 31.5)));
    }
}
