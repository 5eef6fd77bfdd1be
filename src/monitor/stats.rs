/// Session-lifetime running sum and count for one sensor series. Unlike the
/// rolling history, this is never reset and never evicts: the average covers
/// every reading accepted since startup.
#[derive(Debug, Default, Clone, Copy)]
pub struct RunningStats {
    sum: f64,
    count: u64,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_have_no_average() {
        assert!(RunningStats::new().average().is_none());
    }

    #[test]
    fn average_equals_sum_over_count() {
        let mut stats = RunningStats::new();
        let values = [21.5, 22.0, 23.5, 19.0, 30.25];
        for v in values {
            stats.record(v);
        }
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert_eq!(stats.count(), values.len() as u64);
        assert!((stats.average().unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn count_grows_without_bound() {
        // The history evicts at capacity; the stats must not
        let mut stats = RunningStats::new();
        for _ in 0..1000 {
            stats.record(1.0);
        }
        assert_eq!(stats.count(), 1000);
        assert!((stats.average().unwrap() - 1.0).abs() < 1e-12);
    }
}
