use crate::model::BookList;
use crate::statistics::Statistics;
use std::cmp::Ordering;

/// Price statistics over the books currently in the list.
impl Statistics for BookList {
    type Metric = ();

    fn avg(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.iter().map(|b| b.price()).sum::<f64>() / self.size() as f64
        }
    }

    /// Nearest-rank percentiles of the prices; `percentiles` are fractions
    /// in `[0, 1]` and are clamped to that range.
    fn calculate_percentile(&self, _metric: Self::Metric, percentiles: &[f64]) -> Vec<f64> {
        let mut values: Vec<f64> = self.iter().map(|b| b.price()).collect();

        if values.is_empty() {
            return vec![0.0];
        }

        values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Less));
        percentiles
            .iter()
            .map(|&p| {
                let idx = (p.clamp(0.0, 1.0) * ((values.len() - 1) as f64)).round() as usize;
                values.get(idx).copied().unwrap_or(0.0)
            })
            .collect()
    }
}
