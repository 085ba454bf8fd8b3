use oxo_evaluator::fitness_evaluator::Fitness;
use serde::{Deserialize, Serialize};

/// Summary of one generation's fitness scores.
///
/// Used for progress reporting; selection works on the raw scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessStats {
    /// The lowest win count.
    pub min: Fitness,
    /// The highest win count.
    pub max: Fitness,
    /// The arithmetic mean of the win counts.
    pub mean: f32,
    /// The median win count (upper median for even counts).
    pub median: Fitness,
    /// The population standard deviation.
    pub std_dev: f32,
    /// Number of individuals with zero wins.
    pub zero_count: usize,
}

impl FitnessStats {
    /// Computes statistics from fitness scores in any order.
    ///
    /// Returns `None` for an empty input.
    ///
    /// # Example
    ///
    /// ```
    /// use oxo_training::stats::FitnessStats;
    ///
    /// let stats = FitnessStats::new([4, 0, 2, 6]).unwrap();
    /// assert_eq!(stats.min, 0);
    /// assert_eq!(stats.max, 6);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 4);
    /// assert_eq!(stats.zero_count, 1);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = Fitness>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_unstable();

        let min = *values.first()?;
        let max = *values.last()?;
        let n = values.len() as f32;
        let mean = values.iter().map(|v| *v as f32).sum::<f32>() / n;
        let median = values[values.len() / 2];
        let variance = values
            .iter()
            .map(|v| (*v as f32 - mean).powi(2))
            .sum::<f32>()
            / n;
        let zero_count = values.iter().take_while(|v| **v == 0).count();

        Some(Self {
            min,
            max,
            mean,
            median,
            std_dev: variance.sqrt(),
            zero_count,
        })
    }

    /// Returns `true` when every individual scored zero.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max == 0
    }
}
