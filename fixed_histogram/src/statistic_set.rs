//! Running summary statistics that ride along with a histogram.

/// An incremental statistics engine fed with every observation a histogram sees.
///
/// Implementations must not retain raw observations. A histogram owns its
/// accumulator exclusively and advances it in lock-step with its bins.
pub trait SampleAccumulator: Default {
    /// What [`SampleAccumulator::summary`] reports
    type Summary;

    /// Fresh, empty accumulator
    fn new() -> Self {
        Self::default()
    }

    /// Fold one observation into the running state
    fn accumulate(&mut self, value: f64);

    /// Value-style accumulate: consume self and return the advanced state.
    fn update(mut self, value: f64) -> Self {
        self.accumulate(value);
        self
    }

    /// Snapshot of the statistics so far
    fn summary(&self) -> Self::Summary;

    /// Reset to the empty initial state
    fn zero(&mut self) {
        *self = Self::default();
    }
}

/// A min/max/sum/count aggregation with a running mean and second moment.
#[derive(Debug, PartialEq, Clone)]
pub struct StatisticSet {
    /// Minimum observed value
    pub min: f64,
    /// Maximum observed value
    pub max: f64,
    /// Sum of all observed values
    pub sum: f64,
    /// Count of observations
    pub count: u64,
    mean: f64,
    m2: f64,
}

impl std::fmt::Display for StatisticSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entry(&"min", &self.min)
            .entry(&"max", &self.max)
            .entry(&"sum", &self.sum)
            .entry(&"count", &self.count)
            .finish()
    }
}

impl Default for StatisticSet {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            count: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }
}

impl StatisticSet {
    /// True until the first observation
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Sample variance; 0 with fewer than 2 observations.
    pub fn variance(&self) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            self.m2 / (self.count - 1) as f64
        }
    }
}

impl SampleAccumulator for StatisticSet {
    type Summary = Summary;

    fn accumulate(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;

        // Welford
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    fn summary(&self) -> Summary {
        if self.is_empty() {
            return Summary {
                count: 0,
                min: f64::NAN,
                max: f64::NAN,
                sum: 0.0,
                mean: f64::NAN,
                variance: 0.0,
                std_dev: 0.0,
            };
        }
        let variance = self.variance();
        Summary {
            count: self.count,
            min: self.min,
            max: self.max,
            sum: self.sum,
            mean: self.mean,
            variance,
            std_dev: variance.sqrt(),
        }
    }
}

/// Point-in-time statistics reported by [`StatisticSet`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Count of observations
    pub count: u64,
    /// Smallest observation, NaN when empty
    pub min: f64,
    /// Largest observation, NaN when empty
    pub max: f64,
    /// Sum of observations
    pub sum: f64,
    /// Arithmetic mean, NaN when empty
    pub mean: f64,
    /// Sample variance
    pub variance: f64,
    /// Sample standard deviation
    pub std_dev: f64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entry(&"count", &self.count)
            .entry(&"min", &self.min)
            .entry(&"max", &self.max)
            .entry(&"mean", &self.mean)
            .entry(&"std_dev", &self.std_dev)
            .finish()
    }
}
