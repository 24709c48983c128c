use crate::{
    bin::BinLayout,
    error::HistogramResult,
    statistic_set::{SampleAccumulator, StatisticSet},
};

/// A fixed-range histogram with `capacity` uniform bins over `[min, max]`.
///
/// Every observation increments one bin and advances the embedded
/// [`SampleAccumulator`], so the histogram can report counts, quantile
/// estimates, and summary statistics without keeping raw values.
///
/// `update` and `update_all` take the histogram by value and hand back the
/// updated one. Keep a `clone()` if the prior version is still needed. The
/// `accumulate` forms update in place behind `&mut self`.
///
/// ```
/// use fixed_histogram::Histogram;
///
/// let h = Histogram::new(10.0, 18.0, 2).update_all([10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 14.0]);
/// assert_eq!(vec![7, 0], h.counts());
/// assert_eq!(7, h.observations());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram<S = StatisticSet> {
    layout: BinLayout,
    bins: Vec<u64>,
    n: u64,
    stats: S,
}

impl Histogram<StatisticSet> {
    /// An empty histogram over `[min, max]` with `capacity` bins.
    ///
    /// Panics if `capacity` is 0 or `max <= min`; validating the bounds is on
    /// the caller. See [`Histogram::try_new`] for a checked variant.
    pub fn new(min: f64, max: f64, capacity: usize) -> Self {
        Self::with_layout(BinLayout::new(min, max, capacity))
    }

    /// Like [`Histogram::new`], but returns an error for unusable bounds.
    pub fn try_new(min: f64, max: f64, capacity: usize) -> HistogramResult<Self> {
        BinLayout::try_new(min, max, capacity).map(Self::with_layout)
    }
}

impl<S: SampleAccumulator> Histogram<S> {
    /// An empty histogram with a fresh accumulator of type `S`.
    pub fn with_layout(layout: BinLayout) -> Self {
        Self::with_accumulator(layout, S::new())
    }

    /// An empty histogram around an existing accumulator.
    ///
    /// The accumulator is taken as-is; if it already holds observations, its
    /// summary will count more than [`Histogram::observations`].
    pub fn with_accumulator(layout: BinLayout, stats: S) -> Self {
        log::debug!(
            "new histogram over [{}, {}] with {} bins",
            layout.min(),
            layout.max(),
            layout.capacity()
        );
        Self {
            bins: vec![0; layout.capacity()],
            layout,
            n: 0,
            stats,
        }
    }

    /// Add 1 to the value's bin and feed the value to the accumulator
    pub fn accumulate(&mut self, value: f64) {
        if !self.layout.contains(value) {
            log::trace!(
                "value {value} is outside [{}, {}]; folding into an edge bin",
                self.layout.min(),
                self.layout.max()
            );
        }
        let index = self.layout.bin_index(value);
        self.bins[index] += 1;
        self.n += 1;
        self.stats.accumulate(value);
    }

    /// [`Histogram::accumulate`] each value, in iteration order
    pub fn accumulate_all(&mut self, values: impl IntoIterator<Item = f64>) {
        for value in values {
            self.accumulate(value);
        }
    }

    /// Record one observation, returning the updated histogram.
    #[must_use]
    pub fn update(mut self, value: f64) -> Self {
        self.accumulate(value);
        self
    }

    /// Record observations left to right, returning the updated histogram.
    ///
    /// Bin counts do not depend on order, but the accumulator may: floating
    /// point summation order shows up in the last bits of the summary.
    #[must_use]
    pub fn update_all(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.accumulate_all(values);
        self
    }

    /// Dense per-bin counts, index 0 first. Always `capacity` long.
    pub fn counts(&self) -> Vec<u64> {
        self.bins.clone()
    }

    /// Borrowed view of the per-bin counts
    pub fn bins(&self) -> &[u64] {
        &self.bins
    }

    /// `(lower, upper, count)` for each bin in index order
    pub fn bin_counts(&self) -> impl Iterator<Item = (f64, f64, u64)> + '_ {
        self.bins.iter().enumerate().map(|(index, count)| {
            let (lower, upper) = self.layout.bin_bounds(index);
            (lower, upper, *count)
        })
    }

    /// Total number of observations
    pub fn observations(&self) -> u64 {
        self.n
    }

    /// True until the first observation
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The accumulator's report, unmodified
    pub fn summary_stats(&self) -> S::Summary {
        self.stats.summary()
    }

    /// The embedded accumulator
    pub fn accumulator(&self) -> &S {
        &self.stats
    }

    /// Reset to an empty initial state, keeping the layout
    pub fn clear(&mut self) {
        log::debug!("clearing histogram of {} observations", self.n);
        self.bins.fill(0);
        self.n = 0;
        self.stats.zero();
    }
}

impl<S> Histogram<S> {
    /// Bin geometry
    pub fn layout(&self) -> &BinLayout {
        &self.layout
    }

    /// Inclusive lower bound of the domain
    pub fn min(&self) -> f64 {
        self.layout.min()
    }

    /// Inclusive upper bound of the domain
    pub fn max(&self) -> f64 {
        self.layout.max()
    }

    /// Number of bins
    pub fn capacity(&self) -> usize {
        self.layout.capacity()
    }

    /// `capacity / (max - min)`
    pub fn bin_scale(&self) -> f64 {
        self.layout.bin_scale()
    }

    /// `(max - min) / capacity`
    pub fn bin_step(&self) -> f64 {
        self.layout.bin_step()
    }
}

impl<S> std::fmt::Display for Histogram<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entry(&"range", &(self.layout.min()..=self.layout.max()))
            .entry(&"capacity", &self.layout.capacity())
            .entry(&"observations", &self.n)
            .entry(&"counts", &self.bins)
            .finish()
    }
}
