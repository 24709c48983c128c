use crate::error::{HistogramError, HistogramResult};

/// The fixed geometry of a histogram: `capacity` equal-width bins over `[min, max]`.
///
/// `bin_scale` and `bin_step` are derived once here. Bin boundaries are
/// recomputed from `bin_step` on every lookup rather than cached per bin, so a
/// value sitting on an edge is judged against the same rounded boundary that
/// [`BinLayout::bin_bounds`] reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinLayout {
    min: f64,
    max: f64,
    capacity: usize,
    bin_scale: f64,
    bin_step: f64,
}

impl BinLayout {
    /// Panics if `capacity` is 0 or `[min, max]` is not a finite, non-empty range.
    /// Use [`BinLayout::try_new`] when the bounds are not known to be good.
    pub fn new(min: f64, max: f64, capacity: usize) -> Self {
        match Self::try_new(min, max, capacity) {
            Ok(layout) => layout,
            Err(e) => panic!("invalid histogram layout: {e}"),
        }
    }

    /// Validate the bounds and derive the bin scale.
    pub fn try_new(min: f64, max: f64, capacity: usize) -> HistogramResult<Self> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(HistogramError::EmptyRange { min, max });
        }
        if capacity == 0 {
            return Err(HistogramError::ZeroCapacity);
        }
        let width = max - min;
        Ok(Self {
            min,
            max,
            capacity,
            bin_scale: capacity as f64 / width,
            bin_step: width / capacity as f64,
        })
    }

    /// Inclusive lower bound of the domain
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Inclusive upper bound of the domain
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of bins
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bins per unit of value: `capacity / (max - min)`
    pub fn bin_scale(&self) -> f64 {
        self.bin_scale
    }

    /// Width of one bin: `(max - min) / capacity`
    pub fn bin_step(&self) -> f64 {
        self.bin_step
    }

    /// True when `value` lies in `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Nominal `(lower, upper)` boundaries of a bin.
    pub fn bin_bounds(&self, index: usize) -> (f64, f64) {
        self.raw_bounds(index as i64)
    }

    fn raw_bounds(&self, raw: i64) -> (f64, f64) {
        (
            self.min + raw as f64 * self.bin_step,
            self.min + (raw + 1) as f64 * self.bin_step,
        )
    }

    /// Map a value to its bin.
    ///
    /// A value exactly on an interior boundary belongs to the bin below it, so
    /// bins are `(lower, upper]` apart from the first, which also takes `min`.
    /// `max` always lands in the last bin. Values outside `[min, max]` are not
    /// rejected; they fold into the nearest edge bin.
    pub fn bin_index(&self, value: f64) -> usize {
        let last = self.capacity as i64 - 1;

        // Clamped so that far out-of-range values can't overflow the cast. In-range
        // values never produce anything outside [0, capacity] here.
        let raw = ((value - self.min) * self.bin_scale)
            .floor()
            .clamp(-1.0, self.capacity as f64) as i64;
        let (lower, upper) = self.raw_bounds(raw);

        let corrected = if upper < value {
            (raw + 1).min(last)
        } else if value <= lower {
            (raw - 1).max(0)
        } else if value == self.max {
            last
        } else {
            raw
        };
        corrected.clamp(0, last) as usize
    }
}
