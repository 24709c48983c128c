//! Quantile estimates from binned counts.
//!
//! The estimator walks bins in index order, accumulating counts until it
//! reaches the bin that covers `q * n` observations, then interpolates within
//! that bin assuming its observations are spread uniformly.
//!
//! # Edge cases
//! - **Empty histogram** → `NaN`.
//! - **`q` is not range checked** by [`Histogram::quantile`]. `q > 1` yields `max`,
//!   and `q < 0` extrapolates below the first occupied bin. Use
//!   [`Histogram::quantile_checked`] to reject `q` outside `[0, 1]`.
//! - **`q == 0`** → lower boundary of the first occupied bin.

use crate::{
    error::{HistogramError, HistogramResult},
    statistic_set::SampleAccumulator,
    Histogram,
};

impl<S: SampleAccumulator> Histogram<S> {
    /// Estimate the value below which a fraction `q` of observations fall.
    ///
    /// Returns NaN for an empty histogram.
    pub fn quantile(&self, q: f64) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        let target = q * self.observations() as f64;

        match self.covering_bin_position(target) {
            Some(position) => self.min() + position / self.bin_scale(),
            None => self.max(),
        }
    }

    /// [`Histogram::quantile`], rejecting `q` outside `[0, 1]` and NaN.
    pub fn quantile_checked(&self, q: f64) -> HistogramResult<f64> {
        if !(0.0..=1.0).contains(&q) {
            return Err(HistogramError::QuantileOutOfRange { q });
        }
        Ok(self.quantile(q))
    }

    /// [`Histogram::quantile`] for each of `qs`, in order
    pub fn quantiles(&self, qs: impl IntoIterator<Item = f64>) -> Vec<f64> {
        qs.into_iter().map(|q| self.quantile(q)).collect()
    }

    /// Fractional bin position at which the running count reaches `target`,
    /// or None when the counts run out first.
    fn covering_bin_position(&self, target: f64) -> Option<f64> {
        let mut covered = 0.0;
        for (index, &count) in self.bins().iter().enumerate() {
            // An empty bin can only be selected when target <= covered; skip
            // it so the interpolation never divides by zero.
            if count == 0 {
                continue;
            }
            let count = count as f64;
            if covered + count < target {
                covered += count;
                continue;
            }
            return Some(index as f64 + (target - covered) / count);
        }
        None
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use crate::{error::HistogramError, Histogram};

    fn assert_eq_epsilon(expected: f64, actual: f64, message: &str) {
        assert!(
            (expected - actual).abs() < 1e-9,
            "{message}: expected {expected}, got {actual}"
        );
    }

    #[test_log::test]
    fn empty_is_nan() {
        let h = Histogram::new(0.0, 100.0, 10);
        for q in [0.0, 0.25, 0.5, 1.0, -3.0, 7.0, f64::NAN] {
            assert!(h.quantile(q).is_nan(), "q = {q}");
        }
    }

    #[test_log::test]
    fn uniform_data_interpolates_linearly() {
        // 10 observations in each of 10 bins
        let h = Histogram::new(0.0, 100.0, 10)
            .update_all((0..100).map(|i| i as f64 + 0.5));
        assert_eq!(vec![10; 10], h.counts());

        assert_eq_epsilon(50.0, h.quantile(0.5), "median");
        assert_eq_epsilon(25.0, h.quantile(0.25), "p25");
        assert_eq_epsilon(90.0, h.quantile(0.9), "p90");
        assert_eq_epsilon(99.0, h.quantile(0.99), "p99");
        assert_eq_epsilon(100.0, h.quantile(1.0), "p100 is the top of the last bin");
        assert_eq_epsilon(0.0, h.quantile(0.0), "p0 is the bottom of the first bin");
    }

    #[test_log::test]
    fn single_bin_spike() {
        // Everything in bin 0, which covers [10, 14]
        let h = Histogram::new(10.0, 18.0, 2)
            .update_all([10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 14.0]);

        assert_eq_epsilon(12.0, h.quantile(0.5), "median is mid bin 0");
        assert_eq_epsilon(14.0, h.quantile(1.0), "p100 is the top of bin 0");
        assert_eq_epsilon(10.0, h.quantile(0.0), "p0 is the bottom of bin 0");
    }

    #[test_log::test]
    fn skips_empty_bins() {
        // bins of width 10; observations only in bins 3 and 7
        let h = Histogram::new(0.0, 100.0, 10).update_all([35.0, 35.0, 75.0, 75.0]);

        assert_eq_epsilon(30.0, h.quantile(0.0), "p0 starts at the first occupied bin");
        assert_eq_epsilon(35.0, h.quantile(0.25), "halfway through bin 3");
        assert_eq_epsilon(40.0, h.quantile(0.5), "the median closes out bin 3");
        assert_eq_epsilon(75.0, h.quantile(0.75), "halfway through bin 7");
        assert_eq_epsilon(80.0, h.quantile(1.0), "p100 is the top of bin 7");
    }

    #[test_log::test]
    fn beyond_one_returns_max() {
        let h = Histogram::new(0.0, 100.0, 10).update_all([5.0, 15.0]);
        assert_eq!(100.0, h.quantile(1.5));
        assert_eq!(100.0, h.quantile(f64::INFINITY));
    }

    #[test_log::test]
    fn below_zero_is_permitted() {
        let h = Histogram::new(0.0, 100.0, 10).update_all([55.0, 55.0]);
        let low = h.quantile(-0.5);
        assert!(low.is_finite());
        assert!(low < 50.0, "extrapolates below the occupied bin: {low}");
    }

    #[test_log::test]
    fn checked_rejects_out_of_range() {
        let h = Histogram::new(0.0, 100.0, 10).update_all([5.0, 15.0]);
        assert_eq!(
            Err(HistogramError::QuantileOutOfRange { q: 1.5 }),
            h.quantile_checked(1.5)
        );
        assert_eq!(
            Err(HistogramError::QuantileOutOfRange { q: -0.1 }),
            h.quantile_checked(-0.1)
        );
        assert!(matches!(
            h.quantile_checked(f64::NAN),
            Err(HistogramError::QuantileOutOfRange { .. })
        ));
        assert_eq!(Ok(h.quantile(0.5)), h.quantile_checked(0.5));
        assert!(h.quantile_checked(0.0).is_ok());
        assert!(h.quantile_checked(1.0).is_ok());
    }

    #[test_log::test]
    fn checked_on_empty_is_still_nan() {
        let h = Histogram::new(0.0, 1.0, 4);
        let q = h.quantile_checked(0.5).expect("0.5 is in range");
        assert!(q.is_nan());
    }

    #[test_log::test]
    fn quantiles_in_order() {
        let h = Histogram::new(0.0, 100.0, 10)
            .update_all((0..100).map(|i| i as f64 + 0.5));
        let qs = h.quantiles([0.1, 0.5, 0.9]);
        assert_eq!(3, qs.len());
        assert_eq_epsilon(10.0, qs[0], "p10");
        assert_eq_epsilon(50.0, qs[1], "p50");
        assert_eq_epsilon(90.0, qs[2], "p90");
    }

    #[test_log::test]
    fn monotone_in_q() {
        let mut rng = StdRng::seed_from_u64(42);
        for capacity in [1, 3, 16, 100] {
            let h = Histogram::new(-10.0, 30.0, capacity)
                .update_all((0..rng.gen_range(1..400)).map(|_| rng.gen_range(-20.0..40.0)));

            let mut previous = f64::NEG_INFINITY;
            for step in 0..=1000 {
                let q = step as f64 / 1000.0;
                let estimate = h.quantile(q);
                assert!(
                    previous <= estimate,
                    "capacity {capacity}: quantile({q}) = {estimate} < {previous}"
                );
                assert!(
                    (h.min()..=h.max() + 1e-9).contains(&estimate),
                    "capacity {capacity}: quantile({q}) = {estimate} outside the range"
                );
                previous = estimate;
            }
        }
    }
}
