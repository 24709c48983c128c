//! A fixed-range, fixed-bin-count streaming histogram.
//!
//! [`Histogram`] splits a known range `[min, max]` into `capacity` equal-width
//! bins. Each observation increments one bin and feeds a running
//! [`SampleAccumulator`], so you get per-bin counts, quantile estimates, and
//! summary statistics without retaining raw values.
//!
//! # Examples
//!
//! ```
//! use fixed_histogram::Histogram;
//!
//! let latencies = Histogram::new(0.0, 100.0, 10).update_all([3.0, 12.0, 15.0, 48.0, 97.0]);
//!
//! assert_eq!(5, latencies.observations());
//! assert_eq!(vec![1, 2, 0, 0, 1, 0, 0, 0, 0, 1], latencies.counts());
//! assert_eq!(20.0, latencies.quantile(0.6));
//! assert_eq!(35.0, latencies.summary_stats().mean);
//! ```
//!
//! # Bins
//!
//! A value on an interior bin boundary counts toward the bin below it, `min`
//! counts toward the first bin, and `max` toward the last. Values outside
//! `[min, max]` are folded into the nearest edge bin rather than rejected, which
//! skews that bin. Size the range to your data.
//!
//! # Quantiles
//!
//! [`Histogram::quantile`] interpolates linearly within the bin that covers
//! `q * n` observations and returns NaN for an empty histogram. It does not
//! range check `q`; [`Histogram::quantile_checked`] does.

pub mod bin;
pub mod error;
mod histogram;
mod quantile;
pub mod statistic_set;

pub use bin::BinLayout;
pub use error::{HistogramError, HistogramResult};
pub use histogram::Histogram;
pub use statistic_set::{SampleAccumulator, StatisticSet, Summary};
