//! Compound interest: discrete and continuous compounding, growth curves, sweeps

mod growth;
mod series;

pub use growth::{calculate, continuous, doubling_time, frequency_sweep, rate_sweep, time_series};
pub use series::{CompoundResult, GrowthSeries};
