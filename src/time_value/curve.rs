//! Rate sweeps and year-by-year FV/PV curves

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::discount::{analyze, TimeValueResult};

/// Year-by-year FV and PV of a single amount
///
/// All three vectors have one entry per year in 0..=max_years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeCurve {
    pub years: Vec<f64>,
    pub future_values: Vec<f64>,
    pub present_values: Vec<f64>,
}

impl TimeCurve {
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Compare FV/PV across discount rates, in input order
pub fn rate_sweep(pv: f64, years: f64, rates: &[f64]) -> Vec<TimeValueResult> {
    debug!("time value rate sweep over {} rates", rates.len());
    rates.par_iter().map(|&rate| analyze(pv, rate, years)).collect()
}

/// FV and PV curves for integer years 0..=max_years
pub fn time_curve(amount: f64, rate: f64, max_years: u32) -> TimeCurve {
    let years: Vec<f64> = (0..=max_years).map(f64::from).collect();
    let future_values = years.iter().map(|&t| amount * (1.0 + rate).powf(t)).collect();
    let present_values = years.iter().map(|&t| amount / (1.0 + rate).powf(t)).collect();

    TimeCurve {
        years,
        future_values,
        present_values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_time_curve() {
        let curve = time_curve(100_000.0, 0.10, 15);
        assert_eq!(curve.len(), 16);
        assert_eq!(curve.future_values.len(), 16);
        assert_eq!(curve.present_values.len(), 16);
        assert_eq!(curve.future_values[0], 100_000.0);
        assert_eq!(curve.present_values[0], 100_000.0);

        let tv = analyze(100_000.0, 0.10, 15.0);
        assert_relative_eq!(curve.future_values[15], tv.future_value, max_relative = 1e-12);
        assert_relative_eq!(curve.present_values[15], tv.present_value, max_relative = 1e-12);

        // FV grows and PV shrinks at a positive rate
        assert!(curve.future_values.windows(2).all(|w| w[0] < w[1]));
        assert!(curve.present_values.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_rate_sweep() {
        let rates = [0.0, 0.05, 0.10];
        let results = rate_sweep(1000.0, 10.0, &rates);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].future_value, 1000.0);
        for (result, &rate) in results.iter().zip(&rates) {
            assert_eq!(result.rate, rate);
            assert_eq!(result.years, 10.0);
        }
        assert!(results[2].present_value < results[1].present_value);
    }
}
