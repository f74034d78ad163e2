//! Discrete and continuous compounding
//!
//! A = P(1 + r/n)^(nt) for discrete, A = Pe^(rt) for continuous.

use log::debug;
use rayon::prelude::*;

use super::series::{CompoundResult, GrowthSeries};
use crate::error::{FinanceError, FinanceResult};

fn validate(principal: f64, n: u32) -> FinanceResult<()> {
    if principal.is_nan() || principal <= 0.0 {
        return Err(FinanceError::invalid("principal", "must be positive"));
    }
    if n < 1 {
        return Err(FinanceError::invalid("n", "compounding frequency must be >= 1"));
    }
    Ok(())
}

/// Growth factor (1 + r/n)^(n*t)
fn growth_factor(rate: f64, n: u32, years: f64) -> f64 {
    let n = n as f64;
    (1.0 + rate / n).powf(n * years)
}

/// Discrete compounding
///
/// # Arguments
/// * `principal` - Initial investment, must be positive
/// * `rate` - Annual interest rate as a decimal (0.08 = 8%)
/// * `n` - Compounding periods per year (1 = annual, 12 = monthly, 365 = daily)
/// * `years` - Investment horizon
pub fn calculate(principal: f64, rate: f64, n: u32, years: f64) -> FinanceResult<CompoundResult> {
    validate(principal, n)?;

    let amount = principal * growth_factor(rate, n, years);
    let effective_annual_rate = (1.0 + rate / n as f64).powf(n as f64) - 1.0;

    Ok(CompoundResult {
        principal,
        rate,
        n,
        years,
        amount,
        interest_earned: amount - principal,
        effective_annual_rate,
    })
}

/// Continuous compounding: A = Pe^(rt)
pub fn continuous(principal: f64, rate: f64, years: f64) -> f64 {
    principal * (rate * years).exp()
}

/// Exact doubling time ln(2) / (n * ln(1 + r/n))
///
/// Non-positive rates never double the principal, so the result is infinite.
pub fn doubling_time(rate: f64, n: u32) -> f64 {
    if rate <= 0.0 {
        return f64::INFINITY;
    }
    let n = n as f64;
    std::f64::consts::LN_2 / (n * (1.0 + rate / n).ln())
}

/// Year-by-year growth curve for years 0..=years
pub fn time_series(principal: f64, rate: f64, n: u32, years: u32) -> FinanceResult<GrowthSeries> {
    validate(principal, n)?;

    let year_points: Vec<f64> = (0..=years).map(f64::from).collect();
    let amounts: Vec<f64> = year_points
        .iter()
        .map(|&t| principal * growth_factor(rate, n, t))
        .collect();
    let interest = amounts.iter().map(|a| a - principal).collect();

    Ok(GrowthSeries {
        years: year_points,
        amounts,
        interest,
        principal,
    })
}

/// Compare final amounts across rates, in input order
pub fn rate_sweep(principal: f64, n: u32, years: f64, rates: &[f64]) -> FinanceResult<Vec<CompoundResult>> {
    debug!("compound rate sweep over {} rates", rates.len());
    rates
        .par_iter()
        .map(|&rate| calculate(principal, rate, n, years))
        .collect()
}

/// Compare final amounts across compounding frequencies, in input order
pub fn frequency_sweep(
    principal: f64,
    rate: f64,
    years: f64,
    frequencies: &[u32],
) -> FinanceResult<Vec<CompoundResult>> {
    debug!("compound frequency sweep over {} frequencies", frequencies.len());
    frequencies
        .par_iter()
        .map(|&n| calculate(principal, rate, n, years))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_basic_annual() {
        let result = calculate(1000.0, 0.05, 1, 10.0).unwrap();
        assert_relative_eq!(result.amount, 1000.0 * 1.05_f64.powi(10), max_relative = 1e-12);
        assert_relative_eq!(result.interest_earned, result.amount - 1000.0, max_relative = 1e-12);
        assert_relative_eq!(result.effective_annual_rate, 0.05, max_relative = 1e-12);
    }

    #[test]
    fn test_effective_rate_monthly() {
        let result = calculate(1000.0, 0.12, 12, 1.0).unwrap();
        assert_relative_eq!(result.effective_annual_rate, 1.01_f64.powi(12) - 1.0, max_relative = 1e-12);
        // One year at the nominal rate lands on the effective rate
        assert_relative_eq!(result.amount, 1000.0 * (1.0 + result.effective_annual_rate), max_relative = 1e-12);
    }

    #[test]
    fn test_effective_rate_large_frequency() {
        // n above i32::MAX approaches continuous compounding
        let result = calculate(1000.0, 0.05, 3_000_000_000, 1.0).unwrap();
        assert_relative_eq!(result.effective_annual_rate, 0.05_f64.exp_m1(), max_relative = 1e-4);
        assert!(result.amount > 1000.0);
    }

    #[test]
    fn test_fractional_years() {
        let result = calculate(10_000.0, 0.08, 4, 2.5).unwrap();
        assert_relative_eq!(result.amount, 10_000.0 * 1.02_f64.powi(10), max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            calculate(0.0, 0.05, 1, 10.0),
            Err(FinanceError::InvalidArgument { name: "principal", .. })
        ));
        assert!(calculate(-100.0, 0.05, 1, 10.0).is_err());
        assert!(calculate(f64::NAN, 0.05, 1, 10.0).is_err());
        assert!(matches!(
            calculate(1000.0, 0.05, 0, 10.0),
            Err(FinanceError::InvalidArgument { name: "n", .. })
        ));
    }

    #[test]
    fn test_continuous() {
        assert_relative_eq!(continuous(1000.0, 0.05, 10.0), 1000.0 * 0.5_f64.exp(), max_relative = 1e-12);
        // Continuous compounding beats daily compounding
        let daily = calculate(10_000.0, 0.10, 365, 20.0).unwrap();
        assert!(continuous(10_000.0, 0.10, 20.0) > daily.amount);
    }

    #[test]
    fn test_doubling_time() {
        assert_relative_eq!(
            doubling_time(0.07, 1),
            std::f64::consts::LN_2 / 1.07_f64.ln(),
            max_relative = 1e-12
        );
        // Rule of 72 is close at moderate rates
        assert!((doubling_time(0.08, 1) - 9.0).abs() < 0.1);
        assert!(doubling_time(0.0, 1).is_infinite());
        assert!(doubling_time(-0.02, 12).is_infinite());
    }

    #[test]
    fn test_time_series() {
        let series = time_series(10_000.0, 0.08, 12, 20).unwrap();
        assert_eq!(series.len(), 21);
        assert_eq!(series.amounts.len(), series.interest.len());
        assert_eq!(series.amounts[0], 10_000.0);
        assert_eq!(series.interest[0], 0.0);
        assert_eq!(series.years[20], 20.0);

        let direct = calculate(10_000.0, 0.08, 12, 20.0).unwrap();
        assert_relative_eq!(series.final_amount(), direct.amount, max_relative = 1e-12);

        for (year, amount, interest) in series.points() {
            assert_abs_diff_eq!(interest, amount - 10_000.0, epsilon = 1e-9);
            assert!(year >= 0.0);
        }
    }

    #[test]
    fn test_time_series_zero_years() {
        let series = time_series(500.0, 0.05, 1, 0).unwrap();
        assert_eq!(series.years, vec![0.0]);
        assert_eq!(series.amounts, vec![500.0]);
    }

    #[test]
    fn test_rate_sweep_preserves_order() {
        let rates = [0.02, 0.05, 0.08, 0.10, 0.15];
        let results = rate_sweep(10_000.0, 12, 20.0, &rates).unwrap();
        assert_eq!(results.len(), rates.len());
        for (result, &rate) in results.iter().zip(&rates) {
            assert_eq!(result.rate, rate);
        }
        assert!(results.windows(2).all(|w| w[0].amount < w[1].amount));
    }

    #[test]
    fn test_frequency_sweep() {
        let freqs = [1, 4, 12, 365];
        let results = frequency_sweep(10_000.0, 0.10, 20.0, &freqs).unwrap();
        let ns: Vec<u32> = results.iter().map(|r| r.n).collect();
        assert_eq!(ns, freqs);
        // More frequent compounding accumulates more
        assert!(results.windows(2).all(|w| w[0].amount < w[1].amount));
    }

    #[test]
    fn test_frequency_sweep_rejects_zero_frequency() {
        assert!(frequency_sweep(10_000.0, 0.10, 20.0, &[1, 0, 12]).is_err());
    }
}
