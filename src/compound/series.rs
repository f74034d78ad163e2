//! Output records for compound interest calculations

use serde::{Deserialize, Serialize};

/// Result of a single discrete compounding calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompoundResult {
    /// Initial investment
    pub principal: f64,

    /// Nominal annual rate as a decimal (0.08 = 8%)
    pub rate: f64,

    /// Compounding periods per year
    pub n: u32,

    /// Investment horizon in years
    pub years: f64,

    /// Accumulated amount: principal * (1 + rate/n)^(n*years)
    pub amount: f64,

    /// amount - principal
    pub interest_earned: f64,

    /// (1 + rate/n)^n - 1
    pub effective_annual_rate: f64,
}

/// Year-by-year growth curve
///
/// `years`, `amounts` and `interest` are parallel and always the same length.
/// `amounts[0]` is the principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSeries {
    pub years: Vec<f64>,
    pub amounts: Vec<f64>,
    /// Cumulative interest at each year
    pub interest: Vec<f64>,
    pub principal: f64,
}

impl GrowthSeries {
    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// Amount at the end of the horizon
    pub fn final_amount(&self) -> f64 {
        self.amounts.last().copied().unwrap_or(self.principal)
    }

    /// Iterate (year, amount, interest) points in order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.years
            .iter()
            .zip(&self.amounts)
            .zip(&self.interest)
            .map(|((&y, &a), &i)| (y, a, i))
    }
}
