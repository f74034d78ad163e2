//! Amortization schedule structures

use serde::{Deserialize, Serialize};

/// A single month of an amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month index
    pub month: u32,

    // Payment split
    pub payment: f64,
    pub principal_part: f64,
    pub interest_part: f64,

    /// Balance after this month's principal is applied, never negative
    pub remaining_balance: f64,

    // Running totals (prefix sums over the schedule)
    pub cumulative_interest: f64,
    pub cumulative_principal: f64,
}

/// Complete loan amortization result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanResult {
    /// Amount borrowed
    pub principal: f64,

    /// Nominal annual rate as a decimal
    pub annual_rate: f64,

    /// Term in months
    pub months: u32,

    /// Level payment (the first row's payment)
    pub monthly_payment: f64,

    /// Sum of every row's payment
    pub total_paid: f64,

    pub total_interest: f64,

    /// total_interest / principal
    pub interest_ratio: f64,

    /// Monthly rows, one per month of the term
    pub schedule: Vec<AmortizationRow>,
}

impl LoanResult {
    /// Balance left after the final row
    pub fn final_balance(&self) -> f64 {
        self.schedule.last().map(|r| r.remaining_balance).unwrap_or(self.principal)
    }

    /// Principal repaid by the end of the schedule
    pub fn principal_repaid(&self) -> f64 {
        self.schedule.last().map(|r| r.cumulative_principal).unwrap_or(0.0)
    }

    /// Row for a 1-based month, if within the term
    pub fn row(&self, month: u32) -> Option<&AmortizationRow> {
        month
            .checked_sub(1)
            .and_then(|idx| self.schedule.get(idx as usize))
    }
}
