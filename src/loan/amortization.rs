//! Fixed-rate loan amortization via the annuity formula
//!
//! M = P * r_m(1+r_m)^N / [(1+r_m)^N - 1], with M = P/N for interest-free loans.

use log::{debug, trace};
use rayon::prelude::*;

use super::schedule::{AmortizationRow, LoanResult};
use crate::error::{FinanceError, FinanceResult};

/// Monthly rate from a nominal annual rate
fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / 12.0
}

/// Fixed monthly payment for a fully amortizing loan
pub fn monthly_payment(principal: f64, annual_rate: f64, months: u32) -> FinanceResult<f64> {
    if principal.is_nan() || principal <= 0.0 {
        return Err(FinanceError::invalid("principal", "must be positive"));
    }
    if months < 1 {
        return Err(FinanceError::invalid("months", "term must be at least 1 month"));
    }

    let rm = monthly_rate(annual_rate);
    if rm == 0.0 {
        return Ok(principal / months as f64);
    }

    // Divided-through form stays finite when (1+r_m)^N overflows
    let discount = (1.0 + rm).powf(-(months as f64));
    Ok(principal * rm / (1.0 - discount))
}

/// Full amortization table, month by month
///
/// Floating-point drift would otherwise leave a residue (positive or negative)
/// after the last payment. The final month, and any month whose principal
/// portion would exceed the outstanding balance, pays off exactly the
/// remaining balance and its payment is recomputed as principal + interest.
/// The balance is floored at zero, so the last row always ends at 0.
pub fn schedule(principal: f64, annual_rate: f64, months: u32) -> FinanceResult<LoanResult> {
    let level_payment = monthly_payment(principal, annual_rate, months)?;
    let rm = monthly_rate(annual_rate);

    let mut rows = Vec::with_capacity(months as usize);
    let mut balance = principal;
    let mut cumulative_interest = 0.0;
    let mut cumulative_principal = 0.0;

    for month in 1..=months {
        let interest_part = balance * rm;
        let mut principal_part = level_payment - interest_part;
        let mut payment = level_payment;

        if principal_part > balance || month == months {
            trace!(
                "month {}: settling balance {:.10} (scheduled principal {:.10})",
                month,
                balance,
                principal_part
            );
            principal_part = balance;
            payment = principal_part + interest_part;
        }

        balance -= principal_part;
        if balance < 0.0 {
            balance = 0.0;
        }

        cumulative_interest += interest_part;
        cumulative_principal += principal_part;

        rows.push(AmortizationRow {
            month,
            payment,
            principal_part,
            interest_part,
            remaining_balance: balance,
            cumulative_interest,
            cumulative_principal,
        });
    }

    let total_paid: f64 = rows.iter().map(|r| r.payment).sum();
    let monthly_payment = rows.first().map(|r| r.payment).unwrap_or(level_payment);

    Ok(LoanResult {
        principal,
        annual_rate,
        months,
        monthly_payment,
        total_paid,
        total_interest: cumulative_interest,
        interest_ratio: cumulative_interest / principal,
        schedule: rows,
    })
}

/// Inverse problem: the largest loan a fixed monthly budget can carry
///
/// P = M * [(1+r_m)^N - 1] / [r_m * (1+r_m)^N] = M * [1 - (1+r_m)^(-N)] / r_m
pub fn affordable_principal(monthly_budget: f64, annual_rate: f64, months: u32) -> f64 {
    let rm = monthly_rate(annual_rate);
    if rm == 0.0 {
        return monthly_budget * months as f64;
    }
    let discount = (1.0 + rm).powf(-(months as f64));
    monthly_budget * (1.0 - discount) / rm
}

/// Compare total cost across annual rates, in input order
pub fn rate_comparison(principal: f64, months: u32, rates: &[f64]) -> FinanceResult<Vec<LoanResult>> {
    debug!("loan rate comparison over {} rates", rates.len());
    rates
        .par_iter()
        .map(|&rate| schedule(principal, rate, months))
        .collect()
}
