//! Percentage arithmetic: part-of-total, change, margin, markup

use serde::{Deserialize, Serialize};

use crate::error::{ensure_nonzero, FinanceResult};

/// What share `part` is of `total`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentageResult {
    pub part: f64,
    pub total: f64,
    /// (part / total) * 100
    pub percentage: f64,
    /// total - part
    pub remaining: f64,
    /// part / total
    pub ratio: f64,
}

/// What percent is `part` of `total`?
pub fn of(part: f64, total: f64) -> FinanceResult<PercentageResult> {
    let total = ensure_nonzero(total, "total")?;
    let ratio = part / total;
    Ok(PercentageResult {
        part,
        total,
        percentage: ratio * 100.0,
        remaining: total - part,
        ratio,
    })
}

/// What is `percent`% of `total`?
pub fn value(percent: f64, total: f64) -> f64 {
    (percent / 100.0) * total
}

/// If `part` is `percent`% of the total, what is the total?
pub fn find_total(part: f64, percent: f64) -> FinanceResult<f64> {
    let percent = ensure_nonzero(percent, "percent")?;
    Ok((part * 100.0) / percent)
}

/// Percentage change from `old` to `new`, relative to |old|
pub fn change(old: f64, new: f64) -> FinanceResult<f64> {
    let old = ensure_nonzero(old, "old")?;
    Ok(((new - old) / old.abs()) * 100.0)
}

/// Profit as a percentage of revenue
pub fn margin(revenue: f64, cost: f64) -> FinanceResult<f64> {
    let revenue = ensure_nonzero(revenue, "revenue")?;
    Ok(((revenue - cost) / revenue) * 100.0)
}

/// Profit as a percentage of cost
pub fn markup(cost: f64, selling_price: f64) -> FinanceResult<f64> {
    let cost = ensure_nonzero(cost, "cost")?;
    Ok(((selling_price - cost) / cost) * 100.0)
}
