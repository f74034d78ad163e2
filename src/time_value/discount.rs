//! Present value, future value and ordinary annuities
//!
//! FV = PV(1+r)^t  <=>  PV = FV/(1+r)^t

use serde::{Deserialize, Serialize};

/// Both directions of a single-amount time value calculation
///
/// `analyze` treats one amount as a present value (projected forward) and as
/// a future value (discounted back) under the same growth factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeValueResult {
    /// amount / growth_factor
    pub present_value: f64,

    /// amount * growth_factor
    pub future_value: f64,

    pub rate: f64,
    pub years: f64,

    /// (1+r)^t
    pub growth_factor: f64,

    /// 1 / (1+r)^t
    pub discount_factor: f64,
}

/// Grow a present value forward: pv * (1+rate)^years
pub fn future_value(pv: f64, rate: f64, years: f64) -> f64 {
    pv * (1.0 + rate).powf(years)
}

/// Discount a future value back: fv / (1+rate)^years
pub fn present_value(fv: f64, rate: f64, years: f64) -> f64 {
    fv / (1.0 + rate).powf(years)
}

/// Given an amount today, compute both the FV and PV interpretations
pub fn analyze(amount: f64, rate: f64, years: f64) -> TimeValueResult {
    let growth_factor = (1.0 + rate).powf(years);
    TimeValueResult {
        present_value: amount / growth_factor,
        future_value: amount * growth_factor,
        rate,
        years,
        growth_factor,
        discount_factor: 1.0 / growth_factor,
    }
}

/// Future value of an ordinary annuity (equal payments at the end of each period)
///
/// FV = PMT * [(1+r)^n - 1] / r
pub fn fv_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return payment * periods as f64;
    }
    payment * ((1.0 + rate).powf(periods as f64) - 1.0) / rate
}

/// Present value of an ordinary annuity
///
/// PV = PMT * [1 - (1+r)^(-n)] / r
pub fn pv_annuity(payment: f64, rate: f64, periods: u32) -> f64 {
    if rate == 0.0 {
        return payment * periods as f64;
    }
    payment * (1.0 - (1.0 + rate).powf(-(periods as f64))) / rate
}
