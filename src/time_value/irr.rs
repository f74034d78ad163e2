//! Internal Rate of Return (IRR) calculation
//!
//! Bisection on NPV(r) = 0 over a fixed search domain. Correctness depends
//! only on the root being bracketed, not on the NPV curve being smooth or
//! monotonic.

use log::debug;
use serde::{Deserialize, Serialize};

/// Search parameters for the IRR bisection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrConfig {
    /// Lower end of the search domain (periodic rate)
    pub lower_bound: f64,

    /// Upper end of the search domain (periodic rate)
    pub upper_bound: f64,

    /// Stop as soon as |NPV(mid)| falls below this
    pub tolerance: f64,

    /// Iteration ceiling; the final bracket midpoint is returned when reached
    pub max_iterations: u32,
}

impl Default for IrrConfig {
    fn default() -> Self {
        Self {
            lower_bound: -0.99, // -99% periodic rate
            upper_bound: 10.0,  // 1000% periodic rate
            tolerance: 1e-8,
            max_iterations: 200,
        }
    }
}

/// Net present value of `cashflows` at a periodic `rate`
///
/// `cashflows[0]` is the period-0 flow and is not discounted.
pub fn npv(cashflows: &[f64], rate: f64) -> f64 {
    cashflows
        .iter()
        .enumerate()
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// IRR with the default search domain (-0.99, 10.0), tolerance 1e-8 and 200 iterations
///
/// # Returns
/// * `Option<f64>` - Periodic IRR as a decimal, or None if NPV does not change
///   sign across the search domain. Empty or all-zero flows have no
///   distinguished root and also return None.
pub fn irr_bisect(cashflows: &[f64]) -> Option<f64> {
    irr_bisect_with(cashflows, &IrrConfig::default())
}

/// IRR by bisection with explicit search parameters
pub fn irr_bisect_with(cashflows: &[f64], config: &IrrConfig) -> Option<f64> {
    // No flows, or only zero flows: every rate is a root, none is meaningful
    if cashflows.iter().all(|&cf| cf == 0.0) {
        return None;
    }

    let mut low = config.lower_bound;
    let mut high = config.upper_bound;
    let mut npv_low = npv(cashflows, low);
    let npv_high = npv(cashflows, high);

    if npv_low * npv_high > 0.0 {
        debug!(
            "IRR not bracketed: NPV({}) = {:.6e}, NPV({}) = {:.6e}",
            low, npv_low, high, npv_high
        );
        return None;
    }

    for _ in 0..config.max_iterations {
        let mid = (low + high) / 2.0;
        let npv_mid = npv(cashflows, mid);

        if npv_mid.abs() < config.tolerance {
            return Some(mid);
        }

        if npv_low * npv_mid < 0.0 {
            high = mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    debug!(
        "IRR bisection reached {} iterations, bracket [{}, {}]",
        config.max_iterations, low, high
    );
    Some((low + high) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_simple_irr() {
        // -1000 + 1100/1.10 = 0
        let irr = irr_bisect(&[-1000.0, 1100.0]).unwrap();
        assert_abs_diff_eq!(irr, 0.10, epsilon = 1e-4);
    }

    #[test]
    fn test_project_cashflows() {
        let cashflows = [-100_000.0, 25_000.0, 30_000.0, 35_000.0, 40_000.0, 20_000.0];
        let irr = irr_bisect(&cashflows).unwrap();
        assert_abs_diff_eq!(irr, 0.1510, epsilon = 1e-4);
        assert!(npv(&cashflows, irr).abs() < 1e-3);
    }

    #[test]
    fn test_irr_recovers_loan_rate() {
        // Borrower's view of the 500K / 24% / 36-month loan: the IRR is r_m = 2%
        let payment = crate::loan::monthly_payment(500_000.0, 0.24, 36).unwrap();
        let mut cashflows = vec![500_000.0];
        cashflows.extend(std::iter::repeat(-payment).take(36));

        let irr = irr_bisect(&cashflows).unwrap();
        assert_abs_diff_eq!(irr, 0.02, epsilon = 1e-6);
    }

    #[test]
    fn test_no_sign_change_is_not_found() {
        assert_eq!(irr_bisect(&[100.0, 200.0, 300.0]), None);
        assert_eq!(irr_bisect(&[-100.0, -50.0]), None);
        assert_eq!(irr_bisect(&[]), None);
        assert_eq!(irr_bisect(&[0.0, 0.0]), None);
    }

    #[test]
    fn test_iteration_ceiling_returns_bracket_midpoint() {
        let config = IrrConfig {
            tolerance: 0.0,
            max_iterations: 1,
            ..IrrConfig::default()
        };
        // One step on (-0.99, 10.0): mid = 4.505, NPV(mid) < 0 so the root lies below
        let irr = irr_bisect_with(&[-1000.0, 1100.0], &config).unwrap();
        assert_abs_diff_eq!(irr, (-0.99 + 4.505) / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_custom_domain_excludes_root() {
        let config = IrrConfig {
            lower_bound: 0.2,
            upper_bound: 0.5,
            ..IrrConfig::default()
        };
        assert_eq!(irr_bisect_with(&[-1000.0, 1100.0], &config), None);
    }

    #[test]
    fn test_npv() {
        assert_abs_diff_eq!(npv(&[-1000.0, 1100.0], 0.10), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(npv(&[-1000.0, 500.0, 500.0, 500.0], 0.2), 53.2407, epsilon = 1e-4);
        assert_eq!(npv(&[], 0.05), 0.0);
    }
}
