//! Fixed battery of known-answer checks across all four engines
//!
//! Backs the CLI `--validate` mode: each check compares an engine output with
//! a closed-form expectation under an absolute tolerance.

use serde::Serialize;

use crate::error::FinanceResult;
use crate::{compound, loan, percentage, time_value};

/// Default absolute tolerance for a check
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Outcome of one named check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub got: f64,
    pub expected: f64,
    pub tolerance: f64,
    pub passed: bool,
}

impl CheckOutcome {
    fn new(name: &'static str, got: f64, expected: f64, tolerance: f64) -> Self {
        Self {
            name,
            got,
            expected,
            tolerance,
            passed: (got - expected).abs() < tolerance,
        }
    }
}

/// All check outcomes, in the order they ran
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub checks: Vec<CheckOutcome>,
}

impl ValidationReport {
    fn check(&mut self, name: &'static str, got: f64, expected: f64) {
        self.check_with_tolerance(name, got, expected, DEFAULT_TOLERANCE);
    }

    fn check_with_tolerance(&mut self, name: &'static str, got: f64, expected: f64, tolerance: f64) {
        self.checks.push(CheckOutcome::new(name, got, expected, tolerance));
    }

    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.checks.iter().filter(|c| !c.passed)
    }
}

/// Run the full battery
///
/// An engine rejecting one of the fixed inputs is a defect, so it is
/// propagated rather than recorded as a failed check.
pub fn run_checks() -> FinanceResult<ValidationReport> {
    let mut report = ValidationReport::default();

    // Compound interest
    report.check(
        "CI: basic annual",
        compound::calculate(1000.0, 0.05, 1, 10.0)?.amount,
        1000.0 * 1.05_f64.powi(10),
    );
    report.check(
        "CI: continuous",
        compound::continuous(1000.0, 0.05, 10.0),
        1000.0 * 0.5_f64.exp(),
    );
    report.check(
        "CI: effective rate",
        compound::calculate(1000.0, 0.12, 12, 1.0)?.effective_annual_rate,
        1.01_f64.powi(12) - 1.0,
    );
    report.check(
        "CI: doubling time",
        compound::doubling_time(0.07, 1),
        std::f64::consts::LN_2 / 1.07_f64.ln(),
    );

    // Loan amortization
    report.check("Loan: zero rate", loan::monthly_payment(12_000.0, 0.0, 12)?, 1000.0);
    let rm: f64 = 0.01;
    let growth = (1.0 + rm).powi(12);
    report.check(
        "Loan: 12mo payment",
        loan::monthly_payment(100_000.0, 0.12, 12)?,
        100_000.0 * rm * growth / (growth - 1.0),
    );
    report.check_with_tolerance(
        "Loan: balance->0",
        loan::schedule(100_000.0, 0.12, 12)?.final_balance(),
        0.0,
        0.01,
    );

    // Time value
    let fv = time_value::future_value(5000.0, 0.08, 10.0);
    report.check_with_tolerance(
        "TV: FV->PV roundtrip",
        time_value::present_value(fv, 0.08, 10.0),
        5000.0,
        1e-4,
    );
    report.check("TV: annuity zero-rate", time_value::fv_annuity(100.0, 0.0, 12), 1200.0);
    report.check("TV: PV annuity r=0", time_value::pv_annuity(100.0, 0.0, 12), 1200.0);
    // A missing root surfaces as NaN, which never passes
    report.check_with_tolerance(
        "TV: IRR simple",
        time_value::irr_bisect(&[-1000.0, 1100.0]).unwrap_or(f64::NAN),
        0.10,
        1e-4,
    );

    // Percentages
    report.check("Pct: of", percentage::of(25.0, 200.0)?.percentage, 12.5);
    report.check("Pct: value", percentage::value(15.0, 200.0), 30.0);
    report.check("Pct: find_total", percentage::find_total(30.0, 15.0)?, 200.0);
    report.check("Pct: change", percentage::change(80.0, 100.0)?, 25.0);
    report.check("Pct: margin", percentage::margin(1000.0, 600.0)?, 40.0);
    report.check_with_tolerance("Pct: markup", percentage::markup(600.0, 1000.0)?, 66.666667, 1e-4);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battery_passes() {
        let report = run_checks().unwrap();
        assert_eq!(report.checks.len(), 17);
        let failed: Vec<_> = report.failures().map(|c| c.name).collect();
        assert!(failed.is_empty(), "failed checks: {:?}", failed);
        assert!(report.all_passed());
        assert_eq!(report.passed_count(), 17);
    }

    #[test]
    fn test_nan_never_passes() {
        let outcome = CheckOutcome::new("nan", f64::NAN, 0.1, 1.0);
        assert!(!outcome.passed);
    }

    #[test]
    fn test_failed_check_is_reported() {
        let mut report = ValidationReport::default();
        report.check("ok", 1.0, 1.0);
        report.check_with_tolerance("off", 1.5, 1.0, 0.1);
        assert!(!report.all_passed());
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.failures().next().map(|c| c.name), Some("off"));
    }
}
