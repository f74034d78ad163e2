//! Financial Math - formula engines for everyday financial mathematics
//!
//! This library provides:
//! - Compound interest (discrete, continuous, doubling time, growth curves)
//! - Loan amortization (level payment, monthly schedule, affordability)
//! - Time value of money (PV/FV, annuities, IRR by bisection)
//! - Percentage arithmetic (part-of-total, change, margin, markup)
//!
//! Every engine is a set of pure functions returning plain records; nothing
//! holds state between calls.

pub mod compound;
pub mod error;
pub mod loan;
pub mod percentage;
pub mod time_value;
pub mod validation;

// Re-export commonly used types
pub use compound::{CompoundResult, GrowthSeries};
pub use error::{FinanceError, FinanceResult};
pub use loan::{AmortizationRow, LoanResult};
pub use percentage::PercentageResult;
pub use time_value::{IrrConfig, TimeCurve, TimeValueResult};
pub use validation::ValidationReport;
