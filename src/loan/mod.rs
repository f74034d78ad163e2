//! Loan amortization: level payments, schedules, affordability

mod amortization;
mod schedule;

pub use amortization::{affordable_principal, monthly_payment, rate_comparison, schedule};
pub use schedule::{AmortizationRow, LoanResult};
