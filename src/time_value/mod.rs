//! Time value of money: PV/FV, annuities, IRR, rate sweeps and curves

mod curve;
mod discount;
mod irr;

pub use curve::{rate_sweep, time_curve, TimeCurve};
pub use discount::{analyze, future_value, fv_annuity, present_value, pv_annuity, TimeValueResult};
pub use irr::{irr_bisect, irr_bisect_with, npv, IrrConfig};
