pub mod charge_estimator;

pub use charge_estimator::{ChargeEstimate, ChargeEstimator, ChargeSheet, ChargeTotals};
