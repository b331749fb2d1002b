// Clients module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{BillingModel, Client};
pub use services::ChargeEstimator;
