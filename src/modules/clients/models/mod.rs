mod client;

pub use client::{BillingModel, Client};
