mod tax_controller;

pub use tax_controller::{configure, gst, income_tax, tax_summary, tds};
