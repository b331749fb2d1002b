// Invoices module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{AggregatedInvoice, LineItem};
pub use services::{aggregate_monthly_invoice, InvoiceAggregator};
