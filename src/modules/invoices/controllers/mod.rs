mod invoice_controller;

pub use invoice_controller::{aggregate_invoice, configure, AggregateInvoiceRequest};
