pub mod invoice_aggregator;

pub use invoice_aggregator::{aggregate_monthly_invoice, InvoiceAggregator};
