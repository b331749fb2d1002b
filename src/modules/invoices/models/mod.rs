mod aggregated_invoice;
pub mod line_item;

pub use aggregated_invoice::AggregatedInvoice;
pub use line_item::LineItem;
