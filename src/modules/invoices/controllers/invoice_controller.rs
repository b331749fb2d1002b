use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::BillingPeriod;
use crate::modules::clients::models::Client;
use crate::modules::invoices::services::InvoiceAggregator;
use crate::modules::time_tracking::models::TimeEntry;

/// Request body for aggregating a single client's month
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateInvoiceRequest {
    pub client: Client,
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
    #[serde(default)]
    pub gst_registered: bool,
    pub month: u32,
    pub year: i32,
}

/// Aggregate a monthly invoice
/// POST /invoices/aggregate
pub async fn aggregate_invoice(
    aggregator: web::Data<InvoiceAggregator>,
    request: web::Json<AggregateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    let period = BillingPeriod::new(request.month, request.year)?;

    let invoice = aggregator.aggregate_monthly(
        &request.client,
        &request.entries,
        request.gst_registered,
        period.month,
        period.year,
    );

    tracing::info!(
        client_id = %invoice.client_id,
        period = %period,
        total = %invoice.total,
        "Invoice aggregated"
    );

    Ok(HttpResponse::Ok().json(invoice))
}

/// Configure invoice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/invoices").route("/aggregate", web::post().to(aggregate_invoice)));
}
