//! Tax controller for HTTP endpoints
//!
//! Stateless: every request carries the aggregates it wants evaluated.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::error::AppError;
use crate::modules::taxes::models::{ClientPayment, GstInput, TaxSummaryInput};
use crate::modules::taxes::services::{calculate_income_tax_new_regime, TaxCalculator};

/// Request body for POST /taxes/tds
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TdsRequest {
    #[serde(default)]
    pub payments_by_client: Vec<ClientPayment>,
}

/// Request body for POST /taxes/income-tax
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTaxRequest {
    pub taxable_income: Decimal,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeTaxResponse {
    pub taxable_income: Decimal,
    pub income_tax: Decimal,
}

/// Full tax summary
/// POST /taxes/summary
pub async fn tax_summary(
    calculator: web::Data<TaxCalculator>,
    request: web::Json<TaxSummaryInput>,
) -> Result<HttpResponse, AppError> {
    let summary = calculator.tax_summary(&request);
    tracing::info!(recommended = %summary.recommended, "Tax summary computed");

    Ok(HttpResponse::Ok().json(summary))
}

/// GST liability only
/// POST /taxes/gst
pub async fn gst(
    calculator: web::Data<TaxCalculator>,
    request: web::Json<GstInput>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(calculator.calculate_gst(&request)))
}

/// Simulated TDS only
/// POST /taxes/tds
pub async fn tds(
    calculator: web::Data<TaxCalculator>,
    request: web::Json<TdsRequest>,
) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(calculator.calculate_tds(&request.payments_by_client)))
}

/// New-regime slab tax for a taxable income figure
/// POST /taxes/income-tax
pub async fn income_tax(request: web::Json<IncomeTaxRequest>) -> Result<HttpResponse, AppError> {
    let taxable_income = request.taxable_income;

    Ok(HttpResponse::Ok().json(IncomeTaxResponse {
        taxable_income,
        income_tax: calculate_income_tax_new_regime(taxable_income),
    }))
}

/// Configure tax routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/taxes")
            .route("/summary", web::post().to(tax_summary))
            .route("/gst", web::post().to(gst))
            .route("/tds", web::post().to(tds))
            .route("/income-tax", web::post().to(income_tax)),
    );
}
