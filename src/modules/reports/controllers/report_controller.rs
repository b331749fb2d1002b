use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::error;

use crate::config::TaxConfig;
use crate::core::{AppError, BillingPeriod, ReportingPeriod, Result};
use crate::modules::reports::models::RecordSnapshot;
use crate::modules::reports::services::ReportService;

/// Month reference as sent by the UI (`{"month": 4, "year": 2025}`)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MonthParam {
    pub month: u32,
    pub year: i32,
}

impl MonthParam {
    fn validate(self) -> Result<BillingPeriod> {
        BillingPeriod::new(self.month, self.year)
    }
}

/// Request body for POST /reports/dashboard
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardRequest {
    #[serde(default)]
    pub snapshot: RecordSnapshot,
    pub month: u32,
    pub year: i32,
}

/// Request body for POST /reports/tax
///
/// Either `financialYear` (start year, April..March) or both `from` and `to`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxReportRequest {
    #[serde(default)]
    pub snapshot: RecordSnapshot,
    #[serde(default)]
    pub financial_year: Option<i32>,
    #[serde(default)]
    pub from: Option<MonthParam>,
    #[serde(default)]
    pub to: Option<MonthParam>,
    #[serde(default)]
    pub special_category_state: Option<bool>,
}

impl TaxReportRequest {
    /// Resolve the requested reporting period
    pub fn period(&self) -> Result<ReportingPeriod> {
        match (self.from, self.to, self.financial_year) {
            (Some(from), Some(to), _) => ReportingPeriod::new(from.validate()?, to.validate()?),
            (None, None, Some(start_year)) => ReportingPeriod::financial_year(start_year),
            (None, None, None) => Err(AppError::validation(
                "either financialYear or from/to is required",
            )),
            _ => Err(AppError::validation("from and to must be given together")),
        }
    }
}

/// Monthly invoices and KPIs for every client
/// POST /reports/dashboard
pub async fn dashboard(
    service: web::Data<ReportService>,
    request: web::Json<DashboardRequest>,
) -> Result<HttpResponse> {
    let period = BillingPeriod::new(request.month, request.year)?;
    let dashboard = service.monthly_dashboard(&request.snapshot, period);

    Ok(HttpResponse::Ok().json(dashboard))
}

/// Receipts rollup and tax summary for a period
/// POST /reports/tax
pub async fn tax_report(
    service: web::Data<ReportService>,
    settings: web::Data<TaxConfig>,
    request: web::Json<TaxReportRequest>,
) -> Result<HttpResponse> {
    let period = request.period().map_err(|e| {
        error!("Rejected tax report request: {}", e);
        e
    })?;
    let special_category_state = request
        .special_category_state
        .unwrap_or(settings.special_category_state);

    let report = service.tax_report(&request.snapshot, period, special_category_state);

    Ok(HttpResponse::Ok().json(report))
}

/// Configure routes for reports module
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/dashboard", web::post().to(dashboard))
            .route("/tax", web::post().to(tax_report)),
    );
}
