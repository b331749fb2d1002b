use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::taxes::models::tax_rules::RULES_YEAR;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    /// Financial year whose GST/TDS/slab rules the engine applies
    pub tax_rules: String,
    pub timestamp: String,
}

/// GET /health
///
/// Liveness only: the engine holds no connections, so answering is enough.
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tax_rules: RULES_YEAR.to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}
