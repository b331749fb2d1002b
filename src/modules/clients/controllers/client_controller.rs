use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::clients::models::Client;
use crate::modules::clients::services::ChargeEstimator;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargesRequest {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub gst_registered: bool,
}

/// Estimated GST/TDS/net per client
/// POST /clients/charges
pub async fn estimate_charges(
    estimator: web::Data<ChargeEstimator>,
    request: web::Json<ChargesRequest>,
) -> Result<HttpResponse, AppError> {
    let sheet = estimator.estimate_all(&request.clients, request.gst_registered);

    Ok(HttpResponse::Ok().json(sheet))
}

/// Configure client routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/clients").route("/charges", web::post().to(estimate_charges)));
}
