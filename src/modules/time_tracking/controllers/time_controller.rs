use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::time_tracking::models::TimeEntry;
use crate::modules::time_tracking::services::{client_time_summary, week_hours};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummaryRequest {
    pub client_id: String,
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRequest {
    /// Any date inside the wanted week
    pub reference_date: NaiveDate,
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
}

/// POST /time/summary
pub async fn client_summary(
    request: web::Json<ClientSummaryRequest>,
) -> Result<HttpResponse, AppError> {
    if request.client_id.trim().is_empty() {
        return Err(AppError::validation("clientId cannot be empty"));
    }

    Ok(HttpResponse::Ok().json(client_time_summary(&request.client_id, &request.entries)))
}

/// POST /time/week
pub async fn week(request: web::Json<WeekRequest>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(week_hours(request.reference_date, &request.entries)))
}

/// Configure time tracking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/time")
            .route("/summary", web::post().to(client_summary))
            .route("/week", web::post().to(week)),
    );
}
