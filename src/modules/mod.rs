use actix_web::web;

use crate::config::TaxConfig;
use crate::middleware::json_error_handler;

pub mod clients;
pub mod expenses;
pub mod health;
pub mod invoices;
pub mod reports;
pub mod taxes;
pub mod time_tracking;

/// Register shared services and every route group on the app
pub fn configure(cfg: &mut web::ServiceConfig, tax: TaxConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::Data::new(invoices::InvoiceAggregator::new()))
        .app_data(web::Data::new(taxes::TaxCalculator::new()))
        .app_data(web::Data::new(clients::ChargeEstimator::new()))
        .app_data(web::Data::new(reports::ReportService::default()))
        .app_data(web::Data::new(tax));

    health::controllers::configure(cfg);
    clients::controllers::configure(cfg);
    time_tracking::controllers::configure(cfg);
    invoices::controllers::configure(cfg);
    taxes::controllers::configure(cfg);
    reports::controllers::configure(cfg);
}
