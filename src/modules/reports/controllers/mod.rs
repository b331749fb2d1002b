mod report_controller;

pub use report_controller::{
    configure, dashboard, tax_report, DashboardRequest, MonthParam, TaxReportRequest,
};
