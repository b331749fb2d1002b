pub mod time_summary;

pub use time_summary::{
    client_time_summary, week_hours, week_start, ClientTimeSummary, DailyHours, WeekHours,
};
