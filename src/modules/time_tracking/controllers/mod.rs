mod time_controller;

pub use time_controller::{client_summary, configure, week};
