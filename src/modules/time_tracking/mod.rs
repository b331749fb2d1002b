// Time tracking module

pub mod controllers;
pub mod models;
pub mod services;

pub use models::TimeEntry;
