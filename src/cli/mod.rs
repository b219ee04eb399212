//! Terminal rendering for the role dashboards.

pub mod business;
pub mod platform;
pub mod portfolio;
pub mod setup;
pub mod ui;
