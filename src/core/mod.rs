//! Pure analytics over marketplace records.
//!
//! Every metrics function in here is a deterministic function of its inputs:
//! no I/O, no shared state, safe to call concurrently.

pub mod business;
pub mod dashboard;
pub mod group;
pub mod log;
pub mod model;
pub mod month;
pub mod platform;
pub mod portfolio;
pub mod snapshot;

// Re-export main types for cleaner imports
pub use dashboard::{Dashboard, DashboardOptions, Session};
pub use model::{
    BusinessRecord, BusinessStatus, InvestmentRecord, InvestmentStatus, ReturnRecord, Role,
    UserRecord,
};
pub use month::MonthKey;
pub use snapshot::MarketSnapshot;
