// Errors surfaced by dashboard use cases
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("unknown industry: {0}")]
    UnknownIndustry(String),

    #[error("dashboard service has stopped")]
    ServiceStopped,
}
