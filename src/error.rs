/// Failures delivering the inspected page to the detector

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InspectError {
    #[error("no active tab in the current window")]
    NoActiveTab,

    #[error("could not run the page collector: {0}")]
    Injection(String),

    #[error("malformed page snapshot: {0}")]
    Snapshot(String),
}
