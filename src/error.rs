//! Input validation errors.

use thiserror::Error;

/// Errors returned when jobs or constraints fail boundary checks.
///
/// The optimizer itself is infallible; anything it would have to defend
/// against is rejected here first.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("job {job_id} has a negative payout ({payout})")]
    NegativePayout { job_id: String, payout: f64 },
    #[error("job {job_id} has a non-finite payout")]
    NonFinitePayout { job_id: String },
    #[error("{what} has an invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { what: String, lat: f64, lng: f64 },
    #[error("job at index {index} has an empty id")]
    EmptyJobId { index: usize },
    #[error("job id {job_id} appears more than once")]
    DuplicateJobId { job_id: String },
    #[error("start time {start_time} is outside the representable date range")]
    InvalidStartTime { start_time: i64 },
    #[error("option {name} has an invalid value ({value})")]
    InvalidOption { name: &'static str, value: f64 },
}
