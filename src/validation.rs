//! Boundary checks run before any optimization.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::model::{Coordinate, Job, RouteConstraints};
use crate::options::PlannerOptions;

pub fn validate_jobs(jobs: &[Job]) -> Result<(), ValidationError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(jobs.len());

    for (index, job) in jobs.iter().enumerate() {
        if job.id.is_empty() {
            return Err(ValidationError::EmptyJobId { index });
        }
        if !seen.insert(job.id.as_str()) {
            return Err(ValidationError::DuplicateJobId {
                job_id: job.id.clone(),
            });
        }
        if !job.payout.is_finite() {
            return Err(ValidationError::NonFinitePayout {
                job_id: job.id.clone(),
            });
        }
        if job.payout < 0.0 {
            return Err(ValidationError::NegativePayout {
                job_id: job.id.clone(),
                payout: job.payout,
            });
        }
        validate_coordinate(job.location, || format!("job {}", job.id))?;
    }

    Ok(())
}

/// Checks the start and end coordinates, and that the start time is a real
/// calendar instant. Stop times saturate rather than overflow past it.
pub fn validate_constraints(constraints: &RouteConstraints) -> Result<(), ValidationError> {
    validate_coordinate(constraints.start_location, || "start location".to_string())?;
    if let Some(end) = constraints.end_location {
        validate_coordinate(end, || "end location".to_string())?;
    }
    if DateTime::<Utc>::from_timestamp(constraints.start_time, 0).is_none() {
        return Err(ValidationError::InvalidStartTime {
            start_time: constraints.start_time,
        });
    }
    Ok(())
}

/// Rejects options that would silently zero out drive times or produce
/// non-finite scores.
pub fn validate_options(options: &PlannerOptions) -> Result<(), ValidationError> {
    let weights = &options.score_weights;
    let checks = [
        ("average_speed_kmh", options.average_speed_kmh, false),
        ("unoptimized_minutes_per_km", options.unoptimized_minutes_per_km, true),
        ("cost_per_km", options.cost_per_km, true),
        ("score_weights.earnings_per_hour", weights.earnings_per_hour, true),
        ("score_weights.total_earnings", weights.total_earnings, true),
        ("score_weights.earnings_scale", weights.earnings_scale, false),
        ("score_weights.distance", weights.distance, true),
    ];

    for (name, value, zero_allowed) in checks {
        let valid = value.is_finite() && (value > 0.0 || (zero_allowed && value == 0.0));
        if !valid {
            return Err(ValidationError::InvalidOption { name, value });
        }
    }

    Ok(())
}

fn validate_coordinate(
    coordinate: Coordinate,
    what: impl FnOnce() -> String,
) -> Result<(), ValidationError> {
    let Coordinate { lat, lng } = coordinate;
    let valid = lat.is_finite()
        && lng.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lng);

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidCoordinate {
            what: what(),
            lat,
            lng,
        })
    }
}
