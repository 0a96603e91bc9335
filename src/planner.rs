//! Planner entry point.
//!
//! A [`Planner`] owns immutable options and a distance model. Every call is a
//! pure function of its arguments, so one planner can be shared across
//! threads and reused for any number of requests.

use crate::bundle::{select_bundles, select_bundles_parallel};
use crate::error::ValidationError;
use crate::haversine::HaversineModel;
use crate::model::{BundleCandidate, Coordinate, Job, OptimizedRoute, RouteConstraints};
use crate::options::PlannerOptions;
use crate::sequencer::optimize_route;
use crate::traits::DistanceModel;
use crate::validation::{validate_constraints, validate_jobs, validate_options};

#[derive(Debug, Clone)]
pub struct Planner<M = HaversineModel> {
    options: PlannerOptions,
    model: M,
}

impl Default for Planner<HaversineModel> {
    fn default() -> Self {
        Self::new(PlannerOptions::default())
    }
}

impl Planner<HaversineModel> {
    /// Planner using great-circle distances at `options.average_speed_kmh`.
    pub fn new(options: PlannerOptions) -> Self {
        let model = HaversineModel::new(options.average_speed_kmh);
        Self { options, model }
    }
}

impl<M: DistanceModel> Planner<M> {
    pub fn with_model(options: PlannerOptions, model: M) -> Self {
        Self { options, model }
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn distance_km(&self, from: Coordinate, to: Coordinate) -> f64 {
        self.model.distance_km(from, to)
    }

    pub fn drive_minutes(&self, km: f64) -> u32 {
        self.model.drive_minutes(km)
    }

    pub fn task_minutes(&self, job: &Job) -> u32 {
        self.options.durations.task_minutes(job)
    }

    /// Sequences all of `jobs` into one route.
    pub fn optimize_route(
        &self,
        jobs: &[Job],
        constraints: &RouteConstraints,
    ) -> Result<OptimizedRoute, ValidationError> {
        validate_options(&self.options)?;
        validate_constraints(constraints)?;
        validate_jobs(jobs)?;
        Ok(optimize_route(jobs, constraints, &self.options, &self.model))
    }

    /// Ranks the best bundles drawn from `pool`, highest score first.
    ///
    /// An empty result means no bundle fits the constraints; it is not an
    /// error.
    pub fn find_best_bundles(
        &self,
        pool: &[Job],
        constraints: &RouteConstraints,
    ) -> Result<Vec<BundleCandidate>, ValidationError> {
        validate_options(&self.options)?;
        validate_constraints(constraints)?;
        validate_jobs(pool)?;
        Ok(select_bundles(pool, constraints, &self.options, &self.model))
    }

    /// Like [`Planner::find_best_bundles`], evaluating candidates on the
    /// rayon thread pool. The ranking is identical.
    pub fn find_best_bundles_parallel(
        &self,
        pool: &[Job],
        constraints: &RouteConstraints,
    ) -> Result<Vec<BundleCandidate>, ValidationError> {
        validate_options(&self.options)?;
        validate_constraints(constraints)?;
        validate_jobs(pool)?;
        Ok(select_bundles_parallel(pool, constraints, &self.options, &self.model))
    }
}
