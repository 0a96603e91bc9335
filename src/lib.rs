//! gig-route-planner core
//!
//! Route sequencing and job bundle selection for a single gig worker: pick
//! which jobs to take, visit them in a good order, and rank the outcomes by
//! earnings per hour.

pub mod traits;
pub mod model;
pub mod haversine;
pub mod duration;
pub mod options;
pub mod error;
pub mod validation;
pub mod sequencer;
pub mod bundle;
pub mod planner;
pub mod format;

pub use error::ValidationError;
pub use haversine::HaversineModel;
pub use model::{
    BundleCandidate, Coordinate, Job, JobCategory, OptimizedRoute, RouteConstraints, RouteSavings,
    RouteStop,
};
pub use options::{PlannerOptions, ScoreWeights};
pub use planner::Planner;
