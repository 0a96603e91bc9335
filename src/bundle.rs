//! Bundle selection: which jobs to take together.
//!
//! Exhaustive subset search is exponential, so the pool is sorted by payout
//! and only contiguous windows of the sorted list are considered, one window
//! size at a time up to the configured maximum. That is O(n * max_size)
//! routes to evaluate.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::format::format_duration;
use crate::model::{BundleCandidate, Job, OptimizedRoute, RouteConstraints};
use crate::options::{PlannerOptions, ScoreWeights};
use crate::sequencer::optimize_route;
use crate::traits::DistanceModel;

/// Ranks bundles from `pool`, evaluating windows one after another.
///
/// Input is assumed validated.
pub fn select_bundles<M>(
    pool: &[Job],
    constraints: &RouteConstraints,
    options: &PlannerOptions,
    model: &M,
) -> Vec<BundleCandidate>
where
    M: DistanceModel + ?Sized,
{
    let sorted = sort_by_payout(pool);
    let windows = candidate_windows(&sorted, options.max_bundle_size);
    let evaluated = windows.len();

    let candidates = windows
        .into_iter()
        .filter_map(|window| evaluate_window(window, constraints, options, model))
        .collect();

    finish(candidates, pool.len(), evaluated, options.top_k)
}

/// Same as [`select_bundles`], with windows evaluated on the rayon pool.
///
/// Produces exactly the same ranking as the sequential search.
pub fn select_bundles_parallel<M>(
    pool: &[Job],
    constraints: &RouteConstraints,
    options: &PlannerOptions,
    model: &M,
) -> Vec<BundleCandidate>
where
    M: DistanceModel + ?Sized,
{
    let sorted = sort_by_payout(pool);
    let windows = candidate_windows(&sorted, options.max_bundle_size);
    let evaluated = windows.len();

    let candidates = windows
        .into_par_iter()
        .filter_map(|window| evaluate_window(window, constraints, options, model))
        .collect();

    finish(candidates, pool.len(), evaluated, options.top_k)
}

/// Pool sorted by payout, highest first. Equal payouts keep input order.
pub fn sort_by_payout(pool: &[Job]) -> Vec<Job> {
    let mut sorted = pool.to_vec();
    sorted.sort_by(|a, b| b.payout.total_cmp(&a.payout));
    sorted
}

/// Every contiguous window of `sorted` of width 1 up to `max_size`,
/// smallest widths first.
pub fn candidate_windows(sorted: &[Job], max_size: usize) -> Vec<&[Job]> {
    let largest = max_size.min(sorted.len());
    (1..=largest).flat_map(move |size| sorted.windows(size)).collect()
}

/// Composite value of a route: hourly rate, then absolute earnings, then a
/// bonus for short total travel. The `+ 1` keeps the distance term finite.
pub fn score(route: &OptimizedRoute, weights: &ScoreWeights) -> f64 {
    let earnings_scale = if weights.earnings_scale > 0.0 {
        weights.earnings_scale
    } else {
        1.0
    };

    route.earnings_per_hour * weights.earnings_per_hour
        + (route.total_earnings / earnings_scale) * weights.total_earnings
        + (1.0 / (route.total_distance_km + 1.0)) * weights.distance
}

/// Short explanation shown next to a bundle, e.g. "3 jobs for $160.00 in 2h 15m".
pub fn reasoning(route: &OptimizedRoute) -> String {
    let count = route.jobs.len();
    let noun = if count == 1 { "job" } else { "jobs" };
    format!(
        "{} {} for ${:.2} in {}",
        count,
        noun,
        route.total_earnings,
        format_duration(route.total_duration_minutes)
    )
}

fn evaluate_window<M>(
    window: &[Job],
    constraints: &RouteConstraints,
    options: &PlannerOptions,
    model: &M,
) -> Option<BundleCandidate>
where
    M: DistanceModel + ?Sized,
{
    let route = optimize_route(window, constraints, options, model);

    if let Some(limit) = constraints.max_total_duration {
        if route.total_duration_minutes > limit {
            trace!(
                jobs = window.len(),
                duration_min = route.total_duration_minutes,
                limit,
                "bundle exceeds max duration"
            );
            return None;
        }
    }

    let weights = if constraints.prioritize_hourly_rate {
        options.score_weights
    } else {
        options.score_weights.favoring_totals()
    };

    Some(BundleCandidate {
        jobs: window.to_vec(),
        score: score(&route, &weights),
        reasoning: reasoning(&route),
        route,
    })
}

fn finish(
    mut candidates: Vec<BundleCandidate>,
    pool_size: usize,
    evaluated: usize,
    top_k: usize,
) -> Vec<BundleCandidate> {
    let feasible = candidates.len();
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates.truncate(top_k);

    debug!(
        pool_size,
        evaluated,
        feasible,
        returned = candidates.len(),
        "bundle search finished"
    );

    candidates
}
