//! Route sequencing for a fixed set of jobs.
//!
//! A route is built in three steps: nearest-neighbor construction, 2-opt
//! improvement on geometric distance, then a walk that stamps arrival and
//! departure times on every stop. Local search optimizes distance only; time
//! and earnings are re-derived from whatever order it settles on.

use tracing::{debug, trace};

use crate::model::{Coordinate, Job, OptimizedRoute, RouteConstraints, RouteSavings, RouteStop};
use crate::options::PlannerOptions;
use crate::traits::DistanceModel;

/// Minimum distance reduction (km) for a 2-opt move to count as improving.
const IMPROVEMENT_EPSILON_KM: f64 = 1e-9;

/// Builds a route for `jobs` and computes its schedule and metrics.
///
/// Input is assumed validated. An empty job list yields
/// [`OptimizedRoute::empty`]; a single job skips sequencing.
pub fn optimize_route<M>(
    jobs: &[Job],
    constraints: &RouteConstraints,
    options: &PlannerOptions,
    model: &M,
) -> OptimizedRoute
where
    M: DistanceModel + ?Sized,
{
    if jobs.is_empty() {
        return OptimizedRoute::empty();
    }

    let start = constraints.start_location;
    let end = constraints.end_location;

    let mut order = nearest_neighbor_order(jobs, start, model);
    if order.len() > 1 {
        improve_two_opt(&mut order, jobs, start, end, model, options.two_opt_max_passes);
    }

    let route = materialize(&order, jobs, constraints, options, model);

    debug!(
        jobs = jobs.len(),
        distance_km = route.total_distance_km,
        duration_min = route.total_duration_minutes,
        earnings = route.total_earnings,
        "optimized route"
    );

    route
}

/// Greedy construction: always travel to the closest unvisited job.
///
/// Ties go to the job that appears first in `jobs`.
pub fn nearest_neighbor_order<M>(jobs: &[Job], start: Coordinate, model: &M) -> Vec<usize>
where
    M: DistanceModel + ?Sized,
{
    let mut visited = vec![false; jobs.len()];
    let mut order = Vec::with_capacity(jobs.len());
    let mut current = start;

    while order.len() < jobs.len() {
        let mut best: Option<(usize, f64)> = None;

        for (index, job) in jobs.iter().enumerate() {
            if visited[index] {
                continue;
            }
            let km = model.distance_km(current, job.location);
            match best {
                Some((_, best_km)) if km >= best_km => {}
                _ => best = Some((index, km)),
            }
        }

        let Some((index, _)) = best else {
            break;
        };
        visited[index] = true;
        order.push(index);
        current = jobs[index].location;
    }

    order
}

/// Geometric length of a route: start, each job in `order`, then `end` if set.
pub fn route_distance<M>(
    order: &[usize],
    jobs: &[Job],
    start: Coordinate,
    end: Option<Coordinate>,
    model: &M,
) -> f64
where
    M: DistanceModel + ?Sized,
{
    let mut total = 0.0;
    let mut current = start;
    for &index in order {
        let next = jobs[index].location;
        total += model.distance_km(current, next);
        current = next;
    }
    if let Some(end) = end {
        if !order.is_empty() {
            total += model.distance_km(current, end);
        }
    }
    total
}

/// 2-opt: reverse segments of `order` while doing so shortens the route.
///
/// Stops after a pass with no improving move or after `max_passes` passes.
/// Returns the number of passes run.
pub fn improve_two_opt<M>(
    order: &mut [usize],
    jobs: &[Job],
    start: Coordinate,
    end: Option<Coordinate>,
    model: &M,
    max_passes: usize,
) -> usize
where
    M: DistanceModel + ?Sized,
{
    let n = order.len();
    if n < 2 {
        return 0;
    }

    for pass in 0..max_passes {
        let mut improved = false;

        for i in 0..n - 1 {
            for j in i + 1..n {
                let before = if i == 0 { start } else { jobs[order[i - 1]].location };
                let after = if j == n - 1 { end } else { Some(jobs[order[j + 1]].location) };
                let first = jobs[order[i]].location;
                let last = jobs[order[j]].location;

                let mut old_cost = model.distance_km(before, first);
                let mut new_cost = model.distance_km(before, last);
                if let Some(after) = after {
                    old_cost += model.distance_km(last, after);
                    new_cost += model.distance_km(first, after);
                }

                let delta = new_cost - old_cost;
                if delta < -IMPROVEMENT_EPSILON_KM {
                    order[i..=j].reverse();
                    improved = true;
                    trace!(pass, i, j, delta_km = delta, "2-opt reversal");
                }
            }
        }

        if !improved {
            return pass + 1;
        }
    }

    max_passes
}

/// Walks the route in order, producing stops and aggregate metrics.
fn materialize<M>(
    order: &[usize],
    jobs: &[Job],
    constraints: &RouteConstraints,
    options: &PlannerOptions,
    model: &M,
) -> OptimizedRoute
where
    M: DistanceModel + ?Sized,
{
    let mut stops = Vec::with_capacity(order.len());
    let mut current = constraints.start_location;
    let mut time = constraints.start_time;
    let mut total_distance_km = 0.0;
    let mut total_minutes: u64 = 0;
    let mut drive_minutes_total: u64 = 0;
    let mut total_earnings = 0.0;

    for (position, &index) in order.iter().enumerate() {
        let job = &jobs[index];
        let km = model.distance_km(current, job.location);
        let drive = model.drive_minutes(km);
        let task = options.durations.task_minutes(job);

        let arrival = time.saturating_add(i64::from(drive) * 60);
        let departure = arrival.saturating_add(i64::from(task) * 60);

        stops.push(RouteStop {
            order: position + 1,
            job_id: job.id.clone(),
            address: job.address.clone(),
            arrival,
            departure,
            drive_distance_km: km,
            drive_minutes: drive,
            task_minutes: task,
        });

        total_distance_km += km;
        total_minutes += u64::from(drive) + u64::from(task);
        drive_minutes_total += u64::from(drive);
        total_earnings += job.payout;
        current = job.location;
        time = departure;
    }

    if let Some(end) = constraints.end_location {
        let km = model.distance_km(current, end);
        let drive = model.drive_minutes(km);
        total_distance_km += km;
        total_minutes += u64::from(drive);
        drive_minutes_total += u64::from(drive);
    }

    let earnings_per_hour = if total_minutes == 0 {
        0.0
    } else {
        total_earnings / (total_minutes as f64 / 60.0)
    };

    let savings = compute_savings(
        jobs,
        constraints,
        options,
        model,
        total_distance_km,
        drive_minutes_total,
    );

    OptimizedRoute {
        jobs: order.iter().map(|&index| jobs[index].clone()).collect(),
        total_distance_km,
        total_duration_minutes: total_minutes,
        total_earnings,
        earnings_per_hour,
        stops,
        savings,
    }
}

/// Compares against visiting jobs in the order the caller supplied them.
///
/// Baseline drive time is the baseline distance times a fixed minutes-per-km
/// factor; it is compared with the optimized route's drive time only, since
/// task time is the same in both.
fn compute_savings<M>(
    jobs: &[Job],
    constraints: &RouteConstraints,
    options: &PlannerOptions,
    model: &M,
    optimized_km: f64,
    optimized_drive_minutes: u64,
) -> RouteSavings
where
    M: DistanceModel + ?Sized,
{
    let supplied_order: Vec<usize> = (0..jobs.len()).collect();
    let baseline_distance_km = route_distance(
        &supplied_order,
        jobs,
        constraints.start_location,
        constraints.end_location,
        model,
    );
    let baseline_drive_minutes = baseline_distance_km * options.unoptimized_minutes_per_km;
    let distance_km = baseline_distance_km - optimized_km;

    RouteSavings {
        baseline_distance_km,
        baseline_drive_minutes,
        distance_km,
        minutes: baseline_drive_minutes - optimized_drive_minutes as f64,
        cost: distance_km * options.cost_per_km,
    }
}
