#[cfg(test)]
#[path = "../../tests/unit/solver/frontier_test.rs"]
mod frontier_test;

use crate::solver::{EpsilonGrid, GridSpec, Oracle, PayoffTable, Relation, Sense};
use crate::utils::{compare_floats, Float, GenericResult, InfoLogger, Timer};
use std::cmp::Ordering;
use std::sync::Arc;

/// Default weight of the normalized slack sum inside the augmented objective.
pub const DEFAULT_EPSILON: Float = 1e-3;

/// A configuration of the augmented epsilon constraint enumeration.
#[derive(Clone)]
pub struct FrontierConfig {
    /// A weight of the normalized slack sum inside the augmented objective. Has to be small
    /// but strictly positive, so that the slack term only breaks ties among otherwise optimal
    /// solutions of the primary objective and the returned points are properly efficient.
    pub epsilon: Float,
    /// Grid resolution per secondary objective.
    pub grid: GridSpec,
    /// A logger used to report enumeration progress.
    pub logger: InfoLogger,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self { epsilon: DEFAULT_EPSILON, grid: GridSpec::default(), logger: Arc::new(|msg: &str| println!("{}", msg)) }
    }
}

/// Runs the augmented epsilon constraint enumeration over given objectives, reporting every
/// feasible solution to the `extractor` callback in enumeration order.
///
/// The extractor is the only way results leave this function: it receives each solution right
/// after its solve, while the oracle still holds the matching variable assignment, and records
/// externally whatever it needs. Use [`FrontierBuilder`] to collect the frontier instead.
///
/// The composite objective `objectives[0] + epsilon * sum(s[k] / r[k])` is set once and stays
/// active for the whole enumeration. Per grid point, the equality constraints
/// `objectives[k] - s[k] = e[k]` are added, a single solve is run and the constraints are
/// removed again on both the feasible and the infeasible path. A grid point without a feasible
/// solution is logged and skipped, it contributes nothing to the frontier.
pub fn run_frontier<O: Oracle>(
    oracle: &mut O,
    objectives: &[O::Expr],
    payoff: &PayoffTable,
    config: &FrontierConfig,
    extractor: &mut dyn FnMut(&O::Solution),
) -> GenericResult<()> {
    let p = objectives.len();
    if p < 2 {
        return Err("epsilon constraint method requires at least two objectives".into());
    }
    if payoff.dimension() != p {
        return Err(format!("payoff table dimension {} does not match {} objectives", payoff.dimension(), p).into());
    }
    if compare_floats(config.epsilon, 0.) != Ordering::Greater {
        return Err("epsilon must be strictly positive".into());
    }

    let timer = Timer::start();
    let logger = &config.logger;

    if config.grid.is_default() {
        (logger)("no grid resolution configured, using default g=3 per secondary objective");
    }
    let grid = EpsilonGrid::new(payoff, &config.grid);

    let slacks = (1..p).map(|k| oracle.create_slack(format!("s_{}", k).as_str())).collect::<Vec<_>>();

    // a zero range slack stays in the model to keep the equality constraint of its objective
    // well formed, but cannot enter the normalized sum without dividing by zero
    let mut terms = vec![(1., &objectives[0])];
    for k in 1..p {
        let range = grid.range(k);
        if compare_floats(range, 0.) == Ordering::Greater {
            terms.push((config.epsilon / range, &slacks[k - 1]));
        } else {
            (logger)(format!("objective {} has zero range across the payoff table, skipping its normalization", k).as_str());
        }
    }
    let augmented = oracle.weighted_sum(&terms);
    oracle.set_objective(&augmented, Sense::Maximize);

    let mut feasible = 0_usize;

    for point in grid.points() {
        let constraints = (1..p)
            .map(|k| {
                let expr = oracle.weighted_sum(&[(1., &objectives[k]), (-1., &slacks[k - 1])]);
                (expr, Relation::Equal, point.epsilons[k - 1])
            })
            .collect::<Vec<_>>();
        let handles = oracle.add_constraints(constraints);

        match oracle.solve() {
            Some(solution) => {
                feasible += 1;
                extractor(&solution);
                (logger)(
                    format!(
                        "[{}s] grid point {:?} (epsilons {:?}): feasible",
                        timer.elapsed_secs(),
                        point.indices,
                        point.epsilons
                    )
                    .as_str(),
                );
            }
            None => (logger)(
                format!(
                    "[{}s] grid point {:?} (epsilons {:?}): not feasible, skipping",
                    timer.elapsed_secs(),
                    point.indices,
                    point.epsilons
                )
                .as_str(),
            ),
        }

        // equality constraints must not leak into the next grid point
        oracle.remove_constraints(handles);
    }

    (logger)(format!("[{}s] enumerated {} grid points, {} feasible", timer.elapsed_secs(), grid.point_count(), feasible).as_str());

    Ok(())
}

/// Provides a configurable way to enumerate a pareto frontier with the augmented epsilon
/// constraint method.
#[derive(Default)]
pub struct FrontierBuilder {
    config: FrontierConfig,
    payoff: Option<PayoffTable>,
}

impl FrontierBuilder {
    /// Sets a grid resolution.
    /// Default is 3 steps per secondary objective.
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.config.grid = grid;
        self
    }

    /// Sets a weight of the slack term in the augmented objective.
    /// Default is 1e-3.
    pub fn with_epsilon(mut self, epsilon: Float) -> Self {
        self.config.epsilon = epsilon;
        self
    }

    /// Sets a logger.
    /// Default is a logger to stdout.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.config.logger = logger;
        self
    }

    /// Sets a precomputed payoff table.
    /// Default is a payoff table computed from the objectives before the enumeration starts.
    pub fn with_payoff_table(mut self, payoff: PayoffTable) -> Self {
        self.payoff = Some(payoff);
        self
    }

    /// Runs the enumeration and returns the frontier: every feasible solution in enumeration
    /// order, one solve attempt per grid point, infeasible attempts dropped.
    pub fn enumerate<O>(self, oracle: &mut O, objectives: &[O::Expr]) -> GenericResult<Vec<O::Solution>>
    where
        O: Oracle,
        O::Solution: Clone,
    {
        let payoff = match self.payoff {
            Some(payoff) => payoff,
            None => PayoffTable::compute(oracle, objectives, &self.config.logger)?,
        };

        let mut frontier = Vec::new();
        run_frontier(oracle, objectives, &payoff, &self.config, &mut |solution| frontier.push(solution.clone()))?;

        Ok(frontier)
    }
}
