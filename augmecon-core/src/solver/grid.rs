#[cfg(test)]
#[path = "../../tests/unit/solver/grid_test.rs"]
mod grid_test;

use crate::solver::PayoffTable;
use crate::utils::{Float, GenericResult};
use rustc_hash::FxHashMap;

/// Default amount of grid steps per secondary objective.
pub const DEFAULT_GRID_STEPS: usize = 3;

/// Specifies the amount of grid subdivisions per secondary objective.
///
/// Keys are objective indices starting from 1 as objective 0 is the primary one; an objective
/// without an explicit entry uses [`DEFAULT_GRID_STEPS`].
#[derive(Clone, Debug, Default)]
pub struct GridSpec {
    steps: FxHashMap<usize, usize>,
}

impl GridSpec {
    /// Creates a grid spec with the same amount of steps for every secondary objective of a
    /// model with given amount of objectives.
    pub fn uniform(objective_count: usize, steps: usize) -> GenericResult<Self> {
        (1..objective_count).try_fold(Self::default(), |spec, objective| spec.with_steps(objective, steps))
    }

    /// Sets the amount of steps for given secondary objective.
    pub fn with_steps(mut self, objective: usize, steps: usize) -> GenericResult<Self> {
        if objective == 0 {
            return Err("objective 0 is the primary objective and has no grid dimension".into());
        }
        if steps == 0 {
            return Err(format!("grid steps for objective {} must be positive", objective).into());
        }

        self.steps.insert(objective, steps);

        Ok(self)
    }

    /// Returns the amount of steps for given secondary objective.
    pub fn steps(&self, objective: usize) -> usize {
        self.steps.get(&objective).copied().unwrap_or(DEFAULT_GRID_STEPS)
    }

    pub(crate) fn is_default(&self) -> bool {
        self.steps.is_empty()
    }
}

/// A single point of the epsilon grid: an index vector over the secondary objectives together
/// with the epsilon bounds it maps to.
#[derive(Clone, Debug)]
pub struct GridPoint {
    /// Grid indices, one per secondary objective: entry `j` belongs to objective `j + 1`.
    pub indices: Vec<usize>,
    /// Epsilon bounds derived as `lower + index * range / steps`, aligned with `indices`.
    pub epsilons: Vec<Float>,
}

/// An epsilon grid over the normalized ranges of the secondary objectives.
///
/// The grid is derived from a payoff table: for every secondary objective, its lower bound is
/// the worst and its range the spread of the values found across all anchor rows. A zero range
/// is a degenerate but legal configuration which collapses that dimension to a single epsilon
/// value repeated for every index.
#[derive(Clone, Debug)]
pub struct EpsilonGrid {
    lower: Vec<Float>,
    range: Vec<Float>,
    steps: Vec<usize>,
}

impl EpsilonGrid {
    /// Creates a grid from given payoff table and spec.
    pub fn new(payoff: &PayoffTable, spec: &GridSpec) -> Self {
        let p = payoff.dimension();

        Self {
            lower: (1..p).map(|k| payoff.lower_bound(k)).collect(),
            range: (1..p).map(|k| payoff.range(k)).collect(),
            steps: (1..p).map(|k| spec.steps(k)).collect(),
        }
    }

    /// Returns the total amount of grid points.
    pub fn point_count(&self) -> usize {
        self.steps.iter().map(|steps| steps + 1).product()
    }

    /// Returns the range of given secondary objective across the payoff table.
    pub fn range(&self, objective: usize) -> Float {
        assert!((1..=self.range.len()).contains(&objective), "not a secondary objective index");
        self.range[objective - 1]
    }

    /// Iterates over all grid points in odometer order: the all zero index vector comes first,
    /// the index of the lowest secondary objective is incremented first and the all maximum
    /// vector is the last point emitted. Every call starts a fresh pass over the same sequence.
    pub fn points(&self) -> GridPointIter<'_> {
        GridPointIter { grid: self, indices: vec![0; self.steps.len()], exhausted: false }
    }
}

/// An iterator over the points of an [`EpsilonGrid`].
pub struct GridPointIter<'a> {
    grid: &'a EpsilonGrid,
    indices: Vec<usize>,
    exhausted: bool,
}

impl Iterator for GridPointIter<'_> {
    type Item = GridPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let epsilons = self
            .indices
            .iter()
            .zip(self.grid.lower.iter().zip(self.grid.range.iter()).zip(self.grid.steps.iter()))
            .map(|(&idx, ((&lower, &range), &steps))| lower + (idx as Float) * range / (steps as Float))
            .collect();
        let point = GridPoint { indices: self.indices.clone(), epsilons };

        // a mixed radix counter: reset and carry on overflow, stop after the all maximum vector
        self.exhausted = true;
        for (idx, &steps) in self.indices.iter_mut().zip(self.grid.steps.iter()) {
            if *idx == steps {
                *idx = 0;
            } else {
                *idx += 1;
                self.exhausted = false;
                break;
            }
        }

        Some(point)
    }
}
