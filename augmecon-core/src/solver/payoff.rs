#[cfg(test)]
#[path = "../../tests/unit/solver/payoff_test.rs"]
mod payoff_test;

use crate::solver::{Oracle, OracleSolution, Relation, Sense};
use crate::utils::{Float, GenericResult, InfoLogger, Timer};

/// A payoff table of a multi objective model.
///
/// Row `k` holds the objective values observed while objective `k` was anchored at its optimum:
/// the diagonal element is the anchor (ideal) value of objective `k` itself, the off diagonal
/// element `(k, h)` is the value objective `h` attains under that anchor. The table is built
/// once per frontier computation and is immutable afterwards.
#[derive(Clone, Debug)]
pub struct PayoffTable {
    values: Vec<Float>,
    dimension: usize,
}

impl PayoffTable {
    /// Creates a payoff table from precomputed rows.
    pub fn from_rows(rows: Vec<Vec<Float>>) -> GenericResult<Self> {
        let dimension = rows.len();
        if dimension < 2 {
            return Err("a payoff table requires at least two objectives".into());
        }
        if rows.iter().any(|row| row.len() != dimension) {
            return Err(format!("a payoff table must be square, expected {} values per row", dimension).into());
        }

        Ok(Self { values: rows.into_iter().flatten().collect(), dimension })
    }

    /// Computes a payoff table for given objectives by anchoring each objective in turn.
    ///
    /// An anchor pass optimizes its objective, pins the found optimum with a constraint and
    /// re-optimizes every other objective under the pins accumulated so far. This keeps the
    /// table consistent with a sequential lexicographic scalarization even when alternate
    /// optima exist, unlike a naive independent re-optimization per cell. All pins of a pass
    /// are removed before the next pass starts. A solve without an optimum at any step is
    /// fatal: the table cannot be completed.
    pub fn compute<O: Oracle>(oracle: &mut O, objectives: &[O::Expr], logger: &InfoLogger) -> GenericResult<Self> {
        let p = objectives.len();
        if p < 2 {
            return Err("epsilon constraint method requires at least two objectives".into());
        }

        let timer = Timer::start();
        let mut values = vec![0.; p * p];

        for k in 0..p {
            let mut pins = Vec::with_capacity(p);
            let result = Self::compute_anchor_row(oracle, objectives, k, &mut values, &mut pins);
            // pins must not outlive their anchor pass, also on the failure path
            oracle.remove_constraints(pins);
            result?;

            (logger)(format!("[{}s] payoff anchor {}: {:?}", timer.elapsed_secs(), k, &values[k * p..(k + 1) * p]).as_str());
        }

        (logger)(format!("payoff table computed in {}ms", timer.elapsed_millis()).as_str());

        Ok(Self { values, dimension: p })
    }

    fn compute_anchor_row<O: Oracle>(
        oracle: &mut O,
        objectives: &[O::Expr],
        k: usize,
        values: &mut [Float],
        pins: &mut Vec<O::Constraint>,
    ) -> GenericResult<()> {
        let p = objectives.len();

        oracle.set_objective(&objectives[k], Sense::Maximize);
        let solution =
            oracle.solve().ok_or_else(|| format!("cannot compute payoff table: no optimum for objective {}", k))?;
        values[k * p + k] = solution.objective_value();
        pins.push(oracle.add_constraint(&objectives[k], Relation::GreaterOrEqual, values[k * p + k]));

        for h in (0..p).filter(|h| *h != k) {
            oracle.set_objective(&objectives[h], Sense::Maximize);
            let solution = oracle.solve().ok_or_else(|| {
                format!("cannot compute payoff table: no optimum for objective {} under anchor {}", h, k)
            })?;
            values[k * p + h] = solution.objective_value();
            pins.push(oracle.add_constraint(&objectives[h], Relation::GreaterOrEqual, values[k * p + h]));
        }

        Ok(())
    }

    /// Returns the amount of objectives covered by the table.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the value objective `objective` attains while objective `anchor` is anchored.
    pub fn get(&self, anchor: usize, objective: usize) -> Float {
        assert!(anchor < self.dimension && objective < self.dimension, "payoff table index out of range");
        self.values[anchor * self.dimension + objective]
    }

    /// Returns the anchor (ideal) value of given objective.
    pub fn anchor(&self, objective: usize) -> Float {
        self.get(objective, objective)
    }

    /// Returns the worst value given objective attains across all anchor rows.
    pub fn lower_bound(&self, objective: usize) -> Float {
        (0..self.dimension).map(|anchor| self.get(anchor, objective)).fold(Float::INFINITY, Float::min)
    }

    /// Returns the spread of given objective's values across all anchor rows.
    pub fn range(&self, objective: usize) -> Float {
        let upper = (0..self.dimension).map(|anchor| self.get(anchor, objective)).fold(Float::NEG_INFINITY, Float::max);

        upper - self.lower_bound(objective)
    }
}
