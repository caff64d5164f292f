#[cfg(test)]
#[path = "../../tests/unit/solver/oracle_test.rs"]
mod oracle_test;

use crate::utils::{Float, GenericError};
use std::str::FromStr;

/// Specifies an optimization direction of an objective.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sense {
    /// A greater objective value is better.
    Maximize,
    /// A smaller objective value is better.
    Minimize,
}

/// Specifies a relation between a linear expression and a scalar right hand side.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Relation {
    /// The expression has to be equal to the right hand side.
    Equal,
    /// The expression has to be greater than or equal to the right hand side.
    GreaterOrEqual,
}

/// Gives access to the objective value of a solution returned by an oracle. Any further
/// variable access is supposed to happen inside a solution extractor callback which knows the
/// concrete solution type.
pub trait OracleSolution {
    /// Returns a value of the active objective at this solution.
    fn objective_value(&self) -> Float;
}

/// An external single objective optimization oracle which owns the decision model.
///
/// The frontier enumeration treats the model as a black box: it only replaces the active
/// objective, adds and removes scoped constraints and asks for single solves. A solve which
/// finds no optimum (infeasible or unbounded model) is a distinguished `None` outcome, not an
/// error. Constraint handles must not be reused after removal.
pub trait Oracle {
    /// A linear expression over the model's decision variables.
    type Expr: Clone;
    /// A handle of a constraint added to the model, needed for its later removal.
    type Constraint;
    /// A feasible assignment together with its objective value.
    type Solution: OracleSolution;

    /// Creates a new non negative continuous variable and returns it as an expression.
    fn create_slack(&mut self, name: &str) -> Self::Expr;

    /// Builds a weighted sum of given expressions.
    fn weighted_sum(&mut self, terms: &[(Float, &Self::Expr)]) -> Self::Expr;

    /// Replaces the model's active objective.
    fn set_objective(&mut self, objective: &Self::Expr, sense: Sense);

    /// Adds a constraint to the model and returns its handle.
    fn add_constraint(&mut self, expr: &Self::Expr, relation: Relation, rhs: Float) -> Self::Constraint;

    /// Adds multiple constraints to the model and returns their handles in the same order.
    fn add_constraints(&mut self, constraints: Vec<(Self::Expr, Relation, Float)>) -> Vec<Self::Constraint> {
        constraints.into_iter().map(|(expr, relation, rhs)| self.add_constraint(&expr, relation, rhs)).collect()
    }

    /// Removes exactly the given constraints from the model.
    fn remove_constraints(&mut self, constraints: Vec<Self::Constraint>);

    /// Solves the model with the active objective against the active constraint set.
    fn solve(&mut self) -> Option<Self::Solution>;
}

/// Specifies the closed set of supported oracle backends.
///
/// An adapter which implements [`Oracle`] on top of a concrete backend is provided by the
/// embedding application; this type only validates a backend selection coming from
/// configuration, rejecting anything outside the set instead of falling back silently.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BackendKind {
    /// The CPLEX backend.
    #[default]
    Cplex,
    /// The Gurobi backend.
    Gurobi,
}

impl FromStr for BackendKind {
    type Err = GenericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cplex" => Ok(Self::Cplex),
            "gurobi" => Ok(Self::Gurobi),
            _ => Err(format!("unknown oracle backend: '{}', supported backends: cplex, gurobi", s).into()),
        }
    }
}
