//! This module reimports commonly used types.

pub use crate::algorithms::dominance::all_non_dominated;
pub use crate::algorithms::dominance::all_weakly_non_dominated;
pub use crate::algorithms::dominance::dominance_order;

pub use crate::solver::run_frontier;
pub use crate::solver::BackendKind;
pub use crate::solver::EpsilonGrid;
pub use crate::solver::FrontierBuilder;
pub use crate::solver::FrontierConfig;
pub use crate::solver::GridPoint;
pub use crate::solver::GridSpec;
pub use crate::solver::Oracle;
pub use crate::solver::OracleSolution;
pub use crate::solver::PayoffTable;
pub use crate::solver::Relation;
pub use crate::solver::Sense;
pub use crate::solver::DEFAULT_EPSILON;
pub use crate::solver::DEFAULT_GRID_STEPS;

pub use crate::utils::compare_floats;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Timer;
