//! This module contains algorithm building blocks which do not depend on the oracle.

pub mod dominance;
