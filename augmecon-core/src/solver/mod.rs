//! This module contains the augmented epsilon constraint method: payoff table construction
//! with lexicographic tie breaking, epsilon grid enumeration over the normalized objective
//! ranges and a frontier driver which evaluates every grid point through an external oracle.

mod frontier;
pub use self::frontier::*;

mod grid;
pub use self::grid::*;

mod oracle;
pub use self::oracle::*;

mod payoff;
pub use self::payoff::*;
