use std::sync::Arc;

/// Alias to a scalar floating type used for objective values, epsilon bounds and coefficients.
pub type Float = f64;

/// A logger type which is called with various information regarding the work done by the
/// frontier enumeration. Passed in explicitly, so no process wide logger state is needed.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;
