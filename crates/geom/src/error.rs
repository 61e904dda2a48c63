use thiserror::Error;

/// An error that can happen while generating points.
///
/// Malformed input never produces an error: it degrades to missing geometry.
/// The only failure is running out of the point budget.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SampleError {
    #[error("Sampling would produce more than {limit} points.")]
    TooManyPoints { limit: usize },
}
