/// The top-level error type for this crate.
///
/// Errors are local to a single call; a failed call leaves no partial state
/// behind, since the engine keeps none.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A coefficient token could not be parsed as a real number.
    #[error("invalid coefficient: \"{token}\"")]
    ParseCoefficient { token: String },

    /// A coefficient sequence must contain at least one token.
    #[error("coefficients cannot be empty")]
    EmptyCoefficients,

    #[error("unexpected error")]
    Other(#[from] anyhow::Error),
}
