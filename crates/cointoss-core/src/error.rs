//! Error types for game operations.

/// Errors a game operation can report back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A batch simulation asked for more tosses than the server allows.
    #[error("num_tosses {requested} exceeds the maximum of {max}")]
    TooManyTosses {
        /// Tosses requested.
        requested: u32,
        /// Configured ceiling.
        max: u32,
    },
}
