/// Why a submitted move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The notation could not be read as a coordinate move.
    #[error("invalid uci: '{0}'")]
    Malformed(String),

    /// Well-formed, but not a legal move in the current position.
    #[error("Illegal move")]
    Illegal,
}
