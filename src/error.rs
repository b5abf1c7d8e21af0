use thiserror::Error;

/// Result type returned by fallible grid routines.
pub type GridResult<T> = Result<T, GridError>;

/// Error encountered while driving a grid.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum GridError {
    /// `advance` was called on a cell whose future was never computed.
    /// The compute phase must run to completion before any cell commits;
    /// hitting this is a contract violation, not a runtime condition.
    #[error("cell ({row}, {column}) advanced with no computed future")]
    PrematureAdvance { row: i64, column: i64 },
    /// A shift direction token failed to parse. The grid is unchanged.
    #[error("unknown shift direction: {0:?}")]
    UnknownDirection(String),
    /// A pattern name failed to parse. The grid is unchanged.
    #[error("unknown pattern: {0:?}")]
    UnknownPattern(String),
}
