use filter::FilterError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// WHERE-clause compilation failed.
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// A statement that would render without any effect, e.g. a SET clause
    /// with no assignments.
    #[error("Empty statement: {0}")]
    EmptyStatement(String),
}
