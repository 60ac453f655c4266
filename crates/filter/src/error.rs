use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// An operator symbol not present in the operator table.
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    /// An expression shape the compiler cannot render into a condition.
    #[error("Unsupported expression: {0}")]
    UnsupportedExpression(String),
}
