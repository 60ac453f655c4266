pub mod compile;
pub mod error;
pub mod expr;
pub mod ops;

pub use compile::{build_where_clause, compile_expr};
pub use error::FilterError;
pub use expr::{Filter, FilterExpr, Literal};
pub use ops::{OPERATOR_MARKER, OpClass, Operator};

pub fn field(name: &str, value: impl Into<FilterExpr>) -> FilterExpr {
    FilterExpr::field(name, value)
}

pub fn raw(text: &str) -> Filter {
    Filter::Raw(text.to_string())
}
