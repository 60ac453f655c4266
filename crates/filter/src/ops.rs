//! The operator table: a fixed mapping from filter operator symbols to SQL
//! tokens and operator classes.

use crate::error::FilterError;

/// Reserved marker character. A mapping key is an operator symbol iff it
/// starts with this character; anything else is a field name.
pub const OPERATOR_MARKER: char = '$';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpClass {
    /// Renders as `<field> <token> <value>` (e.g. `=`, `>`, `IN`, `LIKE`).
    Comparison,
    /// Joins a group of sub-conditions (`AND`, `OR`).
    Logical,
    /// Prefixes a single sub-condition (`NOT`).
    Unary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    pub token: &'static str,
    pub class: OpClass,
    /// Operator symbol whose token is prepended when this operator opens a
    /// fragment list (only `$nor` carries one).
    pub negation_prefix: Option<&'static str>,
}

impl Operator {
    const fn comparison(token: &'static str) -> Self {
        Operator {
            token,
            class: OpClass::Comparison,
            negation_prefix: None,
        }
    }

    const fn logical(token: &'static str) -> Self {
        Operator {
            token,
            class: OpClass::Logical,
            negation_prefix: None,
        }
    }

    /// Resolves an operator symbol against the fixed table.
    ///
    /// Fails with [`FilterError::InvalidOperator`] for unregistered symbols
    /// instead of producing a malformed fragment.
    pub fn lookup(symbol: &str) -> Result<Operator, FilterError> {
        let op = match symbol {
            "$eq" => Operator::comparison("="),
            "$ne" => Operator::comparison("<>"),
            "$gt" => Operator::comparison(">"),
            "$lt" => Operator::comparison("<"),
            "$gte" => Operator::comparison(">="),
            "$lte" => Operator::comparison("<="),
            "$or" => Operator::logical("OR"),
            "$and" => Operator::logical("AND"),
            "$nor" => Operator {
                token: "OR",
                class: OpClass::Logical,
                negation_prefix: Some("$not"),
            },
            "$not" => Operator {
                token: "NOT",
                class: OpClass::Unary,
                negation_prefix: None,
            },
            "$in" => Operator::comparison("IN"),
            "$nin" => Operator::comparison("NOT IN"),
            // The upstream table maps $exists to IN; kept verbatim for
            // output compatibility.
            "$exists" => Operator::comparison("IN"),
            "$like" => Operator::comparison("LIKE"),
            "$text" => Operator::comparison("CONTAINSTEXT"),
            "$regex" => Operator::comparison("MATCHES"),
            _ => return Err(FilterError::InvalidOperator(symbol.to_string())),
        };
        Ok(op)
    }
}

/// Returns true if the key selects an operator rather than naming a field.
pub fn is_operator(key: &str) -> bool {
    key.starts_with(OPERATOR_MARKER)
}
