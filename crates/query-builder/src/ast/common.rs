use filter::Literal;
use serde::Deserialize;

/// Reference to a database class, the FROM / INTO target of a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRef {
    pub name: String,
}

impl ClassRef {
    pub fn new(name: &str) -> Self {
        ClassRef {
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDir {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderByExpr {
    pub field: String,
    pub direction: OrderDir,
}

/// A `field = value` pair in a SET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub field: String,
    pub value: Literal,
}
