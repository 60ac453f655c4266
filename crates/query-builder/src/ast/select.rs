use crate::ast::common::{ClassRef, OrderByExpr};
use filter::Filter;

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    All,
    Fields(Vec<String>),
    /// `count(*) AS count`, used by the adapter's count operation.
    Count,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub projection: Projection,
    pub class: ClassRef,
    pub where_clause: Option<Filter>,
    pub order_by: Vec<OrderByExpr>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
