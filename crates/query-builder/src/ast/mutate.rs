use crate::ast::common::{Assignment, ClassRef};
use filter::Filter;

#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    pub class: ClassRef,
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub class: ClassRef,
    pub assignments: Vec<Assignment>,
    pub where_clause: Option<Filter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    pub class: ClassRef,
    pub where_clause: Option<Filter>,
}
