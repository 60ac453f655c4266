use crate::ast::{
    common::{Assignment, ClassRef},
    mutate::{Delete, Insert, Update},
};
use filter::{Filter, Literal};

pub struct InsertBuilder {
    stmt: Insert,
}

impl InsertBuilder {
    pub fn new(class: &str) -> Self {
        InsertBuilder {
            stmt: Insert {
                class: ClassRef::new(class),
                assignments: Vec::new(),
            },
        }
    }

    pub fn set(mut self, field: &str, value: impl Into<Literal>) -> Self {
        self.stmt.assignments.push(Assignment {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn build(self) -> Insert {
        self.stmt
    }
}

pub struct UpdateBuilder {
    stmt: Update,
}

impl UpdateBuilder {
    pub fn new(class: &str) -> Self {
        UpdateBuilder {
            stmt: Update {
                class: ClassRef::new(class),
                assignments: Vec::new(),
                where_clause: None,
            },
        }
    }

    pub fn set(mut self, field: &str, value: impl Into<Literal>) -> Self {
        self.stmt.assignments.push(Assignment {
            field: field.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.stmt.where_clause = Some(filter.into());
        self
    }

    pub fn build(self) -> Update {
        self.stmt
    }
}

pub struct DeleteBuilder {
    stmt: Delete,
}

impl DeleteBuilder {
    pub fn new(class: &str) -> Self {
        DeleteBuilder {
            stmt: Delete {
                class: ClassRef::new(class),
                where_clause: None,
            },
        }
    }

    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.stmt.where_clause = Some(filter.into());
        self
    }

    pub fn build(self) -> Delete {
        self.stmt
    }
}
