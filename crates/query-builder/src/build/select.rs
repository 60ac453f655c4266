use crate::ast::{
    common::{ClassRef, OrderByExpr, OrderDir},
    select::{Projection, Select},
};
use filter::Filter;
use serde::Deserialize;

/// Caller-facing query options for cursor-style reads: an optional filter,
/// sort order, paging, and a field projection.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QueryOptions {
    pub filter: Option<Filter>,
    pub sort: Option<Vec<OrderByExpr>>,
    pub paging: Option<Paging>,
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Paging {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

pub struct SelectBuilder {
    stmt: Select,
}

impl SelectBuilder {
    pub fn new(class: &str) -> Self {
        SelectBuilder {
            stmt: Select {
                projection: Projection::All,
                class: ClassRef::new(class),
                where_clause: None,
                order_by: Vec::new(),
                skip: None,
                limit: None,
            },
        }
    }

    /// Builds the select a cursor-style read needs, applying filter, sort,
    /// paging, and field projection from the caller's options.
    pub fn from_options(class: &str, options: &QueryOptions) -> Self {
        let mut builder = SelectBuilder::new(class);
        if let Some(fields) = &options.fields {
            builder = builder.fields(fields.iter().map(String::as_str));
        }
        if let Some(f) = &options.filter {
            builder = builder.filter(f.clone());
        }
        if let Some(sort) = &options.sort {
            for order in sort {
                builder = builder.order_by(&order.field, order.direction);
            }
        }
        if let Some(paging) = &options.paging {
            if let Some(page) = paging.page.filter(|p| *p > 0) {
                builder = builder.skip(page);
            }
            if let Some(limit) = paging.limit.filter(|l| *l > 0) {
                builder = builder.limit(limit);
            }
        }
        builder
    }

    pub fn fields<'a, I: IntoIterator<Item = &'a str>>(mut self, fields: I) -> Self {
        self.stmt.projection =
            Projection::Fields(fields.into_iter().map(str::to_string).collect());
        self
    }

    /// Switches the projection to `count(*) AS count`.
    pub fn count(mut self) -> Self {
        self.stmt.projection = Projection::Count;
        self
    }

    pub fn filter(mut self, filter: impl Into<Filter>) -> Self {
        self.stmt.where_clause = Some(filter.into());
        self
    }

    pub fn order_by(mut self, field: &str, direction: OrderDir) -> Self {
        self.stmt.order_by.push(OrderByExpr {
            field: field.to_string(),
            direction,
        });
        self
    }

    pub fn skip(mut self, n: u64) -> Self {
        self.stmt.skip = Some(n);
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.stmt.limit = Some(n);
        self
    }

    pub fn build(self) -> Select {
        self.stmt
    }
}
