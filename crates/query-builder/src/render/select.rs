use crate::{
    ast::{
        common::OrderDir,
        select::{Projection, Select},
    },
    error::BuildError,
    render::{Render, Renderer, render_where},
};

impl Render for Select {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        // 1. SELECT clause
        r.sql.push_str("SELECT ");
        match &self.projection {
            Projection::All => r.sql.push('*'),
            Projection::Count => r.sql.push_str("count(*) AS count"),
            Projection::Fields(fields) => {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        r.sql.push_str(", ");
                    }
                    r.sql.push_str(field);
                }
            }
        }

        // 2. FROM
        r.sql.push_str(" FROM ");
        r.sql.push_str(&self.class.name);

        // 3. WHERE
        render_where(&self.where_clause, r)?;

        // 4. ORDER BY
        if !self.order_by.is_empty() {
            r.sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    r.sql.push_str(", ");
                }
                r.sql.push_str(&order.field);
                r.sql.push(' ');
                r.sql.push_str(match order.direction {
                    OrderDir::Asc => "ASC",
                    OrderDir::Desc => "DESC",
                });
            }
        }

        // 5. SKIP / LIMIT paging
        if let Some(skip) = self.skip {
            r.sql.push_str(&format!(" SKIP {skip}"));
        }
        if let Some(limit) = self.limit {
            r.sql.push_str(&format!(" LIMIT {limit}"));
        }

        Ok(())
    }
}
