use crate::{
    ast::{
        common::Assignment,
        mutate::{Delete, Insert, Update},
    },
    error::BuildError,
    render::{Render, Renderer, render_where},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        if self.assignments.is_empty() {
            return Err(BuildError::EmptyStatement(
                "INSERT with no assignments".to_string(),
            ));
        }
        r.sql.push_str("INSERT INTO ");
        r.sql.push_str(&self.class.name);
        render_set(&self.assignments, r);
        Ok(())
    }
}

impl Render for Update {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        if self.assignments.is_empty() {
            return Err(BuildError::EmptyStatement(
                "UPDATE with no assignments".to_string(),
            ));
        }
        r.sql.push_str("UPDATE ");
        r.sql.push_str(&self.class.name);
        render_set(&self.assignments, r);
        render_where(&self.where_clause, r)
    }
}

impl Render for Delete {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError> {
        r.sql.push_str("DELETE FROM ");
        r.sql.push_str(&self.class.name);
        render_where(&self.where_clause, r)
    }
}

fn render_set(assignments: &[Assignment], r: &mut Renderer) {
    r.sql.push_str(" SET ");
    for (i, assignment) in assignments.iter().enumerate() {
        if i > 0 {
            r.sql.push_str(", ");
        }
        r.sql.push_str(&assignment.field);
        r.sql.push_str(" = ");
        r.sql.push_str(&assignment.value.to_sql());
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        build::mutate::{DeleteBuilder, InsertBuilder, UpdateBuilder},
        error::BuildError,
        render::render_statement,
    };
    use filter::{field, raw};

    #[test]
    fn test_insert_set() {
        let ast = InsertBuilder::new("Person")
            .set("firstname", "saeed")
            .set("age", 18)
            .build();
        assert_eq!(
            render_statement(&ast).unwrap(),
            "INSERT INTO Person SET firstname = 'saeed', age = 18"
        );
    }

    #[test]
    fn test_insert_quotes_string_values() {
        let ast = InsertBuilder::new("Person")
            .set("lastname", "O'Brien")
            .build();
        assert_eq!(
            render_statement(&ast).unwrap(),
            "INSERT INTO Person SET lastname = 'O''Brien'"
        );
    }

    #[test]
    fn test_insert_without_assignments_is_rejected() {
        let ast = InsertBuilder::new("Person").build();
        assert!(matches!(
            render_statement(&ast),
            Err(BuildError::EmptyStatement(_))
        ));
    }

    #[test]
    fn test_update_set_where() {
        let ast = UpdateBuilder::new("Person")
            .set("age", 19)
            .filter(field("firstname", "saeed"))
            .build();
        assert_eq!(
            render_statement(&ast).unwrap(),
            "UPDATE Person SET age = 19 WHERE firstname = 'saeed'"
        );
    }

    #[test]
    fn test_update_by_raw_condition() {
        let ast = UpdateBuilder::new("Person")
            .set("active", false)
            .filter(raw("id = :id"))
            .build();
        assert_eq!(
            render_statement(&ast).unwrap(),
            "UPDATE Person SET active = false WHERE id = :id"
        );
    }

    #[test]
    fn test_delete_where() {
        let ast = DeleteBuilder::new("Person")
            .filter(field("age", field("$lt", 18)))
            .build();
        assert_eq!(
            render_statement(&ast).unwrap(),
            "DELETE FROM Person WHERE age < 18"
        );
    }

    #[test]
    fn test_delete_all() {
        let ast = DeleteBuilder::new("Person").build();
        assert_eq!(render_statement(&ast).unwrap(), "DELETE FROM Person");
    }
}
