use crate::error::BuildError;
use filter::{Filter, build_where_clause};
use tracing::debug;

pub mod mutate;
pub mod select;

pub trait Render {
    fn render(&self, r: &mut Renderer) -> Result<(), BuildError>;
}

#[derive(Debug, Default)]
pub struct Renderer {
    pub sql: String,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer { sql: String::new() }
    }

    pub fn finish(self) -> String {
        self.sql
    }
}

/// Renders a statement AST to its SQL text.
pub fn render_statement(ast: &impl Render) -> Result<String, BuildError> {
    let mut renderer = Renderer::new();
    ast.render(&mut renderer)?;
    let sql = renderer.finish();
    debug!(%sql, "rendered statement");
    Ok(sql)
}

/// Compiles and appends a WHERE clause. An empty compiled fragment omits the
/// keyword entirely.
pub(crate) fn render_where(
    where_clause: &Option<Filter>,
    r: &mut Renderer,
) -> Result<(), BuildError> {
    if let Some(filter) = where_clause {
        let condition = build_where_clause(filter)?;
        if !condition.is_empty() {
            r.sql.push_str(" WHERE ");
            r.sql.push_str(&condition);
        }
    }
    Ok(())
}
