pub mod ast;
pub mod build;
pub mod error;
pub mod render;

pub use ast::common::{Assignment, ClassRef, OrderByExpr, OrderDir};
pub use ast::mutate::{Delete, Insert, Update};
pub use ast::select::{Projection, Select};
pub use build::mutate::{DeleteBuilder, InsertBuilder, UpdateBuilder};
pub use build::select::{Paging, QueryOptions, SelectBuilder};
pub use error::BuildError;
pub use render::{Render, Renderer, render_statement};
