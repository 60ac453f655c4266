pub mod mutate;
pub mod select;
