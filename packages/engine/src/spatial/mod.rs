pub mod grid;
pub mod query;
