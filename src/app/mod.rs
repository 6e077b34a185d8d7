pub mod cache;
pub mod query;
