//! Infrastructure layer: the in-memory storage service.

pub mod store;

pub use store::{Page, Pagination, Record, SchoolStore};
