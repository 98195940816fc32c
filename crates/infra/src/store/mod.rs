//! In-memory storage service: generic record collections plus the
//! enrollment rules that tie students and courses together.

pub mod collection;
pub mod enrollment;
pub mod query;
pub mod record;
pub mod school;
pub mod seed;

pub use collection::Collection;
pub use enrollment::{Enrollment, EnrollmentBook};
pub use query::{Page, Pagination};
pub use record::Record;
pub use school::{messages, SchoolStore};
