//! Students domain module.
//!
//! Business rules for a single student record (required fields, partial
//! updates, listing filters), implemented as pure domain logic. Cross-record
//! rules such as email uniqueness live in the store.

pub mod student;

pub use student::{NewStudent, Student, StudentFilter, StudentPatch};
