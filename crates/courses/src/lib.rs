//! Courses domain module.
//!
//! A course has a unique title, a teacher, and a fixed seat capacity.

pub mod course;

pub use course::{Course, CourseFilter, CoursePatch, NewCourse};
