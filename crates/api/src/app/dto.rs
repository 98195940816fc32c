use serde::Deserialize;
use serde_json::Value;

use school_courses::{Course, CourseFilter};
use school_infra::{Page, Pagination};
use school_students::{Student, StudentFilter};

// -------------------------
// Query DTOs
// -------------------------

/// Raw query strings; unparsable numbers fall back to the pagination defaults.
#[derive(Debug, Default, Deserialize)]
pub struct StudentListQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CourseListQuery {
    pub title: Option<String>,
    pub teacher: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn parse_paging(page: Option<&str>, limit: Option<&str>) -> Pagination {
    let number = |v: Option<&str>| v.and_then(|s| s.trim().parse::<u32>().ok());
    Pagination::new(number(page), number(limit))
}

impl StudentListQuery {
    pub fn into_parts(self) -> (StudentFilter, Pagination) {
        let pagination = parse_paging(self.page.as_deref(), self.limit.as_deref());
        let filter = StudentFilter {
            name: self.name,
            email: self.email,
        };
        (filter, pagination)
    }
}

impl CourseListQuery {
    pub fn into_parts(self) -> (CourseFilter, Pagination) {
        let pagination = parse_paging(self.page.as_deref(), self.limit.as_deref());
        let filter = CourseFilter {
            title: self.title,
            teacher: self.teacher,
        };
        (filter, pagination)
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn student_page_to_json(page: Page<Student>) -> Value {
    serde_json::json!({
        "students": page.items,
        "total": page.total,
    })
}

pub fn course_page_to_json(page: Page<Course>) -> Value {
    serde_json::json!({
        "courses": page.items,
        "total": page.total,
    })
}

pub fn student_detail_to_json(student: Student, courses: Vec<Course>) -> Value {
    serde_json::json!({
        "student": student,
        "courses": courses,
    })
}

pub fn course_detail_to_json(course: Course, students: Vec<Student>) -> Value {
    serde_json::json!({
        "course": course,
        "students": students,
    })
}
