//! Baseline dataset loaded by [`SchoolStore::seed`](crate::store::SchoolStore::seed).

/// `(name, email)` pairs, in id order.
pub const STUDENTS: &[(&str, &str)] = &[
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
    ("Charlie", "charlie@example.com"),
];

/// `(title, teacher)` pairs, in id order.
pub const COURSES: &[(&str, &str)] = &[
    ("Math", "Mr. Smith"),
    ("Physics", "Mrs. Johnson"),
    ("History", "Ms. Davis"),
];
