use reqwest::StatusCode;
use serde_json::{json, Value};

use school_infra::SchoolStore;

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Fresh seeded store per server, so tests never share state.
    async fn spawn() -> Self {
        let app = school_api::app::build_app(SchoolStore::seeded());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.get(self.url(path)).send().await.unwrap();
        read(res).await
    }

    async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read(res).await
    }

    async fn post_empty(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.post(self.url(path)).send().await.unwrap();
        read(res).await
    }

    async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let res = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read(res).await
    }

    async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let res = self.client.delete(self.url(path)).send().await.unwrap();
        read(res).await
    }

    async fn send(&self, method: reqwest::Method, path: &str) -> (StatusCode, Value) {
        let res = self
            .client
            .request(method, self.url(path))
            .send()
            .await
            .unwrap();
        read(res).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Status plus JSON body (`Null` for empty bodies such as 204).
async fn read(res: reqwest::Response) -> (StatusCode, Value) {
    let status = res.status();
    let text = res.text().await.unwrap();
    let body = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap_or_else(|e| panic!("non-JSON body {text:?}: {e}"))
    };
    (status, body)
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_students_returns_seeded_data() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.get("/students").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["students"].as_array().unwrap().len(), 3);
    assert_eq!(body["students"][0]["name"], "Alice");
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn list_students_filters_by_name_and_email() {
    let srv = TestServer::spawn().await;

    let (_, body) = srv.get("/students?name=alice").await;
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["students"][0]["name"], "Alice");

    let (_, body) = srv.get("/students?email=bob").await;
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["students"][0]["email"], "bob@example.com");
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn list_students_paginates_without_changing_total() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get("/students?page=1&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["students"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 3);

    let (_, body) = srv.get("/students?page=2&limit=2").await;
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["students"][0]["name"], "Charlie");
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn get_student_includes_courses() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.get("/students/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["name"], "Alice");
    assert_eq!(body["student"]["email"], "alice@example.com");
    assert!(body["courses"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn get_unknown_student_is_404() {
    let srv = TestServer::spawn().await;
    for path in ["/students/999", "/students/abc"] {
        let (status, body) = srv.get(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Student not found");
    }
}

#[tokio::test]
async fn create_student_assigns_id() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv
        .post("/students", json!({ "name": "David", "email": "david@example.com" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "David");
    assert_eq!(body["email"], "david@example.com");
    assert_eq!(body["id"], 4);

    let (status, body) = srv.get("/students/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student"]["name"], "David");
}

#[tokio::test]
async fn create_student_requires_name_and_email() {
    let srv = TestServer::spawn().await;
    let bodies = [
        json!({ "email": "test@example.com" }),
        json!({ "name": "Test" }),
        json!({ "name": "", "email": "" }),
    ];
    for body in bodies {
        let (status, res) = srv.post("/students", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(res["error"], "name and email required");
    }
}

#[tokio::test]
async fn create_student_rejects_duplicate_email() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv
        .post("/students", json!({ "name": "Eve", "email": "alice@example.com" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email must be unique");
}

#[tokio::test]
async fn create_student_rejects_missing_json_body() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.post_empty("/students").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_student_is_partial() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv
        .put(
            "/students/1",
            json!({ "name": "Alice Updated", "email": "alice.updated@example.com" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Alice Updated");
    assert_eq!(body["email"], "alice.updated@example.com");

    let (_, body) = srv.put("/students/2", json!({ "name": "Bob New Name" })).await;
    assert_eq!(body["name"], "Bob New Name");
    assert_eq!(body["email"], "bob@example.com");

    let (_, body) = srv
        .put("/students/3", json!({ "email": "charlie.new@example.com" }))
        .await;
    assert_eq!(body["name"], "Charlie");
    assert_eq!(body["email"], "charlie.new@example.com");
}

#[tokio::test]
async fn update_student_errors() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.put("/students/999", json!({ "name": "Test" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");

    let (status, body) = srv
        .put("/students/1", json!({ "email": "bob@example.com" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email must be unique");
}

#[tokio::test]
async fn delete_student_then_get_is_404() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.delete("/students/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = srv.get("/students/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = srv.delete("/students/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn delete_enrolled_student_is_rejected() {
    let srv = TestServer::spawn().await;
    srv.post_empty("/courses/1/students/1").await;

    let (status, body) = srv.delete("/students/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot delete student: enrolled in a course");
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_courses_filters_and_paginates() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get("/courses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["courses"][0]["title"], "Math");
    assert_eq!(body["total"], 3);

    let (_, body) = srv.get("/courses?title=Math").await;
    assert_eq!(body["courses"].as_array().unwrap().len(), 1);

    let (_, body) = srv.get("/courses?teacher=Smith").await;
    assert_eq!(body["courses"].as_array().unwrap().len(), 1);
    assert_eq!(body["courses"][0]["teacher"], "Mr. Smith");

    let (_, body) = srv.get("/courses?page=1&limit=2").await;
    assert_eq!(body["courses"].as_array().unwrap().len(), 2);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn get_course_includes_students() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.get("/courses/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["course"]["title"], "Math");
    assert_eq!(body["course"]["teacher"], "Mr. Smith");
    assert!(body["students"].is_array());

    let (status, body) = srv.get("/courses/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");
}

#[tokio::test]
async fn create_course_validation_and_uniqueness() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv
        .post("/courses", json!({ "title": "Chemistry", "teacher": "Dr. Wilson" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Chemistry");
    assert!(body["id"].is_u64());

    let (status, body) = srv.post("/courses", json!({ "teacher": "Dr. Test" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "title and teacher required");

    let (status, body) = srv
        .post("/courses", json!({ "title": "Chemistry", "teacher": "Prof. Jones" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Course title must be unique");
}

#[tokio::test]
async fn update_course_partial_and_errors() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.put("/courses/1", json!({ "title": "New Math" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "New Math");
    assert_eq!(body["teacher"], "Mr. Smith");

    let (status, body) = srv.put("/courses/1", json!({ "title": "Physics" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Course title must be unique");

    let (status, body) = srv.put("/courses/999", json!({ "title": "Test" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");
}

#[tokio::test]
async fn delete_course_rules() {
    let srv = TestServer::spawn().await;
    srv.post_empty("/courses/1/students/1").await;

    let (status, body) = srv.delete("/courses/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot delete course: students are enrolled");

    let (status, _) = srv.delete("/courses/2").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = srv.get("/courses/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = srv.delete("/courses/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Course not found");
}

// ---------------------------------------------------------------------------
// Enrollments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn enroll_then_course_lists_student() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.post_empty("/courses/1/students/1").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (_, body) = srv.get("/courses/1").await;
    assert_eq!(body["students"].as_array().unwrap().len(), 1);
    assert_eq!(body["students"][0]["name"], "Alice");
}

#[tokio::test]
async fn enroll_unknown_ids_is_400() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.post_empty("/courses/999/students/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Course not found");

    let (status, body) = srv.post_empty("/courses/1/students/999").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Student not found");
}

#[tokio::test]
async fn enroll_twice_is_rejected() {
    let srv = TestServer::spawn().await;
    srv.post_empty("/courses/1/students/1").await;

    let (status, body) = srv.post_empty("/courses/1/students/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Student already enrolled in this course");
}

#[tokio::test]
async fn fifth_student_finds_course_full() {
    let srv = TestServer::spawn().await;
    for name in ["David", "Eve"] {
        let email = format!("{}@example.com", name.to_lowercase());
        let (status, _) = srv
            .post("/students", json!({ "name": name, "email": email }))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    for student in 1..=4 {
        let (status, _) = srv
            .post_empty(&format!("/courses/1/students/{student}"))
            .await;
        assert_eq!(status, StatusCode::CREATED, "student {student} should fit");
    }

    let (status, body) = srv.post_empty("/courses/1/students/5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Course is full");
}

#[tokio::test]
async fn unenroll_removes_link() {
    let srv = TestServer::spawn().await;
    srv.post_empty("/courses/1/students/1").await;

    let (status, _) = srv.delete("/courses/1/students/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = srv.get("/courses/1").await;
    assert!(body["students"].as_array().unwrap().is_empty());

    let (status, body) = srv.delete("/courses/1/students/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Enrollment not found");

    // Deletion is allowed again once the link is gone.
    let (status, _) = srv.delete("/students/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// General
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unmatched_route_is_404_json() {
    let srv = TestServer::spawn().await;
    let (status, body) = srv.get("/nonexistent-route").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");

    let (status, body) = srv.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn unsupported_method_on_known_path_is_404_json() {
    let srv = TestServer::spawn().await;
    let cases = [
        (reqwest::Method::PATCH, "/students/1"),
        (reqwest::Method::PATCH, "/students"),
        (reqwest::Method::DELETE, "/courses"),
        (reqwest::Method::GET, "/courses/1/students/1"),
        (reqwest::Method::DELETE, "/health"),
    ];
    for (method, path) in cases {
        let (status, body) = srv.send(method.clone(), path).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {path}");
        assert_eq!(body, json!({ "error": "Not Found" }), "{method} {path}");
    }

    // The routes themselves still answer their own methods.
    let (status, _) = srv.get("/students/1").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn undecodable_list_query_still_lists() {
    let srv = TestServer::spawn().await;

    let (status, body) = srv.get("/students?name=a&name=b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
    assert_eq!(body["students"].as_array().unwrap().len(), 3);

    let (status, body) = srv.get("/courses?title=Math&title=History&page=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn related_lists_follow_enrollment_order() {
    let srv = TestServer::spawn().await;
    srv.post_empty("/courses/1/students/1").await;
    srv.post_empty("/courses/2/students/1").await;
    srv.post_empty("/courses/1/students/2").await;

    let (_, body) = srv.get("/students/1").await;
    assert_eq!(body["courses"].as_array().unwrap().len(), 2);
    assert_eq!(body["courses"][0]["title"], "Math");
    assert_eq!(body["courses"][1]["title"], "Physics");

    let (_, body) = srv.get("/courses/1").await;
    assert_eq!(body["students"][0]["name"], "Alice");
    assert_eq!(body["students"][1]["name"], "Bob");
}
