mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use campus::router::init_router;
use campus::state::AppState;
use campus_config::CorsConfig;
use chrono::{SubsecRound, Utc};
use common::ACTOR;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

fn setup_test_app(pool: PgPool) -> axum::Router {
    init_router(AppState::new(pool, CorsConfig::default()))
}

fn with_audit(mut body: Value) -> Value {
    let now = Utc::now().trunc_subsecs(6);
    let audit = json!({
        "created_by": ACTOR,
        "created_date": now,
        "updated_by": ACTOR,
        "updated_date": now
    });

    if let (Some(body), Value::Object(audit)) = (body.as_object_mut(), audit) {
        body.extend(audit);
    }
    body
}

async fn send(pool: &PgPool, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn create(pool: &PgPool, uri: &str, body: Value) -> Uuid {
    let id = Uuid::new_v4();
    let mut body = with_audit(body);
    body["id"] = json!(id);

    let (status, response) = send(pool, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{response}");
    id
}

async fn create_teacher(pool: &PgPool) -> Uuid {
    create(
        pool,
        "/api/teachers",
        json!({
            "user_id": Uuid::new_v4(),
            "employee_number": "EMP-00101",
            "first_name": "Ngozi",
            "middle_name": "Ada",
            "last_name": "Okafor",
            "gender": "female",
            "status": "active"
        }),
    )
    .await
}

#[sqlx::test(migrations = "./migrations")]
async fn test_semester_course_links_course_and_teacher(pool: PgPool) {
    let teacher_id = create_teacher(&pool).await;
    let course_id = create(
        &pool,
        "/api/courses",
        json!({ "name": "Physics", "description": "Mechanics", "status": "available" }),
    )
    .await;

    let id = create(
        &pool,
        "/api/semester-courses",
        json!({
            "course_id": course_id,
            "teacher_id": teacher_id,
            "start_date": "2024-09-02T00:00:00Z",
            "end_date": "2024-12-20T00:00:00Z",
            "status": "active"
        }),
    )
    .await;

    let (status, body) = send(&pool, "GET", &format!("/api/semester-courses/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["course_id"], course_id.to_string());
    assert_eq!(body["teacher_id"], teacher_id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_semester_course_for_unknown_course_bad_request(pool: PgPool) {
    let teacher_id = create_teacher(&pool).await;
    let body = with_audit(json!({
        "id": Uuid::new_v4(),
        "course_id": Uuid::new_v4(),
        "teacher_id": teacher_id,
        "start_date": "2024-09-02T00:00:00Z",
        "end_date": "2024-12-20T00:00:00Z"
    }));

    let (status, body) = send(&pool, "POST", "/api/semester-courses", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "The semester course references a record that does not exist."
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_teacher_contact_lifecycle(pool: PgPool) {
    let teacher_id = create_teacher(&pool).await;
    let contact_id = create(
        &pool,
        "/api/contacts",
        json!({ "information": "ngozi.okafor@example.com", "contact_type": "email" }),
    )
    .await;

    let link = with_audit(json!({ "teacher_id": teacher_id, "contact_id": contact_id }));
    let (status, _) = send(&pool, "POST", "/api/teacher-contacts", Some(link)).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/teacher-contacts/teachers/{teacher_id}/contacts/{contact_id}");
    let (status, body) = send(&pool, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["contact_id"], contact_id.to_string());

    let (status, _) = send(&pool, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_email_contact_with_phone_number_bad_request(pool: PgPool) {
    let body = with_audit(json!({
        "id": Uuid::new_v4(),
        "information": "+44 20 7946 0958",
        "contact_type": "email"
    }));

    let (status, body) = send(&pool, "POST", "/api/contacts", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["information"], json!(["Email is invalid"]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_overdue_assignment_bad_request(pool: PgPool) {
    let body = with_audit(json!({
        "id": Uuid::new_v4(),
        "label": "Lab report",
        "content": "Pendulum experiment write-up",
        "deadline": "2020-01-01T00:00:00Z"
    }));

    let (status, body) = send(&pool, "POST", "/api/assignments", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["errors"]["deadline"],
        json!(["Date is earlier than created_date"])
    );
}
