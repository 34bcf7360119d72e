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

fn audit_json() -> Value {
    let now = Utc::now().trunc_subsecs(6);

    json!({
        "created_by": ACTOR,
        "created_date": now,
        "updated_by": ACTOR,
        "updated_date": now
    })
}

fn with_audit(mut body: Value) -> Value {
    if let (Some(body), Value::Object(audit)) = (body.as_object_mut(), audit_json()) {
        body.extend(audit);
    }
    body
}

async fn post(pool: &PgPool, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn get(pool: &PgPool, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn create_student(pool: &PgPool) -> Uuid {
    let id = Uuid::new_v4();
    let (status, _) = post(
        pool,
        "/api/students",
        with_audit(json!({
            "id": id,
            "user_id": Uuid::new_v4(),
            "identity_number": "STU-000001",
            "first_name": "Tobi",
            "last_name": "Adeyemi",
            "birth_date": "2012-05-17T00:00:00Z",
            "gender": "male"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id
}

async fn create_guardian(pool: &PgPool) -> Uuid {
    let id = Uuid::new_v4();
    let (status, _) = post(
        pool,
        "/api/guardians",
        with_audit(json!({
            "id": id,
            "first_name": "Funke",
            "last_name": "Adeyemi",
            "gender": "female",
            "email_address": "funke.adeyemi@example.com",
            "native_language": "Yoruba"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    id
}

#[sqlx::test(migrations = "./migrations")]
async fn test_link_student_and_guardian(pool: PgPool) {
    let student_id = create_student(&pool).await;
    let guardian_id = create_guardian(&pool).await;

    let (status, body) = post(
        &pool,
        "/api/student-guardians",
        with_audit(json!({
            "student_id": student_id,
            "guardian_id": guardian_id,
            "relationship": "mother",
            "is_primary_contact": true
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["relationship"], "mother");

    let uri = format!(
        "/api/student-guardians/students/{}/guardians/{}",
        student_id, guardian_id
    );
    let (status, body) = get(&pool, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guardian_id"], guardian_id.to_string());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_link_unknown_student_bad_request(pool: PgPool) {
    let guardian_id = create_guardian(&pool).await;

    let (status, body) = post(
        &pool,
        "/api/student-guardians",
        with_audit(json!({
            "student_id": Uuid::new_v4(),
            "guardian_id": guardian_id,
            "relationship": "father"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "The student guardian references a record that does not exist."
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_missing_link_not_found(pool: PgPool) {
    let uri = format!(
        "/api/student-guardians/students/{}/guardians/{}",
        Uuid::new_v4(),
        Uuid::new_v4()
    );

    let (status, _) = get(&pool, &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_guardian_with_malformed_email_bad_request(pool: PgPool) {
    let (status, body) = post(
        &pool,
        "/api/guardians",
        with_audit(json!({
            "id": Uuid::new_v4(),
            "first_name": "Funke",
            "last_name": "Adeyemi",
            "email_address": "funke-at-example",
            "native_language": "Yoruba"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"]["email_address"], json!(["Email is invalid"]));
}
