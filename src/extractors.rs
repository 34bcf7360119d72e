use anyhow::anyhow;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, request::Parts},
};
use campus_core::AppError;
use serde::de::DeserializeOwned;

/// JSON request body whose rejections are reported as `400 Bad Request`
/// in the usual error envelope.
///
/// Paired with `Option<T>`, a literal `null` body reaches the handler as
/// `None` so the service can reject it itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::new(
            StatusCode::BAD_REQUEST,
            anyhow!("Missing 'Content-Type: application/json' header"),
        );
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("invalid type") || error_msg.contains("unknown variant") {
        return AppError::new(
            StatusCode::BAD_REQUEST,
            anyhow!("Invalid field type in request"),
        );
    }

    AppError::new(StatusCode::BAD_REQUEST, anyhow!("Invalid request body"))
}

/// Path parameters whose rejections use the same error envelope as
/// [`JsonBody`], e.g. a malformed UUID.
#[derive(Debug, Clone, Copy)]
pub struct PathParam<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection_to_error)?;

        Ok(Self(value))
    }
}

fn path_rejection_to_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(_) => {
            AppError::new(StatusCode::BAD_REQUEST, anyhow!("Invalid id in request path"))
        }
        _ => AppError::new(StatusCode::BAD_REQUEST, anyhow!("Invalid request path")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use axum::{Router, routing::get};
    use campus_models::{Course, CourseId, GuardianId, StudentId};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_null_body_becomes_none() {
        let JsonBody(course) = JsonBody::<Option<Course>>::from_request(json_request("null"), &())
            .await
            .unwrap();

        assert!(course.is_none());
    }

    #[tokio::test]
    async fn test_missing_fields_fall_back_to_defaults() {
        let JsonBody(course) =
            JsonBody::<Option<Course>>::from_request(json_request(r#"{"name":"Algebra"}"#), &())
                .await
                .unwrap();

        let course = course.unwrap();
        assert_eq!(course.name, "Algebra");
        assert!(course.id.is_nil());
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request() {
        let err = JsonBody::<Option<Course>>::from_request(json_request(r#"{"name":7}"#), &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "Invalid field type in request");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let request = Request::builder()
            .method("POST")
            .body(Body::from("{}"))
            .unwrap();

        let err = JsonBody::<Option<Course>>::from_request(request, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    async fn get_status(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_path_param_parses_typed_ids() {
        let router = Router::new().route(
            "/courses/{id}",
            get(|PathParam(id): PathParam<CourseId>| async move { axum::Json(id) }),
        );

        let (status, body) =
            get_status(router, "/courses/12345678-1234-1234-1234-123456789abc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "12345678-1234-1234-1234-123456789abc");
    }

    #[tokio::test]
    async fn test_malformed_path_id_uses_error_envelope() {
        let router = Router::new().route(
            "/students/{student_id}/guardians/{guardian_id}",
            get(
                |PathParam(ids): PathParam<(StudentId, GuardianId)>| async move {
                    axum::Json(ids.0)
                },
            ),
        );

        let (status, body) = get_status(
            router,
            "/students/12345678-1234-1234-1234-123456789abc/guardians/not-a-uuid",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid id in request path");
    }
}
