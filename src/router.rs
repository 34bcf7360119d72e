use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::assignments::init_assignments_router;
use crate::modules::attachments::init_attachments_router;
use crate::modules::calendar_entries::init_calendar_entries_router;
use crate::modules::calendars::init_calendars_router;
use crate::modules::contacts::init_contacts_router;
use crate::modules::course_attachments::init_course_attachments_router;
use crate::modules::courses::init_courses_router;
use crate::modules::exam_attachments::init_exam_attachments_router;
use crate::modules::exams::init_exams_router;
use crate::modules::guardians::init_guardians_router;
use crate::modules::semester_courses::init_semester_courses_router;
use crate::modules::student_guardians::init_student_guardians_router;
use crate::modules::students::init_students_router;
use crate::modules::teacher_attachments::init_teacher_attachments_router;
use crate::modules::teacher_contacts::init_teacher_contacts_router;
use crate::modules::teachers::init_teachers_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Json, Router, middleware, routing::get};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/students", init_students_router())
                .nest("/teachers", init_teachers_router())
                .nest("/guardians", init_guardians_router())
                .nest("/courses", init_courses_router())
                .nest("/exams", init_exams_router())
                .nest("/attachments", init_attachments_router())
                .nest("/calendars", init_calendars_router())
                .nest("/calendar-entries", init_calendar_entries_router())
                .nest("/student-guardians", init_student_guardians_router())
                .nest("/teacher-attachments", init_teacher_attachments_router())
                .nest("/course-attachments", init_course_attachments_router())
                .nest("/exam-attachments", init_exam_attachments_router())
                .nest("/assignments", init_assignments_router())
                .nest("/semester-courses", init_semester_courses_router())
                .nest("/contacts", init_contacts_router())
                .nest("/teacher-contacts", init_teacher_contacts_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        })
        .layer(middleware::from_fn(logging_middleware))
}
