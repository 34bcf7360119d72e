mod common;

use axum::http::StatusCode;
use campus::foundation::{DependencyFailure, FoundationError, ValidationFailure};
use campus_core::AppError;
use campus_core::validation::error_map;
use campus_db::StorageError;
use campus_models::{
    Audit, Course, CourseId, GuardianId, Student, StudentGuardian, StudentGuardianKey, StudentId,
    Teacher, TeacherStatus,
};
use chrono::Duration;
use common::{
    ACTOR, Level, OTHER_ACTOR, Op, harness, modified, new_course, new_student, new_teacher, now,
    stored_course,
};

fn field_messages(err: &FoundationError) -> std::collections::BTreeMap<String, Vec<String>> {
    error_map(err.field_errors().expect("expected an invalid entity"))
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_add_valid_course_inserts_it() {
    let h = harness::<Course>([]);
    let course = new_course();

    let added = h.service.add(Some(course.clone())).await.unwrap();

    assert_eq!(added, course);
    assert_eq!(h.storage.calls(Op::Insert), 1);
    assert_eq!(h.storage.row(course.id), Some(course));
    assert!(h.logging.is_empty());
}

#[tokio::test]
async fn test_add_null_course_is_rejected_without_touching_storage() {
    let h = harness::<Course>([]);

    let err = h.service.add(None).await.unwrap_err();

    assert!(matches!(
        err,
        FoundationError::Validation {
            source: ValidationFailure::Null { .. },
            ..
        }
    ));
    assert_eq!(h.storage.total_calls(), 0);

    let errors = h.logging.events(Level::Error);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0], "Invalid input, contact support.: The course is null.");
}

#[tokio::test]
async fn test_add_reports_every_invalid_field() {
    let h = harness::<Course>([]);
    let course = Course {
        id: CourseId::nil(),
        name: "  ".to_string(),
        description: String::new(),
        ..new_course()
    };

    let err = h.service.add(Some(course)).await.unwrap_err();
    let fields = field_messages(&err);

    assert_eq!(fields["id"], vec!["Id is required"]);
    assert_eq!(fields["name"], vec!["Text is required"]);
    assert_eq!(fields["description"], vec!["Text is required"]);
    assert_eq!(fields.len(), 3);
    assert_eq!(h.storage.calls(Op::Insert), 0);
}

#[tokio::test]
async fn test_add_rejects_created_date_outside_recent_window() {
    let h = harness::<Course>([]);
    let course = Course {
        audit: Audit::created(ACTOR, now() - Duration::minutes(2)),
        ..new_course()
    };

    let err = h.service.add(Some(course)).await.unwrap_err();
    assert_eq!(field_messages(&err)["created_date"], vec!["Date is not recent"]);

    let course = Course {
        audit: Audit::created(ACTOR, now() + Duration::minutes(2)),
        ..new_course()
    };

    let err = h.service.add(Some(course)).await.unwrap_err();
    assert_eq!(field_messages(&err)["created_date"], vec!["Date is not recent"]);
    assert_eq!(h.storage.calls(Op::Insert), 0);
}

#[tokio::test]
async fn test_add_requires_matching_audit_pairs() {
    let h = harness::<Course>([]);
    let course = Course {
        audit: Audit {
            updated_by: OTHER_ACTOR,
            updated_date: now() + Duration::seconds(5),
            ..Audit::created(ACTOR, now())
        },
        ..new_course()
    };

    let err = h.service.add(Some(course)).await.unwrap_err();
    let fields = field_messages(&err);

    assert_eq!(fields["updated_by"], vec!["Id is not the same as created_by"]);
    assert_eq!(
        fields["updated_date"],
        vec!["Date is not the same as created_date"]
    );
}

#[tokio::test]
async fn test_add_duplicate_course_is_conflict() {
    let existing = new_course();
    let h = harness([existing.clone()]);

    let err = h.service.add(Some(existing)).await.unwrap_err();

    assert!(matches!(
        err,
        FoundationError::Validation {
            source: ValidationFailure::AlreadyExists { .. },
            ..
        }
    ));
    assert_eq!(h.logging.events(Level::Error).len(), 1);

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.error.to_string(),
        "A course with the same id already exists."
    );
}

#[tokio::test]
async fn test_add_unknown_reference_is_bad_request() {
    let h = harness::<Course>([]);
    h.storage.fail(Op::Insert, || {
        StorageError::ForeignKeyViolation("courses_created_by_fkey".to_string())
    });

    let err = h.service.add(Some(new_course())).await.unwrap_err();

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_connection_failure_is_critical() {
    let h = harness::<Course>([]);
    h.storage
        .fail(Op::Insert, || StorageError::Connection(sqlx::Error::PoolTimedOut));

    let err = h.service.add(Some(new_course())).await.unwrap_err();

    assert!(matches!(
        err,
        FoundationError::Dependency {
            source: DependencyFailure::Storage { .. },
            ..
        }
    ));
    assert_eq!(h.logging.events(Level::Critical).len(), 1);
    assert!(h.logging.events(Level::Error).is_empty());

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_add_unexpected_failure_is_service_error() {
    let h = harness::<Course>([]);
    h.storage
        .fail(Op::Insert, || StorageError::Unexpected(sqlx::Error::RowNotFound));

    let err = h.service.add(Some(new_course())).await.unwrap_err();

    assert!(matches!(err, FoundationError::Service { .. }));
    assert_eq!(h.logging.events(Level::Critical).len(), 1);
}

#[tokio::test]
async fn test_add_teacher_must_start_active() {
    let h = harness::<Teacher>([]);
    let teacher = Teacher {
        status: TeacherStatus::Inactive,
        ..new_teacher()
    };

    let err = h.service.add(Some(teacher)).await.unwrap_err();
    assert_eq!(field_messages(&err)["status"], vec!["Value is invalid"]);

    assert!(h.service.add(Some(new_teacher())).await.is_ok());
}

#[tokio::test]
async fn test_add_student_keeps_microsecond_dates() {
    let h = harness::<Student>([]);
    let at = now() + Duration::microseconds(123_456);
    let student = Student {
        audit: Audit::created(ACTOR, at),
        ..new_student()
    };

    let added = h.service.add(Some(student.clone())).await.unwrap();

    assert_eq!(added, student);
    assert_eq!(added.audit.created_date, at);
}

#[tokio::test]
async fn test_add_student_with_nanosecond_dates_is_rejected() {
    let h = harness::<Student>([]);
    let at = now() + Duration::nanoseconds(123_456_789);
    let student = Student {
        birth_date: new_student().birth_date + Duration::nanoseconds(1),
        audit: Audit::created(ACTOR, at),
        ..new_student()
    };

    let err = h.service.add(Some(student)).await.unwrap_err();
    let fields = field_messages(&err);

    assert_eq!(fields["created_date"], vec!["Date precision is invalid"]);
    assert_eq!(fields["updated_date"], vec!["Date precision is invalid"]);
    assert_eq!(fields["birth_date"], vec!["Date precision is invalid"]);
    assert_eq!(h.storage.calls(Op::Insert), 0);

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_student_with_oversized_identity_number_is_bad_request() {
    let h = harness::<Student>([]);
    let student = Student {
        identity_number: "9".repeat(65),
        ..new_student()
    };

    let err = h.service.add(Some(student)).await.unwrap_err();

    assert_eq!(
        field_messages(&err)["identity_number"],
        vec!["Text exceeds 64 characters"]
    );
    assert_eq!(h.storage.calls(Op::Insert), 0);

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let student = Student {
        identity_number: "9".repeat(64),
        ..new_student()
    };
    assert!(h.service.add(Some(student)).await.is_ok());
}

#[tokio::test]
async fn test_add_value_rejected_by_schema_is_bad_request() {
    let h = harness::<Course>([]);
    h.storage.fail(Op::Insert, || {
        StorageError::InvalidValue("value too long for type character varying(255)".to_string())
    });

    let err = h.service.add(Some(new_course())).await.unwrap_err();

    assert!(matches!(
        err,
        FoundationError::Validation {
            source: ValidationFailure::Unstorable { .. },
            ..
        }
    ));
    assert_eq!(h.logging.events(Level::Error).len(), 1);
    assert!(h.logging.events(Level::Critical).is_empty());

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.error.to_string(),
        "The course holds a value that cannot be stored."
    );
}

// ---------------------------------------------------------------------------
// retrieve
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_retrieve_all_empty_logs_warning() {
    let h = harness::<Course>([]);

    let courses = h.service.retrieve_all().await.unwrap();

    assert!(courses.is_empty());
    assert_eq!(
        h.logging.events(Level::Warning),
        vec!["No courses found in storage."]
    );
}

#[tokio::test]
async fn test_retrieve_all_returns_stored_rows() {
    let h = harness([stored_course(), stored_course()]);

    let courses = h.service.retrieve_all().await.unwrap();

    assert_eq!(courses.len(), 2);
    assert!(h.logging.is_empty());
}

#[tokio::test]
async fn test_retrieve_by_nil_id_skips_storage() {
    let h = harness::<Course>([]);

    let err = h.service.retrieve_by_id(CourseId::nil()).await.unwrap_err();

    assert_eq!(field_messages(&err)["id"], vec!["Id is required"]);
    assert_eq!(h.storage.calls(Op::SelectById), 0);
}

#[tokio::test]
async fn test_retrieve_missing_course_is_not_found() {
    let h = harness::<Course>([]);
    let id = CourseId::new();

    let err = h.service.retrieve_by_id(id).await.unwrap_err();

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.error.to_string(),
        format!("Couldn't find course with id: {}.", id)
    );
}

#[tokio::test]
async fn test_retrieve_by_composite_key_validates_both_ids() {
    let h = harness::<StudentGuardian>([]);
    let key = StudentGuardianKey {
        student_id: StudentId::new(),
        guardian_id: GuardianId::nil(),
    };

    let err = h.service.retrieve_by_id(key).await.unwrap_err();
    let fields = field_messages(&err);

    assert_eq!(fields["guardian_id"], vec!["Id is required"]);
    assert!(!fields.contains_key("student_id"));
}

// ---------------------------------------------------------------------------
// modify
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_modify_updates_stored_course() {
    let stored = stored_course();
    let h = harness([stored.clone()]);
    let update = modified(&stored);

    let result = h.service.modify(Some(update.clone())).await.unwrap();

    assert_eq!(result, update);
    assert_eq!(h.storage.calls(Op::SelectById), 1);
    assert_eq!(h.storage.calls(Op::Update), 1);
    assert_eq!(h.storage.row(stored.id), Some(update));
}

#[tokio::test]
async fn test_modify_null_course_logs_once_without_storage_or_clock() {
    let h = harness([stored_course()]);

    let err = h.service.modify(None).await.unwrap_err();

    assert!(matches!(
        err,
        FoundationError::Validation {
            source: ValidationFailure::Null { .. },
            ..
        }
    ));
    assert_eq!(
        h.logging.events(Level::Error),
        vec!["Invalid input, contact support.: The course is null."]
    );
    assert!(h.logging.events(Level::Warning).is_empty());
    assert!(h.logging.events(Level::Critical).is_empty());
    assert_eq!(h.storage.total_calls(), 0);
    assert_eq!(h.clock.reads(), 0);
}

#[tokio::test]
async fn test_modify_requires_updated_date_to_move() {
    let stored = stored_course();
    let h = harness([stored.clone()]);
    let update = Course {
        audit: Audit {
            updated_by: OTHER_ACTOR,
            ..stored.audit
        },
        ..stored
    };

    let err = h.service.modify(Some(update)).await.unwrap_err();
    let fields = field_messages(&err);

    assert_eq!(
        fields["updated_date"],
        vec!["Date is the same as created_date", "Date is not recent"]
    );
    assert_eq!(h.storage.calls(Op::SelectById), 0);
}

#[tokio::test]
async fn test_modify_missing_course_is_not_found() {
    let h = harness::<Course>([]);

    let err = h
        .service
        .modify(Some(modified(&stored_course())))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FoundationError::Validation {
            source: ValidationFailure::NotFound { .. },
            ..
        }
    ));
    assert_eq!(h.storage.calls(Op::Update), 0);
}

#[tokio::test]
async fn test_modify_reports_only_first_mismatch_with_stored() {
    let stored = stored_course();
    let h = harness([stored.clone()]);
    let mut update = modified(&stored);
    update.audit.created_date = stored.audit.created_date - Duration::minutes(1);
    update.audit.created_by = OTHER_ACTOR;

    let err = h.service.modify(Some(update)).await.unwrap_err();
    let fields = field_messages(&err);

    assert_eq!(fields.len(), 1);
    assert_eq!(
        fields["created_date"],
        vec!["Date is not the same as created_date"]
    );
    assert_eq!(h.storage.calls(Op::Update), 0);
}

#[tokio::test]
async fn test_modify_rejects_changed_creator() {
    let stored = stored_course();
    let h = harness([stored.clone()]);
    let mut update = modified(&stored);
    update.audit.created_by = OTHER_ACTOR;

    let err = h.service.modify(Some(update)).await.unwrap_err();
    let fields = field_messages(&err);

    assert_eq!(fields.len(), 1);
    assert_eq!(fields["created_by"], vec!["Id is not the same as created_by"]);
    assert_eq!(h.storage.calls(Op::SelectById), 1);
    assert_eq!(h.storage.calls(Op::Update), 0);
    assert_eq!(h.logging.events(Level::Error).len(), 1);
}

#[tokio::test]
async fn test_modify_rejects_stale_updated_date() {
    let mut stored = stored_course();
    stored.audit = stored.audit.touched(ACTOR, now());
    let h = harness([stored.clone()]);
    let update = modified(&stored);

    let err = h.service.modify(Some(update)).await.unwrap_err();

    assert_eq!(
        field_messages(&err)["updated_date"],
        vec!["Date is the same as updated_date"]
    );
}

#[tokio::test]
async fn test_modify_locked_row_maps_to_423() {
    let stored = stored_course();
    let h = harness([stored.clone()]);
    h.storage.fail(Op::Update, || {
        StorageError::Locked("could not obtain lock on row".to_string())
    });

    let err = h.service.modify(Some(modified(&stored))).await.unwrap_err();

    assert!(matches!(
        err,
        FoundationError::Dependency {
            source: DependencyFailure::Locked { .. },
            ..
        }
    ));
    assert_eq!(h.logging.events(Level::Error).len(), 1);

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::LOCKED);
}

// ---------------------------------------------------------------------------
// remove
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_remove_returns_deleted_course() {
    let stored = stored_course();
    let h = harness([stored.clone()]);

    let removed = h.service.remove_by_id(stored.id).await.unwrap();

    assert_eq!(removed, stored);
    assert_eq!(h.storage.row(stored.id), None);
}

#[tokio::test]
async fn test_remove_select_timeout_never_deletes() {
    let stored = stored_course();
    let h = harness([stored.clone()]);
    h.storage
        .fail(Op::SelectById, || StorageError::Connection(sqlx::Error::PoolTimedOut));

    let err = h.service.remove_by_id(stored.id).await.unwrap_err();

    assert!(matches!(err, FoundationError::Dependency { .. }));
    assert_eq!(h.storage.calls(Op::SelectById), 1);
    assert_eq!(h.storage.calls(Op::Delete), 0);
    assert_eq!(h.logging.events(Level::Critical).len(), 1);
    assert!(h.storage.row(stored.id).is_some());
}

#[tokio::test]
async fn test_remove_missing_course_is_not_found() {
    let h = harness::<Course>([]);

    let err = h.service.remove_by_id(CourseId::new()).await.unwrap_err();

    let response: AppError = err.into();
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(h.storage.calls(Op::Delete), 0);
}
