use std::sync::Arc;

use campus_config::CorsConfig;
use campus_db::PgPool;

use crate::brokers::{
    DateTimeBroker, LoggingBroker, PgStorageBroker, SystemDateTimeBroker, TracingLoggingBroker,
};
use crate::foundation::FoundationService;
use crate::modules::{
    AssignmentService, AttachmentService, CalendarEntryService, CalendarService, ContactService,
    CourseAttachmentService, CourseService, ExamAttachmentService, ExamService, GuardianService,
    SemesterCourseService, StudentGuardianService, StudentService, TeacherAttachmentService,
    TeacherContactService, TeacherService,
};

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
    pub teachers: TeacherService,
    pub guardians: GuardianService,
    pub courses: CourseService,
    pub exams: ExamService,
    pub attachments: AttachmentService,
    pub calendars: CalendarService,
    pub calendar_entries: CalendarEntryService,
    pub student_guardians: StudentGuardianService,
    pub teacher_attachments: TeacherAttachmentService,
    pub course_attachments: CourseAttachmentService,
    pub exam_attachments: ExamAttachmentService,
    pub assignments: AssignmentService,
    pub semester_courses: SemesterCourseService,
    pub contacts: ContactService,
    pub teacher_contacts: TeacherContactService,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(pool: PgPool, cors_config: CorsConfig) -> Self {
        Self::with_brokers(
            pool,
            Arc::new(SystemDateTimeBroker),
            Arc::new(TracingLoggingBroker),
            cors_config,
        )
    }

    /// Every service shares one storage broker over `pool` and the given
    /// clock and logger.
    pub fn with_brokers(
        pool: PgPool,
        date_time: Arc<dyn DateTimeBroker>,
        logging: Arc<dyn LoggingBroker>,
        cors_config: CorsConfig,
    ) -> Self {
        let storage = Arc::new(PgStorageBroker::new(pool));

        macro_rules! service {
            () => {
                FoundationService::new(storage.clone(), date_time.clone(), logging.clone())
            };
        }

        Self {
            students: service!(),
            teachers: service!(),
            guardians: service!(),
            courses: service!(),
            exams: service!(),
            attachments: service!(),
            calendars: service!(),
            calendar_entries: service!(),
            student_guardians: service!(),
            teacher_attachments: service!(),
            course_attachments: service!(),
            exam_attachments: service!(),
            assignments: service!(),
            semester_courses: service!(),
            contacts: service!(),
            teacher_contacts: service!(),
            cors_config,
        }
    }
}
