pub mod assignments;
pub mod attachments;
pub mod calendar_entries;
pub mod calendars;
pub mod contacts;
pub mod course_attachments;
pub mod courses;
pub mod exam_attachments;
pub mod exams;
pub mod guardians;
pub mod semester_courses;
pub mod student_guardians;
pub mod students;
pub mod teacher_attachments;
pub mod teacher_contacts;
pub mod teachers;

pub use self::assignments::AssignmentService;
pub use self::attachments::AttachmentService;
pub use self::calendar_entries::CalendarEntryService;
pub use self::calendars::CalendarService;
pub use self::contacts::ContactService;
pub use self::course_attachments::CourseAttachmentService;
pub use self::courses::CourseService;
pub use self::exam_attachments::ExamAttachmentService;
pub use self::exams::ExamService;
pub use self::guardians::GuardianService;
pub use self::semester_courses::SemesterCourseService;
pub use self::student_guardians::StudentGuardianService;
pub use self::students::StudentService;
pub use self::teacher_attachments::TeacherAttachmentService;
pub use self::teacher_contacts::TeacherContactService;
pub use self::teachers::TeacherService;
