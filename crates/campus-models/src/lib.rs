//! # Campus Models
//!
//! Domain models for the Campus API.
//!
//! Every entity carries an [`Audit`] quad (`created_by`, `created_date`,
//! `updated_by`, `updated_date`) and is identified either by a strongly-typed
//! id from [`ids`] or, for join records, by a composite key of two ids.
//!
//! # Modules
//!
//! - [`students`], [`teachers`], [`guardians`]: people
//! - [`courses`], [`exams`]: teaching
//! - [`attachments`] and the `*_attachments` join records: files
//! - [`calendars`], [`calendar_entries`]: scheduling
//! - [`student_guardians`]: links between students and guardians
//! - [`assignments`], [`semester_courses`]: coursework and course scheduling
//! - [`contacts`], [`teacher_contacts`]: contact details and who they belong to

pub mod assignments;
pub mod attachments;
pub mod audit;
pub mod calendar_entries;
pub mod calendars;
pub mod contacts;
pub mod course_attachments;
pub mod courses;
pub mod enums;
pub mod exam_attachments;
pub mod exams;
pub mod guardians;
pub mod ids;
pub mod limits;
pub mod semester_courses;
pub mod student_guardians;
pub mod students;
pub mod teacher_attachments;
pub mod teacher_contacts;
pub mod teachers;

// Re-export commonly used types at crate root for convenience
pub use assignments::Assignment;
pub use attachments::Attachment;
pub use audit::Audit;
pub use calendar_entries::CalendarEntry;
pub use calendars::Calendar;
pub use contacts::Contact;
pub use course_attachments::{CourseAttachment, CourseAttachmentKey};
pub use courses::Course;
pub use enums::{
    AssignmentStatus, ContactType, CourseStatus, ExamType, Gender, GuardianRelationship,
    SemesterCourseStatus, TeacherStatus,
};
pub use exam_attachments::{ExamAttachment, ExamAttachmentKey};
pub use exams::Exam;
pub use guardians::Guardian;
pub use ids::{
    AssignmentId, AttachmentId, CalendarEntryId, CalendarId, ContactId, CourseId, ExamId,
    GuardianId, SemesterCourseId, StudentId, TeacherId, UserId,
};
pub use semester_courses::SemesterCourse;
pub use student_guardians::{StudentGuardian, StudentGuardianKey};
pub use students::Student;
pub use teacher_attachments::{TeacherAttachment, TeacherAttachmentKey};
pub use teacher_contacts::{TeacherContact, TeacherContactKey};
pub use teachers::Teacher;
