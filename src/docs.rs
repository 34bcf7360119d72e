use campus_core::ErrorResponse;
use campus_models::{
    Assignment, AssignmentStatus, Attachment, Audit, Calendar, CalendarEntry, Contact,
    ContactType, Course, CourseAttachment, CourseStatus, Exam, ExamAttachment, ExamType, Gender,
    Guardian, GuardianRelationship, SemesterCourse, SemesterCourseStatus, Student,
    StudentGuardian, Teacher, TeacherAttachment, TeacherContact, TeacherStatus,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student_by_id,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::get_teachers,
        crate::modules::teachers::controller::get_teacher_by_id,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::guardians::controller::create_guardian,
        crate::modules::guardians::controller::get_guardians,
        crate::modules::guardians::controller::get_guardian_by_id,
        crate::modules::guardians::controller::update_guardian,
        crate::modules::guardians::controller::delete_guardian,
        crate::modules::courses::controller::create_course,
        crate::modules::courses::controller::get_courses,
        crate::modules::courses::controller::get_course_by_id,
        crate::modules::courses::controller::update_course,
        crate::modules::courses::controller::delete_course,
        crate::modules::exams::controller::create_exam,
        crate::modules::exams::controller::get_exams,
        crate::modules::exams::controller::get_exam_by_id,
        crate::modules::exams::controller::update_exam,
        crate::modules::exams::controller::delete_exam,
        crate::modules::attachments::controller::create_attachment,
        crate::modules::attachments::controller::get_attachments,
        crate::modules::attachments::controller::get_attachment_by_id,
        crate::modules::attachments::controller::update_attachment,
        crate::modules::attachments::controller::delete_attachment,
        crate::modules::calendars::controller::create_calendar,
        crate::modules::calendars::controller::get_calendars,
        crate::modules::calendars::controller::get_calendar_by_id,
        crate::modules::calendars::controller::update_calendar,
        crate::modules::calendars::controller::delete_calendar,
        crate::modules::calendar_entries::controller::create_calendar_entry,
        crate::modules::calendar_entries::controller::get_calendar_entries,
        crate::modules::calendar_entries::controller::get_calendar_entry_by_id,
        crate::modules::calendar_entries::controller::update_calendar_entry,
        crate::modules::calendar_entries::controller::delete_calendar_entry,
        crate::modules::student_guardians::controller::create_student_guardian,
        crate::modules::student_guardians::controller::get_student_guardians,
        crate::modules::student_guardians::controller::get_student_guardian_by_id,
        crate::modules::student_guardians::controller::update_student_guardian,
        crate::modules::student_guardians::controller::delete_student_guardian,
        crate::modules::teacher_attachments::controller::create_teacher_attachment,
        crate::modules::teacher_attachments::controller::get_teacher_attachments,
        crate::modules::teacher_attachments::controller::get_teacher_attachment_by_id,
        crate::modules::teacher_attachments::controller::update_teacher_attachment,
        crate::modules::teacher_attachments::controller::delete_teacher_attachment,
        crate::modules::course_attachments::controller::create_course_attachment,
        crate::modules::course_attachments::controller::get_course_attachments,
        crate::modules::course_attachments::controller::get_course_attachment_by_id,
        crate::modules::course_attachments::controller::update_course_attachment,
        crate::modules::course_attachments::controller::delete_course_attachment,
        crate::modules::exam_attachments::controller::create_exam_attachment,
        crate::modules::exam_attachments::controller::get_exam_attachments,
        crate::modules::exam_attachments::controller::get_exam_attachment_by_id,
        crate::modules::exam_attachments::controller::update_exam_attachment,
        crate::modules::exam_attachments::controller::delete_exam_attachment,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::get_assignments,
        crate::modules::assignments::controller::get_assignment_by_id,
        crate::modules::assignments::controller::update_assignment,
        crate::modules::assignments::controller::delete_assignment,
        crate::modules::semester_courses::controller::create_semester_course,
        crate::modules::semester_courses::controller::get_semester_courses,
        crate::modules::semester_courses::controller::get_semester_course_by_id,
        crate::modules::semester_courses::controller::update_semester_course,
        crate::modules::semester_courses::controller::delete_semester_course,
        crate::modules::contacts::controller::create_contact,
        crate::modules::contacts::controller::get_contacts,
        crate::modules::contacts::controller::get_contact_by_id,
        crate::modules::contacts::controller::update_contact,
        crate::modules::contacts::controller::delete_contact,
        crate::modules::teacher_contacts::controller::create_teacher_contact,
        crate::modules::teacher_contacts::controller::get_teacher_contacts,
        crate::modules::teacher_contacts::controller::get_teacher_contact_by_id,
        crate::modules::teacher_contacts::controller::update_teacher_contact,
        crate::modules::teacher_contacts::controller::delete_teacher_contact,
    ),
    components(
        schemas(
            Student,
            Teacher,
            Guardian,
            Course,
            Exam,
            Attachment,
            Calendar,
            CalendarEntry,
            StudentGuardian,
            TeacherAttachment,
            CourseAttachment,
            ExamAttachment,
            Assignment,
            SemesterCourse,
            Contact,
            TeacherContact,
            Audit,
            Gender,
            TeacherStatus,
            CourseStatus,
            ExamType,
            GuardianRelationship,
            AssignmentStatus,
            SemesterCourseStatus,
            ContactType,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Students", description = "Student records"),
        (name = "Teachers", description = "Teacher records"),
        (name = "Guardians", description = "Guardians and their contact details"),
        (name = "Courses", description = "Course catalogue"),
        (name = "Exams", description = "Exams"),
        (name = "Attachments", description = "Attachment metadata"),
        (name = "Calendars", description = "Calendars"),
        (name = "Calendar Entries", description = "Calendar entries"),
        (name = "Student Guardians", description = "Links between students and guardians"),
        (name = "Teacher Attachments", description = "Attachments linked to teachers"),
        (name = "Course Attachments", description = "Attachments linked to courses"),
        (name = "Exam Attachments", description = "Attachments linked to exams"),
        (name = "Assignments", description = "Assignments and their deadlines"),
        (name = "Semester Courses", description = "Courses scheduled for a semester"),
        (name = "Contacts", description = "Contact details"),
        (name = "Teacher Contacts", description = "Contacts linked to teachers")
    ),
    info(
        title = "Campus API",
        version = "0.1.0",
        description = "School management REST API: students, teachers, guardians, courses, exams, assignments, attachments, contacts and calendars.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
