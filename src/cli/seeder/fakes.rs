//! Fake record generation. Generated records carry an empty [`Audit`];
//! they are stamped right before insertion.

use campus_models::{
    Audit, Course, CourseId, CourseStatus, Gender, Guardian, GuardianId, GuardianRelationship,
    Student, StudentGuardian, StudentId, Teacher, TeacherId, TeacherStatus, UserId,
};
use chrono::{DateTime, TimeZone, Utc};
use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;

const SUBJECTS: &[&str] = &[
    "Mathematics",
    "English",
    "Biology",
    "Chemistry",
    "Physics",
    "History",
    "Geography",
    "Art",
    "Music",
    "Computer Science",
];

const LANGUAGES: &[&str] = &["English", "Spanish", "French", "Arabic", "Mandarin", "Yoruba"];

const TITLES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Dr."];

fn pick<T: Copy>(values: &[T]) -> T {
    values[(0..values.len()).fake::<usize>()]
}

fn fake_gender() -> Gender {
    pick(&[Gender::Female, Gender::Male])
}

fn fake_birth_date(years: std::ops::Range<i32>) -> DateTime<Utc> {
    let year = years.fake::<i32>();
    let month = (1..13).fake::<u32>();
    let day = (1..29).fake::<u32>();

    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

pub fn generate_students(count: usize) -> Vec<Student> {
    (0..count)
        .into_par_iter()
        .map(|_| Student {
            id: StudentId::new(),
            user_id: UserId::new(),
            identity_number: format!("STU-{:06}", (0..1_000_000).fake::<u32>()),
            first_name: FirstName().fake(),
            middle_name: None,
            last_name: LastName().fake(),
            birth_date: fake_birth_date(2008..2019),
            gender: fake_gender(),
            audit: Audit::default(),
        })
        .collect()
}

pub fn generate_teachers(count: usize) -> Vec<Teacher> {
    (0..count)
        .into_par_iter()
        .map(|_| Teacher {
            id: TeacherId::new(),
            user_id: UserId::new(),
            employee_number: format!("EMP-{:05}", (0..100_000).fake::<u32>()),
            first_name: FirstName().fake(),
            middle_name: FirstName().fake(),
            last_name: LastName().fake(),
            gender: fake_gender(),
            status: TeacherStatus::Active,
            audit: Audit::default(),
        })
        .collect()
}

pub fn generate_guardians(count: usize) -> Vec<Guardian> {
    (0..count)
        .into_par_iter()
        .map(|_| Guardian {
            id: GuardianId::new(),
            title: Some(pick(TITLES).to_string()),
            first_name: FirstName().fake(),
            middle_name: None,
            last_name: LastName().fake(),
            gender: fake_gender(),
            email_address: SafeEmail().fake(),
            native_language: pick(LANGUAGES).to_string(),
            occupation: None,
            audit: Audit::default(),
        })
        .collect()
}

pub fn generate_courses(count: usize) -> Vec<Course> {
    (0..count)
        .into_par_iter()
        .map(|i| Course {
            id: CourseId::new(),
            name: format!("{} {}", SUBJECTS[i % SUBJECTS.len()], i / SUBJECTS.len() + 1),
            description: Sentence(6..12).fake(),
            status: CourseStatus::Available,
            audit: Audit::default(),
        })
        .collect()
}

/// Links every student to one guardian, round-robin. Empty when there are
/// no guardians.
pub fn link_guardians(students: &[Student], guardians: &[Guardian]) -> Vec<StudentGuardian> {
    if guardians.is_empty() {
        return Vec::new();
    }

    students
        .par_iter()
        .enumerate()
        .map(|(i, student)| StudentGuardian {
            student_id: student.id,
            guardian_id: guardians[i % guardians.len()].id,
            relationship: pick(&[
                GuardianRelationship::Mother,
                GuardianRelationship::Father,
                GuardianRelationship::Guardian,
            ]),
            is_primary_contact: true,
            audit: Audit::default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::validation::{is_invalid_email, is_invalid_text};

    #[test]
    fn test_generated_records_have_ids_and_names() {
        let students = generate_students(20);
        assert_eq!(students.len(), 20);
        assert!(students.iter().all(|s| !s.id.is_nil()));
        assert!(students.iter().all(|s| !is_invalid_text(&s.first_name).is_violated()));

        let teachers = generate_teachers(5);
        assert!(teachers.iter().all(|t| !is_invalid_text(&t.middle_name).is_violated()));
        assert!(teachers.iter().all(|t| t.status == TeacherStatus::Active));
    }

    #[test]
    fn test_guardian_emails_are_valid() {
        let guardians = generate_guardians(20);
        assert!(
            guardians
                .iter()
                .all(|g| !is_invalid_email(&g.email_address).is_violated())
        );
    }

    #[test]
    fn test_link_guardians_round_robin() {
        let students = generate_students(5);
        let guardians = generate_guardians(2);

        let links = link_guardians(&students, &guardians);
        assert_eq!(links.len(), 5);
        assert_eq!(links[0].guardian_id, guardians[0].id);
        assert_eq!(links[3].guardian_id, guardians[1].id);
        assert_eq!(links[4].student_id, students[4].id);

        assert!(link_guardians(&students, &[]).is_empty());
    }
}
