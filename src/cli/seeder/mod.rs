//! Database seeding for local development.
//!
//! Records are generated in parallel with Rayon, then inserted one by one
//! through the foundation services so they pass the same validation as API
//! requests. Everything seeded is created by [`SEEDER_ID`], which is how
//! [`clear_seeded_data`] finds it again.

pub mod fakes;
pub mod models;

pub use models::{SeedConfig, SeedSummary};

use std::time::Instant;

use campus_db::PgPool;
use campus_models::{
    Assignment, Attachment, Audit, Calendar, CalendarEntry, Contact, Course, CourseAttachment,
    Exam, ExamAttachment, Guardian, SemesterCourse, Student, StudentGuardian, Teacher,
    TeacherAttachment, TeacherContact, UserId,
};

use crate::brokers::{DateTimeBroker, SystemDateTimeBroker, Table};
use crate::foundation::{FoundationError, FoundationService, Record};
use crate::state::AppState;

pub const SEEDER_ID: UserId = UserId::from_u128(0x5eed_0000_0000_4000_8000_0000_0000_0001);

/// Stamps each entity as created by the seeder just before it is added, so
/// that creation dates stay recent however long the run takes.
async fn add_all<E, F>(
    service: &FoundationService<E>,
    entities: Vec<E>,
    stamp: F,
) -> Result<Vec<E>, FoundationError>
where
    E: Record,
    F: Fn(E, Audit) -> E,
{
    let clock = SystemDateTimeBroker;
    let mut added = Vec::with_capacity(entities.len());

    for entity in entities {
        let audit = Audit::created(SEEDER_ID, clock.current_date_time());
        added.push(service.add(Some(stamp(entity, audit))).await?);
    }

    Ok(added)
}

pub async fn seed_database(state: &AppState, config: SeedConfig) -> anyhow::Result<SeedSummary> {
    let start_time = Instant::now();

    println!("🌱 Starting database seeding...");
    println!(
        "   - {} students, {} teachers, {} guardians, {} courses",
        config.students, config.teachers, config.guardians, config.courses
    );

    println!("\n🔧 Generating fake data in parallel...");
    let gen_start = Instant::now();

    let students = fakes::generate_students(config.students);
    let teachers = fakes::generate_teachers(config.teachers);
    let guardians = fakes::generate_guardians(config.guardians);
    let courses = fakes::generate_courses(config.courses);
    let links = fakes::link_guardians(&students, &guardians);

    println!("   ✓ Generated data in {:?}", gen_start.elapsed());

    println!("\n💾 Inserting records...");
    let insert_start = Instant::now();

    let students = add_all(&state.students, students, |s, audit| Student { audit, ..s }).await?;
    let teachers = add_all(&state.teachers, teachers, |t, audit| Teacher { audit, ..t }).await?;
    let guardians =
        add_all(&state.guardians, guardians, |g, audit| Guardian { audit, ..g }).await?;
    let courses = add_all(&state.courses, courses, |c, audit| Course { audit, ..c }).await?;
    let links = add_all(&state.student_guardians, links, |l, audit| StudentGuardian {
        audit,
        ..l
    })
    .await?;

    let summary = SeedSummary {
        students: students.len(),
        teachers: teachers.len(),
        guardians: guardians.len(),
        courses: courses.len(),
        student_guardians: links.len(),
    };

    println!(
        "   ✓ Inserted {} records in {:?}",
        summary.total(),
        insert_start.elapsed()
    );
    println!("\n✅ Seeding complete in {:?}", start_time.elapsed());

    Ok(summary)
}

/// Deletes every row created by [`SEEDER_ID`], join tables first.
/// Returns the number of rows removed.
pub async fn clear_seeded_data(db: &PgPool) -> Result<u64, sqlx::Error> {
    let tables = [
        StudentGuardian::TABLE,
        TeacherAttachment::TABLE,
        CourseAttachment::TABLE,
        ExamAttachment::TABLE,
        TeacherContact::TABLE,
        SemesterCourse::TABLE,
        CalendarEntry::TABLE,
        Student::TABLE,
        Teacher::TABLE,
        Guardian::TABLE,
        Course::TABLE,
        Exam::TABLE,
        Attachment::TABLE,
        Calendar::TABLE,
        Assignment::TABLE,
        Contact::TABLE,
    ];

    let mut tx = db.begin().await?;
    let mut removed = 0;

    for table in tables {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE created_by = $1", table))
            .bind(SEEDER_ID)
            .execute(&mut *tx)
            .await?;

        removed += result.rows_affected();
    }

    tx.commit().await?;

    Ok(removed)
}
