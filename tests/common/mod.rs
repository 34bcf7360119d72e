#![allow(dead_code)]

use std::collections::HashMap;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use campus::brokers::logging::error_chain;
use campus::brokers::{DateTimeBroker, LoggingBroker, StorageBroker};
use campus::foundation::{FoundationService, Record};
use campus_db::StorageError;
use campus_models::{
    Audit, Course, CourseId, CourseStatus, Gender, Student, StudentId, Teacher, TeacherId, UserId,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// Fixed "now" shared by the fixtures and the clock double.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 2, 8, 0, 0).unwrap()
}

pub const ACTOR: UserId = UserId::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0a01);
pub const OTHER_ACTOR: UserId = UserId::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0a02);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Insert,
    SelectAll,
    SelectById,
    Update,
    Delete,
}

/// In-memory storage that records every call and can be told to fail.
pub struct MockStorageBroker<E: Record> {
    rows: Mutex<HashMap<E::Key, E>>,
    calls: Mutex<Vec<Op>>,
    failures: Mutex<HashMap<Op, fn() -> StorageError>>,
}

impl<E: Record> MockStorageBroker<E> {
    pub fn new() -> Self {
        Self::with_rows([])
    }

    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Self {
        Self {
            rows: Mutex::new(rows.into_iter().map(|row| (row.key(), row)).collect()),
            calls: Mutex::new(Vec::new()),
            failures: Mutex::new(HashMap::new()),
        }
    }

    pub fn fail(&self, op: Op, error: fn() -> StorageError) {
        self.failures.lock().unwrap().insert(op, error);
    }

    pub fn calls(&self, op: Op) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| **call == op)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn row(&self, key: E::Key) -> Option<E> {
        self.rows.lock().unwrap().get(&key).cloned()
    }

    fn record(&self, op: Op) -> Result<(), StorageError> {
        self.calls.lock().unwrap().push(op);

        match self.failures.lock().unwrap().get(&op) {
            Some(error) => Err(error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<E: Record> StorageBroker<E> for MockStorageBroker<E> {
    async fn insert(&self, entity: &E) -> Result<E, StorageError> {
        self.record(Op::Insert)?;

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&entity.key()) {
            return Err(StorageError::DuplicateKey(format!("{}_pkey", E::NAME)));
        }
        rows.insert(entity.key(), entity.clone());

        Ok(entity.clone())
    }

    async fn select_all(&self) -> Result<Vec<E>, StorageError> {
        self.record(Op::SelectAll)?;

        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn select_by_id(&self, key: E::Key) -> Result<Option<E>, StorageError> {
        self.record(Op::SelectById)?;

        Ok(self.rows.lock().unwrap().get(&key).cloned())
    }

    async fn update(&self, entity: &E) -> Result<E, StorageError> {
        self.record(Op::Update)?;

        let mut rows = self.rows.lock().unwrap();
        match rows.get_mut(&entity.key()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(StorageError::Locked(format!("{} vanished", entity.key()))),
        }
    }

    async fn delete(&self, entity: &E) -> Result<E, StorageError> {
        self.record(Op::Delete)?;

        self.rows
            .lock()
            .unwrap()
            .remove(&entity.key())
            .ok_or_else(|| StorageError::Locked(format!("{} vanished", entity.key())))
    }
}

/// Clock pinned to one instant that counts how often it was read.
pub struct FixedDateTimeBroker {
    now: DateTime<Utc>,
    reads: AtomicUsize,
}

impl FixedDateTimeBroker {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl DateTimeBroker for FixedDateTimeBroker {
    fn current_date_time(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
    Critical,
}

#[derive(Default)]
pub struct RecordingLoggingBroker {
    events: Mutex<Vec<(Level, String)>>,
}

impl RecordingLoggingBroker {
    pub fn events(&self, level: Level) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl LoggingBroker for RecordingLoggingBroker {
    fn log_warning(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push((Level::Warning, message.to_string()));
    }

    fn log_error(&self, error: &(dyn Error + 'static)) {
        self.events
            .lock()
            .unwrap()
            .push((Level::Error, error_chain(error)));
    }

    fn log_critical(&self, error: &(dyn Error + 'static)) {
        self.events
            .lock()
            .unwrap()
            .push((Level::Critical, error_chain(error)));
    }
}

pub struct Harness<E: Record> {
    pub service: FoundationService<E>,
    pub storage: Arc<MockStorageBroker<E>>,
    pub clock: Arc<FixedDateTimeBroker>,
    pub logging: Arc<RecordingLoggingBroker>,
}

pub fn harness<E: Record>(rows: impl IntoIterator<Item = E>) -> Harness<E> {
    let storage = Arc::new(MockStorageBroker::with_rows(rows));
    let clock = Arc::new(FixedDateTimeBroker::new(now()));
    let logging = Arc::new(RecordingLoggingBroker::default());

    let service = FoundationService::new(storage.clone(), clock.clone(), logging.clone());

    Harness {
        service,
        storage,
        clock,
        logging,
    }
}

/// A course ready to be added at [`now`].
pub fn new_course() -> Course {
    Course {
        id: CourseId::new(),
        name: "Algebra I".to_string(),
        description: "Linear equations and inequalities".to_string(),
        status: CourseStatus::Available,
        audit: Audit::created(ACTOR, now()),
    }
}

/// A course as stored ten minutes before [`now`].
pub fn stored_course() -> Course {
    Course {
        audit: Audit::created(ACTOR, now() - Duration::minutes(10)),
        ..new_course()
    }
}

/// `stored` as modified by [`OTHER_ACTOR`] at [`now`].
pub fn modified(stored: &Course) -> Course {
    Course {
        description: "Linear equations, inequalities and functions".to_string(),
        audit: stored.audit.touched(OTHER_ACTOR, now()),
        ..stored.clone()
    }
}

pub fn new_teacher() -> Teacher {
    Teacher {
        id: TeacherId::new(),
        user_id: UserId::new(),
        employee_number: "EMP-00042".to_string(),
        first_name: "Ada".to_string(),
        middle_name: "King".to_string(),
        last_name: "Lovelace".to_string(),
        audit: Audit::created(ACTOR, now()),
        ..Default::default()
    }
}

pub fn new_student() -> Student {
    Student {
        id: StudentId::new(),
        user_id: UserId::new(),
        identity_number: "STU-2024-0007".to_string(),
        first_name: "Grace".to_string(),
        middle_name: None,
        last_name: "Hopper".to_string(),
        birth_date: Utc.with_ymd_and_hms(2010, 12, 9, 0, 0, 0).unwrap(),
        gender: Gender::Female,
        audit: Audit::created(ACTOR, now()),
    }
}
