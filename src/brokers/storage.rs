//! PostgreSQL storage broker.
//!
//! [`PgStorageBroker`] implements [`StorageBroker`] once for every entity that
//! describes its table through [`Table`]. Statements are assembled from the
//! column lists; placeholders follow the order of [`Table::COLUMNS`], so
//! [`Table::bind_row`] must bind values in that same order.

use async_trait::async_trait;
use campus_db::{PgPool, StorageError};
use campus_models::Audit;
use sqlx::FromRow;
use sqlx::postgres::{PgArguments, PgRow, Postgres};
use sqlx::query::QueryAs;
use tracing::instrument;

use crate::foundation::Record;

pub type PgQueryAs<'q, T> = QueryAs<'q, Postgres, T, PgArguments>;

#[async_trait]
pub trait StorageBroker<E: Record>: Send + Sync {
    async fn insert(&self, entity: &E) -> Result<E, StorageError>;

    async fn select_all(&self) -> Result<Vec<E>, StorageError>;

    /// `Ok(None)` when no row matches.
    async fn select_by_id(&self, key: E::Key) -> Result<Option<E>, StorageError>;

    async fn update(&self, entity: &E) -> Result<E, StorageError>;

    async fn delete(&self, entity: &E) -> Result<E, StorageError>;
}

/// Describes how an entity maps onto its table.
pub trait Table: Record + for<'r> FromRow<'r, PgRow> + Unpin {
    const TABLE: &'static str;

    /// Primary key columns. They must also open [`Table::COLUMNS`].
    const KEY_COLUMNS: &'static [&'static str];

    /// Every column, key columns first.
    const COLUMNS: &'static [&'static str];

    /// Binds every column of `self`, in the order of [`Table::COLUMNS`].
    fn bind_row<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    /// Binds the key columns, in the order of [`Table::KEY_COLUMNS`].
    fn bind_key<'q>(key: Self::Key, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;
}

/// Binds the four audit columns, which close every column list.
pub fn bind_audit<'q, E>(audit: &Audit, query: PgQueryAs<'q, E>) -> PgQueryAs<'q, E> {
    query
        .bind(audit.created_by)
        .bind(audit.created_date)
        .bind(audit.updated_by)
        .bind(audit.updated_date)
}

fn column_list<E: Table>() -> String {
    E::COLUMNS.join(", ")
}

fn key_predicate<E: Table>() -> String {
    E::KEY_COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn insert_sql<E: Table>() -> String {
    let placeholders = (1..=E::COLUMNS.len())
        .map(|i| format!("${}", i))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        E::TABLE,
        column_list::<E>(),
        placeholders,
        column_list::<E>()
    )
}

fn select_all_sql<E: Table>() -> String {
    format!(
        "SELECT {} FROM {} ORDER BY created_date, {}",
        column_list::<E>(),
        E::TABLE,
        E::KEY_COLUMNS.join(", ")
    )
}

fn select_by_id_sql<E: Table>() -> String {
    format!(
        "SELECT {} FROM {} WHERE {}",
        column_list::<E>(),
        E::TABLE,
        key_predicate::<E>()
    )
}

fn update_sql<E: Table>() -> String {
    let assignments = E::COLUMNS
        .iter()
        .enumerate()
        .skip(E::KEY_COLUMNS.len())
        .map(|(i, column)| format!("{} = ${}", column, i + 1))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {} RETURNING {}",
        E::TABLE,
        assignments,
        key_predicate::<E>(),
        column_list::<E>()
    )
}

fn delete_sql<E: Table>() -> String {
    format!(
        "DELETE FROM {} WHERE {} RETURNING {}",
        E::TABLE,
        key_predicate::<E>(),
        column_list::<E>()
    )
}

#[derive(Clone, Debug)]
pub struct PgStorageBroker {
    pool: PgPool,
}

impl PgStorageBroker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl<E: Table> StorageBroker<E> for PgStorageBroker {
    #[instrument(skip_all, fields(table = E::TABLE))]
    async fn insert(&self, entity: &E) -> Result<E, StorageError> {
        let sql = insert_sql::<E>();
        let row = entity
            .bind_row(sqlx::query_as::<_, E>(&sql))
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    #[instrument(skip_all, fields(table = E::TABLE))]
    async fn select_all(&self) -> Result<Vec<E>, StorageError> {
        let sql = select_all_sql::<E>();
        let rows = sqlx::query_as::<_, E>(&sql).fetch_all(&self.pool).await?;

        Ok(rows)
    }

    #[instrument(skip_all, fields(table = E::TABLE, key = %key))]
    async fn select_by_id(&self, key: E::Key) -> Result<Option<E>, StorageError> {
        let sql = select_by_id_sql::<E>();
        let row = E::bind_key(key, sqlx::query_as::<_, E>(&sql))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    #[instrument(skip_all, fields(table = E::TABLE))]
    async fn update(&self, entity: &E) -> Result<E, StorageError> {
        let sql = update_sql::<E>();
        entity
            .bind_row(sqlx::query_as::<_, E>(&sql))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                StorageError::Locked(format!("{} {} no longer exists", E::NAME, entity.key()))
            })
    }

    #[instrument(skip_all, fields(table = E::TABLE))]
    async fn delete(&self, entity: &E) -> Result<E, StorageError> {
        let sql = delete_sql::<E>();
        E::bind_key(entity.key(), sqlx::query_as::<_, E>(&sql))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| {
                StorageError::Locked(format!("{} {} no longer exists", E::NAME, entity.key()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_models::{CourseAttachment, Teacher};

    #[test]
    fn test_insert_sql_binds_every_column() {
        let sql = insert_sql::<Teacher>();
        assert!(sql.starts_with("INSERT INTO teachers (id, user_id, "));
        assert!(sql.contains(&format!("${}", Teacher::COLUMNS.len())));
        assert!(!sql.contains(&format!("${}", Teacher::COLUMNS.len() + 1)));
    }

    #[test]
    fn test_update_sql_skips_key_columns_in_set_clause() {
        let sql = update_sql::<CourseAttachment>();
        assert!(sql.contains("WHERE course_id = $1 AND attachment_id = $2"));
        assert!(sql.contains("SET notes = $3"));
        assert!(!sql.contains("SET course_id"));
    }

    #[test]
    fn test_delete_sql_matches_on_key() {
        let sql = delete_sql::<Teacher>();
        assert_eq!(
            sql,
            format!(
                "DELETE FROM teachers WHERE id = $1 RETURNING {}",
                Teacher::COLUMNS.join(", ")
            )
        );
    }
}
