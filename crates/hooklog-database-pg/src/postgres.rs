use async_trait::async_trait;
use hooklog_database_interface::{DatabaseError, DbService, Result};
use hooklog_models::{EventAction, EventRecord};
use sqlx::{PgPool, Row};

use crate::row::EventRecordRow;

pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn wrap_error(e: sqlx::Error) -> DatabaseError {
        DatabaseError::ImplementationError { source: e.into() }
    }
}

#[async_trait]
impl DbService for PostgresDb {
    async fn event_records_create(&self, instance: EventRecord) -> Result<EventRecord> {
        let occurred_at = instance.occurred_at();
        let time = instance.time.as_ref();

        let row = sqlx::query_as::<_, EventRecordRow>(
            r#"
            INSERT INTO event_record
            (
                request_id,
                author,
                action,
                from_branch,
                to_branch,
                event_timestamp,
                time_hours,
                time_minutes,
                time_days,
                occurred_at
            )
            VALUES
            (
                $1,
                $2,
                $3,
                $4,
                $5,
                $6,
                $7,
                $8,
                $9,
                $10
            )
            RETURNING *
        "#,
        )
        .bind(&instance.request_id)
        .bind(&instance.author)
        .bind(instance.action.as_str())
        .bind(&instance.from_branch)
        .bind(&instance.to_branch)
        .bind(&instance.timestamp)
        .bind(time.map(|t| t.hours.clone()))
        .bind(time.map(|t| t.minutes.clone()))
        .bind(time.map(|t| t.days.clone()))
        .bind(occurred_at)
        .fetch_one(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(row.into())
    }

    async fn event_records_get(&self, id: u64) -> Result<Option<EventRecord>> {
        let row = sqlx::query_as::<_, EventRecordRow>(
            r#"
            SELECT *
            FROM event_record
            WHERE id = $1
        "#,
        )
        .bind(id as i32)
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(row.map(Into::into))
    }

    async fn event_records_all(&self) -> Result<Vec<EventRecord>> {
        let rows = sqlx::query_as::<_, EventRecordRow>(
            r#"
            SELECT *
            FROM event_record
            ORDER BY occurred_at DESC NULLS LAST, id DESC
        "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Self::wrap_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn event_records_count(&self, action: Option<EventAction>) -> Result<u64> {
        let count: i64 = match action {
            Some(action) => sqlx::query(
                r#"
                    SELECT COUNT(*)
                    FROM event_record
                    WHERE action = $1
                "#,
            )
            .bind(action.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(Self::wrap_error)?
            .get(0),
            None => sqlx::query(
                r#"
                    SELECT COUNT(*)
                    FROM event_record
                "#,
            )
            .fetch_one(&self.pool)
            .await
            .map_err(Self::wrap_error)?
            .get(0),
        };

        Ok(count as u64)
    }

    async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1;")
            .execute(&self.pool)
            .await
            .map_err(Self::wrap_error)?;

        Ok(())
    }
}
