//! PostgreSQL record repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::record::{CollegeRecord, RecordDraft, RecordRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of RecordRepository
#[derive(Debug, Clone)]
pub struct PostgresRecordRepository {
    pool: PgPool,
}

impl PostgresRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, school_name, degree, period_from, period_to, \
                       highest_attained, year_graduated, honors, person_id";

#[async_trait]
impl RecordRepository for PostgresRecordRepository {
    async fn list(&self) -> Result<Vec<CollegeRecord>, DomainError> {
        let query = format!("SELECT {} FROM college_records ORDER BY id", COLUMNS);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list records: {}", e)))?;

        Ok(rows.iter().map(row_to_record).collect())
    }

    async fn create(&self, draft: RecordDraft) -> Result<CollegeRecord, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO college_records (school_name, degree, period_from, period_to,
                                         highest_attained, year_graduated, honors, person_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&draft.school_name)
        .bind(&draft.degree)
        .bind(&draft.period_from)
        .bind(&draft.period_to)
        .bind(&draft.highest_attained)
        .bind(&draft.year_graduated)
        .bind(&draft.honors)
        .bind(draft.person_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create record: {}", e)))?;

        Ok(CollegeRecord { id, fields: draft })
    }

    async fn update(&self, id: i64, draft: RecordDraft) -> Result<CollegeRecord, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE college_records
            SET school_name = $2, degree = $3, period_from = $4, period_to = $5,
                highest_attained = $6, year_graduated = $7, honors = $8, person_id = $9
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&draft.school_name)
        .bind(&draft.degree)
        .bind(&draft.period_from)
        .bind(&draft.period_to)
        .bind(&draft.highest_attained)
        .bind(&draft.year_graduated)
        .bind(&draft.honors)
        .bind(draft.person_id)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update record: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!("Record {} not found", id)));
        }

        Ok(CollegeRecord { id, fields: draft })
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM college_records WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete record: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_record(row: &sqlx::postgres::PgRow) -> CollegeRecord {
    CollegeRecord {
        id: row.get("id"),
        fields: RecordDraft {
            school_name: row.get("school_name"),
            degree: row.get("degree"),
            period_from: row.get("period_from"),
            period_to: row.get("period_to"),
            highest_attained: row.get("highest_attained"),
            year_graduated: row.get("year_graduated"),
            honors: row.get("honors"),
            person_id: row.get("person_id"),
        },
    }
}
