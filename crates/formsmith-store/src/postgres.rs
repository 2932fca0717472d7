use std::time::Duration;

use serde_json::Value;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use uuid::Uuid;

use crate::errors::{Result, StoreError};
use crate::record::{FormRecord, FormWithCount, NewForm, ResponseRecord};
use crate::store::FormStore;

const FORM_COLUMNS: &str = "id, user_id, title, fields, is_published, slug, created_at";
const RESPONSE_COLUMNS: &str = "id, form_id, data, created_at";

/// Postgres-backed store for forms and responses.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a store using a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect with the standard pool settings.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

    /// Create the forms and responses tables when missing. Idempotent.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS forms (
                id UUID PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                fields JSONB NOT NULL,
                is_published BOOLEAN NOT NULL DEFAULT FALSE,
                slug TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS forms_slug_key ON forms (slug)")
            .execute(&self.pool)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS forms_responses (
                id UUID PRIMARY KEY,
                form_id UUID NOT NULL REFERENCES forms (id) ON DELETE CASCADE,
                data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS forms_responses_form_id_idx \
             ON forms_responses (form_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl FormStore for PostgresStore {
    async fn create_form(&self, form: NewForm) -> Result<FormRecord> {
        let fields = serde_json::to_value(&form.fields)?;
        let row = sqlx::query(&format!(
            "INSERT INTO forms (id, user_id, title, fields, is_published, slug) \
             VALUES ($1, $2, $3, $4, FALSE, $5) RETURNING {FORM_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&form.user_id)
        .bind(&form.title)
        .bind(&fields)
        .bind(&form.slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_slug_conflict(err, &form.slug))?;

        form_from_row(&row)
    }

    async fn find_form_by_id(&self, id: Uuid) -> Result<Option<FormRecord>> {
        let row = sqlx::query(&format!("SELECT {FORM_COLUMNS} FROM forms WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(form_from_row).transpose()
    }

    async fn find_form(&self, id_or_slug: &str) -> Result<Option<FormRecord>> {
        let row = sqlx::query(&format!(
            "SELECT {FORM_COLUMNS} FROM forms WHERE id::text = $1 OR slug = $1 LIMIT 1"
        ))
        .bind(id_or_slug)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(form_from_row).transpose()
    }

    async fn list_forms(&self, user_id: &str) -> Result<Vec<FormWithCount>> {
        let rows = sqlx::query(
            r#"
            SELECT f.id, f.user_id, f.title, f.fields, f.is_published, f.slug, f.created_at,
                   COUNT(r.id) AS response_count
            FROM forms f
            LEFT JOIN forms_responses r ON r.form_id = f.id
            WHERE f.user_id = $1
            GROUP BY f.id
            ORDER BY f.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(FormWithCount {
                    form: form_from_row(row)?,
                    response_count: row.try_get("response_count")?,
                })
            })
            .collect()
    }

    async fn set_published(&self, id: Uuid, published: bool) -> Result<Option<FormRecord>> {
        let row = sqlx::query(&format!(
            "UPDATE forms SET is_published = $2 WHERE id = $1 RETURNING {FORM_COLUMNS}"
        ))
        .bind(id)
        .bind(published)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(form_from_row).transpose()
    }

    async fn create_response(&self, form_id: Uuid, data: Value) -> Result<ResponseRecord> {
        let row = sqlx::query(&format!(
            "INSERT INTO forms_responses (id, form_id, data) \
             VALUES ($1, $2, $3) RETURNING {RESPONSE_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(form_id)
        .bind(&data)
        .fetch_one(&self.pool)
        .await?;

        response_from_row(&row)
    }

    async fn list_responses(&self, form_id: Uuid) -> Result<Vec<ResponseRecord>> {
        let rows = sqlx::query(&format!(
            "SELECT {RESPONSE_COLUMNS} FROM forms_responses \
             WHERE form_id = $1 ORDER BY created_at DESC"
        ))
        .bind(form_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(response_from_row).collect()
    }
}

fn form_from_row(row: &PgRow) -> Result<FormRecord> {
    let fields: Value = row.try_get("fields")?;
    Ok(FormRecord {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        title: row.try_get("title")?,
        fields: serde_json::from_value(fields)?,
        is_published: row.try_get("is_published")?,
        slug: row.try_get("slug")?,
        created_at: row.try_get("created_at")?,
    })
}

fn response_from_row(row: &PgRow) -> Result<ResponseRecord> {
    Ok(ResponseRecord {
        id: row.try_get("id")?,
        form_id: row.try_get("form_id")?,
        data: row.try_get("data")?,
        created_at: row.try_get("created_at")?,
    })
}

fn map_slug_conflict(err: sqlx::Error, slug: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505") {
            return StoreError::SlugTaken(slug.to_string());
        }
    }
    StoreError::Db(err)
}
