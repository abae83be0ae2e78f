use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub registration_time: OffsetDateTime,
}

impl User {
    pub async fn exists(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let found: Option<i64> = sqlx::query_scalar(r#"SELECT id FROM app_users WHERE id = $1"#)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(found.is_some())
    }

    pub async fn get(db: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, password_hash, registration_time
            FROM app_users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(db: &PgPool, name: &str, password_hash: &str) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO app_users (name, password_hash)
            VALUES ($1, $2)
            RETURNING id, name, password_hash, registration_time
            "#,
        )
        .bind(name)
        .bind(password_hash)
        .fetch_one(db)
        .await
    }

    /// Applies only the fields present. Returns `None` when the row does not
    /// exist.
    pub async fn update(
        db: &PgPool,
        id: i64,
        name: Option<&str>,
        password_hash: Option<&str>,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE app_users
            SET name          = COALESCE($2, name),
                password_hash = COALESCE($3, password_hash)
            WHERE id = $1
            RETURNING id, name, password_hash, registration_time
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(password_hash)
        .fetch_optional(db)
        .await
    }

    /// Owned advertisements go with the row via ON DELETE CASCADE.
    pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM app_users WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
