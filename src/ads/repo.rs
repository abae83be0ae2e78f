use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::ads::dto::UpdateAdvertisement;

#[derive(Debug, Clone, FromRow)]
pub struct Advertisement {
    pub id: i64,
    pub heading: String,
    pub description: String,
    pub date_of_creation: OffsetDateTime,
    pub user_id: i64,
}

/// Advertisement joined with its owner's name for the detail view.
#[derive(Debug, Clone, FromRow)]
pub struct AdvertisementWithOwner {
    pub id: i64,
    pub heading: String,
    pub description: String,
    pub date_of_creation: OffsetDateTime,
    pub user_id: i64,
    pub user_name: String,
}

impl Advertisement {
    pub async fn get_with_owner(
        db: &PgPool,
        id: i64,
    ) -> Result<Option<AdvertisementWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, AdvertisementWithOwner>(
            r#"
            SELECT a.id, a.heading, a.description, a.date_of_creation, a.user_id,
                   u.name AS user_name
            FROM advertisements a
            JOIN app_users u ON u.id = a.user_id
            WHERE a.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn create(
        db: &PgPool,
        heading: &str,
        description: &str,
        user_id: i64,
    ) -> Result<Advertisement, sqlx::Error> {
        sqlx::query_as::<_, Advertisement>(
            r#"
            INSERT INTO advertisements (heading, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, heading, description, date_of_creation, user_id
            "#,
        )
        .bind(heading)
        .bind(description)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    /// Applies only the fields present in the body. Returns `None` when the
    /// row does not exist.
    pub async fn update(
        db: &PgPool,
        id: i64,
        body: &UpdateAdvertisement,
    ) -> Result<Option<Advertisement>, sqlx::Error> {
        sqlx::query_as::<_, Advertisement>(
            r#"
            UPDATE advertisements
            SET heading     = COALESCE($2, heading),
                description = COALESCE($3, description),
                user_id     = COALESCE($4, user_id)
            WHERE id = $1
            RETURNING id, heading, description, date_of_creation, user_id
            "#,
        )
        .bind(id)
        .bind(body.heading.as_deref())
        .bind(body.description.as_deref())
        .bind(body.user_id)
        .fetch_optional(db)
        .await
    }

    /// Returns `false` when there was nothing to delete.
    pub async fn delete(db: &PgPool, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM advertisements WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
