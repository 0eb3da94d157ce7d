use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Notification;

pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    subscription_id: Option<Uuid>,
    kind: &str,
    title: &str,
    message: &str,
) -> Result<Notification, sqlx::Error> {
    sqlx::query_as::<_, Notification>(
        "INSERT INTO notifications (user_id, subscription_id, type, title, message)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(user_id)
    .bind(subscription_id)
    .bind(kind)
    .bind(title)
    .bind(message)
    .fetch_one(pool)
    .await
}

pub async fn list(
    pool: &PgPool,
    user_id: Uuid,
    is_read: Option<bool>,
) -> Result<Vec<Notification>, sqlx::Error> {
    sqlx::query_as::<_, Notification>(
        "SELECT * FROM notifications
         WHERE user_id = $1 AND ($2::boolean IS NULL OR is_read = $2)
         ORDER BY created_at DESC",
    )
    .bind(user_id)
    .bind(is_read)
    .fetch_all(pool)
    .await
}

pub async fn mark_read(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result =
        sqlx::query("UPDATE notifications SET is_read = true WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
    Ok(result.rows_affected())
}

pub async fn mark_all_read(pool: &PgPool, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE notifications SET is_read = true WHERE user_id = $1 AND is_read = false",
    )
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(result.rows_affected())
}
