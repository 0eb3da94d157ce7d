use sqlx::PgPool;
use uuid::Uuid;

use crate::models::NotificationSettings;

pub async fn find_by_user(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<NotificationSettings>, sqlx::Error> {
    sqlx::query_as::<_, NotificationSettings>(
        "SELECT * FROM notification_settings WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_default(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<NotificationSettings, sqlx::Error> {
    sqlx::query_as::<_, NotificationSettings>(
        "INSERT INTO notification_settings (user_id) VALUES ($1)
         ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
         RETURNING *",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await
}

/// Create-if-missing, then return. Settings rows are made lazily on first
/// access rather than at registration time for users that predate the table.
pub async fn get_or_create(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<NotificationSettings, sqlx::Error> {
    if let Some(settings) = find_by_user(pool, user_id).await? {
        return Ok(settings);
    }
    create_default(pool, user_id).await
}

pub async fn update(
    pool: &PgPool,
    user_id: Uuid,
    email_notifications: bool,
    push_notifications: bool,
    reminder_days: i32,
) -> Result<NotificationSettings, sqlx::Error> {
    sqlx::query_as::<_, NotificationSettings>(
        "UPDATE notification_settings SET
            email_notifications = $2, push_notifications = $3,
            reminder_days = $4, updated_at = now()
         WHERE user_id = $1 RETURNING *",
    )
    .bind(user_id)
    .bind(email_notifications)
    .bind(push_notifications)
    .bind(reminder_days)
    .fetch_one(pool)
    .await
}
