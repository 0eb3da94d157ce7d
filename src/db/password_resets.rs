use sqlx::PgPool;
use uuid::Uuid;

use crate::models::PasswordReset;

/// Store a fresh reset token for a user, invalidating any prior tokens for
/// the same email first. The delete and insert are deliberately not wrapped
/// in a transaction: a crash in between leaves the user with zero live
/// tokens, which only under-counts and is recovered by retrying the request.
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    email: &str,
    token: &str,
    expires_at: chrono::DateTime<chrono::Utc>,
) -> Result<PasswordReset, sqlx::Error> {
    delete_by_email(pool, email).await?;

    sqlx::query_as::<_, PasswordReset>(
        "INSERT INTO password_resets (user_id, email, token, expires_at)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(user_id)
    .bind(email)
    .bind(token)
    .bind(expires_at)
    .fetch_one(pool)
    .await
}

/// Look up a token, treating expired-but-not-yet-swept rows as absent.
pub async fn find_valid(
    pool: &PgPool,
    token: &str,
) -> Result<Option<PasswordReset>, sqlx::Error> {
    sqlx::query_as::<_, PasswordReset>(
        "SELECT * FROM password_resets WHERE token = $1 AND expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Delete the token row after a successful reset. Tokens are single-use.
pub async fn consume(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM password_resets WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_by_email(pool: &PgPool, email: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM password_resets WHERE email = $1")
        .bind(email)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove all expired rows. Idempotent, safe to run repeatedly.
pub async fn sweep_expired(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM password_resets WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
