use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::PaymentHistory;

pub async fn create(
    pool: &PgPool,
    subscription_id: Uuid,
    amount: f64,
    currency: &str,
    payment_date: NaiveDate,
    status: &str,
    notes: Option<&str>,
) -> Result<PaymentHistory, sqlx::Error> {
    sqlx::query_as::<_, PaymentHistory>(
        "INSERT INTO payment_history (subscription_id, amount, currency, payment_date, status, notes)
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
    )
    .bind(subscription_id)
    .bind(amount)
    .bind(currency)
    .bind(payment_date)
    .bind(status)
    .bind(notes)
    .fetch_one(pool)
    .await
}

pub async fn list_by_subscription(
    pool: &PgPool,
    subscription_id: Uuid,
) -> Result<Vec<PaymentHistory>, sqlx::Error> {
    sqlx::query_as::<_, PaymentHistory>(
        "SELECT * FROM payment_history WHERE subscription_id = $1
         ORDER BY payment_date DESC",
    )
    .bind(subscription_id)
    .fetch_all(pool)
    .await
}
