use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Subscription;

pub struct ListFilters {
    pub status: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

fn sort_column(field: Option<&str>) -> &'static str {
    match field {
        Some("name") => "name",
        Some("cost") => "cost",
        Some("next_payment_date") => "next_payment_date",
        Some("created_at") => "created_at",
        Some("status") => "status",
        Some("category") => "category",
        _ => "next_payment_date",
    }
}

pub async fn list(
    pool: &PgPool,
    user_id: Uuid,
    filters: &ListFilters,
) -> Result<Vec<Subscription>, sqlx::Error> {
    let sort_col = sort_column(filters.sort.as_deref());
    let order = match filters.order.as_deref() {
        Some("desc") | Some("DESC") => "DESC",
        _ => "ASC",
    };

    sqlx::query_as::<_, Subscription>(&format!(
        "SELECT * FROM subscriptions
         WHERE user_id = $1
           AND ($2::text IS NULL OR status = $2)
           AND ($3::text IS NULL OR category = $3)
         ORDER BY {sort_col} {order}"
    ))
    .bind(user_id)
    .bind(filters.status.as_deref())
    .bind(filters.category.as_deref())
    .fetch_all(pool)
    .await
}

pub async fn list_by_status(
    pool: &PgPool,
    user_id: Uuid,
    status: &str,
) -> Result<Vec<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "SELECT * FROM subscriptions WHERE user_id = $1 AND status = $2
         ORDER BY next_payment_date ASC",
    )
    .bind(user_id)
    .bind(status)
    .fetch_all(pool)
    .await
}

pub async fn list_all(pool: &PgPool, user_id: Uuid) -> Result<Vec<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "SELECT * FROM subscriptions WHERE user_id = $1 ORDER BY next_payment_date ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(
    pool: &PgPool,
    id: Uuid,
    user_id: Uuid,
) -> Result<Option<Subscription>, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "SELECT * FROM subscriptions WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

#[allow(clippy::too_many_arguments)]
pub async fn create(
    pool: &PgPool,
    user_id: Uuid,
    name: &str,
    description: Option<&str>,
    cost: f64,
    currency: &str,
    billing_frequency: &str,
    next_payment_date: NaiveDate,
    category: Option<&str>,
    status: &str,
    notes: Option<&str>,
    website: Option<&str>,
) -> Result<Subscription, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "INSERT INTO subscriptions (
            user_id, name, description, cost, currency, billing_frequency,
            next_payment_date, category, status, notes, website
         ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) RETURNING *",
    )
    .bind(user_id)
    .bind(name)
    .bind(description)
    .bind(cost)
    .bind(currency)
    .bind(billing_frequency)
    .bind(next_payment_date)
    .bind(category)
    .bind(status)
    .bind(notes)
    .bind(website)
    .fetch_one(pool)
    .await
}

/// Full-row update. Callers merge a `SubscriptionPatch` onto the current row
/// first; last write wins.
pub async fn update(pool: &PgPool, sub: &Subscription) -> Result<Subscription, sqlx::Error> {
    sqlx::query_as::<_, Subscription>(
        "UPDATE subscriptions SET
            name = $3, description = $4, cost = $5, currency = $6,
            billing_frequency = $7, next_payment_date = $8, category = $9,
            status = $10, notes = $11, website = $12, updated_at = now()
         WHERE id = $1 AND user_id = $2 RETURNING *",
    )
    .bind(sub.id)
    .bind(sub.user_id)
    .bind(&sub.name)
    .bind(sub.description.as_deref())
    .bind(sub.cost)
    .bind(&sub.currency)
    .bind(&sub.billing_frequency)
    .bind(sub.next_payment_date)
    .bind(sub.category.as_deref())
    .bind(&sub.status)
    .bind(sub.notes.as_deref())
    .bind(sub.website.as_deref())
    .fetch_one(pool)
    .await
}

pub async fn delete(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM subscriptions WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Row shape for the reminder sweep: active subscriptions joined with their
/// owner and the owner's notification settings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DueSubscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub cost: f64,
    pub currency: String,
    pub next_payment_date: NaiveDate,
    pub reminder_days: i32,
    pub email_notifications: bool,
    pub email: String,
    pub first_name: String,
}

pub async fn list_active_with_settings(
    pool: &PgPool,
) -> Result<Vec<DueSubscription>, sqlx::Error> {
    sqlx::query_as::<_, DueSubscription>(
        "SELECT s.id, s.user_id, s.name, s.cost, s.currency, s.next_payment_date,
                ns.reminder_days, ns.email_notifications, u.email, u.first_name
         FROM subscriptions s
         JOIN users u ON s.user_id = u.id
         JOIN notification_settings ns ON u.id = ns.user_id
         WHERE s.status = 'Active'",
    )
    .fetch_all(pool)
    .await
}
