use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::db::subscriptions::ListFilters;
use crate::error::AppError;
use crate::models::{notification, subscription, PaymentHistory, Subscription, SubscriptionPatch};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscription {
    pub name: String,
    pub description: Option<String>,
    pub cost: f64,
    pub currency: Option<String>,
    pub billing_frequency: String,
    pub next_payment_date: NaiveDate,
    pub category: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub website: Option<String>,
}

fn validate_billing_frequency(value: &str) -> Result<(), AppError> {
    if !subscription::BILLING_FREQUENCIES.contains(&value) {
        return Err(AppError::BadRequest("Invalid billing frequency".to_string()));
    }
    Ok(())
}

fn validate_status(value: &str) -> Result<(), AppError> {
    if !subscription::STATUSES.contains(&value) {
        return Err(AppError::BadRequest("Invalid status".to_string()));
    }
    Ok(())
}

fn validate_cost(cost: f64) -> Result<(), AppError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(AppError::BadRequest(
            "Cost must be a positive number".to_string(),
        ));
    }
    Ok(())
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Subscription>>, AppError> {
    let filters = ListFilters {
        status: query.status,
        category: query.category,
        sort: query.sort,
        order: query.order,
    };
    let subscriptions = db::subscriptions::list(&state.pool, auth.user_id, &filters).await?;
    Ok(Json(subscriptions))
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Subscription>, AppError> {
    let sub = db::subscriptions::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;
    Ok(Json(sub))
}

pub async fn create(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<CreateSubscription>,
) -> Result<Json<Subscription>, AppError> {
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name is required".to_string()));
    }
    validate_cost(req.cost)?;
    validate_billing_frequency(&req.billing_frequency)?;
    let status = req.status.as_deref().unwrap_or("Active");
    validate_status(status)?;

    let sub = db::subscriptions::create(
        &state.pool,
        auth.user_id,
        req.name.trim(),
        req.description.as_deref(),
        req.cost,
        req.currency.as_deref().unwrap_or("USD"),
        &req.billing_frequency,
        req.next_payment_date,
        req.category.as_deref(),
        status,
        req.notes.as_deref(),
        req.website.as_deref(),
    )
    .await?;

    // Schedule the first payment and tell the user about the new entry.
    db::payment_history::create(
        &state.pool,
        sub.id,
        sub.cost,
        &sub.currency,
        sub.next_payment_date,
        "Scheduled",
        None,
    )
    .await?;

    db::notifications::create(
        &state.pool,
        auth.user_id,
        Some(sub.id),
        notification::TYPE_SYSTEM,
        "New Subscription Added",
        &format!(
            "You've added {} to your subscriptions. Next payment is due on {}.",
            sub.name, sub.next_payment_date
        ),
    )
    .await?;

    Ok(Json(sub))
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<SubscriptionPatch>,
) -> Result<Json<Subscription>, AppError> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Name cannot be empty".to_string()));
        }
    }
    if let Some(cost) = patch.cost {
        validate_cost(cost)?;
    }
    if let Some(frequency) = &patch.billing_frequency {
        validate_billing_frequency(frequency)?;
    }
    if let Some(status) = &patch.status {
        validate_status(status)?;
    }

    let existing = db::subscriptions::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;

    let cost_changed = patch.cost.is_some_and(|c| c != existing.cost);
    let date_changed = patch
        .next_payment_date
        .is_some_and(|d| d != existing.next_payment_date);

    // Merge-then-write: last write wins, no concurrency token.
    let merged = patch.apply(existing);
    let updated = db::subscriptions::update(&state.pool, &merged).await?;

    if cost_changed || date_changed {
        db::payment_history::create(
            &state.pool,
            updated.id,
            updated.cost,
            &updated.currency,
            updated.next_payment_date,
            "Scheduled",
            Some("Updated from subscription edit"),
        )
        .await?;

        db::notifications::create(
            &state.pool,
            auth.user_id,
            Some(updated.id),
            notification::TYPE_SYSTEM,
            "Subscription Updated",
            &format!("Your {} subscription details have been updated.", updated.name),
        )
        .await?;
    }

    Ok(Json(updated))
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sub = db::subscriptions::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;

    db::subscriptions::delete(&state.pool, id, auth.user_id).await?;

    db::notifications::create(
        &state.pool,
        auth.user_id,
        None,
        notification::TYPE_SYSTEM,
        "Subscription Deleted",
        &format!("You've successfully deleted your {} subscription.", sub.name),
    )
    .await?;

    Ok(Json(serde_json::json!({ "message": "Deleted" })))
}

pub async fn payments(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<PaymentHistory>>, AppError> {
    // Ownership check first so foreign subscriptions 404 like absent ones.
    db::subscriptions::find_by_id(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Subscription not found".to_string()))?;

    let history = db::payment_history::list_by_subscription(&state.pool, id).await?;
    Ok(Json(history))
}
