use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::models::{Notification, NotificationSettings};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub read: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub reminder_days: Option<i32>,
}

pub async fn list(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let notifications = db::notifications::list(&state.pool, auth.user_id, query.read).await?;
    Ok(Json(notifications))
}

pub async fn mark_read(
    auth: AuthUser,
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let updated = db::notifications::mark_read(&state.pool, id, auth.user_id).await?;
    if updated == 0 {
        return Err(AppError::NotFound("Notification not found".to_string()));
    }
    Ok(Json(json!({ "message": "Notification marked as read" })))
}

pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let count = db::notifications::mark_all_read(&state.pool, auth.user_id).await?;
    Ok(Json(json!({ "count": count })))
}

pub async fn get_settings(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<NotificationSettings>, AppError> {
    let settings = db::notification_settings::get_or_create(&state.pool, auth.user_id).await?;
    Ok(Json(settings))
}

pub async fn update_settings(
    auth: AuthUser,
    State(state): State<SharedState>,
    Json(req): Json<UpdateSettings>,
) -> Result<Json<NotificationSettings>, AppError> {
    if let Some(days) = req.reminder_days {
        if !(1..=30).contains(&days) {
            return Err(AppError::BadRequest(
                "Reminder days must be between 1 and 30".to_string(),
            ));
        }
    }

    let existing = db::notification_settings::get_or_create(&state.pool, auth.user_id).await?;

    let settings = db::notification_settings::update(
        &state.pool,
        auth.user_id,
        req.email_notifications.unwrap_or(existing.email_notifications),
        req.push_notifications.unwrap_or(existing.push_notifications),
        req.reminder_days.unwrap_or(existing.reminder_days),
    )
    .await?;

    Ok(Json(settings))
}
