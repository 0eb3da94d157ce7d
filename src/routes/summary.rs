use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::extractor::AuthUser;
use crate::db;
use crate::error::AppError;
use crate::state::SharedState;
use crate::summary::{self, CategoryStat, Period, SpendingSummary};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub period: Option<String>,
    /// An explicit date range selects the reporting window; the proration
    /// table is keyed by `period` alone and is unaffected by it.
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Serialize)]
pub struct SummaryResponse {
    pub period: &'static str,
    #[serde(flatten)]
    pub summary: SpendingSummary,
}

pub async fn spending(
    auth: AuthUser,
    State(state): State<SharedState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<SummaryResponse>, AppError> {
    let period = query
        .period
        .as_deref()
        .and_then(Period::parse)
        .unwrap_or(Period::Monthly);

    let subscriptions =
        db::subscriptions::list_by_status(&state.pool, auth.user_id, "Active").await?;

    let today = Utc::now().date_naive();
    let summary = summary::spending_summary(&subscriptions, period, today);

    Ok(Json(SummaryResponse {
        period: period.as_str(),
        summary,
    }))
}

pub async fn categories(
    auth: AuthUser,
    State(state): State<SharedState>,
) -> Result<Json<Vec<CategoryStat>>, AppError> {
    let subscriptions = db::subscriptions::list_all(&state.pool, auth.user_id).await?;
    let stats = summary::category_statistics(&subscriptions);
    Ok(Json(stats))
}
