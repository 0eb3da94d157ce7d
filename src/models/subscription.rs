use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const BILLING_FREQUENCIES: &[&str] = &["Monthly", "Quarterly", "Biannual", "Yearly", "Custom"];
pub const STATUSES: &[&str] = &["Active", "Paused", "Cancelled"];

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub cost: f64,
    pub currency: String,
    pub billing_frequency: String,
    pub next_payment_date: NaiveDate,
    pub category: Option<String>,
    pub status: String,
    pub notes: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a subscription. Absent fields keep their current
/// value; `apply` merges onto an existing row before a full-row UPDATE,
/// independent of the query syntax underneath.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cost: Option<f64>,
    pub currency: Option<String>,
    pub billing_frequency: Option<String>,
    pub next_payment_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub website: Option<String>,
}

impl SubscriptionPatch {
    pub fn apply(&self, mut sub: Subscription) -> Subscription {
        if let Some(name) = &self.name {
            sub.name = name.clone();
        }
        if let Some(description) = &self.description {
            sub.description = Some(description.clone());
        }
        if let Some(cost) = self.cost {
            sub.cost = cost;
        }
        if let Some(currency) = &self.currency {
            sub.currency = currency.clone();
        }
        if let Some(billing_frequency) = &self.billing_frequency {
            sub.billing_frequency = billing_frequency.clone();
        }
        if let Some(next_payment_date) = self.next_payment_date {
            sub.next_payment_date = next_payment_date;
        }
        if let Some(category) = &self.category {
            sub.category = Some(category.clone());
        }
        if let Some(status) = &self.status {
            sub.status = status.clone();
        }
        if let Some(notes) = &self.notes {
            sub.notes = Some(notes.clone());
        }
        if let Some(website) = &self.website {
            sub.website = Some(website.clone());
        }
        sub
    }
}
