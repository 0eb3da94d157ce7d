use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Subscription;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingFrequency {
    Monthly,
    Quarterly,
    Biannual,
    Yearly,
    Custom,
}

impl BillingFrequency {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Monthly" => Some(Self::Monthly),
            "Quarterly" => Some(Self::Quarterly),
            "Biannual" => Some(Self::Biannual),
            "Yearly" => Some(Self::Yearly),
            "Custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Monthly,
    Quarterly,
    Yearly,
}

impl Period {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }
}

/// Convert a cost quoted at one billing frequency into the equivalent cost
/// over the reporting period. Custom frequencies are treated as monthly, so
/// they pass through unscaled for every target.
pub fn normalized_cost(cost: f64, frequency: BillingFrequency, period: Period) -> f64 {
    use BillingFrequency::*;
    match period {
        Period::Monthly => match frequency {
            Monthly | Custom => cost,
            Quarterly => cost / 3.0,
            Biannual => cost / 6.0,
            Yearly => cost / 12.0,
        },
        Period::Quarterly => match frequency {
            Monthly => cost * 3.0,
            Quarterly | Custom => cost,
            Biannual => cost / 2.0,
            Yearly => cost / 4.0,
        },
        Period::Yearly => match frequency {
            Monthly => cost * 12.0,
            Quarterly => cost * 4.0,
            Biannual => cost * 2.0,
            Yearly | Custom => cost,
        },
    }
}

/// Round half-up to 2 decimal places. Applied at the final aggregation step
/// only, so per-subscription fractions do not compound rounding error.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingPayment {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    pub total_spending: f64,
    pub currency: String,
    pub subscription_count: usize,
    pub by_category: BTreeMap<String, f64>,
    pub upcoming_payments: Vec<UpcomingPayment>,
}

/// Normalize the given active subscriptions to the target period and
/// aggregate. Unknown billing frequencies fall back to Custom (monthly).
///
/// The reported `currency` is whichever subscription iterates last; mixed
/// currency accounts therefore get a misleading single-currency total. Known
/// limitation, left as-is pending a product decision on conversion.
pub fn spending_summary(
    subscriptions: &[Subscription],
    period: Period,
    today: NaiveDate,
) -> SpendingSummary {
    let mut total_spending = 0.0;
    let mut by_category: BTreeMap<String, f64> = BTreeMap::new();
    let mut currency = "USD".to_string();

    for sub in subscriptions {
        let frequency =
            BillingFrequency::parse(&sub.billing_frequency).unwrap_or(BillingFrequency::Custom);
        let cost = normalized_cost(sub.cost, frequency, period);
        currency = sub.currency.clone();

        total_spending += cost;
        let category = sub
            .category
            .clone()
            .unwrap_or_else(|| "Uncategorized".to_string());
        *by_category.entry(category).or_insert(0.0) += cost;
    }

    total_spending = round2(total_spending);
    for cost in by_category.values_mut() {
        *cost = round2(*cost);
    }

    let horizon = today + Days::new(30);
    let mut upcoming_payments: Vec<UpcomingPayment> = subscriptions
        .iter()
        .filter(|s| s.next_payment_date >= today && s.next_payment_date <= horizon)
        .map(|s| UpcomingPayment {
            id: s.id,
            name: s.name.clone(),
            amount: s.cost,
            due_date: s.next_payment_date,
        })
        .collect();
    upcoming_payments.sort_by_key(|p| p.due_date);

    SpendingSummary {
        total_spending,
        currency,
        subscription_count: subscriptions.len(),
        by_category,
        upcoming_payments,
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub name: String,
    pub count: usize,
    pub total_cost: f64,
    pub percentage: f64,
}

/// Group subscriptions of any status by category on raw (unnormalized) cost.
/// Sorted descending by total cost; empty input yields an empty vec.
pub fn category_statistics(subscriptions: &[Subscription]) -> Vec<CategoryStat> {
    if subscriptions.is_empty() {
        return Vec::new();
    }

    let mut groups: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    let mut grand_total = 0.0;

    for sub in subscriptions {
        let category = sub
            .category
            .clone()
            .unwrap_or_else(|| "Uncategorized".to_string());
        let entry = groups.entry(category).or_insert((0, 0.0));
        entry.0 += 1;
        entry.1 += sub.cost;
        grand_total += sub.cost;
    }

    let mut stats: Vec<CategoryStat> = groups
        .into_iter()
        .map(|(name, (count, total_cost))| CategoryStat {
            name,
            count,
            total_cost: round2(total_cost),
            percentage: round2(total_cost / grand_total * 100.0),
        })
        .collect();

    stats.sort_by(|a, b| b.total_cost.partial_cmp(&a.total_cost).unwrap_or(std::cmp::Ordering::Equal));
    stats
}
