use chrono::Utc;
use tokio::sync::watch;

use crate::db;
use crate::models::notification;
use crate::state::SharedState;

/// One pass of the reminder sweep: every Active subscription whose next
/// payment falls within its owner's reminder window gets a PaymentReminder
/// notification, plus an email when the owner has email notifications on.
///
/// Re-running the sweep on the same day creates duplicate reminders; the
/// sweep carries no idempotency key and is meant to run once daily.
pub async fn generate_payment_reminders(state: &SharedState) -> Result<u64, sqlx::Error> {
    let subscriptions = db::subscriptions::list_active_with_settings(&state.pool).await?;

    let today = Utc::now().date_naive();
    let mut created = 0u64;

    for sub in subscriptions {
        let days_until = (sub.next_payment_date - today).num_days();

        // Past-due and same-day payments get no reminder.
        if days_until <= 0 || days_until > i64::from(sub.reminder_days) {
            continue;
        }

        db::notifications::create(
            &state.pool,
            sub.user_id,
            Some(sub.id),
            notification::TYPE_PAYMENT_REMINDER,
            "Payment Due Soon",
            &format!(
                "Your {} subscription payment of {:.2} {} is due in {} days.",
                sub.name, sub.cost, sub.currency, days_until
            ),
        )
        .await?;
        created += 1;

        if sub.email_notifications {
            if let Some(mailer) = &state.system_mailer {
                // Email delivery is best-effort; the notification above is
                // already committed and is not rolled back on send failure.
                if let Err(e) = mailer
                    .send_payment_reminder(
                        &sub.email,
                        &sub.first_name,
                        &sub.name,
                        sub.cost,
                        &sub.currency,
                        days_until,
                        sub.next_payment_date,
                    )
                    .await
                {
                    tracing::error!(
                        "Failed to send payment reminder for subscription {}: {e}",
                        sub.id
                    );
                }
            }
        }
    }

    Ok(created)
}

/// Daily maintenance loop: runs the reminder sweep and expired reset token
/// cleanup once per day until shutdown is signaled.
pub fn spawn_daily(
    state: SharedState,
    mut shutdown: watch::Receiver<bool>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("Reminder scheduler started");

        loop {
            if *shutdown.borrow() {
                break;
            }

            match generate_payment_reminders(&state).await {
                Ok(count) => tracing::info!("Reminder sweep created {count} notifications"),
                Err(e) => tracing::error!("Reminder sweep failed: {e}"),
            }

            match db::password_resets::sweep_expired(&state.pool).await {
                Ok(count) if count > 0 => {
                    tracing::info!("Swept {count} expired password reset tokens")
                }
                Ok(_) => {}
                Err(e) => tracing::error!("Reset token sweep failed: {e}"),
            }

            state
                .login_limiter
                .cleanup(std::time::Duration::from_secs(60 * 60));

            tokio::select! {
                _ = tokio::time::sleep(std::time::Duration::from_secs(24 * 60 * 60)) => {}
                _ = shutdown.changed() => {}
            }
        }

        tracing::info!("Reminder scheduler stopped");
    })
}
