pub mod templates;

use chrono::NaiveDate;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;

pub struct SystemMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SystemMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("System SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }

    pub async fn send_welcome(&self, to_email: &str, first_name: &str, base_url: &str) -> Result<(), String> {
        let html = templates::render_welcome(first_name, base_url);
        self.send(to_email, "Welcome to SubTrackr", &html).await
    }

    pub async fn send_password_reset(
        &self,
        to_email: &str,
        reset_url: &str,
    ) -> Result<(), String> {
        let html = templates::render_password_reset(reset_url);
        self.send(to_email, "Reset Your Password - SubTrackr", &html)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn send_payment_reminder(
        &self,
        to_email: &str,
        first_name: &str,
        subscription_name: &str,
        cost: f64,
        currency: &str,
        days_until: i64,
        payment_date: NaiveDate,
    ) -> Result<(), String> {
        let html = templates::render_payment_reminder(
            first_name,
            subscription_name,
            cost,
            currency,
            days_until,
            payment_date,
        );
        self.send(
            to_email,
            &format!("Payment Reminder: {subscription_name} subscription due in {days_until} days"),
            &html,
        )
        .await
    }

    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(to.parse().map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
