use chrono::NaiveDate;

pub fn render_welcome(first_name: &str, base_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Welcome to SubTrackr</h2>
    <p>Hi {first_name},</p>
    <p>Your account has been created. Start tracking your subscriptions at:</p>
    <p><a href="{base_url}" style="display: inline-block; padding: 10px 20px; background: #4F46E5; color: white; text-decoration: none; border-radius: 4px;">Log In</a></p>
    <p style="color: #666; font-size: 14px;">If you didn't expect this email, you can ignore it.</p>
</body>
</html>"#
    )
}

pub fn render_password_reset(reset_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Reset Your Password</h2>
    <p>A password reset was requested for your SubTrackr account.</p>
    <p><a href="{reset_url}" style="display: inline-block; padding: 10px 20px; background: #4F46E5; color: white; text-decoration: none; border-radius: 4px;">Reset Password</a></p>
    <p style="color: #666; font-size: 14px;">This link expires in 1 hour. If you didn't request this, you can ignore it.</p>
</body>
</html>"#
    )
}

pub fn render_payment_reminder(
    first_name: &str,
    subscription_name: &str,
    cost: f64,
    currency: &str,
    days_until: i64,
    payment_date: NaiveDate,
) -> String {
    let formatted_date = payment_date.format("%A, %B %-d, %Y");
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Payment Reminder</h2>
    <p>Hi {first_name},</p>
    <p>Your <strong>{subscription_name}</strong> subscription payment is due soon:</p>
    <div style="background: #f9f9f9; padding: 15px; border-radius: 5px; margin: 20px 0;">
        <div><strong>Amount:</strong> {cost:.2} {currency}</div>
        <div><strong>Due date:</strong> {formatted_date} (in {days_until} days)</div>
    </div>
    <p>Log in to your account to view details or update your subscription.</p>
</body>
</html>"#
    )
}
