pub mod notification_settings;
pub mod notifications;
pub mod password_resets;
pub mod payment_history;
pub mod subscriptions;
pub mod users;
