pub mod notification;
pub mod notification_settings;
pub mod password_reset;
pub mod payment_history;
pub mod subscription;
pub mod user;

pub use notification::Notification;
pub use notification_settings::NotificationSettings;
pub use password_reset::PasswordReset;
pub use payment_history::PaymentHistory;
pub use subscription::{Subscription, SubscriptionPatch};
pub use user::User;
