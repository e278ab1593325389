use async_trait::async_trait;

use crate::domain::identity::errors::NotificationError;
use crate::domain::identity::models::User;
use crate::domain::identity::ports::RegistrationNotifier;

const REGISTRATION_SUBJECT: &str = "Registration Successful";

/// Registration notifier that records the confirmation message in the log
/// instead of delivering it.
pub struct LogRegistrationNotifier {
    from_address: String,
}

impl LogRegistrationNotifier {
    pub fn new(from_address: impl Into<String>) -> Self {
        Self {
            from_address: from_address.into(),
        }
    }
}

#[async_trait]
impl RegistrationNotifier for LogRegistrationNotifier {
    async fn registration_confirmed(&self, user: &User) -> Result<(), NotificationError> {
        tracing::info!(
            from = %self.from_address,
            to = %user.email,
            subject = REGISTRATION_SUBJECT,
            "Dear {} {}, your account '{}' has been created.",
            user.first_name,
            user.last_name,
            user.username,
        );
        Ok(())
    }
}
