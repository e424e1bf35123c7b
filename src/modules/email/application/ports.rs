use async_trait::async_trait;

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}

/// What the contact-form flow needs to know to fan out its two emails.
#[derive(Debug, Clone)]
pub struct ContactNotification {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub reason: Option<String>,
    pub message: String,
}

/// Sends the admin notification and the sender confirmation for one contact
/// submission. Callers decide what a failure means; the contact flow swallows
/// it after logging.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, notification: ContactNotification) -> Result<(), String>;
}
