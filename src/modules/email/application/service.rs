use async_trait::async_trait;

use crate::email::application::ports::{ContactNotification, ContactNotifier, EmailSender};

pub struct ContactEmailService<S: EmailSender> {
    sender: S,
    admin_email: String,
}

impl<S: EmailSender> ContactEmailService<S> {
    pub fn new(sender: S, admin_email: String) -> Self {
        Self {
            sender,
            admin_email,
        }
    }

    fn admin_body(n: &ContactNotification) -> String {
        format!(
            "<h2>New contact message</h2>\
             <p><strong>From:</strong> {} &lt;{}&gt;</p>\
             <p><strong>Phone:</strong> {}</p>\
             <p><strong>Reason:</strong> {}</p>\
             <p>{}</p>",
            n.full_name,
            n.email,
            n.phone.as_deref().unwrap_or("-"),
            n.reason.as_deref().unwrap_or("-"),
            n.message,
        )
    }

    fn confirmation_body(n: &ContactNotification) -> String {
        format!(
            "<p>Hi {},</p>\
             <p>Thanks for reaching out. Your message has been received and \
             I will get back to you soon.</p>\
             <blockquote>{}</blockquote>",
            n.full_name, n.message,
        )
    }
}

#[async_trait]
impl<S: EmailSender> ContactNotifier for ContactEmailService<S> {
    async fn notify(&self, notification: ContactNotification) -> Result<(), String> {
        // The two mails are independent: a bounced admin notification must not
        // rob the sender of their confirmation, and vice versa.
        let admin = self
            .sender
            .send_email(
                &self.admin_email,
                &format!("Portfolio contact from {}", notification.full_name),
                &Self::admin_body(&notification),
            )
            .await;

        let confirmation = self
            .sender
            .send_email(
                &notification.email,
                "Thanks for getting in touch",
                &Self::confirmation_body(&notification),
            )
            .await;

        match (admin, confirmation) {
            (Ok(()), Ok(())) => Ok(()),
            (admin, confirmation) => {
                let mut failures = Vec::new();
                if let Err(e) = admin {
                    failures.push(format!("admin notification: {}", e));
                }
                if let Err(e) = confirmation {
                    failures.push(format!("sender confirmation: {}", e));
                }
                Err(failures.join("; "))
            }
        }
    }
}
