use color_eyre::Result;
use serde::Serialize;

use crate::services::auth::EmailSender;

#[derive(Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
}

/// Sends account emails through the Resend API. Without an API key the
/// sender is disabled and registration skips verification entirely.
#[derive(Clone)]
pub struct ResendEmailSender {
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ResendEmailSender {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            client: reqwest::Client::new(),
        }
    }

    async fn send(&self, to_email: &str, subject: String, html: String) -> Result<()> {
        let Some(api_key) = &self.api_key else {
            color_eyre::eyre::bail!("email sending is not configured");
        };

        let body = SendEmailRequest {
            from: "HealthWise <noreply@healthwise.app>".to_string(),
            to: vec![to_email.to_string()],
            subject,
            html,
        };

        let resp = self
            .client
            .post("https://api.resend.com/emails")
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("Resend API error: {status} - {text}");
            color_eyre::eyre::bail!("Resend API returned {status}");
        }

        Ok(())
    }
}

impl EmailSender for ResendEmailSender {
    fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    async fn send_verification_email(
        &self,
        to_email: &str,
        verification_url: &str,
    ) -> Result<()> {
        self.send(
            to_email,
            "Verify your HealthWise account".to_string(),
            format!(
                r#"<h2>Welcome to HealthWise!</h2>
<p>Click the link below to verify your email address:</p>
<p><a href="{verification_url}">{verification_url}</a></p>
<p>This link expires in 24 hours.</p>"#
            ),
        )
        .await?;

        tracing::info!("verification email sent to {to_email}");
        Ok(())
    }
}
