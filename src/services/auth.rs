use color_eyre::Result;

use crate::db::models::AuthUser;
use crate::db::Db;
use crate::email::ResendEmailSender;

// ---------------------------------------------------------------------------
// AuthRepository trait (the service defines the abstraction it needs)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait AuthRepository: Send + Sync {
    fn email_exists(&self, email: &str) -> impl std::future::Future<Output = Result<bool>> + Send;

    fn create_user(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> impl std::future::Future<Output = Result<i32>> + Send;

    fn create_unverified_user(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> impl std::future::Future<Output = Result<(i32, String)>> + Send;

    fn verify_user_password(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;

    fn is_email_verified(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;

    fn find_user_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<AuthUser>>> + Send;

    fn create_user_session(
        &self,
        user_id: i32,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    fn delete_user_session(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    fn verify_email_token(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<bool>> + Send;

    fn regenerate_verification_token(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
}

impl AuthRepository for Db {
    async fn email_exists(&self, email: &str) -> Result<bool> {
        Db::email_exists(self, email).await
    }

    async fn create_user(&self, email: &str, password: &str, display_name: &str) -> Result<i32> {
        Db::create_user(self, email, password, display_name).await
    }

    async fn create_unverified_user(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<(i32, String)> {
        Db::create_unverified_user(self, email, password, display_name).await
    }

    async fn verify_user_password(&self, email: &str, password: &str) -> Result<bool> {
        Db::verify_user_password(self, email, password).await
    }

    async fn is_email_verified(&self, email: &str) -> Result<bool> {
        Db::is_email_verified(self, email).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>> {
        Db::find_user_by_email(self, email).await
    }

    async fn create_user_session(&self, user_id: i32) -> Result<String> {
        Db::create_user_session(self, user_id).await
    }

    async fn delete_user_session(&self, session_id: &str) -> Result<()> {
        Db::delete_user_session(self, session_id).await
    }

    async fn verify_email_token(&self, token: &str) -> Result<bool> {
        Db::verify_email_token(self, token).await
    }

    async fn regenerate_verification_token(&self, email: &str) -> Result<Option<String>> {
        Db::regenerate_verification_token(self, email).await
    }
}

// ---------------------------------------------------------------------------
// EmailSender trait
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait EmailSender: Send + Sync {
    /// Whether email sending is configured (false in dev mode).
    fn is_enabled(&self) -> bool;

    fn send_verification_email(
        &self,
        to_email: &str,
        verification_url: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

// ---------------------------------------------------------------------------
// Outcome enums
// ---------------------------------------------------------------------------

pub enum RegisterOutcome {
    /// User created and session started (dev mode, no email verification).
    LoggedIn(String),
    /// Unverified user created, verification email sent (prod mode).
    VerificationSent(String),
    /// Unverified user created, but the verification email could not be sent.
    VerificationEmailFailed(String),
    /// Required fields were empty.
    EmptyFields,
    /// Email already in use.
    EmailTaken,
    /// Password does not meet minimum requirements.
    WeakPassword,
}

pub enum LoginOutcome {
    /// Login succeeded. Contains the session token.
    Success(String),
    /// Password was incorrect (or email not found).
    InvalidCredentials,
    /// Credentials correct but email not yet verified.
    EmailNotVerified,
}

const MIN_PASSWORD_LENGTH: usize = 8;

// ---------------------------------------------------------------------------
// AuthService
// ---------------------------------------------------------------------------

/// Explicit session management: handlers hand the service credentials or a
/// session token and get a value back. No process-wide current-user state.
pub struct AuthService<R: AuthRepository = Db, E: EmailSender = ResendEmailSender> {
    repo: R,
    email: E,
    base_url: String,
}

impl<R: AuthRepository + Clone, E: EmailSender + Clone> Clone for AuthService<R, E> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            email: self.email.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

impl<R: AuthRepository, E: EmailSender> AuthService<R, E> {
    pub fn new(repo: R, email: E, base_url: String) -> Self {
        Self {
            repo,
            email,
            base_url,
        }
    }

    /// Whether email verification is enabled (production mode).
    pub fn email_enabled(&self) -> bool {
        self.email.is_enabled()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome> {
        let verified = self.repo.verify_user_password(email, password).await?;

        if !verified {
            return Ok(LoginOutcome::InvalidCredentials);
        }

        if self.email_enabled() {
            let email_verified = self.repo.is_email_verified(email).await?;
            if !email_verified {
                return Ok(LoginOutcome::EmailNotVerified);
            }
        }

        let user =
            self.repo.find_user_by_email(email).await?.ok_or_else(|| {
                color_eyre::eyre::eyre!("user not found after password verification")
            })?;

        let session_token = self.repo.create_user_session(user.id).await?;

        Ok(LoginOutcome::Success(session_token))
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<RegisterOutcome> {
        if email.is_empty() || password.is_empty() || display_name.is_empty() {
            return Ok(RegisterOutcome::EmptyFields);
        }

        if password.len() < MIN_PASSWORD_LENGTH {
            return Ok(RegisterOutcome::WeakPassword);
        }

        let exists = self.repo.email_exists(email).await?;
        if exists {
            return Ok(RegisterOutcome::EmailTaken);
        }

        if !self.email_enabled() {
            // Dev mode: create user and session immediately
            let user_id = self.repo.create_user(email, password, display_name).await?;
            let session_token = self.repo.create_user_session(user_id).await?;
            return Ok(RegisterOutcome::LoggedIn(session_token));
        }

        // Prod mode: create unverified user and send verification email
        let (_user_id, token) = self
            .repo
            .create_unverified_user(email, password, display_name)
            .await?;

        let verification_url = format!("{}/verify-email/{}", self.base_url, token);

        if let Err(e) = self
            .email
            .send_verification_email(email, &verification_url)
            .await
        {
            tracing::error!("failed to send verification email to {email}: {e}");
            return Ok(RegisterOutcome::VerificationEmailFailed(email.to_string()));
        }

        Ok(RegisterOutcome::VerificationSent(email.to_string()))
    }

    pub async fn logout(&self, session_id: &str) -> Result<()> {
        self.repo.delete_user_session(session_id).await
    }

    pub async fn verify_email(&self, token: &str) -> Result<bool> {
        self.repo.verify_email_token(token).await
    }

    pub async fn resend_verification(&self, email: &str) -> Result<()> {
        let token = self.repo.regenerate_verification_token(email).await?;

        if let Some(token) = token {
            let verification_url = format!("{}/verify-email/{}", self.base_url, token);
            self.email
                .send_verification_email(email, &verification_url)
                .await?;
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
