use axum::{
    extract::{Form, State},
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderMap, HeaderValue, StatusCode,
    },
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, MaybeUser},
    names,
    rejections::{AppError, ResultExt},
    utils, views, AppState,
};

use crate::views::homepage as homepage_views;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/register", get(register_page).post(register_post))
        .route("/login", get(login_page).post(login_post))
        .route("/logout", post(logout_post))
        .route("/verify-email/{token}", get(verify_email))
        .route("/resend-verification", post(resend_verification))
}

async fn homepage(MaybeUser(user): MaybeUser, IsHtmx(is_htmx): IsHtmx) -> maud::Markup {
    views::render(
        is_htmx,
        "Home",
        homepage_views::landing_page(user.is_some()),
        user.as_ref().map(|u| u.display_name.as_str()),
    )
}

async fn register_page(IsHtmx(is_htmx): IsHtmx) -> maud::Markup {
    views::render(
        is_htmx,
        "Sign Up",
        homepage_views::register(homepage_views::RegisterState::NoError),
        None,
    )
}

async fn login_page(IsHtmx(is_htmx): IsHtmx) -> maud::Markup {
    views::render(
        is_htmx,
        "Log In",
        homepage_views::login(homepage_views::LoginState::NoError),
        None,
    )
}

#[derive(Deserialize)]
struct RegisterPost {
    email: String,
    display_name: String,
    password: String,
}

async fn register_post(
    State(state): State<AppState>,
    Form(body): Form<RegisterPost>,
) -> Result<axum::response::Response, AppError> {
    use crate::services::auth::RegisterOutcome;

    let outcome = state
        .auth
        .register(&body.email, &body.password, &body.display_name)
        .await
        .reject("registration failed")?;

    match outcome {
        RegisterOutcome::LoggedIn(session_token) => {
            let cookie = utils::cookie(
                names::USER_SESSION_COOKIE_NAME,
                &session_token,
                state.secure_cookies,
            )
            .reject("could not build session cookie")?;
            Ok((
                StatusCode::SEE_OTHER,
                [
                    (SET_COOKIE, cookie),
                    (LOCATION, HeaderValue::from_static(names::QUIZ_URL)),
                ],
                "",
            )
                .into_response())
        }
        RegisterOutcome::VerificationSent(email)
        | RegisterOutcome::VerificationEmailFailed(email) => Ok(views::titled(
            "Check Your Email",
            homepage_views::check_email(&email),
        )
        .into_response()),
        RegisterOutcome::EmptyFields => Ok(views::titled(
            "Sign Up",
            homepage_views::register(homepage_views::RegisterState::EmptyFields),
        )
        .into_response()),
        RegisterOutcome::EmailTaken => Ok(views::titled(
            "Sign Up",
            homepage_views::register(homepage_views::RegisterState::EmailTaken),
        )
        .into_response()),
        RegisterOutcome::WeakPassword => Ok(views::titled(
            "Sign Up",
            homepage_views::register(homepage_views::RegisterState::WeakPassword),
        )
        .into_response()),
    }
}

#[derive(Deserialize)]
struct LoginPost {
    email: String,
    password: String,
}

async fn login_post(
    State(state): State<AppState>,
    Form(body): Form<LoginPost>,
) -> Result<axum::response::Response, AppError> {
    use crate::services::auth::LoginOutcome;

    let outcome = state
        .auth
        .login(&body.email, &body.password)
        .await
        .reject("login failed")?;

    match outcome {
        LoginOutcome::Success(session_token) => {
            let cookie = utils::cookie(
                names::USER_SESSION_COOKIE_NAME,
                &session_token,
                state.secure_cookies,
            )
            .reject("could not build session cookie")?;
            Ok((
                StatusCode::SEE_OTHER,
                [
                    (SET_COOKIE, cookie),
                    (LOCATION, HeaderValue::from_static(names::DASHBOARD_URL)),
                ],
                "",
            )
                .into_response())
        }
        LoginOutcome::InvalidCredentials => Ok(views::titled(
            "Log In",
            homepage_views::login(homepage_views::LoginState::IncorrectPassword),
        )
        .into_response()),
        LoginOutcome::EmailNotVerified => Ok(views::titled(
            "Log In",
            homepage_views::login(homepage_views::LoginState::EmailNotVerified),
        )
        .into_response()),
    }
}

async fn logout_post(
    jar: CookieJar,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(session_id) = jar
        .get(names::USER_SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string())
    {
        let _ = state.auth.logout(&session_id).await;
    }

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, utils::clear_cookie(names::USER_SESSION_COOKIE_NAME));
    headers.insert("HX-Redirect", HeaderValue::from_static("/"));

    Ok((headers, ""))
}

async fn verify_email(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    axum::extract::Path(token): axum::extract::Path<String>,
) -> Result<maud::Markup, AppError> {
    let verified = state
        .auth
        .verify_email(&token)
        .await
        .reject("could not verify email token")?;

    if verified {
        Ok(views::render(
            is_htmx,
            "Email Verified",
            homepage_views::email_verified(),
            None,
        ))
    } else {
        Ok(views::render(
            is_htmx,
            "Verification Failed",
            homepage_views::verification_failed(),
            None,
        ))
    }
}

#[derive(Deserialize)]
struct ResendVerificationPost {
    email: String,
}

async fn resend_verification(
    State(state): State<AppState>,
    Form(body): Form<ResendVerificationPost>,
) -> Result<axum::response::Response, AppError> {
    if !state.auth.email_enabled() {
        return Err(AppError::BadRequest("email verification not configured"));
    }

    state
        .auth
        .resend_verification(&body.email)
        .await
        .reject("could not resend verification")?;

    // Always show success (don't leak whether email exists)
    Ok(views::titled("Check Your Email", homepage_views::check_email(&body.email)).into_response())
}
