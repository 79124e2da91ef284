pub const USER_SESSION_COOKIE_NAME: &str = "user_session";

pub const LOGIN_URL: &str = "/login";
pub const REGISTER_URL: &str = "/register";
pub const LOGOUT_URL: &str = "/logout";
pub const RESEND_VERIFICATION_URL: &str = "/resend-verification";

pub const QUIZ_URL: &str = "/quiz";
pub const PREGNANCIES_FRAGMENT_URL: &str = "/quiz/pregnancies";
pub const DASHBOARD_URL: &str = "/dashboard";
pub const HISTORY_URL: &str = "/history";
pub const RECOMMENDATION_URL: &str = "/recommendation";

pub fn verify_email_url(token: &str) -> String {
    format!("/verify-email/{token}")
}
