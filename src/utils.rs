use axum::http::HeaderValue;
use color_eyre::Result;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build a session cookie header value. `Secure` is skipped in dev mode so
/// cookies work over plain http on localhost.
pub fn cookie(name: &str, value: &str, secure: bool) -> Result<HeaderValue> {
    let secure_attr = if secure { "; Secure" } else { "" };
    let cookie =
        format!("{name}={value}; HttpOnly; Max-Age=86400; Path=/; SameSite=Strict{secure_attr}");
    Ok(HeaderValue::from_str(&cookie)?)
}

/// Expire a cookie immediately (logout).
pub fn clear_cookie(name: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("{name}=; HttpOnly; Max-Age=0; Path=/; SameSite=Strict"))
        .unwrap_or_else(|_| HeaderValue::from_static(""))
}
