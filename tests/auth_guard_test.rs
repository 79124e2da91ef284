mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use healthwise::db::Db;
use healthwise::email::ResendEmailSender;
use healthwise::predictor::HttpPredictionClient;
use healthwise::services::auth::AuthService;
use healthwise::services::prediction::PredictionService;
use healthwise::{names, router, AppState};
use tower::ServiceExt;

fn app_state(db: Db) -> AppState {
    let email = ResendEmailSender::new(None);
    let auth = AuthService::new(db.clone(), email, "http://localhost:1414".to_string());
    let predictor = HttpPredictionClient::new("http://127.0.0.1:5000".to_string());
    let predictions = PredictionService::new(predictor, db.clone());
    AppState {
        db,
        auth,
        predictions,
        secure_cookies: false,
    }
}

async fn app() -> axum::Router {
    router(app_state(common::create_test_db().await))
}

#[tokio::test]
async fn protected_routes_reject_requests_without_session_cookie() {
    let app = app().await;

    let cases = [
        names::QUIZ_URL,
        names::PREGNANCIES_FRAGMENT_URL,
        names::DASHBOARD_URL,
        names::HISTORY_URL,
        names::RECOMMENDATION_URL,
    ];

    for uri in cases {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("request build should succeed");
        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");

        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "expected UNAUTHORIZED for {uri}",
        );
    }
}

#[tokio::test]
async fn protected_routes_accept_requests_with_valid_session_cookie() {
    let db = common::create_test_db().await;
    let user_id = db
        .create_user("user@example.com", "password123", "Test User")
        .await
        .expect("create user");
    let session = db
        .create_user_session(user_id)
        .await
        .expect("create session");

    let app = router(app_state(db));

    for uri in [names::QUIZ_URL, names::DASHBOARD_URL, names::HISTORY_URL] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(
                "cookie",
                format!("{}={}", names::USER_SESSION_COOKIE_NAME, session),
            )
            .body(Body::empty())
            .expect("request build should succeed");

        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");

        assert_eq!(resp.status(), StatusCode::OK, "expected OK for {uri}");
    }
}

#[tokio::test]
async fn state_changing_requests_without_htmx_header_are_forbidden() {
    let app = app().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri(names::LOGIN_URL)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("email=a%40b.com&password=pw"))
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn public_pages_do_not_require_a_session() {
    let app = app().await;

    for uri in ["/", names::LOGIN_URL, names::REGISTER_URL] {
        let req = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .expect("request build should succeed");

        let resp = app
            .clone()
            .oneshot(req)
            .await
            .expect("router should respond");

        assert_eq!(resp.status(), StatusCode::OK, "expected OK for {uri}");
    }
}

#[tokio::test]
async fn login_form_post_sets_session_cookie_and_redirects() {
    let db = common::create_test_db().await;
    db.create_user("login@example.com", "password123", "Login User")
        .await
        .expect("create user");

    let app = router(app_state(db));

    let req = Request::builder()
        .method(Method::POST)
        .uri(names::LOGIN_URL)
        .header("content-type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from("email=login%40example.com&password=password123"))
        .expect("request build should succeed");

    let resp = app.oneshot(req).await.expect("router should respond");

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie = resp
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .expect("set-cookie header");
    assert!(cookie.starts_with(names::USER_SESSION_COOKIE_NAME));
    assert!(cookie.contains("HttpOnly"));
}
