mod common;

use common::create_test_db;

#[tokio::test]
async fn user_lifecycle() {
    let db = create_test_db().await;

    assert!(!db.email_exists("new@example.com").await.unwrap());

    let user_id = db
        .create_user("new@example.com", "password123", "New User")
        .await
        .unwrap();
    assert!(user_id > 0);

    assert!(db.email_exists("new@example.com").await.unwrap());

    let user = db
        .find_user_by_email("new@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(user.id, user_id);
    assert_eq!(user.display_name, "New User");

    assert!(db
        .verify_user_password("new@example.com", "password123")
        .await
        .unwrap());
    assert!(!db
        .verify_user_password("new@example.com", "wrong")
        .await
        .unwrap());
    assert!(!db
        .verify_user_password("missing@example.com", "password123")
        .await
        .unwrap());
}

#[tokio::test]
async fn directly_created_users_are_verified() {
    let db = create_test_db().await;

    db.create_user("dev@example.com", "password123", "Dev")
        .await
        .unwrap();

    assert!(db.is_email_verified("dev@example.com").await.unwrap());
}

#[tokio::test]
async fn email_verification_flow() {
    let db = create_test_db().await;

    let (_user_id, token) = db
        .create_unverified_user("pending@example.com", "password123", "Pending")
        .await
        .unwrap();

    assert!(!db.is_email_verified("pending@example.com").await.unwrap());

    // A bogus token does nothing
    assert!(!db.verify_email_token("not-a-token").await.unwrap());
    assert!(!db.is_email_verified("pending@example.com").await.unwrap());

    assert!(db.verify_email_token(&token).await.unwrap());
    assert!(db.is_email_verified("pending@example.com").await.unwrap());

    // Tokens are single use
    assert!(!db.verify_email_token(&token).await.unwrap());
}

#[tokio::test]
async fn regenerating_a_token_invalidates_the_old_one() {
    let db = create_test_db().await;

    let (_user_id, old_token) = db
        .create_unverified_user("pending@example.com", "password123", "Pending")
        .await
        .unwrap();

    let new_token = db
        .regenerate_verification_token("pending@example.com")
        .await
        .unwrap()
        .expect("token for existing unverified user");
    assert_ne!(old_token, new_token);

    assert!(!db.verify_email_token(&old_token).await.unwrap());
    assert!(db.verify_email_token(&new_token).await.unwrap());

    // Unknown emails get no token
    assert!(db
        .regenerate_verification_token("missing@example.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn session_lifecycle() {
    let db = create_test_db().await;

    let user_id = db
        .create_user("session@example.com", "password123", "Session User")
        .await
        .unwrap();

    let session = db.create_user_session(user_id).await.unwrap();

    let user = db
        .get_user_by_session(&session)
        .await
        .unwrap()
        .expect("session should resolve");
    assert_eq!(user.id, user_id);
    assert_eq!(user.email, "session@example.com");

    assert!(db.get_user_by_session("bogus").await.unwrap().is_none());

    db.delete_user_session(&session).await.unwrap();
    assert!(db.get_user_by_session(&session).await.unwrap().is_none());
}

#[tokio::test]
async fn prediction_history_is_newest_first() {
    let db = create_test_db().await;

    let user_id = db
        .create_user("predict@example.com", "password123", "Predictor")
        .await
        .unwrap();

    assert!(db.latest_prediction(user_id).await.unwrap().is_none());
    assert!(db.prediction_history(user_id).await.unwrap().is_empty());

    let first = db
        .save_prediction(user_id, r#"{"glucose":90}"#, "Non-Diabetic", 0.12)
        .await
        .unwrap();
    let second = db
        .save_prediction(user_id, r#"{"glucose":150}"#, "Diabetic", 0.81)
        .await
        .unwrap();
    assert!(second > first);

    let history = db.prediction_history(user_id).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second);
    assert_eq!(history[0].result, "Diabetic");
    assert!(history[0].is_diabetic());
    assert_eq!(history[0].risk_percent(), 81);
    assert_eq!(history[1].id, first);
    assert!(!history[1].is_diabetic());

    let latest = db
        .latest_prediction(user_id)
        .await
        .unwrap()
        .expect("latest prediction");
    assert_eq!(latest.id, second);
    assert_eq!(latest.input_data, r#"{"glucose":150}"#);
}

#[tokio::test]
async fn predictions_are_scoped_to_their_user() {
    let db = create_test_db().await;

    let alice = db
        .create_user("alice@example.com", "password123", "Alice")
        .await
        .unwrap();
    let bob = db
        .create_user("bob@example.com", "password123", "Bob")
        .await
        .unwrap();

    db.save_prediction(alice, "{}", "Diabetic", 0.9)
        .await
        .unwrap();

    assert_eq!(db.prediction_history(alice).await.unwrap().len(), 1);
    assert!(db.prediction_history(bob).await.unwrap().is_empty());
    assert!(db.latest_prediction(bob).await.unwrap().is_none());
}
