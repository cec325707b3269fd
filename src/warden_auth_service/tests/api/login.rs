use crate::helpers::{ACCOUNT_BLOCKED_TOPIC, Session, TestApp, error_message, set_cookie_lines};

#[tokio::test]
async fn login_sets_locked_down_session_cookies() {
    let app = TestApp::new().await;
    app.post_register("a@x.com", "pw1").await;

    let response = app.post_login("a@x.com", "pw1").await;

    assert_eq!(response.status(), 200);
    let lines = set_cookie_lines(&response);
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.contains("HttpOnly"), "{line}");
        assert!(line.contains("Secure"), "{line}");
        assert!(line.contains("SameSite=Strict"), "{line}");
        assert!(line.contains("Path=/"), "{line}");
    }
    let session = Session::from_response(&response);
    assert!(!session.access_token.is_empty());
    assert!(!session.refresh_token.is_empty());
}

#[tokio::test]
async fn wrong_password_and_unknown_user_look_the_same() {
    let app = TestApp::new().await;
    app.post_register("a@x.com", "pw1").await;

    let wrong_password = app.post_login("a@x.com", "nope").await;
    let unknown_user = app.post_login("b@x.com", "pw1").await;

    assert_eq!(wrong_password.status(), 401);
    assert_eq!(unknown_user.status(), 401);
    assert_eq!(
        error_message(wrong_password).await,
        error_message(unknown_user).await
    );
}

#[tokio::test]
async fn third_failure_blocks_the_account() {
    let app = TestApp::new().await;
    app.post_register("a@x.com", "pw1").await;

    for _ in 0..3 {
        let response = app.post_login("a@x.com", "wrong").await;
        assert_eq!(response.status(), 401);
    }
    let response = app.post_login("a@x.com", "pw1").await;

    assert_eq!(response.status(), 403);
    assert_eq!(app.publisher.events_for(ACCOUNT_BLOCKED_TOPIC).await.len(), 1);
}
