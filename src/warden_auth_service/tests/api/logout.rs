use crate::helpers::{TestApp, set_cookie_lines};

#[tokio::test]
async fn logout_revokes_session_and_clears_cookies() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app.get_logout(&session.access_token).await;

    assert_eq!(response.status(), 200);
    let lines = set_cookie_lines(&response);
    assert!(lines.iter().any(|l| l.starts_with("access_token=;")));
    assert!(lines.iter().any(|l| l.starts_with("refresh_token=;")));

    let refresh = app.post_refresh(&session.refresh_cookie_header()).await;
    assert_eq!(refresh.status(), 401);

    let second = app.get_logout(&session.access_token).await;
    assert_eq!(second.status(), 200);
}

#[tokio::test]
async fn logout_without_bearer_is_401() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/v1/auth/logout", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn logout_with_garbage_token_is_401() {
    let app = TestApp::new().await;

    let response = app.get_logout("garbage").await;

    assert_eq!(response.status(), 401);
}
