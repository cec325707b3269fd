use crate::helpers::{TestApp, set_cookie_value};

#[tokio::test]
async fn refresh_issues_new_access_cookie() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app.post_refresh(&session.refresh_cookie_header()).await;

    assert_eq!(response.status(), 200);
    let access = set_cookie_value(&response, "access_token").unwrap();
    assert!(!access.is_empty());
    assert!(set_cookie_value(&response, "refresh_token").is_none());
}

#[tokio::test]
async fn refresh_without_cookie_is_401() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/v1/auth/refresh", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn access_token_in_refresh_cookie_is_rejected() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app
        .post_refresh(&format!("refresh_token={}", session.access_token))
        .await;

    assert_eq!(response.status(), 401);
}
