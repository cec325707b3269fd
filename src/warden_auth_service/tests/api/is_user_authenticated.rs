use crate::helpers::{TestApp, set_cookie_value};

#[tokio::test]
async fn live_access_cookie_is_accepted() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app
        .get_is_user_authenticated(Some(&session.cookie_header()))
        .await;

    assert_eq!(response.status(), 200);
    assert!(set_cookie_value(&response, "access_token").is_none());
}

#[tokio::test]
async fn falls_back_to_refresh_cookie() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;
    let cookies = format!("access_token=garbage; refresh_token={}", session.refresh_token);

    let response = app.get_is_user_authenticated(Some(&cookies)).await;

    assert_eq!(response.status(), 200);
    assert!(set_cookie_value(&response, "access_token").is_some());
}

#[tokio::test]
async fn no_cookies_is_401() {
    let app = TestApp::new().await;

    let response = app.get_is_user_authenticated(None).await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn logged_out_session_is_401() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;
    app.get_logout(&session.access_token).await;

    let response = app
        .get_is_user_authenticated(Some(&session.cookie_header()))
        .await;

    assert_eq!(response.status(), 401);
}
