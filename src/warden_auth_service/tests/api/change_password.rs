use crate::helpers::TestApp;

#[tokio::test]
async fn authenticated_user_can_change_password() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app
        .post_change_password(&session.access_token, "pw2")
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(app.post_login("a@x.com", "pw2").await.status(), 200);
    assert_eq!(app.post_login("a@x.com", "pw1").await.status(), 401);
}

#[tokio::test]
async fn revoked_token_cannot_change_password() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;
    app.get_logout(&session.access_token).await;

    let response = app
        .post_change_password(&session.access_token, "pw2")
        .await;

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn empty_new_password_is_400() {
    let app = TestApp::new().await;
    let session = app.logged_in("a@x.com", "pw1").await;

    let response = app.post_change_password(&session.access_token, "").await;

    assert_eq!(response.status(), 400);
}
