use crate::helpers::{TestApp, error_message};

#[tokio::test]
async fn register_returns_id_and_email() {
    let app = TestApp::new().await;

    let response = app.post_register("a@x.com", "pw1").await;

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["email"], "a@x.com");
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn duplicate_registration_is_409() {
    let app = TestApp::new().await;
    app.post_register("a@x.com", "pw1").await;

    let response = app.post_register("a@x.com", "pw1").await;

    assert_eq!(response.status(), 409);
    assert_eq!(error_message(response).await, "User already exists");
}

#[tokio::test]
async fn malformed_input_is_400() {
    let app = TestApp::new().await;

    for (email, password) in [("not-an-email", "pw1"), ("a@x.com", "")] {
        let response = app.post_register(email, password).await;
        assert_eq!(response.status(), 400, "{email:?} / {password:?}");
    }
}

#[tokio::test]
async fn missing_fields_are_rejected() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/v1/auth/register", app.address))
        .json(&serde_json::json!({ "email": "a@x.com" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
}
