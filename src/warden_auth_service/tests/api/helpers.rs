use chrono::TimeDelta;
use reqwest::{Client, Response, header::SET_COOKIE};
use secrecy::Secret;
use warden_adapters::{
    Argon2PasswordHasher, HashMapBlockList, HashMapUserStore, RecordingEventPublisher,
    config::test,
};
use warden_application::{EventTopics, IdentityConfig, IdentityService, ResetPolicy};
use warden_auth_service::AuthService;
use warden_core::{AccountEvent, ResetToken, ThrottlePolicy, TokenConfig, TokenEngine};

pub const PASSWORD_RESET_TOPIC: &str = "password-reset";
pub const ACCOUNT_BLOCKED_TOPIC: &str = "account-blocked";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
    pub publisher: RecordingEventPublisher,
}

impl TestApp {
    pub async fn new() -> Self {
        let publisher = RecordingEventPublisher::new();
        let identity = IdentityService::new(
            HashMapUserStore::new(),
            Argon2PasswordHasher::new(),
            TokenEngine::new(
                TokenConfig {
                    jwt_secret: Secret::new("api-test-secret".to_owned()),
                    access_token_ttl: TimeDelta::minutes(15),
                    refresh_token_ttl: TimeDelta::days(4),
                },
                HashMapBlockList::new(),
            ),
            publisher.clone(),
            IdentityConfig {
                throttle: ThrottlePolicy::new(3, TimeDelta::minutes(1), TimeDelta::zero())
                    .expect("valid throttle policy"),
                reset: ResetPolicy {
                    token_ttl: TimeDelta::hours(24),
                },
                topics: EventTopics {
                    account_created: "account-created".to_owned(),
                    account_blocked: ACCOUNT_BLOCKED_TOPIC.to_owned(),
                    password_reset: PASSWORD_RESET_TOPIC.to_owned(),
                },
            },
        );

        let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().expect("local address"));

        tokio::spawn(AuthService::new(identity).run_standalone(listener, None));

        let http_client = Client::builder()
            .build()
            .expect("Failed to build HTTP client");

        Self {
            address,
            http_client,
            publisher,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1/auth{}", self.address, path)
    }

    pub async fn post_register(&self, email: &str, password: &str) -> Response {
        self.http_client
            .post(self.url("/register"))
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_login(&self, email: &str, password: &str) -> Response {
        self.http_client
            .post(self.url("/login"))
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_logout(&self, access_token: &str) -> Response {
        self.http_client
            .get(self.url("/logout"))
            .bearer_auth(access_token)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_refresh(&self, cookies: &str) -> Response {
        self.http_client
            .post(self.url("/refresh"))
            .header(reqwest::header::COOKIE, cookies)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_is_user_authenticated(&self, cookies: Option<&str>) -> Response {
        let mut request = self.http_client.get(self.url("/is-user-authenticated"));
        if let Some(cookies) = cookies {
            request = request.header(reqwest::header::COOKIE, cookies);
        }
        request.send().await.expect("Failed to execute request")
    }

    pub async fn post_request_password_reset(&self, email: &str) -> Response {
        self.http_client
            .post(self.url("/request-password-reset"))
            .form(&[("email", email)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_confirm_password_reset(&self, token: &str, new_password: &str) -> Response {
        self.http_client
            .post(self.url(&format!("/confirm-password-reset/{token}")))
            .form(&[("newPassword", new_password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_change_password(&self, access_token: &str, new_password: &str) -> Response {
        self.http_client
            .post(self.url("/change-password"))
            .bearer_auth(access_token)
            .form(&[("newPassword", new_password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_user(&self, cookies: &str) -> Response {
        self.http_client
            .get(format!("{}/v1/user", self.address))
            .header(reqwest::header::COOKIE, cookies)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn patch_user(&self, cookies: &str, body: &serde_json::Value) -> Response {
        self.http_client
            .patch(format!("{}/v1/user", self.address))
            .header(reqwest::header::COOKIE, cookies)
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Latest reset token delivered through the event bus.
    pub async fn last_reset_token(&self) -> ResetToken {
        self.publisher
            .events_for(PASSWORD_RESET_TOPIC)
            .await
            .into_iter()
            .rev()
            .find_map(|event| match event {
                AccountEvent::PasswordResetRequested { reset_token, .. } => Some(reset_token),
                _ => None,
            })
            .expect("no password reset event published")
    }

    /// Registers and logs in, returning the session cookies.
    pub async fn logged_in(&self, email: &str, password: &str) -> Session {
        assert_eq!(self.post_register(email, password).await.status(), 200);
        let response = self.post_login(email, password).await;
        assert_eq!(response.status(), 200);
        Session::from_response(&response)
    }
}

/// Session cookies captured from `Set-Cookie`.
///
/// The cookies are `Secure`, so a cookie store would never replay them over
/// plain http; tests pass them by hand instead.
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
}

impl Session {
    pub fn from_response(response: &Response) -> Self {
        Self {
            access_token: set_cookie_value(response, "access_token")
                .expect("access_token cookie missing"),
            refresh_token: set_cookie_value(response, "refresh_token")
                .expect("refresh_token cookie missing"),
        }
    }

    pub fn cookie_header(&self) -> String {
        format!(
            "access_token={}; refresh_token={}",
            self.access_token, self.refresh_token
        )
    }

    pub fn refresh_cookie_header(&self) -> String {
        format!("refresh_token={}", self.refresh_token)
    }
}

pub fn set_cookie_value(response: &Response, name: &str) -> Option<String> {
    set_cookie_lines(response)
        .into_iter()
        .find_map(|line| {
            let pair = line.split(';').next()?;
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then(|| value.trim().to_owned())
        })
}

pub fn set_cookie_lines(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

pub async fn error_message(response: Response) -> String {
    let body: serde_json::Value = response.json().await.expect("JSON error body");
    body["error"]
        .as_str()
        .expect("error field")
        .to_owned()
}
