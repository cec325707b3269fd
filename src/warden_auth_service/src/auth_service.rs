use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use warden_adapters::{
    config::AllowedOrigins,
    http::routes::{
        change_password, confirm_password_reset, current_user, is_user_authenticated, login,
        logout, refresh, register, request_password_reset, update_user,
    },
};
use warden_application::IdentityService;
use warden_core::{BlockList, EventPublisher, PasswordHasher, UserStore};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

pub const API_PREFIX: &str = "/v1/auth";
pub const USER_PATH: &str = "/v1/user";

/// Identity provider HTTP service: session routes under `/v1/auth` and the
/// profile of the session owner at `/v1/user`
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService around a fully wired identity service
    pub fn new<U, H, B, P>(identity: IdentityService<U, H, B, P>) -> Self
    where
        U: UserStore + 'static,
        H: PasswordHasher + 'static,
        B: BlockList + 'static,
        P: EventPublisher + 'static,
    {
        let routes = Router::new()
            .route("/register", post(register::<U, H, B, P>))
            .route("/login", post(login::<U, H, B, P>))
            .route("/logout", get(logout::<U, H, B, P>))
            .route("/refresh", post(refresh::<U, H, B, P>))
            .route(
                "/is-user-authenticated",
                get(is_user_authenticated::<U, H, B, P>),
            )
            .route(
                "/request-password-reset",
                post(request_password_reset::<U, H, B, P>),
            )
            .route(
                "/confirm-password-reset/{reset_token}",
                post(confirm_password_reset::<U, H, B, P>),
            )
            .route("/change-password", post(change_password::<U, H, B, P>));

        let router = Router::new()
            .nest(API_PREFIX, routes)
            .route(
                USER_PATH,
                get(current_user::<U, H, B, P>).patch(update_user::<U, H, B, P>),
            )
            .with_state(Arc::new(identity));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PATCH])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
