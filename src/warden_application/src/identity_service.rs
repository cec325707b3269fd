use secrecy::Secret;
use warden_core::{
    AccessClaims, BlockList, Email, EventPublisher, Password, PasswordHasher, RefreshedAccess,
    ResetToken, TokenEngine, TokenPair, UserId, UserStore,
};

use crate::{
    config::IdentityConfig,
    error::AuthError,
    use_cases::{
        change_password::ChangePasswordUseCase,
        confirm_password_reset::ConfirmPasswordResetUseCase,
        current_user::{CurrentUserUseCase, UserProfile},
        login::LoginUseCase,
        logout::LogoutUseCase,
        refresh::RefreshUseCase,
        register::{RegisterUseCase, RegisteredUser},
        request_password_reset::{PasswordResetTicket, RequestPasswordResetUseCase},
        update_profile::UpdateProfileUseCase,
        verify_token::VerifyTokenUseCase,
    },
};

/// Owns the ports and exposes every identity operation as a method.
///
/// Raw strings are validated into domain types here, so callers at the edge
/// never construct `Email` or `Password` themselves.
pub struct IdentityService<U, H, B, P>
where
    U: UserStore,
    H: PasswordHasher,
    B: BlockList,
    P: EventPublisher,
{
    user_store: U,
    hasher: H,
    tokens: TokenEngine<B>,
    publisher: P,
    config: IdentityConfig,
}

impl<U, H, B, P> IdentityService<U, H, B, P>
where
    U: UserStore,
    H: PasswordHasher,
    B: BlockList,
    P: EventPublisher,
{
    pub fn new(
        user_store: U,
        hasher: H,
        tokens: TokenEngine<B>,
        publisher: P,
        config: IdentityConfig,
    ) -> Self {
        Self {
            user_store,
            hasher,
            tokens,
            publisher,
            config,
        }
    }

    pub fn user_store(&self) -> &U {
        &self.user_store
    }

    pub fn tokens(&self) -> &TokenEngine<B> {
        &self.tokens
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    pub async fn register(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<RegisteredUser, AuthError> {
        let email = Email::try_from(email)?;
        let password = Password::try_from(password)?;
        RegisterUseCase::new(
            &self.user_store,
            &self.hasher,
            &self.publisher,
            &self.config.topics.account_created,
        )
        .execute(email, password)
        .await
    }

    pub async fn login(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<TokenPair, AuthError> {
        // Malformed input can never match a stored account.
        let (Ok(email), Ok(password)) = (Email::try_from(email), Password::try_from(password))
        else {
            return Err(AuthError::InvalidCredentials);
        };
        self.login_use_case().execute(email, password).await
    }

    pub async fn logout(&self, access_token: &str) -> Result<(), AuthError> {
        LogoutUseCase::new(&self.tokens).execute(access_token).await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedAccess, AuthError> {
        RefreshUseCase::new(&self.tokens).execute(refresh_token).await
    }

    pub async fn is_authenticated(&self, access_token: &str) -> Result<bool, AuthError> {
        VerifyTokenUseCase::new(&self.tokens)
            .is_valid(access_token)
            .await
    }

    pub async fn authenticate(&self, access_token: &str) -> Result<AccessClaims, AuthError> {
        VerifyTokenUseCase::new(&self.tokens)
            .execute(access_token)
            .await
    }

    pub async fn request_password_reset(
        &self,
        email: Secret<String>,
    ) -> Result<PasswordResetTicket, AuthError> {
        let email = Email::try_from(email)?;
        RequestPasswordResetUseCase::new(
            &self.user_store,
            &self.publisher,
            &self.config.reset,
            &self.config.topics.password_reset,
        )
        .execute(email)
        .await
    }

    pub async fn confirm_password_reset(
        &self,
        reset_token: ResetToken,
        new_password: Secret<String>,
    ) -> Result<(), AuthError> {
        let new_password = Password::try_from(new_password)?;
        ConfirmPasswordResetUseCase::new(&self.user_store, &self.hasher)
            .execute(reset_token, new_password)
            .await
    }

    pub async fn change_password(
        &self,
        user_id: UserId,
        new_password: Secret<String>,
    ) -> Result<(), AuthError> {
        let new_password = Password::try_from(new_password)?;
        ChangePasswordUseCase::new(&self.user_store, &self.hasher)
            .execute(user_id, new_password)
            .await
    }

    pub async fn current_user(&self, user_id: UserId) -> Result<UserProfile, AuthError> {
        CurrentUserUseCase::new(&self.user_store)
            .execute(user_id)
            .await
    }

    /// Applies whichever of `email` and `new_password` are present.
    pub async fn update_profile(
        &self,
        user_id: UserId,
        email: Option<Secret<String>>,
        new_password: Option<Secret<String>>,
    ) -> Result<UserProfile, AuthError> {
        let email = email.map(Email::try_from).transpose()?;
        let new_password = new_password.map(Password::try_from).transpose()?;
        UpdateProfileUseCase::new(&self.user_store, &self.hasher)
            .execute(user_id, email, new_password)
            .await
    }

    fn login_use_case(&self) -> LoginUseCase<'_, U, H, B, P> {
        LoginUseCase::new(
            &self.user_store,
            &self.hasher,
            &self.tokens,
            &self.publisher,
            &self.config.throttle,
            &self.config.topics.account_blocked,
        )
    }
}
