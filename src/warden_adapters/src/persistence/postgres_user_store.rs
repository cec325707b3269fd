use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;
use warden_core::{Email, ResetToken, User, UserId, UserStore, UserStoreError};

const USER_COLUMNS: &str = r#"
    id, email, password_hash, failed_attempts, last_attempt, is_blocked,
    blocked_until, reset_token, reset_token_expires, created_at, updated_at
"#;

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, column: &str, value: String) -> Result<User, UserStoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };
        User::try_from(row)
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn create(&self, user: User) -> Result<User, UserStoreError> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, password_hash, failed_attempts, last_attempt, is_blocked,
                    blocked_until, reset_token, reset_token_expires, created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.email.as_ref().expose_secret())
        .bind(user.password_digest.expose_secret())
        .bind(attempts_to_db(user.failed_attempts))
        .bind(user.last_attempt)
        .bind(user.is_blocked)
        .bind(user.blocked_until)
        .bind(user.reset_token.as_ref().map(ResetToken::as_str))
        .bind(user.reset_token_expires)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(user)
    }

    #[tracing::instrument(name = "Updating user in PostgreSQL", skip_all)]
    async fn update(&self, user: User) -> Result<User, UserStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE users
                SET email = $2,
                    password_hash = $3,
                    failed_attempts = $4,
                    last_attempt = $5,
                    is_blocked = $6,
                    blocked_until = $7,
                    reset_token = $8,
                    reset_token_expires = $9,
                    updated_at = $10
                WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(user.email.as_ref().expose_secret())
        .bind(user.password_digest.expose_secret())
        .bind(attempts_to_db(user.failed_attempts))
        .bind(user.last_attempt)
        .bind(user.is_blocked)
        .bind(user.blocked_until)
        .bind(user.reset_token.as_ref().map(ResetToken::as_str))
        .bind(user.reset_token_expires)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        if result.rows_affected() == 0 {
            return Err(UserStoreError::UserNotFound);
        }

        Ok(user)
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &UserId) -> Result<User, UserStoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let row = sqlx::query_as::<_, UserRow>(&query)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(UserStoreError::UserNotFound);
        };
        User::try_from(row)
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.fetch_one_where("email", email.as_ref().expose_secret().clone())
            .await
    }

    #[tracing::instrument(name = "Retrieving user by reset token from PostgreSQL", skip_all)]
    async fn find_by_reset_token(&self, token: &ResetToken) -> Result<User, UserStoreError> {
        self.fetch_one_where("reset_token", token.as_str().to_owned())
            .await
    }
}

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    failed_attempts: i32,
    last_attempt: Option<DateTime<Utc>>,
    is_blocked: bool,
    blocked_until: Option<DateTime<Utc>>,
    reset_token: Option<String>,
    reset_token_expires: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = UserStoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::new(row.email))
            .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User {
            id: UserId::from(row.id),
            email,
            password_digest: Secret::new(row.password_hash),
            failed_attempts: u32::try_from(row.failed_attempts).unwrap_or_default(),
            last_attempt: row.last_attempt,
            is_blocked: row.is_blocked,
            blocked_until: row.blocked_until,
            reset_token: row.reset_token.map(ResetToken::from),
            reset_token_expires: row.reset_token_expires,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn write_error(e: sqlx::Error) -> UserStoreError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return UserStoreError::UserAlreadyExists;
        }
    }
    UserStoreError::UnexpectedError(e.to_string())
}

fn attempts_to_db(attempts: u32) -> i32 {
    i32::try_from(attempts).unwrap_or(i32::MAX)
}
