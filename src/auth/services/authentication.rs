//! Registration, login, logout and session checks.

use std::sync::Arc;

use secrecy::SecretString;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::auth::{
    domain::{
        Account, AccountId, AuthDomainError, DisplayName, EmailAddress, NewAccount, Password,
        PasswordHash, Session, SessionId, SessionSigner,
    },
    ports::{
        AccountRepository, AccountRepositoryError, PasswordHashError, PasswordHasher,
        SessionStore, SessionStoreError,
    },
};
use crate::error::ErrorKind;

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthServiceError>;

/// Which half of a login attempt failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFailure {
    /// No account has the submitted email.
    EmailNotFound,
    /// The email exists but the password does not match.
    PasswordIncorrect,
}

/// Errors returned by [`AuthService`].
#[derive(Debug, Clone, Error)]
pub enum AuthServiceError {
    /// Submitted account fields failed validation.
    #[error(transparent)]
    Domain(#[from] AuthDomainError),

    /// Account storage failed or rejected the write.
    #[error(transparent)]
    Accounts(#[from] AccountRepositoryError),

    /// Session storage failed.
    #[error(transparent)]
    Sessions(#[from] SessionStoreError),

    /// The password hasher failed.
    #[error(transparent)]
    Hashing(#[from] PasswordHashError),

    /// The login credentials did not match an account.
    #[error("invalid credentials: {0:?}")]
    InvalidCredentials(CredentialFailure),

    /// No valid session accompanied the request.
    #[error("no active session")]
    Unauthenticated,

    /// A live session refers to an account that no longer exists.
    #[error("account {0} not found")]
    AccountNotFound(AccountId),
}

impl AuthServiceError {
    /// Classifies the error for presentation.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain(_) => ErrorKind::Validation,
            Self::Accounts(AccountRepositoryError::DuplicateEmail(_)) => ErrorKind::DuplicateEntity,
            Self::InvalidCredentials(_) | Self::Unauthenticated => ErrorKind::Unauthenticated,
            Self::AccountNotFound(_) => ErrorKind::NotFound,
            Self::Accounts(_) | Self::Sessions(_) | Self::Hashing(_) => ErrorKind::Internal,
        }
    }
}

/// Registration form input.
#[derive(Debug)]
pub struct RegisterRequest {
    email: String,
    password: SecretString,
    display_name: String,
}

impl RegisterRequest {
    /// Creates a registration request.
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
            display_name: display_name.into(),
        }
    }
}

/// Login form input.
#[derive(Debug)]
pub struct LoginRequest {
    email: String,
    password: SecretString,
}

impl LoginRequest {
    /// Creates a login request.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Account registration and session gate.
#[derive(Clone)]
pub struct AuthService<A, S, H>
where
    A: AccountRepository,
    S: SessionStore,
    H: PasswordHasher + 'static,
{
    accounts: Arc<A>,
    sessions: Arc<S>,
    hasher: Arc<H>,
    signer: Arc<SessionSigner>,
}

impl<A, S, H> AuthService<A, S, H>
where
    A: AccountRepository,
    S: SessionStore,
    H: PasswordHasher + 'static,
{
    /// Creates a new authentication service.
    #[must_use]
    pub const fn new(
        accounts: Arc<A>,
        sessions: Arc<S>,
        hasher: Arc<H>,
        signer: Arc<SessionSigner>,
    ) -> Self {
        Self {
            accounts,
            sessions,
            hasher,
            signer,
        }
    }

    /// Registers an account and logs it in.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Domain`] for invalid fields and
    /// [`AccountRepositoryError::DuplicateEmail`] when the email is taken.
    pub async fn register(&self, request: RegisterRequest) -> AuthResult<Session> {
        let RegisterRequest {
            email: raw_email,
            password: raw_password,
            display_name: raw_display_name,
        } = request;
        let email = EmailAddress::new(raw_email)?;
        let display_name = DisplayName::new(raw_display_name)?;
        let password = Password::new(raw_password)?;

        if self.accounts.find_by_email(&email).await?.is_some() {
            warn!(email = %email, "registration rejected: email already registered");
            return Err(AccountRepositoryError::DuplicateEmail(email).into());
        }

        let password_hash = self.hash_password(password).await?;
        let account = self
            .accounts
            .insert(&NewAccount {
                email,
                display_name,
                password_hash,
            })
            .await?;
        info!(account_id = %account.id(), email = %account.email(), "account registered");

        self.open_session(account.id()).await
    }

    /// Checks credentials and opens a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::InvalidCredentials`] naming which check
    /// failed.
    pub async fn login(&self, request: LoginRequest) -> AuthResult<Session> {
        let LoginRequest {
            email: raw_email,
            password: raw_password,
        } = request;
        let email = EmailAddress::new(raw_email)?;
        let password = Password::new(raw_password)?;

        let Some(account) = self.accounts.find_by_email(&email).await? else {
            warn!(email = %email, "login rejected: unknown email");
            return Err(AuthServiceError::InvalidCredentials(
                CredentialFailure::EmailNotFound,
            ));
        };

        if !self
            .verify_password(password, account.password_hash().clone())
            .await?
        {
            warn!(account_id = %account.id(), "login rejected: password mismatch");
            return Err(AuthServiceError::InvalidCredentials(
                CredentialFailure::PasswordIncorrect,
            ));
        }

        info!(account_id = %account.id(), "account logged in");
        self.open_session(account.id()).await
    }

    /// Ends the session referenced by `token`.
    ///
    /// Missing, forged and already-ended tokens all succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Sessions`] when session storage fails.
    pub async fn logout(&self, token: Option<&str>) -> AuthResult<()> {
        let Some(id) = token.and_then(|raw| self.signer.verify(raw)) else {
            debug!("logout without a valid session token");
            return Ok(());
        };

        if self.sessions.remove(id).await? {
            info!(session_id = %id, "session ended");
        }
        Ok(())
    }

    /// Resolves the session a request carries.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Unauthenticated`] when the token is
    /// missing, fails its signature check, or names an ended session.
    pub async fn require_session(&self, token: Option<&str>) -> AuthResult<Session> {
        let id = token
            .and_then(|raw| self.signer.verify(raw))
            .ok_or(AuthServiceError::Unauthenticated)?;
        let account_id = self
            .sessions
            .find(id)
            .await?
            .ok_or(AuthServiceError::Unauthenticated)?;
        Ok(Session::new(id, account_id, self.signer.sign(id)))
    }

    /// Loads the account behind a session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::AccountNotFound`] when the account row is
    /// gone.
    pub async fn current_account(&self, session: &Session) -> AuthResult<Account> {
        self.accounts
            .find_by_id(session.account_id())
            .await?
            .ok_or(AuthServiceError::AccountNotFound(session.account_id()))
    }

    async fn open_session(&self, account_id: AccountId) -> AuthResult<Session> {
        let id = SessionId::new();
        self.sessions.insert(id, account_id).await?;
        debug!(session_id = %id, account_id = %account_id, "session opened");
        Ok(Session::new(id, account_id, self.signer.sign(id)))
    }

    async fn hash_password(&self, password: Password) -> AuthResult<PasswordHash> {
        let hasher = Arc::clone(&self.hasher);
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| PasswordHashError::new(err.to_string()))??;
        Ok(hashed)
    }

    async fn verify_password(&self, password: Password, hash: PasswordHash) -> AuthResult<bool> {
        let hasher = Arc::clone(&self.hasher);
        let verified = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|err| PasswordHashError::new(err.to_string()))??;
        Ok(verified)
    }
}
