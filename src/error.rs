//! Application-level error aggregation and the user-facing taxonomy.

use thiserror::Error;

use crate::auth::{
    domain::AuthDomainError,
    ports::AccountRepositoryError,
    services::{AuthServiceError, CredentialFailure},
};
use crate::config::ConfigError;
use crate::store::StoreError;
use crate::telemetry::TelemetryError;
use crate::todo::{
    domain::TodoDomainError, ports::TodoRepositoryError, services::TodoLifecycleError,
};

/// Presentation-level classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Submitted input failed validation; the form is shown again.
    Validation,
    /// A uniqueness constraint rejected the write.
    DuplicateEntity,
    /// The referenced record does not exist.
    NotFound,
    /// The request has no valid session or the credentials were wrong.
    Unauthenticated,
    /// A category still has tasks and cannot be deleted.
    CategoryInUse,
    /// Infrastructure failure; the operation was aborted.
    Internal,
}

impl ErrorKind {
    /// Returns `true` when the user can correct the request and retry.
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        !matches!(self, Self::Internal)
    }
}

/// Any error the application surfaces.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The store could not be opened or initialised.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Logging could not be installed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),

    /// A lifecycle operation failed.
    #[error(transparent)]
    Todo(#[from] TodoLifecycleError),

    /// An authentication operation failed.
    #[error(transparent)]
    Auth(#[from] AuthServiceError),
}

const GENERIC_FAILURE: &str = "Something went wrong, please try again.";

impl AppError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) | Self::Store(_) | Self::Telemetry(_) => ErrorKind::Internal,
            Self::Todo(err) => err.kind(),
            Self::Auth(err) => err.kind(),
        }
    }

    /// Returns `true` unless the error is [`ErrorKind::Internal`].
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        self.kind().is_recoverable()
    }

    /// Returns the message to flash to the user.
    ///
    /// Internal failures get a generic message so storage details never
    /// reach the page.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(_) | Self::Store(_) | Self::Telemetry(_) => GENERIC_FAILURE.to_owned(),
            Self::Todo(err) => todo_message(err),
            Self::Auth(err) => auth_message(err),
        }
    }
}

fn todo_message(err: &TodoLifecycleError) -> String {
    match err {
        TodoLifecycleError::Domain(domain) => match domain {
            TodoDomainError::EmptyCategoryName | TodoDomainError::EmptyTaskName => {
                "This field is required.".to_owned()
            }
            TodoDomainError::CategoryNameTooLong(_) | TodoDomainError::TaskNameTooLong(_) => {
                "Field must be at most 250 characters long.".to_owned()
            }
            TodoDomainError::InvalidDueDate(_) => "Not a valid date value.".to_owned(),
            TodoDomainError::DueDateInPast { .. } => "Due Date can't be in the past!".to_owned(),
            TodoDomainError::UnknownCategory(_) => "Not a valid choice.".to_owned(),
        },
        TodoLifecycleError::CategoryNameNotFound(name) => {
            format!("There is no category named {name}.")
        }
        TodoLifecycleError::Repository(repository) => match repository {
            TodoRepositoryError::DuplicateCategory(_) => "This Category already exists!".to_owned(),
            TodoRepositoryError::CategoryNotFound(_) => {
                "That category no longer exists.".to_owned()
            }
            TodoRepositoryError::TaskNotFound(_) => "That to-do no longer exists.".to_owned(),
            TodoRepositoryError::CategoryInUse { .. } => {
                "This Category still has to-dos; reassign or delete its tasks first.".to_owned()
            }
            TodoRepositoryError::InvalidPersistedData(_) | TodoRepositoryError::Persistence(_) => {
                GENERIC_FAILURE.to_owned()
            }
        },
    }
}

fn auth_message(err: &AuthServiceError) -> String {
    match err {
        AuthServiceError::Domain(domain) => match domain {
            AuthDomainError::EmptyEmail
            | AuthDomainError::EmptyDisplayName
            | AuthDomainError::EmptyPassword => "This field is required.".to_owned(),
            AuthDomainError::InvalidEmail(_) => "Invalid email address.".to_owned(),
            AuthDomainError::EmailTooLong(_) | AuthDomainError::DisplayNameTooLong(_) => {
                "Field must be at most 100 characters long.".to_owned()
            }
            AuthDomainError::EmptySigningKey => GENERIC_FAILURE.to_owned(),
        },
        AuthServiceError::Accounts(AccountRepositoryError::DuplicateEmail(_)) => {
            "You've already signed up with that email, log in instead!".to_owned()
        }
        AuthServiceError::InvalidCredentials(CredentialFailure::EmailNotFound) => {
            "That email does not exist, please try again.".to_owned()
        }
        AuthServiceError::InvalidCredentials(CredentialFailure::PasswordIncorrect) => {
            "Password incorrect, please try again.".to_owned()
        }
        AuthServiceError::Unauthenticated | AuthServiceError::AccountNotFound(_) => {
            "You need to login or register to continue.".to_owned()
        }
        AuthServiceError::Accounts(_) | AuthServiceError::Sessions(_) | AuthServiceError::Hashing(_) => {
            GENERIC_FAILURE.to_owned()
        }
    }
}
