//! Sessions and the signed tokens that reference them.

use super::{AccountId, AuthDomainError, SessionId};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use std::fmt;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Opaque token handed to the client, `<session-id>.<hex signature>`.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Returns the token string to store in the client cookie.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

/// Signs and verifies session tokens with the application secret.
#[derive(Clone)]
pub struct SessionSigner {
    mac: HmacSha256,
}

impl SessionSigner {
    /// Creates a signer keyed with `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthDomainError::EmptySigningKey`] when the secret is empty.
    pub fn new(secret: &SecretString) -> Result<Self, AuthDomainError> {
        let key = secret.expose_secret().as_bytes();
        if key.is_empty() {
            return Err(AuthDomainError::EmptySigningKey);
        }
        let mac = HmacSha256::new_from_slice(key).map_err(|_| AuthDomainError::EmptySigningKey)?;
        Ok(Self { mac })
    }

    /// Issues the token for a session.
    #[must_use]
    pub fn sign(&self, id: SessionId) -> SessionToken {
        let payload = id.to_string();
        let mut mac = self.mac.clone();
        mac.update(payload.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());
        SessionToken(format!("{payload}.{signature}"))
    }

    /// Returns the session a token refers to when its signature is valid.
    ///
    /// The comparison runs in constant time.
    #[must_use]
    pub fn verify(&self, token: &str) -> Option<SessionId> {
        let (payload, signature) = token.split_once('.')?;
        let uuid = Uuid::parse_str(payload).ok()?;
        let signature = hex::decode(signature).ok()?;
        let mut mac = self.mac.clone();
        mac.update(uuid.to_string().as_bytes());
        mac.verify_slice(&signature).ok()?;
        Some(SessionId::from_uuid(uuid))
    }
}

impl fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSigner").finish_non_exhaustive()
    }
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    account_id: AccountId,
    token: SessionToken,
}

impl Session {
    /// Builds a session value.
    #[must_use]
    pub const fn new(id: SessionId, account_id: AccountId, token: SessionToken) -> Self {
        Self {
            id,
            account_id,
            token,
        }
    }

    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Returns the authenticated account.
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Returns the signed token for this session.
    #[must_use]
    pub const fn token(&self) -> &SessionToken {
        &self.token
    }
}
