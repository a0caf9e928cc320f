//! Argon2id password hashing.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash as PhcString, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use rand::RngCore;

use crate::auth::{
    domain::{Password, PasswordHash},
    ports::{PasswordHashError, PasswordHasher},
};

/// Argon2id hasher with the crate's default parameters.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Creates a hasher with default Argon2id parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHashError> {
        let mut salt_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|err| PasswordHashError::new(err.to_string()))?;

        let phc = self
            .argon2
            .hash_password(password.expose().as_bytes(), &salt)
            .map_err(|err| PasswordHashError::new(err.to_string()))?;
        Ok(PasswordHash::from_phc(phc.to_string()))
    }

    fn verify(&self, password: &Password, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        let parsed =
            PhcString::new(hash.as_str()).map_err(|err| PasswordHashError::new(err.to_string()))?;

        match self
            .argon2
            .verify_password(password.expose().as_bytes(), &parsed)
        {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(err) => Err(PasswordHashError::new(err.to_string())),
        }
    }
}
