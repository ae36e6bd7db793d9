use crate::error::LoginError;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use rsa::{BigUint, Pkcs1v15Encrypt, RsaPublicKey};
use rsa::rand_core::OsRng;

/// The key Steam hands out for encrypting an account's password.
#[derive(Debug, Clone)]
pub struct PasswordRsaKey {
    /// The public key.
    pub key: RsaPublicKey,
    /// The timestamp of the key. Must be sent along with the encrypted password.
    pub timestamp: u64,
}

impl PasswordRsaKey {
    /// Builds the key from the hex-encoded modulus and exponent Steam responds with.
    pub fn from_hex(
        modulus: &str,
        exponent: &str,
        timestamp: u64,
    ) -> Result<Self, LoginError> {
        let modulus = BigUint::parse_bytes(modulus.as_bytes(), 16)
            .ok_or_else(|| LoginError::RsaKey(format!("Invalid modulus: {modulus}")))?;
        let exponent = BigUint::parse_bytes(exponent.as_bytes(), 16)
            .ok_or_else(|| LoginError::RsaKey(format!("Invalid exponent: {exponent}")))?;
        let key = RsaPublicKey::new(modulus, exponent)?;

        Ok(Self {
            key,
            timestamp,
        })
    }

    /// Encrypts `password` with PKCS#1 v1.5 padding and encodes it as base64.
    pub fn encrypt_password(
        &self,
        password: &str,
    ) -> Result<String, LoginError> {
        let encrypted = self.key.encrypt(&mut OsRng, Pkcs1v15Encrypt, password.as_bytes())?;

        Ok(BASE64_STANDARD.encode(encrypted))
    }
}
