//! HMAC-SHA-256 over raw bytes. Signing only produces bytes; turning them into a token
//! segment is left to [`super::encoding`].

use std::fmt;

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString, SecretVec};
use sha2::Sha256;

use super::error::CredentialError;

type HmacSha256 = Hmac<Sha256>;

/// Keys below this size are refused unless the caller configures another floor.
pub const DEFAULT_MIN_KEY_BITS: usize = 256;

/// Length of an HMAC-SHA-256 tag in bytes.
pub const SIGNATURE_LEN: usize = 32;

/// Shared secret for signing and verifying credentials.
///
/// Only the key length is checked; a long but guessable passphrase is accepted.
pub struct SigningKey {
    material: SecretVec<u8>,
    bits: usize,
    min_bits: usize,
}

impl SigningKey {
    /// Wraps raw key material, rejecting empty keys and keys shorter than `min_bits`.
    pub fn new(material: impl Into<Vec<u8>>, min_bits: usize) -> Result<Self, CredentialError> {
        let material = material.into();
        let bits = material.len() * 8;
        if material.is_empty() || bits < min_bits {
            return Err(CredentialError::WeakKey { bits, min_bits });
        }
        Ok(Self {
            material: SecretVec::new(material),
            bits,
            min_bits,
        })
    }

    /// Uses the UTF-8 bytes of a configured secret as key material.
    pub fn from_secret(secret: &SecretString, min_bits: usize) -> Result<Self, CredentialError> {
        Self::new(secret.expose_secret().as_bytes(), min_bits)
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    /// The floor this key was checked against when it was built.
    pub fn min_bits(&self) -> usize {
        self.min_bits
    }

    /// Computes the raw HMAC-SHA-256 tag of `input`.
    pub fn sign(&self, input: &[u8]) -> Result<[u8; SIGNATURE_LEN], CredentialError> {
        let mut mac = self.mac()?;
        mac.update(input);

        let mut signature = [0u8; SIGNATURE_LEN];
        signature.copy_from_slice(&mac.finalize().into_bytes());
        Ok(signature)
    }

    /// Checks `signature` against the tag of `input` in constant time.
    pub fn verify(&self, input: &[u8], signature: &[u8]) -> Result<(), CredentialError> {
        let mut mac = self.mac()?;
        mac.update(input);
        mac.verify_slice(signature)
            .map_err(|_| CredentialError::SignatureMismatch)
    }

    fn mac(&self) -> Result<HmacSha256, CredentialError> {
        // HMAC accepts keys of any length, so this cannot fail for a constructed key.
        HmacSha256::new_from_slice(self.material.expose_secret()).map_err(|_| {
            CredentialError::WeakKey {
                bits: self.bits,
                min_bits: self.min_bits,
            }
        })
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("bits", &self.bits)
            .field("min_bits", &self.min_bits)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_SECRET: &str =
        "teamhub-dev-jwt-secret-key-change-in-production-min-256-bits-long";

    #[test]
    fn accepts_the_reference_secret() {
        let key = SigningKey::new(REFERENCE_SECRET, DEFAULT_MIN_KEY_BITS).unwrap();
        assert_eq!(key.bits(), 65 * 8);
    }

    #[test]
    fn rejects_short_and_empty_keys() {
        assert!(matches!(
            SigningKey::new("short-secret", DEFAULT_MIN_KEY_BITS),
            Err(CredentialError::WeakKey { bits: 96, min_bits: 256 })
        ));
        assert!(matches!(
            SigningKey::new(Vec::new(), 0),
            Err(CredentialError::WeakKey { bits: 0, .. })
        ));
        // Exactly at the floor is fine.
        assert!(SigningKey::new(vec![7u8; 32], DEFAULT_MIN_KEY_BITS).is_ok());
        assert!(SigningKey::new(vec![7u8; 31], DEFAULT_MIN_KEY_BITS).is_err());
    }

    #[test]
    fn key_remembers_the_floor_it_was_built_with() {
        let key = SigningKey::new(REFERENCE_SECRET, 384).unwrap();
        assert_eq!(key.min_bits(), 384);
        assert!(format!("{key:?}").contains("min_bits: 384"));

        let relaxed = SigningKey::new("Jefe", 0).unwrap();
        assert_eq!(relaxed.min_bits(), 0);
    }

    #[test]
    fn matches_rfc_4231_test_case_2() {
        // Key "Jefe", data "what do ya want for nothing?"
        let key = SigningKey::new("Jefe", 0).unwrap();
        let signature = key.sign(b"what do ya want for nothing?").unwrap();
        let expected: [u8; SIGNATURE_LEN] = [
            0x5b, 0xdc, 0xc1, 0x46, 0xbf, 0x60, 0x75, 0x4e, 0x6a, 0x04, 0x24, 0x26, 0x08, 0x95,
            0x75, 0xc7, 0x5a, 0x00, 0x3f, 0x08, 0x9d, 0x27, 0x39, 0x83, 0x9d, 0xec, 0x58, 0xb9,
            0x64, 0xec, 0x38, 0x43,
        ];
        assert_eq!(signature, expected);
    }

    #[test]
    fn verify_accepts_own_signature_and_rejects_others() {
        let key = SigningKey::new(REFERENCE_SECRET, DEFAULT_MIN_KEY_BITS).unwrap();
        let signature = key.sign(b"header.payload").unwrap();

        assert!(key.verify(b"header.payload", &signature).is_ok());
        assert!(matches!(
            key.verify(b"header.payloaD", &signature),
            Err(CredentialError::SignatureMismatch)
        ));
        assert!(matches!(
            key.verify(b"header.payload", &signature[..31]),
            Err(CredentialError::SignatureMismatch)
        ));

        let other = SigningKey::new(vec![1u8; 32], DEFAULT_MIN_KEY_BITS).unwrap();
        assert!(matches!(
            other.verify(b"header.payload", &signature),
            Err(CredentialError::SignatureMismatch)
        ));
    }

    #[test]
    fn debug_output_hides_key_material() {
        let key = SigningKey::new(REFERENCE_SECRET, DEFAULT_MIN_KEY_BITS).unwrap();
        let printed = format!("{key:?}");
        assert!(printed.contains("bits: 520"));
        assert!(!printed.contains("teamhub-dev"));
    }
}
