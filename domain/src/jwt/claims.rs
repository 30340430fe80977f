//! The header and payload carried by a credential.
//!
//! Serialization order is part of the wire contract because the signature covers the
//! encoded bytes. Headers serialize as `{"alg","typ"}`. Payloads serialize as
//! `{"sub","iss",<attributes in ascending name order>,"iat","exp"}`, so the reference
//! owner token reads `{"sub","iss","email","organizationId","iat","exp"}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::CredentialError;

/// Signing algorithm identifier (HMAC with SHA-256).
pub const ALGORITHM: &str = "HS256";
/// Credential type tag.
pub const TOKEN_TYPE: &str = "JWT";

/// Claim names with a fixed position in the payload; attributes may not reuse them.
pub const REGISTERED_CLAIMS: [&str; 4] = ["sub", "iss", "iat", "exp"];

/// Contextual attributes, such as an email or an organization id, carried opaquely.
pub type Attributes = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Default for Header {
    fn default() -> Self {
        Header {
            alg: ALGORITHM.to_owned(),
            typ: TOKEN_TYPE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identifier of the credential holder.
    pub sub: String,
    /// Issuing authority.
    pub iss: String,
    #[serde(flatten)]
    pub attributes: Attributes,
    /// Issued-at, whole seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, whole seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Checks the invariants every issued payload satisfies.
    pub fn validate(&self) -> Result<(), CredentialError> {
        if self.sub.trim().is_empty() {
            return Err(CredentialError::InvalidClaims(
                "subject must not be empty".to_owned(),
            ));
        }
        if self.iss.trim().is_empty() {
            return Err(CredentialError::InvalidClaims(
                "issuer must not be empty".to_owned(),
            ));
        }
        validate_attributes(&self.attributes)?;
        if self.exp <= self.iat {
            return Err(CredentialError::InvalidClaims(format!(
                "expiry {} must be after issued-at {}",
                self.exp, self.iat
            )));
        }
        Ok(())
    }
}

pub fn validate_attributes(attributes: &Attributes) -> Result<(), CredentialError> {
    for name in attributes.keys() {
        if name.is_empty() {
            return Err(CredentialError::InvalidClaims(
                "attribute names must not be empty".to_owned(),
            ));
        }
        if REGISTERED_CLAIMS.contains(&name.as_str()) {
            return Err(CredentialError::InvalidClaims(format!(
                "attribute `{name}` collides with a registered claim"
            )));
        }
    }
    Ok(())
}
