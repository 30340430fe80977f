use std::time::Duration;

use chrono::{DateTime, Utc};
use log::*;

use super::claims::{validate_attributes, Attributes, Claims, Header};
use super::credential::Credential;
use super::encoding::{encode, encode_json};
use super::error::CredentialError;
use super::signing::SigningKey;

/// Issues signed credentials for one issuer with a fixed validity window.
///
/// The encoder holds no mutable state, so a single instance can be shared across
/// threads and used concurrently.
#[derive(Debug)]
pub struct TokenEncoder {
    key: SigningKey,
    issuer: String,
    validity_secs: i64,
    header_segment: String,
}

impl TokenEncoder {
    /// Fails with `InvalidClaims` for a blank issuer or a window that is zero,
    /// has a fractional second, or does not fit in a signed 64-bit timestamp.
    pub fn new(
        key: SigningKey,
        issuer: impl Into<String>,
        validity: Duration,
    ) -> Result<Self, CredentialError> {
        let issuer = issuer.into();
        if issuer.trim().is_empty() {
            return Err(CredentialError::InvalidClaims(
                "issuer must not be empty".to_owned(),
            ));
        }
        if validity.is_zero() || validity.subsec_nanos() != 0 {
            return Err(CredentialError::InvalidClaims(format!(
                "validity window must be a positive whole number of seconds, got {validity:?}"
            )));
        }
        let validity_secs = i64::try_from(validity.as_secs()).map_err(|_| {
            CredentialError::InvalidClaims(format!("validity window {validity:?} is too large"))
        })?;

        Ok(Self {
            key,
            issuer,
            validity_secs,
            header_segment: encode_json(&Header::default())?,
        })
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn validity(&self) -> Duration {
        Duration::from_secs(self.validity_secs.unsigned_abs())
    }

    /// Issues a credential stamped with the current system time.
    pub fn encode(
        &self,
        subject: &str,
        attributes: Attributes,
    ) -> Result<Credential, CredentialError> {
        self.encode_at(subject, attributes, Utc::now())
    }

    /// Issues a credential as if the current time were `now`. Identical inputs always
    /// produce an identical credential.
    pub fn encode_at(
        &self,
        subject: &str,
        attributes: Attributes,
        now: DateTime<Utc>,
    ) -> Result<Credential, CredentialError> {
        let claims = self.claims_at(subject, attributes, now)?;

        let mut signing_input = self.header_segment.clone();
        signing_input.push('.');
        signing_input.push_str(&encode_json(&claims)?);

        let signature = self.key.sign(signing_input.as_bytes())?;
        debug!(
            "Issued credential for subject {} expiring at {}",
            claims.sub, claims.exp
        );
        Ok(Credential::from_parts(signing_input, &encode(signature)))
    }

    /// Builds the payload that [`Self::encode_at`] would sign.
    pub fn claims_at(
        &self,
        subject: &str,
        attributes: Attributes,
        now: DateTime<Utc>,
    ) -> Result<Claims, CredentialError> {
        if subject.trim().is_empty() {
            return Err(CredentialError::InvalidClaims(
                "subject must not be empty".to_owned(),
            ));
        }
        validate_attributes(&attributes)?;

        let iat = now.timestamp();
        if iat < 0 {
            return Err(CredentialError::Clock(format!(
                "current time {now} is before the Unix epoch"
            )));
        }
        let exp = iat.checked_add(self.validity_secs).ok_or_else(|| {
            CredentialError::InvalidClaims(format!(
                "expiry overflows when adding {} seconds to {iat}",
                self.validity_secs
            ))
        })?;

        Ok(Claims {
            sub: subject.to_owned(),
            iss: self.issuer.clone(),
            attributes,
            iat,
            exp,
        })
    }
}
