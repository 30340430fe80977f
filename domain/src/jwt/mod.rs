//! Credential issuing and checking for TeamHub.
//!
//! A credential is three text-safe segments joined by `.`: the encoded header, the
//! encoded claims and the encoded HMAC-SHA-256 signature over the first two. The
//! pieces are kept apart on purpose. [`encoding`] only turns bytes into text and back,
//! [`signing`] only produces and checks raw MAC bytes, and [`TokenEncoder`] /
//! [`TokenVerifier`] compose them.
//!
//! The functions at this level build those types from the runtime [`Config`], which
//! is the only place the shared secret comes from.
//!
//! # Example
//!
//! ```no_run
//! use domain::jwt::{generate_token, Attributes};
//! use service::config::Config;
//!
//! let config = Config::new();
//! match generate_token(&config, "user_01HQ3XK123", Attributes::new()) {
//!     Ok(credential) => println!("Authorization: Bearer {credential}"),
//!     Err(e) => eprintln!("Error generating credential: {e}"),
//! }
//! ```

use std::time::Duration;

use entity::members;
use log::*;
use service::config::Config;

use crate::error::Error;

pub mod claims;
pub mod credential;
pub mod encoder;
pub mod encoding;
pub mod error;
pub mod signing;
pub mod verifier;

pub use claims::{Attributes, Claims, Header};
pub use credential::Credential;
pub use encoder::TokenEncoder;
pub use error::CredentialError;
pub use signing::SigningKey;
pub use verifier::TokenVerifier;

/// Attribute carrying the holder's email address.
pub const EMAIL_CLAIM: &str = "email";
/// Attribute carrying the holder's organization id.
pub const ORGANIZATION_CLAIM: &str = "organizationId";

/// Builds the signing key from the configured secret, enforcing the configured floor.
pub fn signing_key(config: &Config) -> Result<SigningKey, Error> {
    let secret = config.jwt_signing_key().ok_or_else(|| {
        warn!("No credential signing key configured, set JWT_SIGNING_KEY");
        Error::config()
    })?;
    Ok(SigningKey::from_secret(&secret, config.jwt_min_key_bits)?)
}

pub fn token_encoder(config: &Config) -> Result<TokenEncoder, Error> {
    Ok(TokenEncoder::new(
        signing_key(config)?,
        config.jwt_issuer.clone(),
        Duration::from_secs(config.jwt_validity_secs),
    )?)
}

/// A verifier that also requires the configured issuer.
pub fn token_verifier(config: &Config) -> Result<TokenVerifier, Error> {
    Ok(TokenVerifier::new(signing_key(config)?).with_issuer(config.jwt_issuer.clone()))
}

/// Issues a credential for `subject` valid from now for the configured window.
pub fn generate_token(
    config: &Config,
    subject: &str,
    attributes: Attributes,
) -> Result<Credential, Error> {
    let credential = token_encoder(config)?.encode(subject, attributes)?;
    info!("Generated credential for {subject}");
    Ok(credential)
}

/// Issues a credential for a member, carrying their email and organization.
pub fn generate_member_token(
    config: &Config,
    member: &members::Model,
) -> Result<Credential, Error> {
    generate_token(config, &member.id, member_attributes(member))
}

pub fn member_attributes(member: &members::Model) -> Attributes {
    Attributes::from([
        (EMAIL_CLAIM.to_string(), member.email.clone()),
        (ORGANIZATION_CLAIM.to_string(), member.organization_id.clone()),
    ])
}
