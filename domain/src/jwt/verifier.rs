use chrono::{DateTime, Utc};
use log::*;

use super::claims::{Claims, Header, ALGORITHM, TOKEN_TYPE};
use super::credential::Segments;
use super::encoding::{decode, decode_json};
use super::error::CredentialError;
use super::signing::SigningKey;

/// Checks credentials issued with the same shared key.
///
/// The signature is checked before anything inside the token is decoded or trusted.
/// Tokens without a signature segment are rejected as malformed. There is no
/// fallback for unsigned tokens.
#[derive(Debug)]
pub struct TokenVerifier {
    key: SigningKey,
    issuer: Option<String>,
}

impl TokenVerifier {
    pub fn new(key: SigningKey) -> Self {
        Self { key, issuer: None }
    }

    /// Additionally requires the `iss` claim to equal `issuer`.
    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    pub fn verify(&self, token: &str) -> Result<Claims, CredentialError> {
        self.verify_at(token, Utc::now())
    }

    /// Verifies `token` as if the current time were `now`. A credential is still
    /// valid at the exact second of its expiry.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, CredentialError> {
        let segments = Segments::split(token)?;

        // An undecodable signature can never match, whatever the reason it is undecodable.
        let signature = decode(segments.signature).map_err(|_| CredentialError::SignatureMismatch)?;
        self.key
            .verify(segments.signing_input.as_bytes(), &signature)
            .inspect_err(|_| warn!("Rejected credential with a mismatched signature"))?;

        let header: Header = decode_json(segments.header)?;
        if header.alg != ALGORITHM || header.typ != TOKEN_TYPE {
            return Err(CredentialError::UnsupportedAlgorithm(format!(
                "alg={}, typ={}",
                header.alg, header.typ
            )));
        }

        let claims: Claims = decode_json(segments.payload)?;
        let now = now.timestamp();
        if now > claims.exp {
            debug!("Credential for {} expired at {}", claims.sub, claims.exp);
            return Err(CredentialError::Expired {
                exp: claims.exp,
                now,
            });
        }

        if let Some(issuer) = &self.issuer {
            if &claims.iss != issuer {
                return Err(CredentialError::InvalidClaims(format!(
                    "issuer `{}` is not the expected `{issuer}`",
                    claims.iss
                )));
            }
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::claims::Attributes;
    use crate::jwt::encoder::TokenEncoder;
    use crate::jwt::encoding::{encode, encode_json};
    use chrono::TimeZone;
    use std::time::Duration;

    const REFERENCE_SECRET: &str =
        "teamhub-dev-jwt-secret-key-change-in-production-min-256-bits-long";
    const ISSUED_AT: i64 = 1_700_000_000;
    const EXPIRES_AT: i64 = 1_731_536_000;

    fn key() -> SigningKey {
        SigningKey::new(REFERENCE_SECRET, 256).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn owner_token() -> String {
        let encoder =
            TokenEncoder::new(key(), "teamhub-api", Duration::from_secs(31_536_000)).unwrap();
        let attributes = Attributes::from([
            ("email".to_owned(), "john@acme.com".to_owned()),
            (
                "organizationId".to_owned(),
                "org_01HQ3XJMR5E0987654321".to_owned(),
            ),
        ]);
        encoder
            .encode_at("user_01HQ3XK123", attributes, at(ISSUED_AT))
            .unwrap()
            .into_string()
    }

    /// Signs arbitrary header and payload JSON with the reference key.
    fn forge(header: &serde_json::Value, payload: &serde_json::Value) -> String {
        let signing_input = format!(
            "{}.{}",
            encode_json(header).unwrap(),
            encode_json(payload).unwrap()
        );
        let signature = key().sign(signing_input.as_bytes()).unwrap();
        format!("{signing_input}.{}", encode(signature))
    }

    #[test]
    fn accepts_its_own_credentials() {
        let claims = TokenVerifier::new(key())
            .with_issuer("teamhub-api")
            .verify_at(&owner_token(), at(ISSUED_AT))
            .unwrap();

        assert_eq!(claims.sub, "user_01HQ3XK123");
        assert_eq!(claims.attribute("organizationId"), Some("org_01HQ3XJMR5E0987654321"));
        assert_eq!(claims.exp - claims.iat, 31_536_000);
    }

    #[test]
    fn altering_any_character_is_a_signature_mismatch() {
        let token = owner_token();
        let verifier = TokenVerifier::new(key());

        for (index, original) in token.char_indices() {
            if original == '.' {
                continue;
            }
            for replacement in ['A', 'z', '0', '-', '_'] {
                if replacement == original {
                    continue;
                }
                let mut tampered = token.clone();
                tampered.replace_range(index..index + 1, &replacement.to_string());

                let result = verifier.verify_at(&tampered, at(ISSUED_AT));
                assert!(
                    matches!(result, Err(CredentialError::SignatureMismatch)),
                    "{original:?} -> {replacement:?} at {index} gave {result:?}"
                );
            }
        }
    }

    #[test]
    fn different_key_is_a_signature_mismatch() {
        let other = SigningKey::new(vec![7u8; 64], 256).unwrap();
        assert!(matches!(
            TokenVerifier::new(other).verify_at(&owner_token(), at(ISSUED_AT)),
            Err(CredentialError::SignatureMismatch)
        ));
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let verifier = TokenVerifier::new(key());
        assert!(verifier.verify_at(&owner_token(), at(EXPIRES_AT)).is_ok());
        assert!(matches!(
            verifier.verify_at(&owner_token(), at(EXPIRES_AT + 1)),
            Err(CredentialError::Expired {
                exp: EXPIRES_AT,
                now,
            }) if now == EXPIRES_AT + 1
        ));
    }

    #[test]
    fn unsigned_tokens_are_malformed() {
        let header = encode_json(&serde_json::json!({"alg": "none", "typ": "JWT"})).unwrap();
        let payload = encode_json(&serde_json::json!({"sub": "user_01HQ3XK123"})).unwrap();
        let verifier = TokenVerifier::new(key());

        for token in [
            format!("{header}.{payload}"),
            format!("{header}.{payload}."),
        ] {
            assert!(matches!(
                verifier.verify_at(&token, at(ISSUED_AT)),
                Err(CredentialError::MalformedEncoding(_))
            ));
        }
    }

    #[test]
    fn signed_but_foreign_algorithm_is_unsupported() {
        let token = forge(
            &serde_json::json!({"alg": "HS512", "typ": "JWT"}),
            &serde_json::json!({
                "sub": "user_01HQ3XK123",
                "iss": "teamhub-api",
                "iat": ISSUED_AT,
                "exp": EXPIRES_AT,
            }),
        );
        assert!(matches!(
            TokenVerifier::new(key()).verify_at(&token, at(ISSUED_AT)),
            Err(CredentialError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn signed_payload_without_claims_is_malformed() {
        let token = forge(
            &serde_json::json!({"alg": "HS256", "typ": "JWT"}),
            &serde_json::json!({"sub": "user_01HQ3XK123"}),
        );
        assert!(matches!(
            TokenVerifier::new(key()).verify_at(&token, at(ISSUED_AT)),
            Err(CredentialError::MalformedEncoding(_))
        ));
    }

    #[test]
    fn issuer_mismatch_is_rejected() {
        assert!(matches!(
            TokenVerifier::new(key())
                .with_issuer("teamhub-admin")
                .verify_at(&owner_token(), at(ISSUED_AT)),
            Err(CredentialError::InvalidClaims(_))
        ));
    }
}
