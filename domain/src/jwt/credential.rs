use std::fmt;

use super::claims::{Claims, Header};
use super::encoding::decode_json;
use super::error::CredentialError;

const DELIMITER: char = '.';

/// A signed credential: `header.payload.signature`, each segment text-safe encoded.
///
/// The value is immutable; issuing for different claims produces a new `Credential`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Credential(String);

/// Borrowed view of the three segments of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
    /// `header.payload`, the exact bytes the signature covers.
    pub signing_input: &'a str,
}

impl<'a> Segments<'a> {
    /// Splits a token into exactly three non-empty segments.
    pub fn split(token: &'a str) -> Result<Self, CredentialError> {
        let parts: Vec<&str> = token.split(DELIMITER).collect();
        let [header, payload, signature] = parts.as_slice() else {
            return Err(CredentialError::MalformedEncoding(format!(
                "expected 3 segments, found {}",
                parts.len()
            )));
        };
        if header.is_empty() || payload.is_empty() || signature.is_empty() {
            return Err(CredentialError::MalformedEncoding(
                "credential segments must not be empty".to_owned(),
            ));
        }
        Ok(Segments {
            header,
            payload,
            signature,
            signing_input: &token[..header.len() + 1 + payload.len()],
        })
    }
}

impl Credential {
    pub(crate) fn from_parts(signing_input: String, signature_segment: &str) -> Self {
        let mut token = signing_input;
        token.push(DELIMITER);
        token.push_str(signature_segment);
        Credential(token)
    }

    /// Wraps a token received from elsewhere after a structural check.
    /// The signature is not checked; use a verifier for that.
    pub fn parse(token: &str) -> Result<Self, CredentialError> {
        Segments::split(token)?;
        Ok(Credential(token.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn segments(&self) -> Result<Segments<'_>, CredentialError> {
        Segments::split(&self.0)
    }

    /// Decodes the header segment without checking the signature.
    pub fn decode_header(&self) -> Result<Header, CredentialError> {
        decode_json(self.segments()?.header)
    }

    /// Decodes the payload segment without checking the signature.
    pub fn decode_claims(&self) -> Result<Claims, CredentialError> {
        decode_json(self.segments()?.payload)
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Credential {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_exposes_segments_and_signing_input() {
        let segments = Segments::split("aGVhZA.Ym9keQ.c2ln").unwrap();
        assert_eq!(segments.header, "aGVhZA");
        assert_eq!(segments.payload, "Ym9keQ");
        assert_eq!(segments.signature, "c2ln");
        assert_eq!(segments.signing_input, "aGVhZA.Ym9keQ");
    }

    #[test]
    fn split_rejects_wrong_segment_counts() {
        for token in ["", "a", "a.b", "a.b.c.d", "a..c", "a.b.", ".b.c"] {
            assert!(
                matches!(
                    Segments::split(token),
                    Err(CredentialError::MalformedEncoding(_))
                ),
                "{token:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_keeps_the_token_verbatim() {
        let credential = Credential::parse("aGVhZA.Ym9keQ.c2ln").unwrap();
        assert_eq!(credential.as_str(), "aGVhZA.Ym9keQ.c2ln");
        assert_eq!(credential.to_string(), "aGVhZA.Ym9keQ.c2ln");
        assert_eq!(credential.into_string(), "aGVhZA.Ym9keQ.c2ln");
    }
}
