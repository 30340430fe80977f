use chrono::{TimeZone, Utc};
use domain::jwt::{
    self, encoding, Attributes, CredentialError, TokenVerifier, EMAIL_CLAIM, ORGANIZATION_CLAIM,
};
use domain::seed::{catalogue, OWNER_ID};
use service::config::Config;

const REFERENCE_SECRET: &str = "teamhub-dev-jwt-secret-key-change-in-production-min-256-bits-long";

fn config() -> Config {
    Config::from_args(["credential_flow", "--jwt-issuer", "teamhub-api"])
        .unwrap()
        .set_jwt_signing_key(REFERENCE_SECRET.to_string())
}

#[test]
fn owner_credential_carries_the_expected_payload() {
    let data = catalogue(Utc::now());
    let owner = data.member(OWNER_ID).unwrap();

    let credential = jwt::generate_member_token(&config(), owner).unwrap();

    let segments: Vec<&str> = credential.as_str().split('.').collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");

    let payload: serde_json::Value =
        serde_json::from_slice(&encoding::decode(segments[1]).unwrap()).unwrap();
    let keys: Vec<&str> = payload
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    let mut expected = vec!["sub", "iss", "email", "organizationId", "iat", "exp"];
    expected.sort_unstable();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, expected);

    assert_eq!(payload["sub"], "user_01HQ3XK123");
    assert_eq!(payload["iss"], "teamhub-api");
    assert_eq!(payload["email"], "john@acme.com");
    assert_eq!(payload["organizationId"], "org_01HQ3XJMR5E0987654321");
    assert_eq!(
        payload["exp"].as_i64().unwrap() - payload["iat"].as_i64().unwrap(),
        31_536_000
    );
}

#[test]
fn credential_round_trips_through_the_configured_verifier() {
    let config = config();
    let credential = jwt::generate_token(
        &config,
        OWNER_ID,
        Attributes::from([
            (EMAIL_CLAIM.to_string(), "john@acme.com".to_string()),
            (
                ORGANIZATION_CLAIM.to_string(),
                "org_01HQ3XJMR5E0987654321".to_string(),
            ),
        ]),
    )
    .unwrap();

    let verifier = jwt::token_verifier(&config).unwrap();
    let claims = verifier.verify(credential.as_str()).unwrap();
    assert_eq!(claims.sub, OWNER_ID);

    let a_year_and_a_second_later = Utc
        .timestamp_opt(claims.exp + 1, 0)
        .single()
        .unwrap();
    assert!(matches!(
        verifier.verify_at(credential.as_str(), a_year_and_a_second_later),
        Err(CredentialError::Expired { .. })
    ));
}

#[test]
fn credentials_from_another_deployment_are_rejected() {
    let other = config().set_jwt_signing_key("x".repeat(64));
    let credential = jwt::generate_token(&other, OWNER_ID, Attributes::new()).unwrap();

    let verifier: TokenVerifier = jwt::token_verifier(&config()).unwrap();
    assert!(matches!(
        verifier.verify(credential.as_str()),
        Err(CredentialError::SignatureMismatch)
    ));
}
