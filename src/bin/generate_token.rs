use std::fmt;
use std::process;

use chrono::Utc;
use clap::Parser;
use log::*;

use domain::jwt::{self, Attributes, Credential, EMAIL_CLAIM, ORGANIZATION_CLAIM};
use domain::roles::Role;
use domain::seed::{self, OWNER_ID};
use service::{config::Config, logging::Logger};

/// Issue a signed TeamHub credential for local testing.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Subject (`sub`) of the credential. Fixture members get their email and
    /// organization filled in automatically.
    #[arg(long, default_value = OWNER_ID)]
    subject: String,

    /// Overrides the `email` attribute.
    #[arg(long)]
    email: Option<String>,

    /// Overrides the `organizationId` attribute.
    #[arg(long)]
    organization_id: Option<String>,

    /// Extra attribute to carry, may be repeated.
    #[arg(long = "attr", value_name = "NAME=VALUE", value_parser = parse_attribute)]
    attributes: Vec<(String, String)>,

    #[command(flatten)]
    config: Config,
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}

/// Who a credential was issued for, as printed to stdout.
struct Report {
    subject: String,
    name: Option<String>,
    role: Option<Role>,
    email: Option<String>,
    organization: Option<String>,
    credential: Credential,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "\n=== TeamHub JWT Token ===\n")?;
        match (&self.name, &self.role) {
            (Some(name), Some(role)) => writeln!(f, "User: {name} ({role})")?,
            _ => writeln!(f, "User: {}", self.subject)?,
        }
        if let Some(email) = &self.email {
            writeln!(f, "Email: {email}")?;
        }
        if let Some(organization) = &self.organization {
            writeln!(f, "Organization: {organization}")?;
        }
        writeln!(f, "\nToken:\n{}\n", self.credential)?;
        writeln!(f, "Add to Authorization header as:")?;
        writeln!(f, "Authorization: Bearer {}", self.credential)
    }
}

fn issue(args: Args) -> Result<Report, domain::error::Error> {
    let catalogue = seed::catalogue(Utc::now());
    let member = catalogue.member(&args.subject);

    let mut attributes = member.map(jwt::member_attributes).unwrap_or_default();
    if let Some(email) = args.email {
        attributes.insert(EMAIL_CLAIM.to_string(), email);
    }
    if let Some(organization_id) = args.organization_id {
        attributes.insert(ORGANIZATION_CLAIM.to_string(), organization_id);
    }
    attributes.extend(args.attributes);

    let credential = jwt::generate_token(&args.config, &args.subject, attributes.clone())?;

    let organization = attributes.get(ORGANIZATION_CLAIM).map(|id| {
        catalogue
            .organization(id)
            .map(|organization| organization.name.clone())
            .unwrap_or_else(|| id.clone())
    });

    Ok(Report {
        name: member.map(|member| member.name.clone()),
        role: member.map(|member| member.role),
        email: attributes.get(EMAIL_CLAIM).cloned(),
        organization,
        subject: args.subject,
        credential,
    })
}

fn main() {
    // Load .env before parsing so the signing key can come from there.
    dotenvy::dotenv().ok();
    let args = Args::parse();

    if let Err(e) = Logger::init_logger(&args.config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match issue(args) {
        Ok(report) => println!("{report}"),
        Err(e) => {
            error!("Failed to generate credential: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_SECRET: &str =
        "teamhub-dev-jwt-secret-key-change-in-production-min-256-bits-long";

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec![
            "generate_token",
            "--jwt-signing-key",
            REFERENCE_SECRET,
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn attributes_must_be_name_value_pairs() {
        assert_eq!(
            parse_attribute("team=design"),
            Ok(("team".to_string(), "design".to_string()))
        );
        assert_eq!(
            parse_attribute("note=a=b"),
            Ok(("note".to_string(), "a=b".to_string()))
        );
        assert!(parse_attribute("=value").is_err());
        assert!(parse_attribute("novalue").is_err());
    }

    #[test]
    fn default_subject_is_the_fixture_owner() {
        let report = issue(args(&[])).unwrap();
        let claims = report.credential.decode_claims().unwrap();

        assert_eq!(claims.sub, OWNER_ID);
        assert_eq!(claims.attribute(EMAIL_CLAIM), Some("john@acme.com"));
        assert_eq!(
            claims.attribute(ORGANIZATION_CLAIM),
            Some("org_01HQ3XJMR5E0987654321")
        );

        let printed = report.to_string();
        assert!(printed.contains("User: John Doe (OWNER)"));
        assert!(printed.contains("Organization: Acme Corporation"));
        assert!(printed.contains(&format!("Authorization: Bearer {}", report.credential)));
    }

    #[test]
    fn flags_override_fixture_attributes() {
        let report = issue(args(&[
            "--email",
            "ops@acme.com",
            "--attr",
            "team=platform",
        ]))
        .unwrap();
        let claims = report.credential.decode_claims().unwrap();

        assert_eq!(claims.attribute(EMAIL_CLAIM), Some("ops@acme.com"));
        assert_eq!(claims.attribute("team"), Some("platform"));
    }

    #[test]
    fn unknown_subjects_carry_only_the_given_attributes() {
        let report = issue(args(&["--subject", "svc_reporting"])).unwrap();
        let claims = report.credential.decode_claims().unwrap();

        assert_eq!(claims.sub, "svc_reporting");
        assert!(claims.attributes.is_empty());
        assert!(report.to_string().contains("User: svc_reporting"));
    }

    #[test]
    fn reserved_attribute_names_fail_issuing() {
        assert!(issue(args(&["--attr", "exp=0"])).is_err());
    }
}
