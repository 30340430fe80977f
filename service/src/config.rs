use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use secrecy::SecretString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Issuer claim stamped into every credential unless overridden.
pub const DEFAULT_JWT_ISSUER: &str = "teamhub-api";

/// 365 days, in seconds.
pub const DEFAULT_JWT_VALIDITY_SECS: u64 = 31_536_000;

/// Keys shorter than this many bits are rejected as weak.
pub const DEFAULT_JWT_MIN_KEY_BITS: usize = 256;

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

/// Which fixture data set `seed_db` loads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeedDataset {
    /// One organization with five members, four projects and twelve tasks.
    #[default]
    Reference,
    /// Ten members, ten projects and fifty tasks spread over recent months.
    Comprehensive,
}

impl FromStr for SeedDataset {
    type Err = String;
    fn from_str(name: &str) -> Result<SeedDataset, Self::Err> {
        match name.to_lowercase().as_str() {
            "reference" => Ok(SeedDataset::Reference),
            "comprehensive" => Ok(SeedDataset::Comprehensive),
            _ => Err(format!("unknown seed dataset `{name}`")),
        }
    }
}

impl fmt::Display for SeedDataset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SeedDataset::Reference => write!(f, "reference"),
            SeedDataset::Comprehensive => write!(f, "comprehensive"),
        }
    }
}

#[derive(Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The shared secret used to sign credentials (HMAC-SHA-256). Supply it through the
    /// environment or a secret store; it is never compiled into the binaries.
    #[arg(long, env, hide_env_values = true)]
    jwt_signing_key: Option<String>,

    /// The issuer (`iss`) claim written into every credential.
    #[arg(long, env, default_value = DEFAULT_JWT_ISSUER)]
    pub jwt_issuer: String,

    /// How long a credential stays valid, in seconds (default: 365 days).
    #[arg(long, env, default_value_t = DEFAULT_JWT_VALIDITY_SECS)]
    pub jwt_validity_secs: u64,

    /// Minimum signing key size in bits. Shorter keys are refused.
    #[arg(long, env, default_value_t = DEFAULT_JWT_MIN_KEY_BITS)]
    pub jwt_min_key_bits: usize,

    /// Directory holding one JSON file per seeded collection. When unset the seeder
    /// works against an in-memory store and only reports counts.
    #[arg(long, env)]
    store_dir: Option<PathBuf>,

    /// Fixture data set loaded by the seeder.
    #[arg(long, env, default_value_t = SeedDataset::Reference, value_parser = SeedDataset::from_str)]
    pub dataset: SeedDataset,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Config")
            .field(
                "jwt_signing_key",
                &self.jwt_signing_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("jwt_issuer", &self.jwt_issuer)
            .field("jwt_validity_secs", &self.jwt_validity_secs)
            .field("jwt_min_key_bits", &self.jwt_min_key_bits)
            .field("store_dir", &self.store_dir)
            .field("dataset", &self.dataset)
            .field("log_level_filter", &self.log_level_filter)
            .field("runtime_env", &self.runtime_env)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Builds a configuration from an explicit argument list, skipping `.env` loading.
    /// The first item is the program name, as with `std::env::args`.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Config::try_parse_from(args)
    }

    pub fn set_jwt_signing_key(mut self, key: String) -> Self {
        self.jwt_signing_key = Some(key);
        self
    }

    pub fn clear_jwt_signing_key(mut self) -> Self {
        self.jwt_signing_key = None;
        self
    }

    /// Returns the credential signing secret, if one was provided.
    pub fn jwt_signing_key(&self) -> Option<SecretString> {
        self.jwt_signing_key.clone().map(SecretString::new)
    }

    pub fn set_store_dir(mut self, store_dir: PathBuf) -> Self {
        self.store_dir = Some(store_dir);
        self
    }

    pub fn store_dir(&self) -> Option<&Path> {
        self.store_dir.as_deref()
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}
