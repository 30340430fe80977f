//! Runtime plumbing shared by the TeamHub binaries: configuration parsed from flags,
//! environment and `.env`, plus logger bootstrap.

pub mod config;
pub mod logging;
