//! Loads the reference fixture data into the configured document store.

use chrono::Utc;
use service::config::Config;

use crate::error::Error;

pub use entity_api::seed::{
    catalogue, comprehensive_catalogue, dataset_catalogue, Catalogue, SeedSummary, OWNER_ID,
};

/// Seeds the store selected by `config` with the configured data set, stamped at the
/// current time.
pub async fn seed(config: &Config) -> Result<SeedSummary, Error> {
    let store = entity_api::connect(config).await?;
    let catalogue = dataset_catalogue(config.dataset, Utc::now());
    let summary = entity_api::seed::seed_database(store.as_ref(), &catalogue).await?;
    Ok(summary)
}
