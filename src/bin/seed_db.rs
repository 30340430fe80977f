use log::{error, info};
use service::{config::Config, logging::Logger};

#[tokio::main]
async fn main() {
    let config = Config::new();
    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match config.store_dir() {
        Some(dir) => info!(
            "Seeding document store [{}] with the {} data set...",
            dir.display(),
            config.dataset
        ),
        None => info!(
            "Seeding in-memory document store with the {} data set...",
            config.dataset
        ),
    }

    match domain::seed::seed(&config).await {
        Ok(summary) => {
            info!("Seeding complete");
            println!("{summary}");
        }
        Err(e) => {
            error!("Failed to seed document store: {e}");
            std::process::exit(1);
        }
    }
}
