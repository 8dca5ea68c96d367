use chrono::Local;
use dotenvy::dotenv;
use paintpro_dashboard::{
    config,
    core::{handle::StoreHandle, report, store::DashboardStore},
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::app::load_app_configuration()
        .inspect_err(|e| error!("Failed to load application configuration: {}", e))?;

    // 4. Seed the store
    let seed = app_config
        .load_seed()
        .inspect_err(|e| error!("Failed to load seed data: {}", e))?;
    let store = DashboardStore::from_seed(seed, app_config.mode)
        .inspect(|_| info!("Store initialized successfully."))
        .inspect_err(|e| error!("Failed to seed store: {}", e))?;
    let handle = StoreHandle::new(store);

    // 5. Print the dashboard overview
    let today = Local::now().date_naive();
    let recent = app_config.recent_transactions;
    let page_size = app_config.page_size;
    let lines = handle
        .read(|store| report::summary_lines(store, today, recent, page_size))
        .await;
    for line in lines {
        info!("{line}");
    }

    Ok(())
}
