use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_core::constants::DEFAULT_LISTEN_ADDR;
use folio_core::{ConfigOverrides, CoreConfig, PortfolioData};

/// Main entry point for the Folio page server
///
/// Builds the page snapshot once, then serves it over HTTP. Any problem with the project data
/// file or the headshot stops startup with a diagnostic; no partial page is ever served.
///
/// # Environment Variables
/// - `FOLIO_ADDR`: listen address (default: "0.0.0.0:8501")
/// - `FOLIO_ROOT`: base directory for the data file and assets (default: current directory)
/// - `FOLIO_PROJECTS_PATH`, `FOLIO_HEADSHOT_PATH`, `FOLIO_RESUME_PATH`: file overrides
/// - `FOLIO_GRID_COLUMNS`: cards per grid row (default: 3)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - configuration, project data or the headshot are invalid,
/// - the server address cannot be bound, or the server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("FOLIO_ADDR").unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.into());

    let cfg = CoreConfig::resolve(ConfigOverrides::from_env())
        .context("failed to resolve configuration")?;
    let data = PortfolioData::load(&cfg).with_context(|| {
        format!(
            "cannot build the portfolio page (data file: {}, headshot: {})",
            cfg.projects_path().display(),
            cfg.headshot_path().display()
        )
    })?;

    tracing::info!(
        "++ Loaded {} project(s) in a {}-column grid",
        data.projects().len(),
        data.columns()
    );
    tracing::info!("++ Starting Folio on {}", addr);

    api_rest::serve(&addr, Arc::new(data)).await
}
