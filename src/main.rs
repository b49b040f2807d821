use anyhow::Context;
use async_trait::async_trait;
use chrono::NaiveDate;
use clap::Parser;
use std::sync::Arc;
use sublet_search::auth::AuthProvider;
use sublet_search::models::{UserIdentity, AVAILABLE_AMENITIES};
use sublet_search::navigation::HistoryNavigator;
use sublet_search::{Dashboard, Settings};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sublet-search")]
#[command(version)]
#[command(about = "Build a sublet listings search from the dashboard form", long_about = None)]
struct Cli {
    /// Free-text search
    query: Option<String>,

    /// City, autocompleted when a Places API key is configured
    #[arg(long)]
    city: Option<String>,

    /// Two-letter state code
    #[arg(long)]
    state: Option<String>,

    /// Minimum monthly price
    #[arg(long)]
    min: Option<String>,

    /// Maximum monthly price
    #[arg(long)]
    max: Option<String>,

    /// Move-in date (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Move-out date (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Amenity to require, repeatable
    #[arg(short, long = "amenity")]
    amenities: Vec<String>,

    /// Signed-in user id, used to look up the profile picture
    #[arg(long)]
    user: Option<String>,
}

/// Command-line runs have no session to end
struct CliSession;

#[async_trait]
impl AuthProvider for CliSession {
    async fn sign_out(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env().context("Failed to load settings")?;

    info!("🏠 Sublet Search");
    info!("================");

    let mut dashboard =
        Dashboard::from_settings(&settings, HistoryNavigator::new(), Arc::new(CliSession))?;
    dashboard.mount().await;

    if let Some(id) = cli.user {
        dashboard.set_user(Some(UserIdentity::new(id))).await;
    }

    if let Some(query) = cli.query {
        dashboard.form_mut().set_query(query);
    }
    if let Some(state) = cli.state {
        dashboard.form_mut().set_state(state);
    }
    if let Some(city) = cli.city {
        dashboard.form_mut().set_city(city.clone());

        // Take the first suggestion, like picking the top entry in the dropdown
        let suggestions = dashboard.city_suggestions(&city).await;
        if let Some(first) = suggestions.first() {
            info!("Using suggestion: {}", first.description);
            dashboard.select_city(first).await;
        }
    }
    if let Some(min) = cli.min {
        dashboard.form_mut().set_price_min(min);
    }
    if let Some(max) = cli.max {
        dashboard.form_mut().set_price_max(max);
    }
    dashboard.form_mut().set_start_date(cli.from);
    dashboard.form_mut().set_end_date(cli.to);

    for amenity in &cli.amenities {
        if !AVAILABLE_AMENITIES.contains(&amenity.as_str()) {
            warn!("{} is not one of the listed amenities", amenity);
        }
        dashboard.form_mut().toggle_amenity(amenity);
    }

    let target = dashboard.submit();

    println!("{}", target);
    if let Some(picture) = dashboard.profile_picture() {
        println!("   Profile picture: {}", picture);
    }

    Ok(())
}
