use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use poiview_core::{Config, LocationConfig};
use poiview_services::{CatalogSource, FavoritesStore, JsonFileStore, PlaceCatalogLoader, PlaceId};
use poiview_ui::{
    present, ActionOutcome, AppController, CardAction, CardRenderer, IntoAppError, MemorySurface,
};
use poiview_weather::{Coordinate, FixedLocation, Geolocation, WeatherProvider};

#[derive(Debug, Parser)]
#[command(name = "poiview", version, about = "Points of interest around you")]
struct Cli {
    /// Config file (defaults to <config dir>/poiview/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file path or http(s) URL
    #[arg(long)]
    catalog: Option<String>,

    /// Your latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Your longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Behave as if the host cannot locate you
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    no_location: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a place to favorites by id
    Favorite { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    poiview_core::init()?;

    let cli = Cli::parse();
    let (config, _) = Config::load_validated(cli.config.as_deref())?;

    let store = JsonFileStore::new(config.favorites_path());
    tracing::debug!("Favorites stored at {}", store.path().display());
    let favorites = Arc::new(FavoritesStore::new(Arc::new(store)));
    let renderer = CardRenderer::new(favorites);

    match cli.command {
        Some(Command::Favorite { ref id }) => add_favorite(&renderer, id),
        None => show(&cli, &config, renderer).await,
    }
}

fn add_favorite(renderer: &CardRenderer, raw_id: &str) -> Result<()> {
    let id = PlaceId::parse(raw_id);
    match renderer.invoke(&CardAction::Favorite(id.clone())) {
        Ok(ActionOutcome::AlreadyFavorite) => println!("{} is already a favorite", id),
        Ok(_) => println!("Added {} to favorites", id),
        Err(e) => {
            let app_err = e.into_app_error();
            eprintln!("{}", app_err.user_message());
            return Err(app_err).context("Failed to save favorite");
        }
    }
    Ok(())
}

async fn show(cli: &Cli, config: &Config, renderer: CardRenderer) -> Result<()> {
    let catalog = PlaceCatalogLoader::new(CatalogSource::parse(
        cli.catalog.as_deref().unwrap_or(&config.catalog.source),
    ));
    tracing::debug!("Catalog source: {}", catalog.source());

    let position = resolve_position(cli.no_location, cli.lat.zip(cli.lon), config.location);
    let geolocation =
        position.map(|p| Arc::new(FixedLocation::new(p)) as Arc<dyn Geolocation>);

    let weather = WeatherProvider::new(
        config.weather.base_url.clone(),
        config.weather.timeout_secs.map(Duration::from_secs),
    )
    .context("Failed to create weather client")?;
    tracing::debug!("Weather service: {}", weather.base_url());

    let surface = MemorySurface::new();
    let mut controller = AppController::new(
        catalog,
        weather,
        geolocation,
        renderer,
        surface.mounts(),
    );
    controller.run().await;

    print!("{}", present::render_surface(&surface));
    Ok(())
}

/// Where the user is, if anywhere: `--no-location` wins, then `--lat/--lon`,
/// then the configured position.
fn resolve_position(
    no_location: bool,
    flags: Option<(f64, f64)>,
    configured: Option<LocationConfig>,
) -> Option<Coordinate> {
    if no_location {
        return None;
    }
    match flags {
        Some((lat, lon)) => Some(Coordinate::new(lat, lon)),
        None => configured.map(|loc| Coordinate::new(loc.latitude, loc.longitude)),
    }
}
