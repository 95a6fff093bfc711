//! arcgis-geocoder - command-line front end
//!
//! This is the composition root that wires the transport into the provider.

use arcgis_geocoder::{
    load_config, AddressCollection, ArcGisOnline, GeocodeQuery, Geocoder, ReqwestTransport,
    ReverseQuery,
};
use clap::{Parser, Subcommand};
use std::sync::Arc;

/// Command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "arcgis-geocoder",
    version,
    about = "Forward and reverse geocoding against ArcGIS Online."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a free-text address to candidate locations
    Geocode {
        /// Address words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,
    },
    /// Resolve a latitude/longitude pair to an address
    Reverse {
        /// Latitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Longitude in decimal degrees
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration from environment
    let cfg = load_config()?;

    // Setup logging
    let log_level = if cfg.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    // ===== COMPOSITION ROOT =====
    let transport = Arc::new(ReqwestTransport::new(&cfg.transport_config())?);
    let provider = ArcGisOnline::new(transport, cfg.provider_config())?;

    tracing::debug!(
        "using {} host={} ssl={}",
        provider.name(),
        provider.config().host,
        provider.config().use_ssl
    );

    let results: AddressCollection = match cli.command {
        Command::Geocode { address } => {
            let query = GeocodeQuery::new(address.join(" ")).with_limit(cfg.max_locations);
            provider.geocode(&query).await?
        }
        Command::Reverse { lat, lon } => {
            let query = ReverseQuery::from_coordinates(lat, lon)?;
            provider.reverse(&query).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
