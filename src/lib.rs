//! arcgis-geocoder Library
//!
//! Forward and reverse geocoding against the ArcGIS Online World Geocoding
//! Service, mapped into a provider-neutral address model.
//!
//! ```no_run
//! use std::sync::Arc;
//! use arcgis_geocoder::{ArcGisOnline, Geocoder, GeocodeQuery, ReqwestTransport, TransportConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let transport = Arc::new(ReqwestTransport::new(&TransportConfig::default())?);
//! let provider = ArcGisOnline::with_defaults(transport)?;
//! let results = provider.geocode(&GeocodeQuery::new("10 avenue Gambetta, Paris")).await?;
//! println!("{} results", results.len());
//! # Ok(())
//! # }
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapters;
pub mod config;
pub mod domain;

// Re-export commonly used types
pub use adapters::outbound::{ArcGisOnline, ArcGisOnlineConfig, ReqwestTransport, TransportConfig};
pub use config::load_config;
pub use domain::entities::{AddressCollection, AddressRecord, AdminLevel, AdminLevelCollection, Bounds, Country};
pub use domain::errors::GeocodeError;
pub use domain::ports::{Geocoder, HttpTransport, TransportError};
pub use domain::value_objects::{Coordinates, GeocodeQuery, ReverseQuery};
