//! Geocoder Port
//!
//! Defines the interface every geocoding provider exposes to callers.

use crate::domain::entities::AddressCollection;
use crate::domain::errors::GeocodeError;
use crate::domain::value_objects::{GeocodeQuery, ReverseQuery};
use async_trait::async_trait;

/// A geocoding provider.
///
/// Implementations resolve free text to addresses (forward) and coordinates
/// to addresses (reverse). An empty answer is reported as
/// [`GeocodeError::ZeroResults`], never as an empty collection.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Stable identifier of the provider, e.g. `"arcgis_online"`.
    fn name(&self) -> &'static str;

    /// Forward geocode: resolve an address to candidate locations.
    async fn geocode(&self, query: &GeocodeQuery) -> Result<AddressCollection, GeocodeError>;

    /// Reverse geocode: resolve coordinates to addresses.
    async fn reverse(&self, query: &ReverseQuery) -> Result<AddressCollection, GeocodeError>;
}
