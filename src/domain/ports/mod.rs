mod geocoder;
mod http_transport;

pub use geocoder::Geocoder;
pub use http_transport::{HttpTransport, TransportError};
