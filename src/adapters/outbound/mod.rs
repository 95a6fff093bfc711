mod arcgis_online;
mod reqwest_transport;

pub use arcgis_online::{ArcGisOnline, ArcGisOnlineConfig, DEFAULT_HOST, PROVIDER_NAME};
pub use reqwest_transport::{ReqwestTransport, TransportConfig};
