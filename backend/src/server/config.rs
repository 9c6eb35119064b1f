//! HTTP server configuration object.

use std::net::SocketAddr;

use user_service::inbound::http::state::HttpState;

#[cfg(feature = "metrics")]
use super::metrics::MetricsLayer;

/// Everything [`super::create_server`] needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
    #[cfg(feature = "metrics")]
    pub(crate) metrics: MetricsLayer,
}

impl ServerConfig {
    /// Serve `http_state` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state,
            #[cfg(feature = "metrics")]
            metrics: MetricsLayer::disabled(),
        }
    }

    #[cfg(feature = "metrics")]
    /// Record request metrics through `metrics`.
    #[must_use]
    pub(crate) fn with_metrics(mut self, metrics: MetricsLayer) -> Self {
        self.metrics = metrics;
        self
    }
}
