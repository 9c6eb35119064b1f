//! Prometheus request metrics, switched on when the registry builds.
//!
//! `App::wrap` fixes the middleware type at compile time, so the recording
//! and pass-through paths both yield the same boxed service.

use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::{self, LocalBoxFuture};
use tracing::{info, warn};

/// Prefix of every exported series, e.g. `user_service_http_requests_total`.
pub(crate) const METRICS_NAMESPACE: &str = "user_service";
/// Path the scrape endpoint answers on.
pub(crate) const METRICS_ENDPOINT: &str = "/metrics";

/// Outermost middleware recording request counts and latencies.
#[derive(Clone, Default)]
pub(crate) struct MetricsLayer {
    prometheus: Option<Arc<PrometheusMetrics>>,
}

impl MetricsLayer {
    /// Build a fresh registry and record into it.
    ///
    /// A registry that fails to build leaves the layer disabled; the service
    /// keeps running without metrics.
    pub(crate) fn install() -> Self {
        match PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
            .endpoint(METRICS_ENDPOINT)
            .build()
        {
            Ok(prometheus) => {
                info!(endpoint = METRICS_ENDPOINT, "Prometheus metrics enabled");
                Self::from(prometheus)
            }
            Err(e) => {
                warn!(error = %e, "Prometheus metrics unavailable; continuing without");
                Self::disabled()
            }
        }
    }

    /// Layer that forwards every request untouched.
    pub(crate) fn disabled() -> Self {
        Self::default()
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.prometheus.is_some()
    }
}

impl From<PrometheusMetrics> for MetricsLayer {
    fn from(prometheus: PrometheusMetrics) -> Self {
        Self {
            prometheus: Some(Arc::new(prometheus)),
        }
    }
}

type Boxed = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = Boxed;
    type Future = LocalBoxFuture<'static, Result<Boxed, ()>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(prometheus) = self.prometheus.as_deref() else {
            let forward = service.map(ServiceResponse::map_into_boxed_body);
            return Box::pin(future::ready(Ok(boxed::service(forward))));
        };
        let recording = Compat::new(prometheus.clone()).new_transform(service);
        Box::pin(async move { recording.await.map(boxed::service) })
    }
}
