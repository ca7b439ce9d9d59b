use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Instant,
};

use error_stack::ResultExt;
use lazy_static::lazy_static;
use prometheus::{
    self, register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};
use tower::{Layer, Service};

// Define latency buckets for histograms
const LATENCY_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

lazy_static! {
    pub static ref HTTP_SERVER_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "HTTP_SERVER_REQUESTS_TOTAL",
        "Total number of HTTP requests received",
        &["method", "path"]
    )
    .unwrap();
    pub static ref HTTP_SERVER_REQUESTS_SUCCESSFUL: IntCounterVec = register_int_counter_vec!(
        "HTTP_SERVER_REQUESTS_SUCCESSFUL",
        "Total number of HTTP requests answered without a server error",
        &["method", "path"]
    )
    .unwrap();
    pub static ref HTTP_SERVER_REQUEST_LATENCY: HistogramVec = register_histogram_vec!(
        "HTTP_SERVER_REQUEST_LATENCY",
        "Request latency in seconds",
        &["method", "path"],
        LATENCY_BUCKETS.to_vec()
    )
    .unwrap();
    pub static ref EXTERNAL_SERVICE_API_CALLS_LATENCY: HistogramVec = register_histogram_vec!(
        "EXTERNAL_SERVICE_API_CALLS_LATENCY_SECONDS",
        "Latency of external service API calls",
        &["flow", "connector"],
        LATENCY_BUCKETS.to_vec()
    )
    .unwrap();
    pub static ref EXTERNAL_SERVICE_TOTAL_API_CALLS: IntCounterVec = register_int_counter_vec!(
        "EXTERNAL_SERVICE_TOTAL_API_CALLS",
        "Total number of external service API calls",
        &["flow", "connector"]
    )
    .unwrap();
    pub static ref EXTERNAL_SERVICE_API_CALLS_ERRORS: IntCounterVec = register_int_counter_vec!(
        "EXTERNAL_SERVICE_API_CALLS_ERRORS",
        "Total number of errors in external service API calls",
        &["flow", "connector", "error"]
    )
    .unwrap();
    pub static ref CHECKOUT_OUTCOMES: IntCounterVec = register_int_counter_vec!(
        "CHECKOUT_OUTCOMES",
        "Outcome of checkout steps, by step and result",
        &["step", "outcome"]
    )
    .unwrap();
}

// Middleware Layer that records request counts and latency for every route
#[derive(Clone)]
pub struct HttpMetricsLayer;

#[allow(clippy::new_without_default)]
impl HttpMetricsLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for HttpMetricsLayer {
    type Service = HttpMetricsService<S>;

    fn layer(&self, service: S) -> Self::Service {
        HttpMetricsService::new(service)
    }
}

#[derive(Clone)]
pub struct HttpMetricsService<S> {
    inner: S,
}

impl<S> HttpMetricsService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S, ReqBody, ResBody> Service<http::Request<ReqBody>> for HttpMetricsService<S>
where
    S: Service<http::Request<ReqBody>, Response = http::Response<ResBody>>
        + Clone
        + Send
        + 'static,
    S::Future: Send + 'static,
    ReqBody: Send + 'static,
{
    type Response = http::Response<ResBody>;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: http::Request<ReqBody>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let start_time = Instant::now();
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        HTTP_SERVER_REQUESTS_TOTAL
            .with_label_values(&[&method, &path])
            .inc();

        Box::pin(async move {
            let result = inner.call(req).await;

            if let Ok(response) = &result {
                if !response.status().is_server_error() {
                    HTTP_SERVER_REQUESTS_SUCCESSFUL
                        .with_label_values(&[&method, &path])
                        .inc();
                }
            }

            HTTP_SERVER_REQUEST_LATENCY
                .with_label_values(&[&method, &path])
                .observe(start_time.elapsed().as_secs_f64());

            result
        })
    }
}

/// Counts the result of a checkout step, e.g. `("reconcile", "checksum_invalid")`.
pub fn record_checkout_outcome(step: &str, outcome: &str) {
    CHECKOUT_OUTCOMES.with_label_values(&[step, outcome]).inc();
}

// Metrics handler
pub async fn metrics_handler() -> error_stack::Result<String, MetricsError> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode(&metric_families, &mut buffer)
        .change_context(MetricsError::EncodingError)?;
    String::from_utf8(buffer).change_context(MetricsError::Utf8Error)
}

#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    #[error("Error encoding metrics")]
    EncodingError,
    #[error("Error converting metrics to utf8")]
    Utf8Error,
}
