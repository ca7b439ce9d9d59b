use std::{future::Future, sync::Arc};

use axum::{http, routing};
use common_utils::consts;
use connector_integration::connectors::Novalnet;
use domain_types::payment_form::IntentSettings;
use external_services::shared_metrics as metrics;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::oneshot,
};
use tower_http::{request_id::MakeRequestUuid, trace as tower_trace};

use crate::{
    configs,
    error::ConfigurationError,
    flows::{process::ProcessSettings, wallet::WalletSettings, CheckoutServices},
    host, logger, server, utils,
};

/// Shared state of the checkout routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<configs::Config>,
    pub services: CheckoutServices,
}

impl AppState {
    /// Novalnet gateway backed by the in-memory storefront.
    pub fn new(config: configs::Config) -> Self {
        let gateway = Novalnet::new(
            config.novalnet.auth.clone(),
            config.connectors.clone(),
            config.proxy.clone(),
        )
        .with_payment_action(config.novalnet.payment_action)
        .with_enforce_3d(config.novalnet.enforce_3d);

        let services = CheckoutServices {
            gateway: Arc::new(gateway),
            sessions: Arc::new(host::InMemorySessionStore::default()),
            baskets: Arc::new(host::InMemoryBasketRepository::with_fallback(
                config.storefront.default_basket.clone(),
            )),
            orders: Arc::new(host::InMemoryOrderBook::default()),
            notifications: Arc::new(host::InMemoryNotifications::default()),
        };
        Self::with_services(config, services)
    }

    pub fn with_services(config: configs::Config, services: CheckoutServices) -> Self {
        Self {
            config: Arc::new(config),
            services,
        }
    }

    pub fn process_settings(&self, lang: &str) -> ProcessSettings {
        let novalnet = &self.config.novalnet;
        ProcessSettings {
            intent: IntentSettings {
                amount_policy: novalnet.amount_policy,
                return_url: novalnet.return_url.clone(),
                lang: lang.to_string(),
                test_mode: novalnet.test_mode,
            },
            order_creation_before_payment: novalnet.order_creation_before_payment,
        }
    }

    pub fn wallet_settings(&self) -> WalletSettings {
        WalletSettings {
            client_key: self.config.novalnet.client_key.clone(),
            google_pay: self.config.novalnet.google_pay.clone(),
            webstore_name: self.config.storefront.webstore_name.clone(),
            process_payment_url: self.config.storefront.process_payment_url.clone(),
        }
    }
}

/// # Panics
///
/// Will panic if signal handling fails
pub async fn server_builder(config: configs::Config) -> Result<(), ConfigurationError> {
    let server_config = config.server.clone();
    let listener = server_config.tcp_listener().await?;

    // Signal handler
    let (tx, rx) = oneshot::channel();

    #[allow(clippy::expect_used)]
    tokio::spawn(async move {
        let mut sig_int =
            signal(SignalKind::interrupt()).expect("Failed to initialize SIGINT signal handler");
        let mut sig_term =
            signal(SignalKind::terminate()).expect("Failed to initialize SIGTERM signal handler");
        let mut sig_quit =
            signal(SignalKind::quit()).expect("Failed to initialize QUIT signal handler");
        let mut sig_hup =
            signal(SignalKind::hangup()).expect("Failed to initialize SIGHUP signal handler");

        tokio::select! {
            _ = sig_int.recv() => {
                logger::info!("Received SIGINT");
            }
            _ = sig_term.recv() => {
                logger::info!("Received SIGTERM");
            }
            _ = sig_quit.recv() => {
                logger::info!("Received QUIT");
            }
            _ = sig_hup.recv() => {
                logger::info!("Received SIGHUP");
            }
        }
        tx.send(()).expect("Failed to send shutdown signal");
    });

    #[allow(clippy::expect_used)]
    let shutdown_signal = async {
        rx.await.expect("Failed to receive shutdown signal");
        logger::info!("Shutdown signal received");
    };

    logger::info!(host = %server_config.host, port = %server_config.port, "starting checkout service");

    http_server(AppState::new(config), listener, shutdown_signal).await
}

pub fn router(state: AppState) -> axum::Router {
    let logging_layer = tower_trace::TraceLayer::new_for_http()
        .make_span_with(|request: &axum::extract::Request<_>| {
            utils::record_fields_from_header(request)
        })
        .on_request(tower_trace::DefaultOnRequest::new().level(tracing::Level::INFO))
        .on_response(
            tower_trace::DefaultOnResponse::new()
                .level(tracing::Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Micros),
        )
        .on_failure(
            tower_trace::DefaultOnFailure::new()
                .latency_unit(tower_http::LatencyUnit::Micros)
                .level(tracing::Level::ERROR),
        );

    let request_id_layer = tower_http::request_id::SetRequestIdLayer::new(
        http::HeaderName::from_static(consts::X_REQUEST_ID),
        MakeRequestUuid,
    );

    let propagate_request_id_layer = tower_http::request_id::PropagateRequestIdLayer::new(
        http::HeaderName::from_static(consts::X_REQUEST_ID),
    );

    let payments = axum::Router::new()
        .route(
            "/paymentResponse",
            routing::get(server::payments::payment_response_query)
                .post(server::payments::payment_response_form),
        )
        .route(
            "/processPayment",
            routing::post(server::payments::process_payment),
        )
        .route(
            "/directPaymentProcess",
            routing::get(server::payments::direct_payment_process),
        )
        .route(
            "/googlePayButton",
            routing::get(server::wallet::google_pay_button),
        )
        .route(
            "/notifications",
            routing::get(server::notifications::take_notifications),
        );

    axum::Router::new()
        .route("/health", routing::get(server::health_check::check))
        .nest("/payment/novalnet", payments)
        .with_state(state)
        .layer(metrics::HttpMetricsLayer::new())
        .layer(logging_layer)
        .layer(propagate_request_id_layer)
        .layer(request_id_layer)
}

pub async fn http_server(
    state: AppState,
    listener: tokio::net::TcpListener,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ConfigurationError> {
    axum::serve(listener, router(state).into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

pub async fn metrics_server_builder(config: configs::Config) -> Result<(), ConfigurationError> {
    let listener = config.metrics.tcp_listener().await?;

    let router = axum::Router::new().route(
        "/metrics",
        routing::get(|| async {
            let output = metrics::metrics_handler().await;
            match output {
                Ok(metrics) => Ok(metrics),
                Err(error) => {
                    tracing::error!(?error, "Error fetching metrics");

                    Err((
                        http::StatusCode::INTERNAL_SERVER_ERROR,
                        "Error fetching metrics".to_string(),
                    ))
                }
            }
        }),
    );

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async {
            let output = tokio::signal::ctrl_c().await;
            tracing::error!(?output, "shutting down");
        })
        .await?;

    Ok(())
}
