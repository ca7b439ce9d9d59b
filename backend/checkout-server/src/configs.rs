use std::path::PathBuf;

use common_enums::{AmountPolicy, PaymentAction};
use common_utils::consts;
use connector_integration::NovalnetAuthType;
use domain_types::{
    basket::BasketSnapshot,
    types::{Connectors, Proxy},
    wallet::GooglePaySettings,
};
use hyperswitch_masking::Secret;

use crate::{error::ConfigurationError, logger::config::Log};

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Config {
    pub common: Common,
    pub server: Server,
    pub metrics: MetricsServer,
    pub log: Log,
    #[serde(default)]
    pub proxy: Proxy,
    pub connectors: Connectors,
    pub novalnet: NovalnetSettings,
    pub storefront: Storefront,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Common {
    pub environment: String,
}

impl Common {
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        match self.environment.as_str() {
            "development" | "production" => Ok(()),
            _ => Err(config::ConfigError::Message(format!(
                "Invalid environment '{}'. Must be 'development' or 'production'",
                self.environment
            ))),
        }
    }
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct MetricsServer {
    pub host: String,
    pub port: u16,
}

/// Merchant account and payment behaviour at Novalnet.
#[derive(Clone, serde::Deserialize, Debug)]
pub struct NovalnetSettings {
    pub auth: NovalnetAuthType,
    /// Public key used by the client-side wallet SDK
    pub client_key: Secret<String>,
    #[serde(default)]
    pub test_mode: bool,
    #[serde(default)]
    pub payment_action: PaymentAction,
    #[serde(default)]
    pub enforce_3d: bool,
    /// Let the storefront create the order before the gateway call
    #[serde(default)]
    pub order_creation_before_payment: bool,
    #[serde(default)]
    pub amount_policy: AmountPolicy,
    /// Where the gateway sends the shopper back to
    pub return_url: String,
    #[serde(default)]
    pub google_pay: GooglePaySettings,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Storefront {
    pub default_language: String,
    pub webstore_name: String,
    #[serde(default = "default_checkout_path")]
    pub checkout_path: String,
    pub process_payment_url: String,
    /// Basket served to sessions the in-memory storefront does not know
    #[serde(default)]
    pub default_basket: Option<BasketSnapshot>,
}

fn default_checkout_path() -> String {
    "/checkout".to_string()
}

impl Config {
    /// Function to build the configuration by picking it from default locations
    pub fn new() -> Result<Self, config::ConfigError> {
        Self::new_with_config_path(None)
    }

    /// Function to build the configuration by picking it from default locations
    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> Result<Self, config::ConfigError> {
        let env = consts::Env::current_env();
        let config_path = Self::config_path(&env, explicit_config_path);

        let config = Self::builder(&env)?
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("NNC")
                    .try_parsing(true)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("proxy.bypass_proxy_urls"),
            )
            .build()?;

        #[allow(clippy::print_stderr)]
        let config: Self = serde_path_to_error::deserialize(config).map_err(|error| {
            eprintln!("Unable to deserialize application configuration: {error}");
            error.into_inner()
        })?;

        // Validate the environment field
        config.common.validate()?;

        Ok(config)
    }

    pub fn builder(
        environment: &consts::Env,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            // "env" can't be altered by config field.
            .set_override("env", environment.to_string())
    }

    /// Config path.
    pub fn config_path(
        environment: &consts::Env,
        explicit_config_path: Option<PathBuf>,
    ) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            let config_directory: String = "config".into();
            let config_file_name = environment.config_path();

            config_path.push(workspace_path());
            config_path.push(config_directory);
            config_path.push(config_file_name);
        }
        config_path
    }
}

impl Server {
    pub async fn tcp_listener(&self) -> Result<tokio::net::TcpListener, ConfigurationError> {
        let loc = format!("{}:{}", self.host, self.port);

        tracing::info!(loc = %loc, "binding the server");

        Ok(tokio::net::TcpListener::bind(loc).await?)
    }
}

impl MetricsServer {
    pub async fn tcp_listener(&self) -> Result<tokio::net::TcpListener, ConfigurationError> {
        let loc = format!("{}:{}", self.host, self.port);

        tracing::info!(loc = %loc, "binding the metrics server");

        Ok(tokio::net::TcpListener::bind(loc).await?)
    }
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}
