use checkout_server::{self, app, configs, logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[allow(clippy::expect_used)]
    let config = configs::Config::new().expect("Failed while parsing config");

    let _guard = logger::setup(
        &config.log,
        checkout_server::service_name!(),
        [checkout_server::service_name!(), "checkout_server", "tower_http"],
    )?;
    logger::info!(
        version = checkout_server::version!(),
        environment = %config.common.environment,
        "configuration loaded"
    );

    let metrics_server = app::metrics_server_builder(config.clone());
    let server = app::server_builder(config);

    tokio::try_join!(metrics_server, server)?;

    Ok(())
}
