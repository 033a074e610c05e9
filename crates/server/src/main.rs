use log::{error, info};
use okta_server::{
    build_app, config::Config, error::StartupError, utils::shutdown::shutdown_signal,
};

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let app = build_app(&config).await?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Running axum on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("{e}");
        std::process::exit(1);
    }
}
