mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    if let Err(err) = run().await {
        tracing::error!("Server failed: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::app(AppState::new(db.clone()));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Listening on {}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    db.close().await?;

    tracing::info!("Server stopped");
    Ok(())
}
