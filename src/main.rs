use tracing_subscriber::EnvFilter;

use walkies::server::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Starting server on {}", config.listen_address);

    let router = router::routes().with_state(AppState { db });

    let listener = tokio::net::TcpListener::bind(config.listen_address)
        .await
        .expect("Failed to bind listen address");

    axum::serve(listener, router)
        .await
        .expect("Failed to serve application");
}
