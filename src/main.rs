use starlog::{config::Config, model::app::AppState, router, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let oauth = startup::build_oauth_client(&config).unwrap();
    let http = startup::build_http_client().unwrap();
    let session = startup::connect_to_session(&config).await.unwrap();
    let db = startup::connect_to_database(&config).await.unwrap();

    startup::seed_star_templates(&db, &config).await.unwrap();

    tracing::info!("Starting server on {}", config.listen_addr);

    let state = AppState {
        db,
        oauth,
        http,
        userinfo_url: config.oauth_userinfo_url.clone(),
    };

    let app = router::routes().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .expect("Failed to bind listen address");

    axum::serve(listener, app)
        .await
        .expect("Server exited with an error");
}
