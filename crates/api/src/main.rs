use stockdash_api::config::ApiConfig;

#[tokio::main]
async fn main() {
    stockdash_observability::init();

    let config = ApiConfig::from_env();

    let app = match stockdash_api::app::build_app(&config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to build application");
            std::process::exit(1);
        }
    };

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {e}", config.addr));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
