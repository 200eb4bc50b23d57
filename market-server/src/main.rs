use market_server::{print_banner, Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let log_dir = config.log_dir();
    let _ = std::fs::create_dir_all(&log_dir);
    market_server::init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        log_dir.to_str(),
    );

    print_banner();
    tracing::info!("Market server starting...");

    // 2. State (database + services)
    let state = ServerState::initialize(&config).await?;

    // 3. HTTP server
    let server = Server::with_state(config, state);
    server.run().await
}
