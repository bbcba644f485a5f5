use presession::config::{AppConfig, load_config};
use presession::server::{AppState, create_router};
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "config.json";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration; a missing file means defaults
    let config: Arc<AppConfig> = if Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(cfg) => Arc::new(cfg),
            Err(e) => {
                error!("Config load error: {}", e);
                return;
            }
        }
    } else {
        warn!("{} not found, using defaults", CONFIG_PATH);
        Arc::new(AppConfig::default())
    };
    info!(
        "Thresholds: ideal {}-{} words, generate from {} words",
        config.writing.ideal_min, config.writing.ideal_max, config.writing.min_words_to_generate
    );

    let state = match AppState::new(config.clone()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            error!("Failed to compile page templates: {}", e);
            return;
        }
    };
    let app = create_router(state);

    let addr = config.server.bind_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!("Cannot bind {}: {}", addr, e);
            return;
        }
    };

    info!("🚀 Serving on http://{}", addr);
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl-C handler failed: {}", e);
        }
        info!("Shutting down...");
    };
    if let Err(e) = axum::serve(listener, app).with_graceful_shutdown(shutdown).await {
        error!("Server error: {}", e);
    }
}
