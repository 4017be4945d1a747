use pageview_shared::{load_config, RunMode};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod handlers;
mod middleware;
mod routes;
mod server;

use routes::create_app;
use server::{bind, serve, shutdown_signal};

#[tokio::main]
async fn main() {
    // 加载配置
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let mode = config.run_mode();

    // 初始化日志
    init_tracing(mode);

    if config.has_unknown_mode() {
        warn!("Unknown GIN_MODE {:?}, running in debug mode", config.mode);
    }

    // 构建应用
    let app = create_app(mode);

    // 启动服务器
    info!("API Gateway starting on port {}", config.port);

    let listener = match bind(&config.port).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to start server: {}", e);
            std::process::exit(1);
        }
    };

    if let Ok(addr) = listener.local_addr() {
        info!("API Gateway listening on {}", addr);
    }

    if let Err(e) = serve(listener, app, shutdown_signal()).await {
        error!("Server stopped unexpectedly: {}", e);
        std::process::exit(1);
    }

    info!("API Gateway stopped");
}

/// `RUST_LOG` wins over the mode's default filter.
fn init_tracing(mode: RunMode) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(mode.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
