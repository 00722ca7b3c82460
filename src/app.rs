/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config 読み込み → Router 組み立て → bind → axum::serve() で起動
 */
use std::{net::SocketAddr, panic, process};

use axum::Router;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, config::Config, error::AppError, middleware};

const DEFAULT_LOG_FILTER: &str = "info,health_server=debug,tower_http=info";

fn init_tracing() {
    // RUST_LOG=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<(), AppError> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!("starting in {:?} mode", config.app_env);

    let listener = bind(config.addr).await?;
    serve(listener).await
}

pub fn build_router() -> Router {
    middleware::http::apply(api::routes())
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, AppError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })
}

/// Serves the router on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener) -> Result<(), AppError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("listening on {}", addr);
    }

    axum::serve(listener, build_router())
        .await
        .map_err(AppError::Serve)
}
