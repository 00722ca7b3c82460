/*
 * Responsibility
 * - 起動時のエラー定義 (設定不正 / bind 失敗 / serve 失敗)
 * - リクエスト単位のエラーは持たない (handler は失敗しない)
 */
use std::io;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server error")]
    Serve(#[source] io::Error),
}
