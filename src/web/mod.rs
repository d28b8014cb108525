//! Web 服务器模块
//!
//! 以英文字段和英文值重新提供立法院开放资料

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tower_http::cors::CorsLayer;

use crate::network::LyApiClient;
use crate::translation::TranslationResolver;

/// 服务器启动错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(#[from] crate::env::EnvError),

    #[error("无法绑定 {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("服务器错误: {0}")]
    Serve(std::io::Error),
}

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    resolver: TranslationResolver,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig, resolver: TranslationResolver) -> Self {
        Self { config, resolver }
    }

    /// 启动 Web 服务器
    pub async fn start(self) -> Result<(), ServerError> {
        self.config.validate()?;

        let address = self.config.listen_address();
        let upstream = LyApiClient::new(&self.config.upstream_url);
        tracing::info!("上游 API: {}", upstream.base_url());
        let app = create_router(Arc::new(AppState::new(self.resolver, upstream)));

        let listener = tokio::net::TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind {
                address: address.clone(),
                source,
            })?;

        tracing::info!("Web server starting at http://{}", address);

        axum::serve(listener, app).await.map_err(ServerError::Serve)
    }
}

/// 创建路由器
pub fn create_router(app_state: Arc<AppState>) -> Router {
    create_routes()
        .with_state(app_state)
        .layer(CorsLayer::permissive())
}
