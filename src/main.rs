use anyhow::{Context, Result};
use axum::http::{header, Method};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use chirpy::routes::build_app;
use chirpy::shared::config::Config;
use chirpy::shared::database::Database;
use chirpy::shared::services::{AppState, Stores};

#[tokio::main]
async fn main() -> Result<()> {
    // 설정 로드 (.env 포함)
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirpy=debug,tower_http=debug".into()),
        )
        .init();

    // DB 연결 및 마이그레이션
    let db = Database::new(&config.database_url).await?;
    db.initialize().await?;

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(&config, Stores::postgres(&db))?;

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    let app = build_app(app_state).layer(cors);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, platform = %config.platform, "server listening");
    tracing::info!("Swagger UI available at /docs");

    // 서버 실행
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
