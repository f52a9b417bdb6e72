use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::transport::streamable_http_server::{
    StreamableHttpService, session::local::LocalSessionManager,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use room_redesign::{
    config::{AppConfig, STORED_IMAGE_ROUTE},
    generation::DesignGenerator,
    mcp_server::RoomDesignServer,
    openai::OpenAiImageEditor,
    storage::{JsonRecordStore, LocalFileStorage},
    web,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let images_dir = config.stored_images_dir();
    tokio::fs::create_dir_all(&images_dir)
        .await
        .with_context(|| format!("failed creating {}", images_dir.display()))?;
    info!(dir = %images_dir.display(), "storage directory");

    let blobs = Arc::new(LocalFileStorage::new(
        images_dir.clone(),
        config.stored_images_url(),
    ));
    let records = Arc::new(JsonRecordStore::new(config.records_path()));
    let editor = Arc::new(
        OpenAiImageEditor::new(config.openai_api_key.clone())
            .with_api_base(config.openai_api_base.clone())
            .with_model(config.openai_model.clone()),
    );
    let generator = Arc::new(
        DesignGenerator::new(blobs, records, editor).with_canvas_size(config.canvas_size),
    );

    let generator_for_service = generator.clone();
    let service = StreamableHttpService::new(
        move || Ok(RoomDesignServer::new(generator_for_service.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let mcp_path = config.mcp_path();
    let router = web::api_router(generator, config.allowed_origins.clone())
        .nest_service(STORED_IMAGE_ROUTE, web::stored_image_router(images_dir))
        .nest_service(&mcp_path, service);

    let bind_address = config.bind_address();
    let tcp_listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed binding {bind_address}"))?;
    info!(
        api = %format!("http://{bind_address}/api"),
        mcp = %format!("http://{bind_address}{mcp_path}"),
        "room redesign server started"
    );

    axum::serve(tcp_listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
