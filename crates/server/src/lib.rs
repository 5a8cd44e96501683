pub mod config;
mod errors;

use self::{config::Config, errors::AppError};
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::{get, post},
    Json, Router,
};
use labnote::providers::factory::create_provider;
use labnote::{LabReportClient, LabReportClientBuilder, ProcessError, ProcessingResult};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Uploads above this size are rejected before processing.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

/// The shared application state.
///
/// One `LabReportClient` serves all handlers; each request builds its own
/// formatting request and result record.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<LabReportClient>,
}

/// Builds the shared application state from the configuration.
///
/// Fails before the server starts serving if the AI provider cannot be
/// constructed, e.g. when the credential is absent.
pub fn build_app_state(config: &Config) -> Result<AppState, ProcessError> {
    let ai_provider = create_provider(&config.provider)?;
    let client = LabReportClientBuilder::new()
        .ai_provider(ai_provider)
        .build()?;

    Ok(AppState {
        client: Arc::new(client),
    })
}

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/process_pdf", post(process_pdf_handler))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// The root handler.
async fn root() -> &'static str {
    "labnote server is running."
}

/// The health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// The handler for the `/process_pdf` endpoint.
///
/// Accepts a multipart form with a `file` part, spools the upload to a
/// temporary file, and runs the extraction-and-formatting pipeline over it.
/// The temporary copy is removed when the handle drops, on success and on
/// every failure path.
async fn process_pdf_handler(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProcessingResult>, AppError> {
    let mut upload: Option<(String, NamedTempFile)> = None;

    while let Some(field) = multipart.next_field().await.map_err(anyhow::Error::from)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("uploaded_file.pdf").to_string();
                let data = field.bytes().await.map_err(anyhow::Error::from)?;

                let mut temp = NamedTempFile::new().map_err(anyhow::Error::from)?;
                temp.write_all(&data).map_err(anyhow::Error::from)?;
                info!("Received upload '{}' ({} bytes).", file_name, data.len());
                upload = Some((file_name, temp));
            }
            other => warn!("Ignoring unknown multipart field: {}", other),
        }
    }

    let (file_name, temp) = upload.ok_or_else(|| {
        AppError::Internal(anyhow::anyhow!(
            "PDF data not found in request. Provide a 'file' part."
        ))
    })?;

    let result = app_state.client.process_report(temp.path()).await?;

    info!(
        "Processed '{}' into a {} character note.",
        file_name,
        result.formatted_results.len()
    );

    Ok(Json(result))
}

/// The main entry point for running the server.
pub async fn run(listener: tokio::net::TcpListener, config: Config) -> anyhow::Result<()> {
    let app_state = build_app_state(&config)?;
    let app = create_router(app_state);

    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
