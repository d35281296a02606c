//! Axum route handlers for the document API.

use anyhow::anyhow;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::export::export_document;
use crate::generation::pipeline::{generate_application, ApplicationDocuments, ApplicationRequest};
use crate::models::profile::{DocumentKind, ExportFormat, ResumeStyle, StyleMode};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    /// The formatted document body, as returned by the generate endpoint.
    pub content: String,
    /// Applicant name used as the file-name stem.
    pub name: String,
    pub kind: DocumentKind,
    pub format: ExportFormat,
}

#[derive(Debug, Serialize)]
pub struct StylesResponse {
    pub resume_types: Vec<&'static str>,
    pub style_modes: Vec<StyleMode>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/applications
///
/// Generates the resume and the cover letter for one form submission.
/// Generation failures degrade to fallback text; only invalid input is an error.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<ApplicationRequest>,
) -> Result<Json<ApplicationDocuments>, AppError> {
    let submission = request.validate()?;
    let documents = generate_application(
        state.generator.as_ref(),
        submission,
        state.config.max_new_tokens,
    )
    .await;
    Ok(Json(documents))
}

/// POST /api/v1/exports
///
/// Returns the document as a TXT or PDF attachment. Nothing is stored.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let assets = state.config.pdf_fonts.clone();
    let artifact = tokio::task::spawn_blocking(move || {
        export_document(
            &request.content,
            &request.name,
            request.kind,
            request.format,
            &assets,
        )
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("Export task failed: {e}")))??;

    info!(
        "Exported {} ({} bytes)",
        artifact.file_name,
        artifact.bytes.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, artifact.mime_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                content_disposition(&artifact.file_name),
            ),
        ],
        artifact.bytes,
    )
        .into_response())
}

/// GET /api/v1/resume-styles
pub async fn handle_styles() -> Json<StylesResponse> {
    Json(StylesResponse {
        resume_types: ResumeStyle::ALL.iter().map(ResumeStyle::as_str).collect(),
        style_modes: vec![StyleMode::Rich, StyleMode::Basic],
    })
}

/// `attachment; filename="..."` with characters unsafe in a quoted header value replaced.
fn content_disposition(file_name: &str) -> String {
    let safe: String = file_name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}
