#![cfg(feature = "web")]

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::compare::{CellComparison, Summary, compare_workbooks};
use crate::config::Config;
use crate::error::Error;

pub const FIRST_FIELD: &str = "file1";
pub const SECOND_FIELD: &str = "file2";

pub struct AppState {
    templates: Handlebars<'static>,
    config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, TemplateError> {
        let mut templates = Handlebars::new();
        templates.register_partial("form", include_str!("./static/form.hbs"))?;
        templates.register_template_string("index", include_str!("./static/index.hbs"))?;
        templates.register_template_string("results", include_str!("./static/results.hbs"))?;

        Ok(AppState { templates, config })
    }
}

/// Anything that keeps a request from producing results.
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Compare(#[from] Error),

    #[error("could not read upload: {0}")]
    Multipart(#[from] MultipartError),

    #[error("could not render page: {0}")]
    Render(#[from] RenderError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct CompareResponse {
    status: String,
    summary: Summary,
    results: Vec<CellComparison>,
}

#[derive(Serialize)]
struct ErrorResponse {
    status: String,
    message: String,
}

/// One rendered line of the results page.
#[derive(Serialize)]
struct ResultLine {
    row: u32,
    col: u32,
    cell: String,
    value1: String,
    value2: String,
    similarity: String,
}

impl From<&CellComparison> for ResultLine {
    fn from(result: &CellComparison) -> Self {
        ResultLine {
            row: result.row,
            col: result.col,
            cell: result.cell.clone(),
            value1: format_value(result.value1),
            value2: format_value(result.value2),
            similarity: result.similarity.to_string(),
        }
    }
}

// Zero, including empty and unreadable cells, shows as a bare 0; anything
// else keeps a decimal point so whole numbers read as 3.0
fn format_value(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{:?}", value)
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/", get(serve_index))
        .route("/compare", post(compare_page))
        .route("/api/compare", post(compare_json))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(config)?);
    let app = router(state);

    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn serve_index(State(state): State<Arc<AppState>>) -> Response {
    match render_index(&state, None) {
        Ok(page) => Html(page).into_response(),
        Err(e) => error_page(&state, &e),
    }
}

async fn compare_page(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let rendered = compare_uploads(multipart, state.config.max_cells)
        .await
        .and_then(|results| render_results(&state, &results));

    match rendered {
        Ok(page) => Html(page).into_response(),
        Err(e) => error_page(&state, &e),
    }
}

async fn compare_json(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    match compare_uploads(multipart, state.config.max_cells).await {
        Ok(results) => Json(CompareResponse {
            status: "ok".to_string(),
            summary: Summary::of(&results),
            results,
        })
        .into_response(),
        Err(e) => {
            log::warn!("comparison failed: {}", e);
            (
                e.status(),
                Json(ErrorResponse {
                    status: "error".to_string(),
                    message: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Pull both uploads out of the form and run the comparison.
async fn compare_uploads(
    mut multipart: Multipart,
    max_cells: usize,
) -> Result<Vec<CellComparison>, AppError> {
    let mut first = None;
    let mut second = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            FIRST_FIELD => first = Some(field.bytes().await?),
            SECOND_FIELD => second = Some(field.bytes().await?),
            _ => log::debug!("ignoring form field {:?}", name),
        }
    }

    let first = require_upload(first, FIRST_FIELD)?;
    let second = require_upload(second, SECOND_FIELD)?;

    let results = compare_workbooks(&first, &second, max_cells)?;
    let summary = Summary::of(&results);
    log::info!(
        "compared {} cells: {} identical, {} different",
        results.len(),
        summary.identical,
        summary.different
    );

    Ok(results)
}

fn require_upload<T: AsRef<[u8]>>(upload: Option<T>, field: &str) -> Result<T, Error> {
    match upload {
        None => Err(Error::MissingUpload(field.to_string())),
        Some(bytes) if bytes.as_ref().is_empty() => Err(Error::EmptyUpload(field.to_string())),
        Some(bytes) => Ok(bytes),
    }
}

fn render_index(state: &AppState, error: Option<&str>) -> Result<String, AppError> {
    let page = state
        .templates
        .render("index", &serde_json::json!({ "error": error }))?;
    Ok(page)
}

fn render_results(state: &AppState, results: &[CellComparison]) -> Result<String, AppError> {
    let lines: Vec<ResultLine> = results.iter().map(ResultLine::from).collect();
    let page = state.templates.render(
        "results",
        &serde_json::json!({
            "summary": Summary::of(results),
            "lines": lines,
        }),
    )?;
    Ok(page)
}

fn error_page(state: &AppState, error: &AppError) -> Response {
    log::warn!("request failed: {}", error);
    let message = error.to_string();

    match render_index(state, Some(&message)) {
        Ok(page) => (error.status(), Html(page)).into_response(),
        Err(_) => (error.status(), message).into_response(),
    }
}
