//! # API REST
//!
//! HTTP host for the Folio page.
//!
//! Handles:
//! - The rendered portfolio page and its assets, served with axum
//! - A small JSON API for the project list, documented with OpenAPI/Swagger
//! - HTTP-specific concerns (content types, downloads, CORS, request tracing)
//!
//! All page content comes from a [`PortfolioData`] snapshot built before the server starts.

#![warn(rust_2018_idioms)]

pub mod health;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use chrono::Datelike;
use folio_core::assets::content_type_for;
use folio_core::constants::{HEADSHOT_ROUTE, RESUME_ROUTE};
use folio_core::{render_document, NonEmptyText, PortfolioData, ProjectRecord};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub use health::{HealthRes, HealthService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    data: Arc<PortfolioData>,
}

impl AppState {
    pub fn new(data: Arc<PortfolioData>) -> Self {
        Self { data }
    }
}

/// A project as exposed by the JSON API.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProjectRes {
    #[schema(value_type = String)]
    pub title: NonEmptyText,
    pub role: String,
    #[schema(value_type = String)]
    pub description: NonEmptyText,
    pub tech: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub demo: Option<NonEmptyText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub repo: Option<NonEmptyText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub post: Option<NonEmptyText>,
}

impl From<&ProjectRecord> for ProjectRes {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            title: record.title.clone(),
            role: record.role_or_default().to_string(),
            description: record.description.clone(),
            tech: record.tech.clone(),
            demo: record.demo.clone(),
            repo: record.repo.clone(),
            post: record.post.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListProjectsRes {
    pub projects: Vec<ProjectRes>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_projects),
    components(schemas(HealthRes, ProjectRes, ListProjectsRes))
)]
struct ApiDoc;

/// Build the router for the given snapshot.
pub fn router(data: Arc<PortfolioData>) -> Router {
    Router::new()
        .route("/", get(index))
        .route(HEADSHOT_ROUTE, get(headshot))
        .route(RESUME_ROUTE, get(resume))
        .route("/api/projects", get(list_projects))
        .route("/health", get(health))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new(data))
}

/// Bind `addr` and serve the page until the process is stopped.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(addr: &str, data: Arc<PortfolioData>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("-- Serving Folio on {}", listener.local_addr()?);
    axum::serve(listener, router(data)).await?;
    Ok(())
}

/// The portfolio page, re-rendered from the snapshot on every request.
async fn index(State(state): State<AppState>) -> Html<String> {
    let year = chrono::Local::now().year();
    Html(render_document(&state.data, year))
}

async fn headshot(State(state): State<AppState>) -> Result<Response, (StatusCode, &'static str)> {
    let path = state.data.assets().headshot();
    let bytes = read_asset(path).await?;
    let content_type = content_type_for(path, &bytes);
    Ok(([(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

/// Resume download. Only routed to a file if one existed at startup.
async fn resume(State(state): State<AppState>) -> Result<Response, (StatusCode, &'static str)> {
    let assets = state.data.assets();
    let (Some(path), Some(file_name)) = (assets.resume(), assets.resume_file_name()) else {
        return Err((StatusCode::NOT_FOUND, "Resume not available"));
    };

    let bytes = read_asset(path).await?;
    let content_type = content_type_for(path, &bytes);
    let disposition = format!("attachment; filename=\"{}\"", file_name.replace('"', ""));
    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}

async fn read_asset(path: &Path) -> Result<Vec<u8>, (StatusCode, &'static str)> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("asset disappeared after startup: {}", path.display());
            Err((StatusCode::NOT_FOUND, "Asset not found"))
        }
        Err(e) => {
            tracing::error!("failed to read asset {}: {:?}", path.display(), e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, "Internal error"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint used by monitoring and load balancers.
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/projects",
    responses(
        (status = 200, description = "Projects in display order", body = ListProjectsRes)
    )
)]
/// List the projects shown in the grid, in display order.
async fn list_projects(State(state): State<AppState>) -> Json<ListProjectsRes> {
    let projects = state.data.projects().iter().map(ProjectRes::from).collect();
    Json(ListProjectsRes { projects })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use folio_core::{parse_projects, AssetPaths, GridColumns, Profile};
    use http_body_util::BodyExt;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    const PROJECTS: &str = r#"[
        {"title": "Churn model", "description": "Predicts churn", "repo": "https://git.example/churn"},
        {"title": "AD audit", "description": "Group policy report", "tech": ["PowerShell", "SQL"]}
    ]"#;

    fn fixture(with_resume: bool) -> (TempDir, Arc<PortfolioData>) {
        let temp = TempDir::new().unwrap();
        // Named .jpg on purpose: the served type must follow the bytes.
        let headshot = temp.path().join("headshot.jpg");
        fs::write(&headshot, PNG_BYTES).unwrap();

        let resume = if with_resume {
            let path = temp.path().join("Resume.pdf");
            fs::write(&path, b"%PDF-1.4").unwrap();
            Some(path)
        } else {
            None
        };

        let data = PortfolioData::new(
            Profile::builtin(),
            Arc::new(parse_projects(PROJECTS.as_bytes()).unwrap()),
            AssetPaths::new(headshot, resume),
            GridColumns::default(),
        );
        (temp, Arc::new(data))
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, body.to_vec())
    }

    #[tokio::test]
    async fn test_index_renders_projects() {
        let (_temp, data) = fixture(false);
        let (status, headers, body) = fetch(router(data), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(headers[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Churn model"));
        assert!(html.contains("PowerShell, SQL"));
        assert!(!html.contains("Download Resume"));
    }

    #[tokio::test]
    async fn test_headshot_served_with_content_type() {
        let (_temp, data) = fixture(false);
        let (status, headers, body) = fetch(router(data), "/assets/headshot").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "image/png");
        assert_eq!(body, PNG_BYTES);
    }

    #[tokio::test]
    async fn test_resume_missing_is_not_found() {
        let (_temp, data) = fixture(false);
        let (status, _, _) = fetch(router(data), "/resume").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_resume_download_is_attachment() {
        let (_temp, data) = fixture(true);
        let (status, headers, body) = fetch(router(data), "/resume").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            headers[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Resume.pdf\""
        );
        assert_eq!(body, b"%PDF-1.4");
    }

    #[tokio::test]
    async fn test_list_projects_json() {
        let (_temp, data) = fixture(false);
        let (status, _, body) = fetch(router(data), "/api/projects").await;

        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let projects = value["projects"].as_array().unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0]["title"], "Churn model");
        assert_eq!(projects[0]["role"], "Project");
        assert_eq!(projects[0]["repo"], "https://git.example/churn");
        assert!(projects[0].get("demo").is_none());
        assert_eq!(projects[1]["tech"][1], "SQL");
    }

    #[tokio::test]
    async fn test_health() {
        let (_temp, data) = fixture(false);
        let (status, _, body) = fetch(router(data), "/health").await;

        assert_eq!(status, StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["ok"], true);
    }
}
