//! Stateless web front end.
//!
//! Three routes: the search form, the form-driven comparison page, and a
//! JSON API. Handlers share an immutable [`App`] and keep no state between
//! requests; every comparison is an independent pipeline run.

use crate::app::App;
use crate::cli::Strategy;
use crate::error::{AppError, Result};
use axum::Router;
use axum::extract::{Form, Json, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use serde::Deserialize;
use serde_json::json;
use snapdiff_archive::Timestamp;
use std::net::SocketAddr;
use std::sync::Arc;

pub async fn serve(app: Arc<App>, addr: SocketAddr) -> Result<()> {
    let router = build_router(app);
    tracing::info!("web front end listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|source| AppError::Serve { source })?;
    axum::serve(listener, router).await.map_err(|source| AppError::Serve { source })?;
    Ok(())
}

pub fn build_router(app: Arc<App>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/compare", post(compare))
        .route("/api/compare", post(api_compare))
        .with_state(app)
}

async fn index(State(app): State<Arc<App>>) -> Response {
    match app.renderer.index_page() {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            tracing::error!(%error, "failed to render index page");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        },
    }
}

#[derive(Debug, Deserialize)]
struct CompareForm {
    url: String,
    #[serde(default)]
    date: Option<String>,
}

async fn compare(State(app): State<Arc<App>>, Form(form): Form<CompareForm>) -> Response {
    let timestamp = match parse_form_date(form.date.as_deref()) {
        Ok(timestamp) => timestamp,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid date format").into_response(),
    };
    match app.compare(&form.url, timestamp.as_ref(), Strategy::Strict).await {
        Ok(comparison) => {
            match app.renderer.results_page(&comparison.archive_url, &comparison.live_url, &comparison.report) {
                Ok(html) => Html(html).into_response(),
                Err(error) => {
                    tracing::error!(%error, "failed to render results page");
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                },
            }
        },
        Err(error) => page_error(error),
    }
}

#[derive(Debug, Deserialize)]
struct ApiRequest {
    url: Option<String>,
    timestamp: Option<String>,
}

async fn api_compare(State(app): State<Arc<App>>, Json(request): Json<ApiRequest>) -> Response {
    let Some(url) = request.url.filter(|url| !url.trim().is_empty()) else {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "URL is required"}))).into_response();
    };
    let timestamp = match request.timestamp.as_deref().map(str::parse::<Timestamp>).transpose() {
        Ok(timestamp) => timestamp,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": "Invalid timestamp format"}))).into_response();
        },
    };
    match app.compare(&url, timestamp.as_ref(), Strategy::Strict).await {
        Ok(comparison) => Json(json!({
            "wayback_url": comparison.archive_url,
            "live_url": comparison.live_url,
            "changes": comparison.report,
        }))
        .into_response(),
        Err(error) => api_error(error),
    }
}

/// Form dates arrive as `YYYY-MM-DD`; collapsing the dashes yields the
/// day-precision archive timestamp form, which the parser then validates.
fn parse_form_date(date: Option<&str>) -> std::result::Result<Option<Timestamp>, snapdiff_archive::error::Error> {
    match date {
        None => Ok(None),
        Some(date) if date.trim().is_empty() => Ok(None),
        Some(date) => date.replace('-', "").parse().map(Some),
    }
}

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::NoSnapshot => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn page_error(error: AppError) -> Response {
    tracing::warn!(%error, "comparison failed");
    (status_for(&error), error.to_string()).into_response()
}

fn api_error(error: AppError) -> Response {
    tracing::warn!(%error, "comparison failed");
    (status_for(&error), Json(json!({"error": error.to_string()}))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn absent_form_date_means_latest_snapshot(#[case] date: Option<&str>) {
        assert_eq!(parse_form_date(date).unwrap(), None);
    }

    #[test]
    fn form_date_maps_to_day_precision_timestamp() {
        let timestamp = parse_form_date(Some("2024-03-07")).unwrap().unwrap();
        assert_eq!(timestamp.as_str(), "20240307");
    }

    #[rstest]
    #[case("yesterday")]
    #[case("2024-13-01")]
    #[case("2024-02-30")]
    fn invalid_form_date_is_rejected(#[case] date: &str) {
        assert!(parse_form_date(Some(date)).is_err());
    }

    #[test]
    fn snapshot_misses_map_to_not_found() {
        assert_eq!(status_for(&AppError::NoSnapshot), StatusCode::NOT_FOUND);
    }
}
