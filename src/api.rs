use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::error::MenuError;
use crate::grid::Template;

pub struct AppState {
    pub config: Config,
    pub client: Client,
    pub template: Template,
}

pub type SharedState = Arc<AppState>;

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Json,
    Text,
}

#[derive(Deserialize)]
pub struct MenuParams {
    pub url: Option<String>,
    #[serde(default)]
    pub format: Format,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/menu", get(get_menu))
        .route("/health", get(health))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
}

pub async fn get_menu(
    State(state): State<SharedState>,
    Query(params): Query<MenuParams>,
) -> Response {
    let url = params.url.as_deref().unwrap_or(&state.config.menu_url);
    match crate::fetch_weekly_menu(&state.client, url, &state.template).await {
        Ok(menu) => match params.format {
            Format::Json => Json(menu).into_response(),
            Format::Text => menu.to_string().into_response(),
        },
        Err(err) => error_response(&err),
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

pub fn status_for(err: &MenuError) -> StatusCode {
    match err {
        MenuError::Fetch(_) => StatusCode::BAD_GATEWAY,
        MenuError::Extraction(_) | MenuError::Structure(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

fn error_response(err: &MenuError) -> Response {
    (
        status_for(err),
        Json(ErrorBody {
            error: err.code(),
            message: err.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::error::StructureError;
    use crate::fetch::build_client;

    fn test_router() -> Router {
        let config = Config::default();
        let client = build_client(&config).unwrap();
        router(Arc::new(AppState {
            config,
            client,
            template: Template::default(),
        }))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn structure_errors_are_unprocessable() {
        let err = MenuError::from(StructureError::NoDatesFound { header: None });
        assert_eq!(status_for(&err), StatusCode::UNPROCESSABLE_ENTITY);
        let err = MenuError::Extraction("pdf has no pages".to_string());
        assert_eq!(status_for(&err), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn fetch_errors_are_bad_gateway() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        assert_eq!(status_for(&MenuError::Fetch(err)), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn health_route_returns_json() {
        let response = test_router()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "status": "healthy" })
        );
    }

    #[tokio::test]
    async fn unreachable_pdf_host_is_bad_gateway() {
        let response = test_router()
            .oneshot(
                Request::get("/menu?url=http://127.0.0.1:1/x.pdf")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_json(response).await;
        assert_eq!(body["error"], "fetch-error");
        assert!(body["message"].as_str().is_some_and(|m| m.starts_with("failed to fetch")));
    }

    #[test]
    fn format_defaults_to_json() {
        let params: MenuParams = serde_json::from_str(r#"{"url": null}"#).unwrap();
        assert_eq!(params.format, Format::Json);
        let params: MenuParams = serde_json::from_str(r#"{"format": "text"}"#).unwrap();
        assert_eq!(params.format, Format::Text);
        assert!(params.url.is_none());
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let Json(body) = health().await;
        assert_eq!(body.status, "healthy");
    }
}
