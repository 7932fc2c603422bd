use std::net::SocketAddr;

use anyhow::Result;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::error::ServiceError;
use crate::models::{
    AskRequest, AskResponse, Devotional, StudyRequest, StudyResponse, TopicListResponse,
};
use crate::service::BibleService;

#[derive(Clone)]
struct AppState {
    service: BibleService,
}

pub async fn run_server(config: AppConfig, service: BibleService) -> Result<()> {
    let state = AppState { service };

    // The same handlers are exposed at the root and under /dev-api.
    let api = api_routes();
    let app = Router::new()
        .merge(api.clone())
        .nest("/dev-api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.bind_addr.parse()?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/study", post(study))
        .route("/ask", post(ask))
        .route("/topics", post(list_topics))
        .route("/devotional", get(devotional_today))
}

async fn study(
    State(state): State<AppState>,
    Json(request): Json<StudyRequest>,
) -> Result<Json<StudyResponse>, ApiError> {
    let response = state.service.study(&request.reference)?;
    Ok(Json(response))
}

async fn ask(State(state): State<AppState>, Json(request): Json<AskRequest>) -> Json<AskResponse> {
    Json(state.service.ask(&request.query))
}

async fn list_topics(State(state): State<AppState>) -> Result<Json<TopicListResponse>, ApiError> {
    let topics = state.service.topic_names()?;
    Ok(Json(TopicListResponse { topics }))
}

async fn devotional_today(State(state): State<AppState>) -> Result<Json<Devotional>, ApiError> {
    match state.service.devotional_today() {
        Some(devotional) => Ok(Json(devotional)),
        None => Err(ApiError::not_found(
            "no devotional found for today".to_string(),
        )),
    }
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn not_found(message: String) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        let status = match value {
            ServiceError::InvalidFormat
            | ServiceError::UnknownBook(_)
            | ServiceError::InvalidRange { .. } => StatusCode::BAD_REQUEST,
            ServiceError::ChapterNotFound { .. }
            | ServiceError::VerseNotFound(_)
            | ServiceError::DataFileMissing(_) => StatusCode::NOT_FOUND,
            ServiceError::DataFileUnreadable { .. } | ServiceError::DataFileMalformed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: value.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_expected_statuses() {
        let cases = [
            (ApiError::from(ServiceError::InvalidFormat), StatusCode::BAD_REQUEST),
            (
                ApiError::from(ServiceError::UnknownBook("Banana".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(ServiceError::InvalidRange { start: 5, end: 2 }),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::from(ServiceError::ChapterNotFound {
                    book: "John".to_string(),
                    chapter: 99,
                }),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(ServiceError::VerseNotFound("John 3:99".to_string())),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::from(ServiceError::DataFileMissing("topics.json".to_string())),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status, expected, "{}", error.message);
        }
    }
}
