// HTTP request handlers
use crate::application::error::DashboardError;
use crate::domain::industry::Industry;
use crate::domain::metric::MetricForm;
use crate::infrastructure::chunked_json::stream_from_watch;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::infrastructure::view_mapper::dashboard_to_view;
use crate::presentation::app_state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

fn error_status(error: &DashboardError) -> StatusCode {
    match error {
        DashboardError::UnknownIndustry(_) => StatusCode::NOT_FOUND,
        DashboardError::ServiceStopped => StatusCode::SERVICE_UNAVAILABLE,
    }
}

fn into_response(result: Result<Response, StatusCode>) -> Response {
    result.unwrap_or_else(|status| status.into_response())
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// List all industries a dashboard can show
pub async fn list_industries(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let industries = match state.dashboard_service.list_industries().await {
        Ok(industries) => industries,
        Err(e) => {
            tracing::error!("Error listing industries: {}", e);
            Vec::<Industry>::new()
        }
    };

    into_response(json_response(&industries, StatusCode::OK, accepts_brotli(&headers)).await)
}

/// Current dashboard snapshot
pub async fn get_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> Response {
    let snapshot = state.dashboard_service.snapshot();
    let view = dashboard_to_view(&snapshot, &state.view_settings);

    into_response(json_response(&view, StatusCode::OK, accepts_brotli(&headers)).await)
}

/// Switch the dashboard to another industry's data
pub async fn select_industry(
    Path(id): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    match state.dashboard_service.select_industry(&id).await {
        Ok(snapshot) => {
            let view = dashboard_to_view(&snapshot, &state.view_settings);
            into_response(json_response(&view, StatusCode::OK, accepts_brotli(&headers)).await)
        }
        Err(e) => {
            tracing::warn!("Could not switch to industry {}: {}", id, e);
            error_status(&e).into_response()
        }
    }
}

/// Stream a dashboard view for every published snapshot
pub async fn stream_dashboard(headers: HeaderMap, State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let settings = state.view_settings;
    stream_from_watch(
        state.dashboard_service.subscribe(),
        move |snapshot| dashboard_to_view(snapshot, &settings),
        accepts_brotli(&headers),
    )
}

/// Add a KPI from the "add KPI" form. Invalid forms change nothing.
pub async fn add_metric(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MetricForm>, JsonRejection>,
) -> Response {
    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            tracing::debug!("Unreadable metric form: {}", rejection);
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    match state.dashboard_service.add_metric(form).await {
        Ok(Some(metric)) => {
            into_response(json_response(&metric, StatusCode::CREATED, accepts_brotli(&headers)).await)
        }
        Ok(None) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
        Err(e) => error_status(&e).into_response(),
    }
}

/// Accept an uploaded file. The outcome is only logged.
pub async fn upload_file(
    Path(file_name): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> StatusCode {
    let content = String::from_utf8_lossy(&body);
    if let Err(e) = state.dashboard_service.import_file(&file_name, &content).await {
        tracing::error!("Upload {} dropped: {}", file_name, e);
    }
    StatusCode::ACCEPTED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::{DashboardService, SimulatorSettings};
    use crate::infrastructure::fixture_repository::FixtureRepository;
    use crate::infrastructure::view_mapper::ViewSettings;
    use axum::body::{to_bytes, Body};
    use axum::extract::FromRequest;
    use axum::http::{header, Request};
    use std::time::Duration;

    async fn app_state() -> Arc<AppState> {
        let repository = Arc::new(FixtureRepository::embedded().unwrap());
        let settings = SimulatorSettings {
            tick_interval: Duration::from_secs(3600),
            series_length: 24,
        };
        let dashboard_service = DashboardService::start(repository, settings, "smart-city")
            .await
            .unwrap();

        Arc::new(AppState {
            dashboard_service,
            view_settings: ViewSettings {
                frame: Default::default(),
                gauge_radius: 40.0,
            },
        })
    }

    async fn metric_payload(json: &str) -> Result<Json<MetricForm>, JsonRejection> {
        let request = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap();
        Json::<MetricForm>::from_request(request, &()).await
    }

    async fn body_len(response: Response) -> usize {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().len()
    }

    #[tokio::test]
    async fn test_unknown_industry_is_not_found() {
        let state = app_state().await;

        let response =
            select_industry(Path("mining".to_string()), HeaderMap::new(), State(state.clone())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            select_industry(Path("chemical".to_string()), HeaderMap::new(), State(state.clone())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.dashboard_service.snapshot().industry.id, "chemical");
    }

    #[tokio::test]
    async fn test_add_metric_statuses() {
        let state = app_state().await;
        let before = state.dashboard_service.snapshot().metrics.len();

        let payload = metric_payload(r#"{"name":"Test","value":"","unit":"X","category":"Energy"}"#).await;
        let response = add_metric(HeaderMap::new(), State(state.clone()), payload).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_len(response).await, 0);

        let payload = metric_payload(r#"{"name":"Test","value":42,"unit":"X","category":"Energy"}"#).await;
        let response = add_metric(HeaderMap::new(), State(state.clone()), payload).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let metric: serde_json::Value =
            serde_json::from_slice(&to_bytes(response.into_body(), usize::MAX).await.unwrap()).unwrap();
        assert_eq!(metric["value"], 42.0);
        assert_eq!(metric["trend"], "up");

        assert_eq!(state.dashboard_service.snapshot().metrics.len(), before + 1);
    }

    #[tokio::test]
    async fn test_unreadable_metric_body_is_empty_422() {
        let state = app_state().await;

        let payload = metric_payload(r#"{"name": ["not", "text"]"#).await;
        assert!(payload.is_err());
        let response = add_metric(HeaderMap::new(), State(state), payload).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_len(response).await, 0);
    }

    #[tokio::test]
    async fn test_upload_is_always_accepted() {
        let state = app_state().await;
        let before = state.dashboard_service.snapshot().metrics.clone();

        for (name, content) in [("data.json", "{broken"), ("data.txt", "hello"), ("data.csv", "a,b\n1,2")] {
            let status = upload_file(
                Path(name.to_string()),
                State(state.clone()),
                Bytes::from(content.to_string()),
            )
            .await;
            assert_eq!(status, StatusCode::ACCEPTED);
        }

        assert_eq!(state.dashboard_service.snapshot().metrics, before);
    }
}
