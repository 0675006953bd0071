use axum::{
    routing::{get, post},
    Router,
    extract::{Json, State},
    response::Html,
};
use tower_http::cors::{CorsLayer, Any};

use crate::error::{Result, AppError};
use crate::api::models::{SummarizeRequest, SummarizeResponse};
use crate::extract::summarize_url;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/summarize", post(summarize_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

// The single-page UI ships inside the binary, so the server is the whole app
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

async fn summarize_handler(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>> {
    if req.url.trim().is_empty() {
        return Err(AppError::EmptyUrl);
    }

    println!("Processing request for URL: {}", req.url);

    match summarize_url(&state.client, &req.url).await {
        Ok(summary) => Ok(Json(SummarizeResponse { summary })),
        Err(err) => {
            // The client only sees the generic message for these, so keep
            // the underlying cause in the server log
            if matches!(err, AppError::Fetch(_) | AppError::Parse(_)) {
                println!("[SUMMARY_ERROR] {}: {}", req.url, err);
            }
            Err(err)
        }
    }
}
