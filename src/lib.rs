pub mod content;
pub mod extractors;
pub mod feedback;
pub mod formatting;
pub mod handlers;
pub mod markdown;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod statics;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{middleware, Router};

use crate::{content::QuizContent, services::quiz::QuizService};

#[derive(Clone)]
pub struct AppState {
    pub quiz: Arc<QuizService<QuizContent>>,
    pub break_long_hex: bool,
}

impl AppState {
    pub fn new(content: QuizContent) -> Self {
        Self {
            quiz: Arc::new(QuizService::new(content)),
            break_long_hex: false,
        }
    }

    pub fn with_hex_breaking(mut self, enabled: bool) -> Self {
        self.break_long_hex = enabled;
        self
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .layer(middleware::from_fn(csrf_check))
        .nest(names::STATIC_PREFIX, statics::routes())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
