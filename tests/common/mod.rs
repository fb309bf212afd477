use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use walletwise::{content::QuizContent, router, AppState};

pub fn app() -> Router {
    app_with_state(AppState::new(
        QuizContent::builtin().expect("bundled quiz should parse"),
    ))
}

pub fn app_with_state(state: AppState) -> Router {
    router(state)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("HX-Request", "true")
        .body(Body::empty())
        .expect("request build should succeed")
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("HX-Request", "true")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed")
}

pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, String) {
    let resp = app
        .clone()
        .oneshot(req)
        .await
        .expect("router should respond");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
