use axum::{extract::State, routing::get, Router};
use maud::Markup;

use crate::{extractors::IsHtmx, views, views::homepage as homepage_views, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(homepage))
}

async fn homepage(State(state): State<AppState>, IsHtmx(is_htmx): IsHtmx) -> Markup {
    views::render(
        is_htmx,
        "Spot the scam",
        homepage_views::homepage(state.quiz.repo().questions()),
    )
}
