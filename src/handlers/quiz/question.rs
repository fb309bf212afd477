use axum::extract::{Path, State};
use maud::Markup;

use crate::{
    extractors::IsHtmx,
    models::Interaction,
    rejections::AppError,
    views,
    views::quiz as quiz_views,
    AppState,
};

pub(crate) async fn question_page(
    State(state): State<AppState>,
    IsHtmx(is_htmx): IsHtmx,
    Path(number): Path<u32>,
) -> Result<Markup, AppError> {
    let question = state.quiz.question(number).map_err(|e| {
        tracing::debug!("{e}");
        AppError::NotFound
    })?;

    Ok(views::render(
        is_htmx,
        &format!("Question {number}"),
        quiz_views::question(&question, state.quiz.count()),
    ))
}

pub(crate) async fn wallet_prompt(
    State(state): State<AppState>,
    Path(number): Path<u32>,
) -> Result<Markup, AppError> {
    let question = state.quiz.question(number).map_err(|e| {
        tracing::debug!("{e}");
        AppError::NotFound
    })?;

    match &question.interaction {
        Interaction::SignOrReject(scenario) => Ok(quiz_views::wallet_prompt(number, scenario)),
        Interaction::Single(_) | Interaction::Multi(_) => {
            tracing::warn!("wallet prompt requested for choice question {number}");
            Err(AppError::NotFound)
        }
    }
}
