use axum::{
    body::Bytes,
    extract::{Path, Query, State},
};
use maud::Markup;

use super::{FeedbackQuery, SubmitAnswerBody, ANSWER_FEEDBACK_CLASS};
use crate::{
    feedback::FeedbackDisplay,
    names,
    rejections::{AppError, ResultExt},
    services::quiz::SubmitOutcome,
    views,
    views::quiz as quiz_views,
    AppState,
};

pub(crate) async fn submit_answer(
    State(state): State<AppState>,
    Path(number): Path<u32>,
    body: Bytes,
) -> Result<Markup, AppError> {
    let body = std::str::from_utf8(&body).reject_input("failed to parse body as UTF-8")?;
    let submission = SubmitAnswerBody::parse(body)?.into_submission()?;

    let outcome = match state.quiz.submit(number, submission) {
        SubmitOutcome::Graded(outcome) => outcome,
        SubmitOutcome::UnknownQuestion => return Err(AppError::NotFound),
        SubmitOutcome::Mismatched => {
            return Err(AppError::Input("answer does not fit the question"));
        }
    };

    let question = &outcome.question;
    let prev_url = question
        .prev_page_url
        .clone()
        .or_else(|| outcome.prev_number.map(names::question_url));
    let next_url = question
        .next_page_url
        .clone()
        .or_else(|| outcome.next_number.map(names::question_url));

    let feedback = FeedbackDisplay::new(outcome.is_correct, &question.feedback_content)
        .with_class(ANSWER_FEEDBACK_CLASS)
        .with_hex_breaking(state.break_long_hex);

    Ok(views::titled(
        &format!("Question {number}"),
        quiz_views::answer(quiz_views::AnswerData {
            question,
            submission: &outcome.submission,
            feedback,
            questions_count: state.quiz.count(),
            prev_url,
            next_url,
        }),
    ))
}

pub(crate) async fn feedback_panel(
    State(state): State<AppState>,
    Path(number): Path<u32>,
    Query(query): Query<FeedbackQuery>,
) -> Result<Markup, AppError> {
    let question = state.quiz.question(number).map_err(|e| {
        tracing::debug!("{e}");
        AppError::NotFound
    })?;

    let mut feedback = FeedbackDisplay::new(query.correct, &question.feedback_content)
        .with_initial_page(query.page)
        .with_class(ANSWER_FEEDBACK_CLASS)
        .with_hex_breaking(state.break_long_hex);

    if let Some(nav) = query.nav {
        if !feedback.navigate(nav) {
            tracing::debug!(
                "feedback for question {number} already at boundary ({:?} from page {})",
                nav,
                feedback.current_page()
            );
        }
    }

    Ok(quiz_views::feedback_panel(
        &feedback,
        &names::feedback_url(number),
    ))
}
