mod answer;
mod question;

use axum::{
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    feedback::Navigation,
    models::WalletAction,
    names,
    rejections::{AppError, ResultExt},
    services::quiz::Submission,
    AppState,
};

/// Extra class for the feedback panel on answer pages.
const ANSWER_FEEDBACK_CLASS: &str = "feedback-answer";

#[derive(Debug, Default, PartialEq, Eq)]
struct SubmitAnswerBody {
    option: Option<String>,
    options: Vec<String>,
    action: Option<String>,
}

impl SubmitAnswerBody {
    /// Parses a form-encoded body. Checkbox answers repeat the `options` key,
    /// which `Form` extraction cannot collect.
    fn parse(body: &str) -> Result<Self, AppError> {
        let mut parsed = SubmitAnswerBody::default();

        for pair in body.split('&').filter(|p| !p.is_empty()) {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(&value.replace('+', " "))
                .reject_input("failed to decode URL value")?
                .into_owned();

            match key {
                "option" => parsed.option = Some(value),
                "options" => parsed.options.push(value),
                "action" => parsed.action = Some(value),
                _ => {}
            }
        }

        Ok(parsed)
    }

    fn into_submission(self) -> Result<Submission, AppError> {
        if let Some(action) = self.action {
            let action = action
                .parse::<WalletAction>()
                .reject_input("failed to parse wallet action")?;
            return Ok(Submission::Wallet(action));
        }

        if !self.options.is_empty() {
            Ok(Submission::Choices(self.options))
        } else if let Some(option) = self.option {
            Ok(Submission::Choices(vec![option]))
        } else {
            tracing::error!("no answer provided");
            Err(AppError::Input("no answer provided"))
        }
    }
}

#[derive(Deserialize)]
struct FeedbackQuery {
    correct: bool,
    #[serde(default = "default_feedback_page")]
    page: usize,
    #[serde(default)]
    nav: Option<Navigation>,
}

fn default_feedback_page() -> usize {
    names::DEFAULT_FEEDBACK_PAGE
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/question/{number}", get(question::question_page))
        .route("/question/{number}/wallet", get(question::wallet_prompt))
        .route("/question/{number}/answer", post(answer::submit_answer))
        .route("/question/{number}/feedback", get(answer::feedback_panel))
}
