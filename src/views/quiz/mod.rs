mod feedback;
mod question;
mod wallet;

pub use feedback::feedback_panel;
pub use question::{choice_form, choice_review};
pub use wallet::{scenario, wallet_prompt, wallet_review};

use maud::{html, Markup};

use crate::{
    feedback::FeedbackDisplay,
    models::{Interaction, Question},
    names,
    services::quiz::Submission,
    views::components::nav_link,
};

pub struct AnswerData<'a> {
    pub question: &'a Question,
    pub submission: &'a Submission,
    pub feedback: FeedbackDisplay<'a>,
    pub questions_count: usize,
    pub prev_url: Option<String>,
    pub next_url: Option<String>,
}

fn question_header(question: &Question, questions_count: usize) -> Markup {
    html! {
        div class="question-header" {
            p class="question-progress" {
                "Question "
                strong { (question.question_number) }
                " of "
                (questions_count)
            }
            span class="question-kind" { (question.kind_label()) }
        }
    }
}

pub fn question(question: &Question, questions_count: usize) -> Markup {
    html! {
        article class="question" {
            (question_header(question, questions_count))
            h3 { (question.question) }

            @match &question.interaction {
                Interaction::Single(choice) => {
                    (choice_form(question.question_number, choice, false))
                }
                Interaction::Multi(choice) => {
                    (choice_form(question.question_number, choice, true))
                }
                Interaction::SignOrReject(sr) => {
                    (scenario(question.question_number, sr))
                }
            }

            @if let Some(prev) = &question.prev_page_url {
                div class="question-nav" {
                    (nav_link(prev, "nav-btn nav-btn-back", html! { "Previous" }))
                }
            }
        }
    }
}

fn review(question: &Question, submission: &Submission) -> Markup {
    match (&question.interaction, submission) {
        (Interaction::Single(choice), Submission::Choices(selected)) => {
            choice_review(choice, selected, false)
        }
        (Interaction::Multi(choice), Submission::Choices(selected)) => {
            choice_review(choice, selected, true)
        }
        (Interaction::SignOrReject(sr), Submission::Wallet(action)) => wallet_review(sr, *action),
        // graded submissions always fit their question
        (Interaction::Single(_) | Interaction::Multi(_), Submission::Wallet(_))
        | (Interaction::SignOrReject(_), Submission::Choices(_)) => html! {},
    }
}

pub fn answer(data: AnswerData) -> Markup {
    let number = data.question.question_number;

    html! {
        article class="question answered" {
            (question_header(data.question, data.questions_count))
            h3 { (data.question.question) }

            (review(data.question, data.submission))

            (feedback_panel(&data.feedback, &names::feedback_url(number)))

            div class="question-nav" {
                @if let Some(prev) = &data.prev_url {
                    (nav_link(prev, "nav-btn nav-btn-back", html! { "Previous" }))
                }
                span class="spacer" {}
                @match &data.next_url {
                    Some(next) => {
                        (nav_link(next, "nav-btn nav-btn-next", html! { "Next question" }))
                    }
                    None => {
                        (nav_link(names::HOME_URL, "nav-btn nav-btn-next", html! { "Finish" }))
                    }
                }
            }
        }
    }
}
