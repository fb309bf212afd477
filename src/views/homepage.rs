use maud::{html, Markup};

use crate::{models::Question, names, views::components::nav_link};

pub fn homepage(questions: &[Question]) -> Markup {
    html! {
        hgroup {
            h1 { "Spot the scam" }
            p { "Learn to recognise phishing in wallet prompts before it costs you." }
        }
        article {
            p {
                "Each question either asks you to pick the right answer or drops you into a "
                "simulated dapp where a wallet asks you to sign something. Decide whether to "
                strong { "sign" } " or " strong { "reject" } ", then read why."
            }
            ol class="question-list" {
                @for q in questions {
                    li {
                        a href=(names::question_url(q.question_number)) { (q.question) }
                        " "
                        small class="question-kind" { (q.kind_label()) }
                    }
                }
            }
            @if let Some(first) = questions.first() {
                (nav_link(&names::question_url(first.question_number), "nav-btn nav-btn-next", html! { "Start the quiz" }))
            }
        }
    }
}
