pub const HOME_URL: &str = "/";
pub const STATIC_PREFIX: &str = "/static";

pub fn question_url(number: u32) -> String {
    format!("/question/{number}")
}

pub fn wallet_url(number: u32) -> String {
    format!("/question/{number}/wallet")
}

pub fn answer_url(number: u32) -> String {
    format!("/question/{number}/answer")
}

pub fn feedback_url(number: u32) -> String {
    format!("/question/{number}/feedback")
}

// Feedback panel
pub const FEEDBACK_PANEL_ID: &str = "feedback-panel";
pub const DEFAULT_FEEDBACK_PAGE: usize = 1;
