use maud::{html, Markup};

use crate::{
    feedback::{FeedbackDisplay, Navigation},
    markdown, names,
    views::components::{icon, Icon},
};

fn navigation_url(display: &FeedbackDisplay, feedback_url: &str, nav: Navigation) -> String {
    format!(
        "{feedback_url}?correct={}&page={}&nav={}",
        display.is_correct(),
        display.current_page(),
        nav.as_str()
    )
}

/// The feedback panel. Navigation buttons re-request the panel from
/// `feedback_url` and swap it in place.
pub fn feedback_panel(display: &FeedbackDisplay, feedback_url: &str) -> Markup {
    let class = match display.class() {
        Some(extra) => format!("feedback {extra}"),
        None => "feedback".to_string(),
    };
    let target = format!("#{}", names::FEEDBACK_PANEL_ID);

    html! {
        div id=(names::FEEDBACK_PANEL_ID) class=(class) {
            div class="feedback-body" {
                (icon(Icon::Lightbulb))
                div class="feedback-text" {
                    h3 { (display.heading()) }
                    div class="feedback-markdown" {
                        (markdown::render(&display.page_text()))
                    }
                }
            }

            @if display.shows_pagination() {
                div class="feedback-pagination" {
                    span class="feedback-page-indicator" { (display.page_indicator()) }
                    div class="feedback-controls" {
                        @if display.has_previous() {
                            button type="button" class="feedback-prev" title="Previous page"
                                   hx-get=(navigation_url(display, feedback_url, Navigation::Previous))
                                   hx-target=(target)
                                   hx-swap="outerHTML" {
                                (icon(Icon::ChevronLeft))
                            }
                        }
                        @if display.has_next() {
                            button type="button" class="feedback-next" title="Next page"
                                   hx-get=(navigation_url(display, feedback_url, Navigation::Next))
                                   hx-target=(target)
                                   hx-swap="outerHTML" {
                                (icon(Icon::ChevronRight))
                            }
                        }
                    }
                }
            }
        }
    }
}
