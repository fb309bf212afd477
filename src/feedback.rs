use std::borrow::Cow;

use serde::Deserialize;

use crate::{formatting, models::FeedbackContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Navigation {
    Next,
    Previous,
}

impl Navigation {
    pub fn as_str(self) -> &'static str {
        match self {
            Navigation::Next => "next",
            Navigation::Previous => "previous",
        }
    }
}

/// Paginated explanation shown after an answer.
///
/// The current page is 1-based and only changes through [`advance`] and
/// [`retreat`], which are no-ops at the first and last page.
///
/// [`advance`]: FeedbackDisplay::advance
/// [`retreat`]: FeedbackDisplay::retreat
#[derive(Debug, Clone)]
pub struct FeedbackDisplay<'a> {
    is_correct: bool,
    content: &'a FeedbackContent,
    class: Option<String>,
    break_long_hex: bool,
    current_page: usize,
}

impl<'a> FeedbackDisplay<'a> {
    pub fn new(is_correct: bool, content: &'a FeedbackContent) -> Self {
        Self {
            is_correct,
            content,
            class: None,
            break_long_hex: false,
            current_page: 1,
        }
    }

    /// Starts on `page`, clamped into the available pages.
    pub fn with_initial_page(mut self, page: usize) -> Self {
        self.current_page = page.clamp(1, self.last_page());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_hex_breaking(mut self, enabled: bool) -> Self {
        self.break_long_hex = enabled;
        self
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.content.pages.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn shows_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn heading(&self) -> &'static str {
        if self.is_correct {
            "That's correct. Let's see why:"
        } else {
            "That's incorrect. Let's see why:"
        }
    }

    pub fn page_indicator(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }

    /// Markdown source of the current page, empty when there are no pages.
    pub fn page_text(&self) -> Cow<'a, str> {
        let content: &'a FeedbackContent = self.content;
        let text = content
            .pages
            .get(self.current_page - 1)
            .map(String::as_str)
            .unwrap_or_default();

        if self.break_long_hex {
            Cow::Owned(formatting::format_long_hex_strings(text))
        } else {
            Cow::Borrowed(text)
        }
    }

    pub fn advance(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn retreat(&mut self) -> bool {
        if self.has_previous() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn navigate(&mut self, nav: Navigation) -> bool {
        match nav {
            Navigation::Next => self.advance(),
            Navigation::Previous => self.retreat(),
        }
    }

    fn last_page(&self) -> usize {
        self.total_pages().max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(n: usize) -> FeedbackContent {
        FeedbackContent {
            pages: (1..=n).map(|i| format!("page {i}")).collect(),
        }
    }

    #[test]
    fn starts_on_requested_page() {
        let c = content(4);
        for page in 1..=4 {
            let display = FeedbackDisplay::new(true, &c).with_initial_page(page);
            assert_eq!(display.current_page(), page);
            assert_eq!(display.page_text(), format!("page {page}"));
        }
    }

    #[test]
    fn defaults_to_first_page() {
        let c = content(3);
        let display = FeedbackDisplay::new(false, &c);
        assert_eq!(display.current_page(), 1);
        assert_eq!(display.page_text(), "page 1");
    }

    #[test]
    fn advancing_stops_at_last_page() {
        let c = content(3);
        let mut display = FeedbackDisplay::new(true, &c);
        assert!(display.advance());
        assert!(display.advance());
        assert_eq!(display.current_page(), 3);
        assert!(!display.has_next());
        assert!(!display.advance());
        assert_eq!(display.current_page(), 3);
    }

    #[test]
    fn retreating_never_goes_below_one() {
        let c = content(3);
        let mut display = FeedbackDisplay::new(true, &c).with_initial_page(3);
        while display.retreat() {}
        assert_eq!(display.current_page(), 1);
        assert!(!display.has_previous());
        assert!(!display.navigate(Navigation::Previous));
        assert_eq!(display.current_page(), 1);
    }

    #[test]
    fn controls_follow_position() {
        let c = content(3);
        let mut display = FeedbackDisplay::new(true, &c);
        let mut seen = Vec::new();
        loop {
            seen.push((display.current_page(), display.has_previous(), display.has_next()));
            if !display.navigate(Navigation::Next) {
                break;
            }
        }
        assert_eq!(seen, vec![(1, false, true), (2, true, true), (3, true, false)]);
    }

    #[test]
    fn single_page_has_no_pagination() {
        let c = content(1);
        let display = FeedbackDisplay::new(true, &c);
        assert!(!display.shows_pagination());
        assert!(!display.has_next());
        assert!(!display.has_previous());
    }

    #[test]
    fn heading_reflects_correctness() {
        let c = content(1);
        assert_eq!(FeedbackDisplay::new(true, &c).heading(), "That's correct. Let's see why:");
        assert_eq!(FeedbackDisplay::new(false, &c).heading(), "That's incorrect. Let's see why:");
    }

    #[test]
    fn out_of_range_initial_page_is_clamped() {
        let c = content(2);
        assert_eq!(FeedbackDisplay::new(true, &c).with_initial_page(0).current_page(), 1);
        assert_eq!(FeedbackDisplay::new(true, &c).with_initial_page(9).current_page(), 2);
    }

    #[test]
    fn empty_pages_render_nothing() {
        let c = content(0);
        let mut display = FeedbackDisplay::new(true, &c).with_initial_page(3);
        assert_eq!(display.current_page(), 1);
        assert_eq!(display.page_text(), "");
        assert!(!display.advance());
        assert!(!display.shows_pagination());
    }

    #[test]
    fn hex_breaking_is_opt_in() {
        let hex = format!("0x{}", "ab".repeat(40));
        let c = FeedbackContent { pages: vec![hex.clone()] };

        assert_eq!(FeedbackDisplay::new(true, &c).page_text(), hex);
        let broken = FeedbackDisplay::new(true, &c).with_hex_breaking(true).page_text();
        assert_eq!(broken, format!("{}\n{}", &hex[..60], &hex[60..]));
    }

    #[test]
    fn page_indicator_text() {
        let c = content(5);
        let display = FeedbackDisplay::new(true, &c).with_initial_page(2);
        assert_eq!(display.page_indicator(), "Page 2 of 5");
    }
}
