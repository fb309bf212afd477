use maud::{html, Markup, PreEscaped};

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, class: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          class=(class)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub enum Icon {
    Lightbulb,
    ChevronLeft,
    ChevronRight,
}

impl Icon {
    fn path(&self) -> &'static str {
        match self {
            Icon::Lightbulb => {
                "M9 21h6v-1H9v1zm3-19a7 7 0 0 0-4 12.74V17a1 1 0 0 0 1 1h6a1 1 0 0 0 1-1v-2.26A7 7 0 0 0 12 2z"
            }
            Icon::ChevronLeft => "M15.41 7.41 14 6l-6 6 6 6 1.41-1.41L10.83 12z",
            Icon::ChevronRight => "M8.59 16.59 10 18l6-6-6-6-1.41 1.41L13.17 12z",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            Icon::Lightbulb => "icon icon-lightbulb",
            Icon::ChevronLeft | Icon::ChevronRight => "icon icon-chevron",
        }
    }
}

pub fn icon(icon: Icon) -> Markup {
    html! {
        svg class=(icon.class()) viewBox="0 0 24 24" width="1em" height="1em"
            fill="currentColor" aria-hidden="true" {
            path d=(icon.path()) {}
        }
    }
}

/// Inline script that enables the submit button once an answer is picked.
pub fn enable_on_change(button_id: &str) -> Markup {
    html! {
        script {
            (PreEscaped(format!(
                "function enableSubmit() {{ document.getElementById('{button_id}').disabled = false; }}"
            )))
        }
    }
}
