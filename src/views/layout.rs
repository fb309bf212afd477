use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

const BRAND: &str = "WalletWise";
const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";

fn document_title(title: &str) -> String {
    format!("{title} - {BRAND}")
}

fn head(title: &str) -> Markup {
    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";
            link rel="stylesheet" href=(format!("{}/index.css", names::STATIC_PREFIX));
            link rel="icon" href=(format!("{}/img/icon.svg", names::STATIC_PREFIX)) type="image/svg+xml";
            script src=(HTMX_SRC) {}
            title { (document_title(title)) }
        }
    }
}

fn site_header() -> Markup {
    html! {
        header class="site-header" {
            nav {
                a class="brand" href=(names::HOME_URL) { strong { (BRAND) } }
                span class="practice-badge" { "Practice mode" }
                small class="version muted" { "v" (utils::VERSION) }
            }
        }
    }
}

// Every wallet in the quiz is simulated; say so on every page.
fn site_footer() -> Markup {
    html! {
        footer class="site-footer muted" {
            small {
                "Nothing here touches a real wallet. Never type a seed phrase into a website, "
                "including this one."
            }
        }
    }
}

/// Full HTML document around `body`.
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(title))
            body class="container" {
                (site_header())
                main { (body) }
                (site_footer())
            }
        }
    }
}

/// Fragment for htmx swaps into `main`; htmx picks up the `title` element.
pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (document_title(title)) }
        (body)
    }
}

/// Full page for direct navigation, a titled fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body)
    }
}
