//! Markdown rendering for feedback pages.
//!
//! Parsing and HTML generation are delegated to `pulldown-cmark`; a handful of
//! elements are overridden so that long tokens wrap inside the feedback panel
//! and links leave the quiz in a new tab.

use maud::{html, Markup, PreEscaped};
use pulldown_cmark::{
    html::push_html, CodeBlockKind, CowStr, Event, LinkType, Options, Parser, Tag, TagEnd,
};

const PRE_OPEN: &str = r#"<pre class="md-pre" style="white-space: pre-wrap; overflow-wrap: anywhere; max-width: 100%;">"#;
const PARAGRAPH_OPEN: &str =
    r#"<p class="md-p" style="word-wrap: break-word; overflow-wrap: break-word;">"#;
const SAFE_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

pub fn render(source: &str) -> Markup {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let events = Parser::new_ext(source, options).map(override_element);

    let mut out = String::with_capacity(source.len() * 3 / 2);
    push_html(&mut out, events);
    PreEscaped(out)
}

fn override_element(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::CodeBlock(kind)) => {
            let class = match kind {
                CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                    format!("md-code-block language-{}", escape(&lang))
                }
                _ => "md-code-block".to_string(),
            };
            Event::Html(CowStr::from(format!(
                r#"{PRE_OPEN}<code class="{class}" style="white-space: pre-wrap; overflow-wrap: anywhere; display: block; max-width: 100%;">"#
            )))
        }
        Event::End(TagEnd::CodeBlock) => Event::Html(CowStr::Borrowed("</code></pre>\n")),
        Event::Code(code) => Event::InlineHtml(CowStr::from(
            html! { code class="md-code-inline" { (&*code) } }.into_string(),
        )),
        Event::Start(Tag::Paragraph) => Event::Html(CowStr::Borrowed(PARAGRAPH_OPEN)),
        Event::End(TagEnd::Paragraph) => Event::Html(CowStr::Borrowed("</p>\n")),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            ..
        }) => {
            let href = match link_type {
                LinkType::Email => format!("mailto:{dest_url}"),
                _ if is_safe_url(&dest_url) => dest_url.into_string(),
                _ => String::new(),
            };
            let title = if title.is_empty() {
                String::new()
            } else {
                format!(r#" title="{}""#, escape(&title))
            };
            Event::InlineHtml(CowStr::from(format!(
                r#"<a class="md-link" href="{}"{title} target="_blank" rel="noopener noreferrer">"#,
                escape(&href)
            )))
        }
        Event::End(TagEnd::Link) => Event::InlineHtml(CowStr::Borrowed("</a>")),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => {
            let dest_url = if is_safe_url(&dest_url) {
                dest_url
            } else {
                CowStr::Borrowed("")
            };
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            })
        }
        // feedback text is content, never markup
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

/// Relative paths, fragments and http(s)/mailto links. Anything else, such as
/// `javascript:` or `data:`, is dropped.
fn is_safe_url(url: &str) -> bool {
    let Some(colon) = url.find(':') else {
        return true;
    };
    let scheme = &url[..colon];
    // a colon after a path, query or fragment delimiter is not a scheme
    scheme.contains(['/', '?', '#'])
        || SAFE_SCHEMES.iter().any(|s| scheme.eq_ignore_ascii_case(s))
}

fn escape(s: &str) -> String {
    html! { (s) }.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_str(md: &str) -> String {
        render(md).into_string()
    }

    #[test]
    fn paragraphs_force_wrapping() {
        let out = render_str("hello world");
        assert!(out.starts_with(PARAGRAPH_OPEN));
        assert!(out.contains("hello world</p>"));
    }

    #[test]
    fn fenced_code_block_preserves_whitespace() {
        let out = render_str("```solidity\nfunction  approve()\n```\n");
        assert!(out.contains("white-space: pre-wrap"));
        assert!(out.contains(r#"class="md-code-block language-solidity""#));
        assert!(out.contains("function  approve()\n</code></pre>"));
    }

    #[test]
    fn inline_code_is_not_forced_to_wrap() {
        let out = render_str("call `setApprovalForAll` carefully");
        assert!(out.contains(r#"<code class="md-code-inline">setApprovalForAll</code>"#));
        assert!(!out.contains("md-code-block"));
    }

    #[test]
    fn links_open_in_new_tab() {
        let out = render_str("see [revoke.cash](https://revoke.cash \"Revoke\")");
        assert!(out.contains(r#"href="https://revoke.cash""#));
        assert!(out.contains(r#"title="Revoke""#));
        assert!(out.contains(r#"target="_blank" rel="noopener noreferrer""#));
        assert!(out.contains(">revoke.cash</a>"));
    }

    #[test]
    fn script_links_lose_their_target() {
        let out = render_str("[revoke here](javascript:alert(document.cookie))");
        assert!(out.contains(r#"<a class="md-link" href="""#));
        assert!(!out.contains("javascript"));
        assert!(out.contains(">revoke here</a>"));

        let out = render_str("[x](JavaScript:void) [y](data:text/html,hi) [z](vbscript:msgbox)");
        assert_eq!(out.matches(r#"href="""#).count(), 3);
    }

    #[test]
    fn relative_fragment_and_mail_links_are_kept() {
        let out = render_str(
            "[next](/question/2) [top](#feedback-panel) [docs](guide?a=b:c) [mail](mailto:help@walletwise.example)",
        );
        assert!(out.contains(r#"href="/question/2""#));
        assert!(out.contains(r##"href="#feedback-panel""##));
        assert!(out.contains(r#"href="guide?a=b:c""#));
        assert!(out.contains(r#"href="mailto:help@walletwise.example""#));
    }

    #[test]
    fn email_autolinks_get_mailto() {
        let out = render_str("mail <support@walletwise.example>");
        assert!(out.contains(r#"href="mailto:support@walletwise.example""#));
        assert!(out.contains(">support@walletwise.example</a>"));
    }

    #[test]
    fn image_sources_are_checked() {
        let out = render_str("![pixel](javascript:alert)");
        assert!(out.contains(r#"src="""#));
        assert!(!out.contains("javascript"));

        let out = render_str("![logo](https://walletwise.example/logo.png)");
        assert!(out.contains(r#"src="https://walletwise.example/logo.png""#));
    }

    #[test]
    fn raw_html_is_escaped() {
        let out = render_str("<script>alert(1)</script>");
        assert!(!out.contains("<script>"));
        assert!(out.contains("&lt;script&gt;"));
    }

    #[test]
    fn other_elements_use_default_rendering() {
        let out = render_str("**bold** and a list:\n\n- one\n- two\n");
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<li>one</li>"));
    }
}
