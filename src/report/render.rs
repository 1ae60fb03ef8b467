//! Page renderers
//!
//! `render_markdown` is used by the terminal front ends, `render_html` by the
//! web form. Both print every one of the twelve fields unconditionally.

use super::formatter::{build_labeled_line, build_section_header, format_datetime};
use super::page::*;
use crate::session::{Banner, BannerKind, Session};

/// Disclaimer block printed once at the top of a terminal session
pub fn render_markdown_preamble() -> String {
    let mut content = String::new();
    content.push_str(&format!("> {}\n\n", DISCLAIMER));
    content.push_str(&build_section_header(HEADING, 1));
    content
}

/// Render the current session state as markdown
///
/// Layout: banner, insights header, labelled lines, proceed hint, home link, footer.
pub fn render_markdown(session: &Session, banner: Option<&Banner>) -> String {
    let mut content = String::new();

    if let Some(banner) = banner {
        let marker = match banner.kind {
            BannerKind::Success => "✔",
            BannerKind::Error => "✘",
        };
        content.push_str(&format!("{} {}\n\n", marker, banner.message));
    }

    if let Some(snapshot) = session.snapshot() {
        content.push_str(&build_section_header(&insights_header(&snapshot.ticker), 2));
        for (label, value) in snapshot.record.entries() {
            content.push_str(&build_labeled_line(label, value));
        }
        content.push('\n');
        content.push_str(&format!("_Fetched at {}_\n\n", format_datetime(snapshot.fetched_at)));
        content.push_str(&format!("[{}] type `:proceed`\n\n", PROCEED_LABEL));
    }

    content.push_str(&format!("[{}]({})\n\n", HOME_LABEL, HOME_URL));
    content.push_str(&format!("---\n{}\n", FOOTER));

    content
}

/// Render the full web page for the current session state
pub fn render_html(session: &Session, banner: Option<&Banner>) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "<div class=\"main-banner\">{}</div>\n",
        escape_html(DISCLAIMER)
    ));
    body.push_str("<div class=\"center-content\">\n");
    body.push_str(&format!("<div class=\"title\">{}</div>\n", escape_html(HEADING)));

    body.push_str(&format!(
        concat!(
            "<form method=\"post\" action=\"/submit\">\n",
            "<label for=\"ticker\">{label}</label>\n",
            "<input id=\"ticker\" name=\"ticker\" type=\"text\" placeholder=\"{placeholder}\" title=\"{help}\" value=\"{value}\">\n",
            "<button type=\"submit\">{submit}</button>\n",
            "</form>\n"
        ),
        label = escape_html(INPUT_LABEL),
        placeholder = escape_html(INPUT_PLACEHOLDER),
        help = escape_html(INPUT_HELP),
        value = escape_html(session.ticker().unwrap_or_default()),
        submit = escape_html(SUBMIT_LABEL),
    ));

    if let Some(banner) = banner {
        let class = match banner.kind {
            BannerKind::Success => "banner success",
            BannerKind::Error => "banner error",
        };
        body.push_str(&format!(
            "<div class=\"{}\">{}</div>\n",
            class,
            escape_html(&banner.message)
        ));
    }

    if let Some(snapshot) = session.snapshot() {
        body.push_str(&format!(
            "<div class=\"custom-header\">{}</div>\n",
            escape_html(&insights_header(&snapshot.ticker))
        ));
        body.push_str("<div class=\"insights\">\n");
        for (label, value) in snapshot.record.entries() {
            body.push_str(&format!(
                "<p><strong>{}:</strong> {}</p>\n",
                escape_html(label),
                escape_html(value)
            ));
        }
        body.push_str("</div>\n");
        body.push_str(&format!(
            "<form method=\"post\" action=\"/proceed\"><button type=\"submit\">{}</button></form>\n",
            escape_html(PROCEED_LABEL)
        ));
    }

    body.push_str(&format!(
        "<a href=\"{}\" target=\"_self\"><button class=\"home\">{}</button></a>\n",
        escape_html(HOME_URL),
        escape_html(HOME_LABEL)
    ));
    body.push_str("</div>\n");
    body.push_str(&format!("<div class=\"footer\">{}</div>\n", escape_html(FOOTER)));

    format!(
        concat!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n",
            "<meta charset=\"utf-8\">\n",
            "<title>{title}</title>\n",
            "<style>\n{style}</style>\n",
            "</head>\n<body>\n{body}</body>\n</html>\n"
        ),
        title = escape_html(PAGE_TITLE),
        style = STYLE,
        body = body,
    )
}

/// Escape text for use in HTML element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const STYLE: &str = r#"body { font-family: Arial, sans-serif; margin: 0 0 60px 0; }
.main-banner { background-color: #FFFFFF; padding: 30px; text-align: center; border-radius: 30px; border: 5px dotted black; font-size: 20px; font-weight: bold; color: #000000; margin: 20px; }
.center-content { display: flex; flex-direction: column; align-items: center; justify-content: center; }
.title { padding: 15px; text-align: center; font-size: 40px; font-weight: bold; color: #000000; }
.banner { padding: 10px 20px; margin: 10px; border-radius: 5px; }
.banner.success { background-color: #d4edda; color: #155724; }
.banner.error { background-color: #f8d7da; color: #721c24; }
.custom-header { font-size: 28px; font-weight: bold; padding: 10px; text-align: center; margin-top: 10px; }
.home { background-color: #007bff; color: white; padding: 10px 20px; font-size: 16px; border: none; border-radius: 5px; cursor: pointer; }
.footer { position: fixed; bottom: 0; left: 0; right: 0; background-color: #f8f9fa; text-align: center; padding: 10px; font-size: 14px; font-weight: bold; color: rgb(0, 0, 0); }
"#;
