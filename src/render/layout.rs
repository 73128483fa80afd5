use chrono::Datelike;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const CSS: &str = include_str!("../../static/style.css");

// Full page loads already start at the top; this also covers back/forward.
const SCROLL_RESET_JS: &str =
    "if ('scrollRestoration' in history) { history.scrollRestoration = 'manual'; } \
     window.addEventListener('pageshow', function () { window.scrollTo(0, 0); });";

/// Document shell shared by every route: header, main, footer.
pub fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · GUSTIX" }
                style { (PreEscaped(CSS)) }
            }
            body {
                (site_header())
                main.main-content {
                    (content)
                }
                (site_footer())
                script { (PreEscaped(SCROLL_RESET_JS)) }
            }
        }
    }
}

fn site_header() -> Markup {
    html! {
        nav.site-nav {
            a.logo href="/" {
                span.logo-icon { "🍽️" }
                span.logo-text { "GUSTIX" }
            }
            ul.nav-menu {
                li { a href="/" { "Home" } }
                li { a href="/recipes" { "Recipes" } }
            }
        }
    }
}

fn site_footer() -> Markup {
    let year = chrono::Utc::now().year();
    html! {
        footer.site-footer {
            p { "© " (year) " GUSTIX. All rights reserved." }
        }
    }
}

/// A page that only carries an inline message (errors, not-found).
pub fn message_page(title: &str, message: &str) -> Markup {
    layout(
        title,
        html! {
            p.message { (message) }
        },
    )
}
