use maud::{html, Markup};

use super::layout;
use crate::categories::CATEGORIES;
use crate::intent::QueryIntent;

/// Hero with search box, then one tile per browsable area.
pub fn home_page() -> Markup {
    let content = html! {
        section.hero {
            div.hero-text {
                h1 { "World of recipes" }
                h2 { "Cook international dishes with ease" }
                form.search-bar action="/search" method="get" {
                    input type="text" name="q" placeholder="Search for a recipe";
                    button type="submit" { "Search" }
                }
            }
        }
        section.categories {
            h2.section-title { "Categories" }
            div.category-grid {
                @for cat in CATEGORIES {
                    a.category-card href=(QueryIntent::Area(cat.area.to_string()).to_query()) {
                        img src=(cat.image) alt=(cat.area);
                        span { (cat.area) }
                    }
                }
            }
        }
    };
    layout("Home", content)
}
