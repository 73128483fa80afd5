use maud::{html, Markup};

use super::layout;
use crate::categories::{flag_for_area, QUICK_FILTERS};
use crate::gateway::Scope;
use crate::intent::QueryIntent;
use crate::listing::ListingState;
use crate::model::RecipeSummary;

/// Listing page: sidebar filters, intent banner, grid, pagination.
pub fn recipes_page(state: &ListingState) -> Markup {
    let page = state.current_page();
    let intent = state.intent();

    let content = html! {
        div.listing {
            aside.sidebar {
                h3.filter-title { "Filter" }
                div.filter-options {
                    @for cat in QUICK_FILTERS {
                        a.filter-button href=(QueryIntent::Category(cat.to_string()).to_query()) { (cat) }
                    }
                }
            }
            div.listing-content {
                header.listing-header {
                    h1 { "Recipes" }
                    @if let Some((label, value)) = intent.banner() {
                        div.intent-banner {
                            span { (label) ": " strong { (value) } }
                        }
                    }
                }
                @if state.is_loading() {
                    p.message { "Loading..." }
                }
                @if let Some(err) = state.error() {
                    p.message.error { (err.message(Scope::Listing)) }
                }
                div.recipe-grid {
                    @for recipe in page.items {
                        (recipe_card(recipe))
                    }
                }
                @if page.total_pages > 0 {
                    nav.pagination {
                        @for n in page.page_numbers() {
                            a.page-button.active[n == page.number]
                                href=(intent.to_query_with_page(Some(n))) { (n) }
                        }
                    }
                }
            }
        }
    };
    layout("Recipes", content)
}

fn recipe_card(recipe: &RecipeSummary) -> Markup {
    let flag = recipe.area.as_deref().and_then(flag_for_area);
    html! {
        a.recipe-card href={ "/recipe/" (recipe.id) } {
            img.recipe-image src=(recipe.thumbnail) alt=(recipe.name) loading="lazy";
            div.tags {
                @if let Some(src) = flag {
                    img.flag src=(src) alt=[recipe.area.as_deref()];
                }
                @if let Some(cat) = recipe.category.as_deref().filter(|c| !c.is_empty()) {
                    span.category-tag { (cat) }
                }
            }
            h3.recipe-title { (recipe.name) }
        }
    }
}
