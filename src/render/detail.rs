use maud::{html, Markup};

use super::layout;
use crate::detail::VideoEmbed;
use crate::model::RecipeDetail;

/// Single-recipe page. The source link and the video section are optional.
pub fn recipe_page(recipe: &RecipeDetail, video: Option<&VideoEmbed>) -> Markup {
    let ingredients = recipe.ingredients();
    let content = html! {
        article.recipe-detail {
            header.detail-header {
                div.backdrop {
                    div.backdrop-blur style={ "background-image: url('" (recipe.thumbnail) "')" } {}
                    img.detail-image src=(recipe.thumbnail) alt=(recipe.name);
                }
                h1.detail-title { (recipe.name) }
                @if let Some(src) = recipe.source.as_deref() {
                    a.source-link href=(src) target="_blank" rel="noopener noreferrer" {
                        "🔗 See original source"
                    }
                }
            }
            div.detail-cards {
                section.card {
                    h2.section-title { "Ingredients" }
                    ul.ingredients {
                        @for item in &ingredients {
                            li { strong { (item.name) } " " span { "- " (item.measure) } }
                        }
                    }
                }
                section.card {
                    h2.section-title { "Instructions" }
                    p.instructions { (recipe.instructions) }
                }
            }
            @if let Some(v) = video {
                section.video {
                    h2.section-title { "See how it's cooked" }
                    iframe src=(v.embed_url) title="YouTube video"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen {}
                }
            }
        }
    };
    layout(&recipe.name, content)
}
