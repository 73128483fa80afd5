// src/model.rs
//! Provider records as the rest of the crate sees them.
//!
//! The wire field names (`idMeal`, `strMeal`, ...) are the provider's and only
//! appear on the deserialize side; serialization uses our own snake_case names
//! so the JSON API does not leak the upstream schema.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Number of ingredient/measure slots a provider detail record carries.
pub const INGREDIENT_SLOTS: usize = 20;

/// Lightweight record used in listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(rename(deserialize = "idMeal"))]
    pub id: String,
    #[serde(rename(deserialize = "strMeal"))]
    pub name: String,
    #[serde(
        rename(deserialize = "strMealThumb"),
        default,
        deserialize_with = "null_as_empty"
    )]
    pub thumbnail: String,
    // filter.php omits area/category; search.php includes them
    #[serde(rename(deserialize = "strArea"), default)]
    pub area: Option<String>,
    #[serde(rename(deserialize = "strCategory"), default)]
    pub category: Option<String>,
}

/// One raw (ingredient, measure) slot, exactly as the provider sent it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

/// An entry of the reshaped ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Full recipe record for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawDetail")]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail: String,
    pub instructions: String,
    pub area: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub video: Option<String>,
    pub slots: [IngredientSlot; INGREDIENT_SLOTS],
}

impl RecipeDetail {
    /// Ingredients in slot order, skipping slots whose name is blank.
    /// The measure is carried verbatim and never gates inclusion.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let name = slot.ingredient.as_deref()?;
                if name.trim().is_empty() {
                    return None;
                }
                Some(Ingredient {
                    name: name.to_string(),
                    measure: slot.measure.clone().unwrap_or_default(),
                })
            })
            .collect()
    }
}

#[derive(Deserialize)]
struct RawDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strSource", default)]
    source: Option<String>,
    #[serde(rename = "strYoutube", default)]
    video: Option<String>,
    #[serde(flatten)]
    rest: serde_json::Map<String, Value>,
}

impl TryFrom<RawDetail> for RecipeDetail {
    type Error = String;

    fn try_from(raw: RawDetail) -> Result<Self, Self::Error> {
        let mut slots: [IngredientSlot; INGREDIENT_SLOTS] = Default::default();
        for (i, slot) in slots.iter_mut().enumerate() {
            let n = i + 1;
            slot.ingredient = slot_field(&raw.rest, &format!("strIngredient{n}"))?;
            slot.measure = slot_field(&raw.rest, &format!("strMeasure{n}"))?;
        }

        Ok(Self {
            id: raw.id,
            name: raw.name,
            thumbnail: raw.thumbnail.unwrap_or_default(),
            instructions: raw.instructions.unwrap_or_default(),
            area: non_blank(raw.area),
            category: non_blank(raw.category),
            source: non_blank(raw.source),
            video: non_blank(raw.video),
            slots,
        })
    }
}

fn slot_field(
    rest: &serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<String>, String> {
    match rest.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(format!("{key}: expected string or null, got {other}")),
    }
}

/// `null` and a missing key both read as an empty string.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// Wire envelope shared by every provider endpoint: `{ "meals": [..] | null }`.
///
/// `meals` stays untyped so the gateway can tell "not an array" apart from
/// "array with a bad element".
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_thumbnail_reads_as_empty() {
        let s: RecipeSummary = serde_json::from_value(json!({
            "idMeal": "1",
            "strMeal": "Pie",
            "strMealThumb": null
        }))
        .unwrap();
        assert_eq!(s.thumbnail, "");

        let s: RecipeSummary =
            serde_json::from_value(json!({ "idMeal": "2", "strMeal": "Tart" })).unwrap();
        assert_eq!(s.thumbnail, "");
    }

    fn detail_json() -> Value {
        json!({
            "idMeal": "52772",
            "strMeal": "Teriyaki Chicken Casserole",
            "strMealThumb": "https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
            "strInstructions": "Preheat oven to 350.",
            "strArea": "Japanese",
            "strCategory": "Chicken",
            "strSource": "",
            "strYoutube": "https://www.youtube.com/watch?v=4aZr5hZXP_s",
            "strIngredient1": "soy sauce",
            "strMeasure1": "3/4 cup",
            "strIngredient2": "water",
            "strMeasure2": "1/2 cup",
            "strIngredient3": "  ",
            "strMeasure3": "1 tsp",
            "strIngredient4": null,
            "strIngredient5": "brown sugar",
            "strMeasure5": "",
            "strIngredient6": ""
        })
    }

    #[test]
    fn detail_slots_are_validated_into_fixed_array() {
        let d: RecipeDetail = serde_json::from_value(detail_json()).unwrap();
        assert_eq!(d.slots.len(), INGREDIENT_SLOTS);
        assert_eq!(d.slots[0].ingredient.as_deref(), Some("soy sauce"));
        assert_eq!(d.slots[3].ingredient, None);
        assert_eq!(d.slots[19], IngredientSlot::default());
        // empty source collapses to absent
        assert_eq!(d.source, None);
        assert!(d.video.is_some());
    }

    #[test]
    fn ingredients_skip_blank_slots_in_slot_order() {
        let d: RecipeDetail = serde_json::from_value(detail_json()).unwrap();
        let names: Vec<_> = d.ingredients().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["soy sauce", "water", "brown sugar"]);
    }

    #[test]
    fn empty_measure_is_kept_verbatim() {
        let d: RecipeDetail = serde_json::from_value(detail_json()).unwrap();
        let last = d.ingredients().pop().unwrap();
        assert_eq!(last.name, "brown sugar");
        assert_eq!(last.measure, "");
    }

    #[test]
    fn non_string_slot_is_rejected() {
        let mut v = detail_json();
        v["strIngredient7"] = json!(42);
        let err = serde_json::from_value::<RecipeDetail>(v).unwrap_err();
        assert!(err.to_string().contains("strIngredient7"));
    }

    #[test]
    fn summary_reads_filter_shape_without_area() {
        let s: RecipeSummary = serde_json::from_value(json!({
            "strMeal": "Baked salmon",
            "strMealThumb": "https://x/salmon.jpg",
            "idMeal": "52959"
        }))
        .unwrap();
        assert_eq!(s.id, "52959");
        assert_eq!(s.area, None);
        let out = serde_json::to_value(&s).unwrap();
        assert_eq!(out["name"], "Baked salmon");
    }
}
