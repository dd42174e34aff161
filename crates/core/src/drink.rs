//! Drink recipe representations.
//!
//! The full recipe (ingredient names included) is only shown to holders of
//! the detail permission; the public menu sees colors and proportions.

use serde::{Deserialize, Serialize};

/// One layer of a drink as stored and as shown in the detailed view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipePart {
    pub name: String,
    pub color: String,
    pub parts: i32,
}

/// Public projection of a [`RecipePart`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortRecipePart {
    pub color: String,
    pub parts: i32,
}

impl From<&RecipePart> for ShortRecipePart {
    fn from(part: &RecipePart) -> Self {
        Self {
            color: part.color.clone(),
            parts: part.parts,
        }
    }
}

/// Strip ingredient names from a recipe.
pub fn short_recipe(parts: &[RecipePart]) -> Vec<ShortRecipePart> {
    parts.iter().map(ShortRecipePart::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_recipe_keeps_color_and_parts_only() {
        let recipe = vec![
            RecipePart { name: "espresso".into(), color: "brown".into(), parts: 1 },
            RecipePart { name: "milk".into(), color: "white".into(), parts: 3 },
        ];
        let short = short_recipe(&recipe);
        let json = serde_json::to_value(&short).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"color": "brown", "parts": 1},
                {"color": "white", "parts": 3}
            ])
        );
    }

    #[test]
    fn recipe_part_round_trips_through_json() {
        let raw = serde_json::json!({"name": "water", "color": "blue", "parts": 2});
        let part: RecipePart = serde_json::from_value(raw).unwrap();
        assert_eq!(part.parts, 2);
    }
}
