//! Search-criteria construction.
//!
//! Translates the optional, user-supplied search fields into the BSON query
//! predicate handed to `Collection::find`. Pure; all storage semantics stay in
//! the database.

use mongodb::bson::{doc, Bson, Document};

/// Build the recipe query predicate from optional search fields.
///
/// - `name`: recipe name must case-insensitively contain it (substring, not
///   anchored).
/// - `tag_names`: the recipe's embedded tag names must intersect the set (OR:
///   at least one match).
/// - `ingredient_names`: for every supplied name, at least one ingredient
///   whose name case-insensitively contains it (AND across names, substring
///   per name).
///
/// Absent or empty fields contribute nothing; with no fields at all the
/// returned document is empty and matches every recipe.
pub fn build_criteria(
    name: Option<&str>,
    tag_names: Option<&[String]>,
    ingredient_names: Option<&[String]>,
) -> Document {
    let mut criteria = Document::new();

    if let Some(name) = name.filter(|n| !n.trim().is_empty()) {
        criteria.insert(
            "name",
            doc! { "$regex": regex::escape(name), "$options": "i" },
        );
    }

    if let Some(tags) = tag_names.filter(|t| !t.is_empty()) {
        criteria.insert("tags.name", doc! { "$in": tags.to_vec() });
    }

    if let Some(ingredients) = ingredient_names.filter(|i| !i.is_empty()) {
        let clauses: Vec<Bson> = ingredients
            .iter()
            .map(|ingredient| {
                Bson::Document(doc! {
                    "ingredients.name": {
                        "$regex": regex::escape(ingredient),
                        "$options": "i",
                    }
                })
            })
            .collect();
        criteria.insert("$and", clauses);
    }

    criteria
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CuisineRef, Ingredient, Recipe, TagRef};
    use mongodb::bson::oid::ObjectId;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn recipe(name: &str, tags: &[&str], ingredients: &[&str]) -> Recipe {
        Recipe {
            id: Some(ObjectId::new()),
            name: name.to_string(),
            cuisine: CuisineRef {
                id: ObjectId::new(),
                name: "Thai".to_string(),
            },
            prep_time: 10,
            cook_time: 20,
            servings: 2,
            ingredients: ingredients
                .iter()
                .map(|i| Ingredient {
                    name: i.to_string(),
                    quantity: "1".to_string(),
                    unit: "".to_string(),
                })
                .collect(),
            instructions: vec!["Cook.".to_string()],
            tags: tags
                .iter()
                .map(|t| TagRef {
                    id: ObjectId::new(),
                    name: t.to_string(),
                })
                .collect(),
            reviews: None,
        }
    }

    /// Evaluates a built predicate against an in-memory recipe, interpreting
    /// exactly the operators `build_criteria` emits. The `$regex` patterns are
    /// escaped literals, so for plain-word fixtures a case-insensitive
    /// substring test is an exact interpretation.
    fn matches(criteria: &Document, recipe: &Recipe) -> bool {
        for (key, value) in criteria {
            let ok = match key.as_str() {
                "name" => {
                    let pattern = value
                        .as_document()
                        .and_then(|d| d.get_str("$regex").ok())
                        .unwrap();
                    recipe
                        .name
                        .to_lowercase()
                        .contains(&pattern.to_lowercase())
                }
                "tags.name" => {
                    let wanted = value
                        .as_document()
                        .and_then(|d| d.get_array("$in").ok())
                        .unwrap();
                    recipe.tags.iter().any(|tag| {
                        wanted
                            .iter()
                            .any(|w| w.as_str() == Some(tag.name.as_str()))
                    })
                }
                "$and" => value.as_array().unwrap().iter().all(|clause| {
                    let pattern = clause
                        .as_document()
                        .and_then(|d| d.get_document("ingredients.name").ok())
                        .and_then(|d| d.get_str("$regex").ok())
                        .unwrap();
                    recipe.ingredients.iter().any(|ingredient| {
                        ingredient
                            .name
                            .to_lowercase()
                            .contains(&pattern.to_lowercase())
                    })
                }),
                other => panic!("unexpected criteria key: {other}"),
            };
            if !ok {
                return false;
            }
        }
        true
    }

    fn fixtures() -> Vec<Recipe> {
        vec![
            recipe(
                "Butter Chicken",
                &["spicy", "dinner"],
                &["chicken breast", "garlic", "yogurt"],
            ),
            recipe("Garden Salad", &["vegan"], &["lettuce", "tomato"]),
            recipe("Chicken Soup", &["comfort"], &["chicken", "onion"]),
        ]
    }

    #[test]
    fn no_arguments_produces_empty_predicate_matching_everything() {
        let criteria = build_criteria(None, None, None);
        assert!(criteria.is_empty());
        for r in fixtures() {
            assert!(matches(&criteria, &r));
        }
    }

    #[test]
    fn empty_inputs_are_treated_as_absent() {
        let criteria = build_criteria(Some("  "), Some(&[]), Some(&[]));
        assert!(criteria.is_empty());
    }

    #[test]
    fn name_is_case_insensitive_substring() {
        let criteria = build_criteria(Some("chick"), None, None);
        let hits: Vec<bool> = fixtures().iter().map(|r| matches(&criteria, r)).collect();
        assert_eq!(hits, vec![true, false, true]);
    }

    #[test]
    fn tags_use_or_semantics() {
        let criteria = build_criteria(None, Some(&strings(&["quick", "vegan"])), None);
        let fixtures = fixtures();
        // Tagged only "vegan": one match is enough.
        assert!(matches(&criteria, &fixtures[1]));
        // Tagged "spicy"/"dinner": no overlap.
        assert!(!matches(&criteria, &fixtures[0]));
    }

    #[test]
    fn ingredients_use_and_of_substrings() {
        let criteria = build_criteria(None, None, Some(&strings(&["chicken", "garlic"])));
        let fixtures = fixtures();
        // "chicken breast" contains "chicken", and "garlic" is present.
        assert!(matches(&criteria, &fixtures[0]));
        // Has "chicken" but no "garlic".
        assert!(!matches(&criteria, &fixtures[2]));
    }

    #[test]
    fn ingredient_search_requires_all_terms() {
        let criteria = build_criteria(None, None, Some(&strings(&["chicken", "yogurt"])));
        let hits: Vec<bool> = fixtures().iter().map(|r| matches(&criteria, r)).collect();
        assert_eq!(hits, vec![true, false, false]);
    }

    #[test]
    fn regex_metacharacters_in_input_are_escaped() {
        let criteria = build_criteria(Some("a.c"), None, None);
        let pattern = criteria
            .get_document("name")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(pattern, r"a\.c");
    }

    #[test]
    fn combined_criteria_contain_all_clauses() {
        let criteria = build_criteria(
            Some("soup"),
            Some(&strings(&["comfort"])),
            Some(&strings(&["onion"])),
        );
        assert!(criteria.contains_key("name"));
        assert!(criteria.contains_key("tags.name"));
        assert!(criteria.contains_key("$and"));
        let fixtures = fixtures();
        assert!(matches(&criteria, &fixtures[2]));
        assert!(!matches(&criteria, &fixtures[0]));
    }
}
