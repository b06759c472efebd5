//! Recipe extraction from free-text prose.

use serde_json::{json, Value};

use crate::error::ApiError;
use crate::llm::LlmProvider;
use crate::models::RecipeDraft;

/// JSON schema enforced on the extractor's reply. All eight fields are
/// required; a reply missing any of them is a contract violation.
pub fn extract_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "cuisine": { "type": "string" },
            "prepTime": { "type": "integer" },
            "cookTime": { "type": "integer" },
            "servings": { "type": "integer" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" },
                        "quantity": { "type": "string" },
                        "unit": { "type": "string" }
                    },
                    "required": ["name", "quantity", "unit"]
                }
            },
            "instructions": { "type": "array", "items": { "type": "string" } },
            "tags": { "type": "array", "items": { "type": "string" } }
        },
        "required": [
            "name", "cuisine", "prepTime", "cookTime", "servings",
            "ingredients", "instructions", "tags"
        ]
    })
}

/// Render the extraction prompt with the available vocabulary inlined.
pub fn render_extract_prompt(
    text: &str,
    available_cuisines: &[String],
    available_tags: &[String],
) -> String {
    format!(
        r#"You are a recipe extraction assistant. Convert the recipe description below into a structured recipe.

Recipe description:
{text}

Available cuisines: {cuisines}
Available tags: {tags}

Rules:
- The recipe name uses standard capitalization.
- Pick the cuisine from the available list only.
- prepTime and cookTime are in minutes; infer them when the text does not state them.
- Infer servings when the text does not state it.
- Decompose each ingredient into name (lowercase), quantity (free text, may be non-numeric such as "to taste") and unit (may be an empty string).
- Rewrite the instructions as complete, capitalized sentences ending with a period.
- Pick tags from the available list only, lowercase.

Respond with JSON only: {{"name": "", "cuisine": "", "prepTime": 0, "cookTime": 0, "servings": 0, "ingredients": [{{"name": "", "quantity": "", "unit": ""}}], "instructions": [], "tags": []}}"#,
        text = text,
        cuisines = available_cuisines.join(", "),
        tags = available_tags.join(", "),
    )
}

/// Extract a [`RecipeDraft`] from free-text prose.
///
/// The extractor does not self-validate: out-of-vocabulary cuisine or tag
/// values in the reply are caught downstream by the recipe validator.
pub async fn extract(
    provider: &dyn LlmProvider,
    text: &str,
    available_cuisines: &[String],
    available_tags: &[String],
) -> Result<RecipeDraft, ApiError> {
    let prompt = render_extract_prompt(text, available_cuisines, available_tags);
    let schema = extract_schema();
    let raw = provider.generate(&prompt, Some(&schema)).await?;
    super::parse_reply(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    const REPLY: &str = r#"{
        "name": "Tom Yum",
        "cuisine": "Thai",
        "prepTime": 10,
        "cookTime": 20,
        "servings": 2,
        "ingredients": [
            {"name": "shrimp", "quantity": "200", "unit": "g"},
            {"name": "fish sauce", "quantity": "to taste", "unit": ""}
        ],
        "instructions": ["Boil the stock.", "Add the shrimp."],
        "tags": ["spicy"]
    }"#;

    #[test]
    fn prompt_includes_text_and_vocabulary() {
        let prompt = render_extract_prompt(
            "Grandma's hot and sour soup with shrimp",
            &strings(&["Thai", "Italian"]),
            &strings(&["spicy", "soup"]),
        );

        assert!(prompt.contains("Grandma's hot and sour soup with shrimp"));
        assert!(prompt.contains("Thai, Italian"));
        assert!(prompt.contains("spicy, soup"));
        assert!(prompt.contains("prepTime"));
    }

    #[test]
    fn schema_requires_all_eight_fields() {
        let schema = extract_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 8);
    }

    #[tokio::test]
    async fn extract_parses_structured_reply() {
        let provider = FakeProvider::with_response("recipe extraction assistant", REPLY);

        let draft = extract(
            &provider,
            "hot and sour shrimp soup",
            &strings(&["Thai"]),
            &strings(&["spicy"]),
        )
        .await
        .unwrap();

        assert_eq!(draft.name, "Tom Yum");
        assert_eq!(draft.cuisine, "Thai");
        assert_eq!(draft.prep_time, 10);
        assert_eq!(draft.ingredients.len(), 2);
        assert_eq!(draft.ingredients[1].quantity, "to taste");
        assert_eq!(draft.ingredients[1].unit, "");
        assert_eq!(draft.tags, vec!["spicy"]);
    }

    #[tokio::test]
    async fn non_json_reply_is_malformed_output() {
        let provider = FakeProvider::with_response(
            "recipe extraction assistant",
            "Sounds delicious! Here's the recipe you asked for.",
        );

        let err = extract(&provider, "anything", &[], &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::MalformedAiOutput(_)));
    }
}
