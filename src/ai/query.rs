//! Natural-language query translation.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::llm::LlmProvider;

/// Structured search filter produced from a natural-language query.
///
/// Values are advisory: the model is instructed to stay inside the supplied
/// vocabulary, but it may not follow instructions, so consumers normalize and
/// validate defensively before use. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAiQuery {
    pub cuisines: Vec<String>,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    /// Language the query was written in, inferred from its text.
    pub user_language: String,
}

/// JSON schema enforced on the translator's reply.
pub fn query_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "cuisines": { "type": "array", "items": { "type": "string" } },
            "tags": { "type": "array", "items": { "type": "string" } },
            "ingredients": { "type": "array", "items": { "type": "string" } },
            "userLanguage": { "type": "string" }
        },
        "required": ["cuisines", "tags", "ingredients", "userLanguage"]
    })
}

/// Render the translation prompt with the live vocabulary inlined.
pub fn render_query_prompt(
    query: &str,
    tags: &[String],
    cuisines: &[String],
    ingredients: &[String],
) -> String {
    format!(
        r#"You are a recipe search assistant. Convert the user's query into structured search filters.

User query: "{query}"

Known tags: {tags}
Known cuisines: {cuisines}
Known ingredients: {ingredients}

Rules:
- Only use tags, cuisines and ingredients from the lists above.
- Ingredient names must be lowercase.
- Cuisine names are UPPERCASED when they are a single word; multi-word cuisines use proper capitalization.
- Expand broader terms into the concrete vocabulary items they cover (for example, a protein class into the matching known ingredients). A cuisine mention should also pull in the tags and ingredients commonly associated with it, and vice versa.
- Detect the language the query is written in and report it as userLanguage. If several languages are mixed, use the dominant one.

Respond with JSON only: {{"cuisines": [], "tags": [], "ingredients": [], "userLanguage": ""}}"#,
        query = query,
        tags = tags.join(", "),
        cuisines = cuisines.join(", "),
        ingredients = ingredients.join(", "),
    )
}

/// Translate a natural-language query into a [`StructuredAiQuery`] using the
/// current vocabulary.
///
/// Ingredient names in the reply are lowercased here regardless of what the
/// model returned; tag and cuisine names pass through unchanged and are
/// subject to the same predicates as manually supplied filters.
pub async fn translate(
    provider: &dyn LlmProvider,
    query: &str,
    tags: &[String],
    cuisines: &[String],
    ingredients: &[String],
) -> Result<StructuredAiQuery, ApiError> {
    let prompt = render_query_prompt(query, tags, cuisines, ingredients);
    let schema = query_schema();
    let raw = provider.generate(&prompt, Some(&schema)).await?;
    let mut parsed: StructuredAiQuery = super::parse_reply(&raw)?;

    for name in &mut parsed.ingredients {
        *name = name.to_lowercase();
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn prompt_includes_query_and_vocabulary() {
        let prompt = render_query_prompt(
            "something spicy with chicken",
            &strings(&["spicy", "quick"]),
            &strings(&["Thai", "Sri Lankan"]),
            &strings(&["chicken", "garlic"]),
        );

        assert!(prompt.contains("something spicy with chicken"));
        assert!(prompt.contains("spicy, quick"));
        assert!(prompt.contains("Thai, Sri Lankan"));
        assert!(prompt.contains("chicken, garlic"));
        assert!(prompt.contains("userLanguage"));
    }

    #[test]
    fn schema_requires_all_four_fields() {
        let schema = query_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 4);
    }

    #[tokio::test]
    async fn translate_parses_structured_reply() {
        let provider = FakeProvider::with_response(
            "recipe search assistant",
            r#"{"cuisines": ["Thai"], "tags": ["spicy"], "ingredients": ["chicken"], "userLanguage": "English"}"#,
        );

        let result = translate(
            &provider,
            "spicy chicken",
            &strings(&["spicy"]),
            &strings(&["Thai"]),
            &strings(&["chicken"]),
        )
        .await
        .unwrap();

        assert_eq!(result.cuisines, vec!["Thai"]);
        assert_eq!(result.tags, vec!["spicy"]);
        assert_eq!(result.user_language, "English");
    }

    #[tokio::test]
    async fn translate_lowercases_ingredients_defensively() {
        let provider = FakeProvider::with_response(
            "recipe search assistant",
            r#"{"cuisines": [], "tags": [], "ingredients": ["Chicken", "GARLIC"], "userLanguage": "English"}"#,
        );

        let result = translate(&provider, "chicken and garlic", &[], &[], &[])
            .await
            .unwrap();

        assert_eq!(result.ingredients, vec!["chicken", "garlic"]);
    }

    #[tokio::test]
    async fn malformed_reply_is_a_contract_violation() {
        let provider =
            FakeProvider::with_response("recipe search assistant", "I could not parse that.");

        let err = translate(&provider, "anything", &[], &[], &[])
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::MalformedAiOutput(_)));
    }

    #[tokio::test]
    async fn empty_but_valid_reply_is_not_an_error() {
        let provider = FakeProvider::with_response(
            "recipe search assistant",
            r#"{"cuisines": [], "tags": [], "ingredients": [], "userLanguage": "English"}"#,
        );

        let result = translate(&provider, "anything at all", &[], &[], &[])
            .await
            .unwrap();

        assert!(result.cuisines.is_empty());
        assert!(result.tags.is_empty());
        assert!(result.ingredients.is_empty());
    }
}
