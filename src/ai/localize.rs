//! Result localization.
//!
//! The one AI contract with no schema enforcement: the reply is free-form
//! display text in the target language, treated as opaque and never re-parsed.

use serde::Serialize;

use crate::error::ApiError;
use crate::llm::LlmProvider;

/// Render the localization prompt around the canonical JSON form of the
/// records.
pub fn render_localize_prompt(recipes_json: &str, language: &str) -> String {
    format!(
        r#"You are a recipe presentation assistant. Present the following recipes to the user in {language}.

Recipes:
{recipes_json}

Write a friendly, human-readable rendering of these recipes in {language}: names, cuisine, timings, servings, ingredients and instructions. Translate everything into {language}. Do not output JSON or any other structured format."#,
    )
}

/// Render `recipes` as human-readable text in `language`.
pub async fn localize<T: Serialize>(
    provider: &dyn LlmProvider,
    recipes: &[T],
    language: &str,
) -> Result<String, ApiError> {
    let rendered = serde_json::to_string_pretty(recipes)
        .map_err(|e| ApiError::Unexpected(format!("failed to serialize recipes: {e}")))?;
    let prompt = render_localize_prompt(&rendered, language);
    Ok(provider.generate(&prompt, None).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeProvider;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Fixture {
        name: &'static str,
    }

    #[test]
    fn prompt_embeds_records_and_language() {
        let prompt = render_localize_prompt(r#"[{"name": "Tom Yum"}]"#, "Spanish");
        assert!(prompt.contains("Tom Yum"));
        assert!(prompt.contains("Spanish"));
        assert!(prompt.contains("Do not output JSON"));
    }

    #[tokio::test]
    async fn localize_returns_raw_text() {
        let provider = FakeProvider::with_response(
            "recipe presentation assistant",
            "Aquí tienes una receta de Tom Yum…",
        );

        let text = localize(&provider, &[Fixture { name: "Tom Yum" }], "Spanish")
            .await
            .unwrap();

        // Opaque text, no parsing applied.
        assert_eq!(text, "Aquí tienes una receta de Tom Yum…");
    }
}
