//! Candidate recipe validation and normalization.
//!
//! Checks a [`RecipeDraft`] against the current vocabulary and produces the
//! persistable [`Recipe`] with embedded cuisine/tag snapshots. Performs no
//! writes of its own; a failed validation has no side effects.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{Cuisine, CuisineRef, Recipe, RecipeDraft, Tag, TagRef};

/// Read access to the current cuisine/tag vocabulary.
///
/// `tags_by_names` is a containment lookup: it returns every tag whose name
/// appears in `names`, in storage order, with no per-item correspondence to
/// the input.
#[async_trait]
pub trait VocabularySource: Send + Sync {
    async fn cuisine_by_name(&self, name: &str) -> Result<Option<Cuisine>, ApiError>;
    async fn tags_by_names(&self, names: &[String]) -> Result<Vec<Tag>, ApiError>;
}

/// Validate `draft` and normalize it into a persistable [`Recipe`].
///
/// Checks run in order and short-circuit on the first failure:
/// 1. presence — every field non-empty, times/servings non-zero,
/// 2. cuisine resolution by exact name,
/// 3. tag resolution by containment lookup.
pub async fn validate(
    vocab: &dyn VocabularySource,
    draft: &RecipeDraft,
) -> Result<Recipe, ApiError> {
    if draft.name.trim().is_empty()
        || draft.cuisine.trim().is_empty()
        || draft.ingredients.is_empty()
        || draft.instructions.is_empty()
        || draft.tags.is_empty()
        || draft.prep_time == 0
        || draft.cook_time == 0
        || draft.servings == 0
    {
        return Err(ApiError::MissingFields(
            "All fields are required: name, cuisine, prepTime, cookTime, servings, \
             ingredients, instructions, tags"
                .to_string(),
        ));
    }

    let cuisine = vocab
        .cuisine_by_name(&draft.cuisine)
        .await?
        .ok_or_else(|| {
            ApiError::InvalidCuisine(format!("Cuisine '{}' does not exist", draft.cuisine))
        })?;

    let resolved = vocab.tags_by_names(&draft.tags).await?;

    // Count comparison only: a requested name with no match, or duplicate
    // names collapsing into a single resolved tag, both surface as a length
    // mismatch. There is no per-item verification.
    if resolved.len() != draft.tags.len() {
        return Err(ApiError::InvalidTags(
            "One or more tags do not exist".to_string(),
        ));
    }

    Ok(Recipe {
        id: None,
        name: draft.name.clone(),
        cuisine: CuisineRef {
            id: cuisine.id,
            name: cuisine.name,
        },
        prep_time: draft.prep_time,
        cook_time: draft.cook_time,
        servings: draft.servings,
        ingredients: draft.ingredients.clone(),
        instructions: draft.instructions.clone(),
        // Lookup-result order, not the requested order.
        tags: resolved
            .into_iter()
            .map(|t| TagRef {
                id: t.id,
                name: t.name,
            })
            .collect(),
        reviews: None,
    })
}
