use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Ingredient, Recipe, Review};

/// Wire form of an embedded {id, name} snapshot.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SnapshotResponse {
    /// Hex object id of the source entity at write time
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub user: String,
    pub rating: i32,
    pub comment: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_hex(),
            user: review.user,
            rating: review.rating,
            comment: review.comment,
            created_at: review
                .created_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}

/// Wire form of a stored recipe.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub cuisine: SnapshotResponse,
    /// Minutes
    pub prep_time: u32,
    /// Minutes
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<SnapshotResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<ReviewResponse>>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: recipe.name,
            cuisine: SnapshotResponse {
                id: recipe.cuisine.id.to_hex(),
                name: recipe.cuisine.name,
            },
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            servings: recipe.servings,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            tags: recipe
                .tags
                .into_iter()
                .map(|t| SnapshotResponse {
                    id: t.id.to_hex(),
                    name: t.name,
                })
                .collect(),
            reviews: recipe
                .reviews
                .map(|reviews| reviews.into_iter().map(Into::into).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CuisineRef, TagRef};
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn response_uses_hex_ids_and_camel_case() {
        let cuisine_id = ObjectId::new();
        let recipe = Recipe {
            id: Some(ObjectId::new()),
            name: "Tom Yum".into(),
            cuisine: CuisineRef {
                id: cuisine_id,
                name: "Thai".into(),
            },
            prep_time: 10,
            cook_time: 20,
            servings: 2,
            ingredients: vec![],
            instructions: vec![],
            tags: vec![TagRef {
                id: ObjectId::new(),
                name: "spicy".into(),
            }],
            reviews: None,
        };

        let response = RecipeResponse::from(recipe);
        assert_eq!(response.cuisine.id, cuisine_id.to_hex());

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("prepTime").is_some());
        assert!(json.get("reviews").is_none());
    }
}
