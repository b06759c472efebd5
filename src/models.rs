use mongodb::bson::oid::ObjectId;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Embedded cuisine snapshot, copied from the `cuisines` collection at write
/// time. Not kept in sync with later renames of the source entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuisineRef {
    pub id: ObjectId,
    pub name: String,
}

/// Embedded tag snapshot, same copy-on-write semantics as [`CuisineRef`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRef {
    pub id: ObjectId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub name: String,
    /// Free text; may be non-numeric, e.g. "to taste".
    pub quantity: String,
    /// Possibly empty.
    pub unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ObjectId,
    pub user: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime,
}

/// Stored recipe document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub cuisine: CuisineRef,
    /// Minutes.
    pub prep_time: u32,
    /// Minutes.
    pub cook_time: u32,
    pub servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub tags: Vec<TagRef>,
    /// Absent until the first review, then append-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

/// Reference entity; lifecycle owned by external seed tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cuisine {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

/// Reference entity; lifecycle owned by external seed tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub token_hash: String,
    pub expires_at: DateTime,
}

/// Candidate recipe as submitted by a client or produced by the AI extractor.
///
/// All fields default so that an incomplete payload deserializes and is then
/// rejected by the validator with `MissingFields`, rather than failing at the
/// JSON layer with a less useful message.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDraft {
    #[serde(default)]
    pub name: String,
    /// Cuisine name; resolved against the vocabulary during validation.
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
    #[serde(default)]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Tag names; resolved against the vocabulary during validation.
    #[serde(default)]
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_tolerates_missing_fields() {
        let draft: RecipeDraft = serde_json::from_str(r#"{"name": "Toast"}"#).unwrap();
        assert_eq!(draft.name, "Toast");
        assert_eq!(draft.cuisine, "");
        assert_eq!(draft.prep_time, 0);
        assert!(draft.ingredients.is_empty());
    }

    #[test]
    fn draft_uses_camel_case_keys() {
        let draft: RecipeDraft = serde_json::from_str(
            r#"{"name": "Tom Yum", "cuisine": "Thai", "prepTime": 10, "cookTime": 20, "servings": 2}"#,
        )
        .unwrap();
        assert_eq!(draft.prep_time, 10);
        assert_eq!(draft.cook_time, 20);
    }

    #[test]
    fn recipe_id_is_skipped_when_absent() {
        let recipe = Recipe {
            id: None,
            name: "Toast".into(),
            cuisine: CuisineRef {
                id: ObjectId::new(),
                name: "French".into(),
            },
            prep_time: 5,
            cook_time: 5,
            servings: 1,
            ingredients: vec![],
            instructions: vec![],
            tags: vec![],
            reviews: None,
        };
        let doc = mongodb::bson::to_document(&recipe).unwrap();
        assert!(!doc.contains_key("_id"));
        assert!(!doc.contains_key("reviews"));
    }
}
