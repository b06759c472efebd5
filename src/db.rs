use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, Database, IndexModel};

use crate::error::ApiError;
use crate::models::{Cuisine, Recipe, Session, Tag, User};
use crate::validate::VocabularySource;

/// Handle to the document store.
///
/// Constructed once at startup and injected into handlers as shared state;
/// there is no module-level connection.
pub struct Db {
    inner: Database,
}

impl Db {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            inner: client.database(database),
        })
    }

    pub fn recipes(&self) -> Collection<Recipe> {
        self.inner.collection("recipes")
    }

    pub fn cuisines(&self) -> Collection<Cuisine> {
        self.inner.collection("cuisines")
    }

    pub fn tags(&self) -> Collection<Tag> {
        self.inner.collection("tags")
    }

    pub fn users(&self) -> Collection<User> {
        self.inner.collection("users")
    }

    pub fn sessions(&self) -> Collection<Session> {
        self.inner.collection("sessions")
    }

    /// Unique indexes backing the name/username lookups. Idempotent; run at
    /// startup.
    pub async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        let unique = IndexOptions::builder().unique(true).build();

        self.cuisines()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "name": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        self.tags()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "name": 1 })
                    .options(unique.clone())
                    .build(),
            )
            .await?;
        self.users()
            .create_index(
                IndexModel::builder()
                    .keys(doc! { "username": 1 })
                    .options(unique)
                    .build(),
            )
            .await?;

        Ok(())
    }

    /// Current cuisine vocabulary. Re-fetched per request, never cached.
    pub async fn cuisine_names(&self) -> Result<Vec<String>, mongodb::error::Error> {
        let values = self.cuisines().distinct("name", doc! {}).await?;
        Ok(values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect())
    }

    /// Current tag vocabulary.
    pub async fn tag_names(&self) -> Result<Vec<String>, mongodb::error::Error> {
        let values = self.tags().distinct("name", doc! {}).await?;
        Ok(values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect())
    }

    /// Every distinct ingredient name currently appearing in a recipe.
    pub async fn ingredient_names(&self) -> Result<Vec<String>, mongodb::error::Error> {
        let values = self.recipes().distinct("ingredients.name", doc! {}).await?;
        Ok(values
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_owned))
            .collect())
    }
}

#[async_trait::async_trait]
impl VocabularySource for Db {
    async fn cuisine_by_name(&self, name: &str) -> Result<Option<Cuisine>, ApiError> {
        Ok(self.cuisines().find_one(doc! { "name": name }).await?)
    }

    async fn tags_by_names(&self, names: &[String]) -> Result<Vec<Tag>, ApiError> {
        let cursor = self
            .tags()
            .find(doc! { "name": { "$in": names.to_vec() } })
            .await?;
        Ok(cursor.try_collect().await?)
    }
}

/// True when the error is a unique-index violation (Mongo error code 11000).
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(we)) if we.code == 11000
    )
}
