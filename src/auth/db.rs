use mongodb::bson::oid::ObjectId;
use mongodb::bson::{doc, DateTime};

use crate::db::Db;
use crate::models::{Session, User};

use super::crypto::{generate_token, hash_token};

const SESSION_TTL_MS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Mint a session for `user_id` and return the raw bearer token.
pub async fn create_session(db: &Db, user_id: ObjectId) -> Result<String, mongodb::error::Error> {
    let token = generate_token();
    let expires_at = DateTime::from_millis(DateTime::now().timestamp_millis() + SESSION_TTL_MS);

    let session = Session {
        id: None,
        user_id,
        token_hash: hash_token(&token),
        expires_at,
    };

    db.sessions().insert_one(&session).await?;

    Ok(token)
}

/// Resolve a raw bearer token to its user, if the session is still live.
pub async fn get_user_from_token(db: &Db, token: &str) -> Option<User> {
    let token_hash = hash_token(token);

    let session = db
        .sessions()
        .find_one(doc! {
            "token_hash": token_hash,
            "expires_at": { "$gt": DateTime::now() },
        })
        .await
        .ok()??;

    db.users()
        .find_one(doc! { "_id": session.user_id })
        .await
        .ok()?
}
