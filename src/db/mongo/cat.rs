//! MongoDB CatRepository implementation.

use futures_util::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{Bson, Document, doc};

use crate::db::{Cat, CatId, CatRepository, DbError, DbResult};

/// Driver-backed cat repository over a single collection.
pub struct MongoCatRepository {
    pub(crate) collection: Collection<Document>,
}

impl CatRepository for MongoCatRepository {
    async fn find_all(&self) -> DbResult<Vec<Cat>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        let docs: Vec<Document> = cursor.try_collect().await.map_err(|e| DbError::Database {
            message: e.to_string(),
        })?;

        docs.iter().map(Cat::from_document).collect()
    }

    async fn insert_one(&self, cat: &Cat) -> DbResult<CatId> {
        let result = self
            .collection
            .insert_one(cat.to_document())
            .await
            .map_err(|e| DbError::Database {
                message: e.to_string(),
            })?;

        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            Bson::String(s) => s,
            other => other.to_string(),
        })
    }
}
