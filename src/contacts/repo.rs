use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    results::{DeleteResult, InsertOneResult, UpdateResult},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

const COLLECTION: &str = "contacts";

/// Contact document as stored in the collection. `_id` is assigned by the
/// store on insert and omitted from replacements, so it never changes for
/// the lifetime of the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub favorite_color: String,
    pub birthday: String,
}

fn contacts(db: &Database) -> Collection<Contact> {
    db.collection::<Contact>(COLLECTION)
}

/// Every document in the collection, no filter, natural order.
pub async fn list_all(db: &Database) -> anyhow::Result<Vec<Contact>> {
    let cursor = contacts(db).find(None, None).await?;
    let all = cursor.try_collect().await?;
    Ok(all)
}

pub async fn find_by_id(db: &Database, id: ObjectId) -> anyhow::Result<Option<Contact>> {
    let found = contacts(db).find_one(doc! { "_id": id }, None).await?;
    Ok(found)
}

pub async fn insert(db: &Database, contact: &Contact) -> anyhow::Result<InsertOneResult> {
    let result = contacts(db).insert_one(contact, None).await?;
    Ok(result)
}

/// Whole-record replace keyed on `_id`; the replacement carries no id.
pub async fn replace(
    db: &Database,
    id: ObjectId,
    contact: &Contact,
) -> anyhow::Result<UpdateResult> {
    let result = contacts(db)
        .replace_one(doc! { "_id": id }, contact, None)
        .await?;
    Ok(result)
}

pub async fn delete(db: &Database, id: ObjectId) -> anyhow::Result<DeleteResult> {
    let result = contacts(db).delete_one(doc! { "_id": id }, None).await?;
    Ok(result)
}
