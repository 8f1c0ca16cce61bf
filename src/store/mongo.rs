use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{DateTime, doc};
use futures_util::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{EmployeeStore, StoreError};
use crate::model::employee::{Employee, EmployeeUpdate, NewEmployee};

/// Stored document shape. Field names follow Mongoose conventions (`_id`
/// ObjectId, camelCase timestamps) so a collection written by a Mongoose app
/// stays readable.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EmployeeDoc {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    location: String,
    position: String,
    salary: String,
    created_at: DateTime,
    updated_at: DateTime,
}

impl From<EmployeeDoc> for Employee {
    fn from(doc: EmployeeDoc) -> Self {
        Employee {
            id: doc.id.to_hex(),
            name: doc.name,
            location: doc.location,
            position: doc.position,
            salary: doc.salary,
            created_at: doc.created_at.to_chrono(),
            updated_at: doc.updated_at.to_chrono(),
        }
    }
}

#[derive(Clone)]
pub struct MongoEmployeeStore {
    client: Client,
    collection: Collection<EmployeeDoc>,
}

impl MongoEmployeeStore {
    /// Connects and pings the server so a bad URL fails at startup rather
    /// than on the first request.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(url).await?;
        // Fall back to `test` when the connection string names no database,
        // as Mongoose does.
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database("test"));
        db.run_command(doc! { "ping": 1 }).await?;

        let collection = db.collection::<EmployeeDoc>("employees");
        Ok(Self { client, collection })
    }

    pub async fn close(self) {
        self.client.shutdown().await;
    }
}

fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
    Ok(ObjectId::parse_str(id)?)
}

#[async_trait]
impl EmployeeStore for MongoEmployeeStore {
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let docs: Vec<EmployeeDoc> = self.collection.find(doc! {}).await?.try_collect().await?;
        Ok(docs.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Employee, StoreError> {
        let oid = parse_id(id)?;
        let doc = self
            .collection
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(doc.into())
    }

    async fn insert(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        new.validate().map_err(StoreError::Validation)?;

        let now = DateTime::now();
        let doc = EmployeeDoc {
            id: ObjectId::new(),
            name: new.name,
            location: new.location,
            position: new.position,
            salary: new.salary,
            created_at: now,
            updated_at: now,
        };
        self.collection.insert_one(&doc).await?;
        debug!(id = %doc.id, "inserted employee");

        Ok(doc.into())
    }

    async fn update_by_id(
        &self,
        id: &str,
        changes: EmployeeUpdate,
    ) -> Result<Employee, StoreError> {
        changes.validate().map_err(StoreError::Validation)?;
        let oid = parse_id(id)?;

        let mut set = doc! { "updatedAt": DateTime::now() };
        if let Some(name) = changes.name {
            set.insert("name", name);
        }
        if let Some(location) = changes.location {
            set.insert("location", location);
        }
        if let Some(position) = changes.position {
            set.insert("position", position);
        }
        if let Some(salary) = changes.salary {
            set.insert("salary", salary);
        }

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": oid }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound)?;
        Ok(updated.into())
    }

    async fn delete_by_id(&self, id: &str) -> Result<Employee, StoreError> {
        let oid = parse_id(id)?;
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": oid })
            .await?
            .ok_or(StoreError::NotFound)?;
        debug!(id = %deleted.id, "deleted employee");
        Ok(deleted.into())
    }
}
