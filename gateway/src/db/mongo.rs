use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Bson, Document},
    options::ClientOptions,
    Client, Collection, Database,
};
use primitives::{ClusterField, ClusterFilter, WaterfallDocument};

use super::{DocumentStore, StoreError};

/// Used when the connection string does not name a database.
pub const DEFAULT_DATABASE: &str = "crosspromo_assets";

/// MongoDB backed [`DocumentStore`].
///
/// Cloning is cheap, the underlying [`Client`] is shared.
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
    collection: Collection<Document>,
}

impl MongoStore {
    /// Parses the connection string and sets up the client.
    ///
    /// No connection is made until the first operation, see [`MongoStore::ping`].
    pub async fn connect(url: &str, collection: &str) -> Result<Self, StoreError> {
        let options = ClientOptions::parse(url).await?;
        let database_name = options
            .default_database
            .clone()
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&database_name);

        Ok(Self {
            collection: database.collection(collection),
            database,
        })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }, None).await?;

        Ok(())
    }

    pub fn database_name(&self) -> &str {
        self.database.name()
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find(&self, filter: &ClusterFilter) -> Result<Vec<WaterfallDocument>, StoreError> {
        let cursor = self
            .collection
            .find(filter_document(filter), None)
            .await?;

        Ok(cursor.map_ok(waterfall_document).try_collect().await?)
    }

    async fn distinct(&self, field: ClusterField) -> Result<Vec<String>, StoreError> {
        let values = self.collection.distinct(field.path(), None, None).await?;

        Ok(string_values(values))
    }
}

/// Decodes a stored document without failing.
///
/// The document is first converted to relaxed extended JSON: numbers of any BSON type
/// become JSON numbers and BSON-only values (e.g. binaries) become `$`-prefixed objects,
/// which the lenient waterfall views ignore.
fn waterfall_document(document: Document) -> WaterfallDocument {
    let json = Bson::Document(document).into_relaxed_extjson();

    serde_json::from_value(json).unwrap_or_default()
}

/// An equality query on the dotted `Cluster` paths of the set constraints.
fn filter_document(filter: &ClusterFilter) -> Document {
    filter
        .constraints()
        .map(|(field, value)| (field.path().to_string(), Bson::from(value)))
        .collect()
}

/// Only string values are kept, e.g. `null`s of documents without the field are skipped.
fn string_values(values: Vec<Bson>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|value| match value {
            Bson::String(string) => Some(string),
            _ => None,
        })
        .collect()
}
