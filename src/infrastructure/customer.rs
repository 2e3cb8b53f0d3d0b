use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Client, Collection,
};
use tracing::debug;

use crate::domain::customer::{Customer, CustomerId, CustomerRepository};
use crate::domain::{DataAccessError, Entity};
use crate::infrastructure::{collection, WriteOutcome};

#[derive(Clone, Debug)]
pub struct MongoCustomerRepository {
    collection: Collection<Customer>,
}

impl MongoCustomerRepository {
    /// 既存のクライアントからリポジトリを作成する。通信は行わない
    pub fn new(client: &Client, database: &str) -> Self {
        Self {
            collection: collection::<Customer>(&client.database(database)),
        }
    }

    /// 接続文字列からクライアントを作成する
    ///
    /// 接続確認は最初の操作まで行われない。
    pub async fn connect(uri: &str, database: &str) -> Result<Self, DataAccessError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(&client, database))
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }
}

fn id_filter(id: CustomerId) -> Document {
    doc! { "_id": *id }
}

#[async_trait]
impl CustomerRepository for MongoCustomerRepository {
    async fn create(&self, customer: &Customer) -> Result<(), DataAccessError> {
        self.collection.insert_one(customer).await?;
        debug!(collection = Customer::ENTITY_NAME, id = %customer.id(), "customer created");
        Ok(())
    }

    async fn create_many(&self, customers: &[Customer]) -> Result<(), DataAccessError> {
        if customers.is_empty() {
            return Ok(());
        }
        let result = self.collection.insert_many(customers).await?;
        debug!(
            collection = Customer::ENTITY_NAME,
            inserted = result.inserted_ids.len(),
            "customers created"
        );
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, DataAccessError> {
        let customers: Vec<Customer> = self.collection.find(doc! {}).await?.try_collect().await?;
        debug!(collection = Customer::ENTITY_NAME, count = customers.len(), "customers found");
        Ok(customers)
    }

    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DataAccessError> {
        let customer = self.collection.find_one(id_filter(id)).await?;
        debug!(
            collection = Customer::ENTITY_NAME,
            %id,
            found = customer.is_some(),
            "customer lookup"
        );
        Ok(customer)
    }

    async fn update(&self, id: CustomerId, customer: &Customer) -> Result<bool, DataAccessError> {
        let result = self
            .collection
            .replace_one(id_filter(id), customer)
            .await?;
        let outcome = WriteOutcome::new(self.collection.write_concern(), result.modified_count);
        debug!(
            collection = Customer::ENTITY_NAME,
            %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "customer replaced"
        );
        Ok(outcome.is_single())
    }

    async fn delete(&self, id: CustomerId) -> Result<bool, DataAccessError> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        let outcome = WriteOutcome::new(self.collection.write_concern(), result.deleted_count);
        debug!(
            collection = Customer::ENTITY_NAME,
            %id,
            deleted = result.deleted_count,
            "customer deleted"
        );
        Ok(outcome.is_single())
    }
}
