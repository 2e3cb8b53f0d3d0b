use async_trait::async_trait;
use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

use crate::domain::{DataAccessError, Entity, Id};

/// 顧客のリポジトリトレイト
#[async_trait]
pub trait CustomerRepository {
    /// 顧客を登録する
    async fn create(&self, customer: &Customer) -> Result<(), DataAccessError>;
    /// 複数の顧客を一括で登録する
    async fn create_many(&self, customers: &[Customer]) -> Result<(), DataAccessError>;
    /// すべての顧客を取得する
    async fn find_all(&self) -> Result<Vec<Customer>, DataAccessError>;
    /// IDから顧客を取得する
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, DataAccessError>;
    /// 顧客を置き換える。1件だけ更新された場合に`true`
    async fn update(&self, id: CustomerId, customer: &Customer) -> Result<bool, DataAccessError>;
    /// 顧客を削除する。1件だけ削除された場合に`true`
    async fn delete(&self, id: CustomerId) -> Result<bool, DataAccessError>;
}

/// 顧客ID
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Display, From, Deref, Default, Hash,
)]
pub struct CustomerId(i64);

impl Id for CustomerId {
    type Inner = i64;
}

/// 顧客エンティティ
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id")]
    id: CustomerId,
    #[serde(rename = "Name")]
    name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    const ENTITY_NAME: &'static str = "Customers";

    fn id(&self) -> CustomerId {
        self.id
    }
}
