pub mod customer;

use std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub trait Id:
    Copy
    + Eq
    + Deref<Target = Self::Inner>
    + From<Self::Inner>
    + Display
    + Debug
    + Serialize
    + for<'de> Deserialize<'de>
{
    type Inner: FromStr;
}

pub trait Entity: Debug + Clone {
    type Id: Id;

    /// 保存先のコレクション名
    const ENTITY_NAME: &'static str;

    fn id(&self) -> Self::Id;
}

/// データアクセス時のエラー
///
/// ドライバのエラーは変換せずにそのまま保持する。
#[derive(Error, Debug)]
pub enum DataAccessError {
    #[error("Database connection error: {0}")]
    ConnectionError(#[source] mongodb::error::Error),
    #[error("Database query error: {0}")]
    QueryError(#[source] mongodb::error::Error),
    #[error("Data read error: {0}")]
    ReadError(#[source] mongodb::error::Error),
    #[error("Data write error: {0}")]
    WriteError(#[source] mongodb::error::Error),
    #[error("Client side error: {0}")]
    ClientSideError(#[source] mongodb::error::Error),
}

impl DataAccessError {
    /// 元のドライバエラー
    pub fn driver_error(&self) -> &mongodb::error::Error {
        match self {
            Self::ConnectionError(e)
            | Self::QueryError(e)
            | Self::ReadError(e)
            | Self::WriteError(e)
            | Self::ClientSideError(e) => e,
        }
    }
}
