pub mod customer;

use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::{Acknowledgment, WriteConcern},
    Collection, Database,
};

use crate::domain::{DataAccessError, Entity};

const DUPLICATE_KEY_CODE: i32 = 11000;

impl From<mongodb::error::Error> for DataAccessError {
    fn from(value: mongodb::error::Error) -> Self {
        match value.kind.as_ref() {
            ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::ConnectionPoolCleared { .. } => Self::ConnectionError(value),
            ErrorKind::Write(_) | ErrorKind::InsertMany(_) => Self::WriteError(value),
            ErrorKind::BsonDeserialization(_) => Self::ReadError(value),
            ErrorKind::BsonSerialization(_) | ErrorKind::InvalidArgument { .. } => {
                Self::ClientSideError(value)
            }
            _ => Self::QueryError(value),
        }
    }
}

impl DataAccessError {
    /// 一意制約違反による書き込みエラーかどうか
    pub fn is_duplicate_key(&self) -> bool {
        let Self::WriteError(e) = self else {
            return false;
        };
        match e.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
                write_error.code == DUPLICATE_KEY_CODE
            }
            ErrorKind::InsertMany(insert_many) => insert_many
                .write_errors
                .iter()
                .flatten()
                .any(|write_error| write_error.code == DUPLICATE_KEY_CODE),
            _ => false,
        }
    }
}

/// 書き込み結果
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct WriteOutcome {
    pub acknowledged: bool,
    pub affected: u64,
}

impl WriteOutcome {
    pub fn new(write_concern: Option<&WriteConcern>, affected: u64) -> Self {
        Self {
            acknowledged: is_acknowledged(write_concern),
            affected,
        }
    }

    /// 確認済みで、ちょうど1件に作用した
    pub fn is_single(&self) -> bool {
        self.acknowledged && self.affected == 1
    }
}

// `w: 0` is the only unacknowledged write concern.
fn is_acknowledged(write_concern: Option<&WriteConcern>) -> bool {
    !matches!(
        write_concern.and_then(|wc| wc.w.as_ref()),
        Some(Acknowledgment::Nodes(0))
    )
}

fn collection<E>(database: &Database) -> Collection<E>
where
    E: Entity + Send + Sync,
{
    database.collection::<E>(E::ENTITY_NAME)
}
