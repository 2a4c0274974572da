use serde::{Deserialize, Serialize};

/// A single directory entry as served by the remote user API.
///
/// Records are owned by the remote source; this crate never creates,
/// mutates, or deletes them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}
