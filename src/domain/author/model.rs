use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted author row. The id is assigned by the store on insert and never
/// changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub author_id: Uuid,
    pub firstname: String,
    pub lastname: String,
}
