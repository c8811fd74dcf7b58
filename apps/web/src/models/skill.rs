use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the `skills` table. Written once by the seed binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SkillRecord {
    pub name: String,
    pub sort: i32,
}

impl SkillRecord {
    pub fn new(name: impl Into<String>, sort: i32) -> Self {
        SkillRecord {
            name: name.into(),
            sort,
        }
    }
}
