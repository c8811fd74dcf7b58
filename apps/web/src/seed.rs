//! One-shot population of the `skills` table.
//!
//! Inserts run concurrently with no dedup and no transaction: the first failed
//! insert rejects the batch and rows already written stay written.

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures_util::future::try_join_all;
use sqlx::PgPool;
use tracing::info;

use crate::models::skill::SkillRecord;

#[async_trait]
pub trait SkillStore: Send + Sync {
    async fn create(&self, record: &SkillRecord) -> Result<()>;
}

pub struct PgSkillStore {
    pool: PgPool,
}

impl PgSkillStore {
    pub fn new(pool: PgPool) -> Self {
        PgSkillStore { pool }
    }
}

#[async_trait]
impl SkillStore for PgSkillStore {
    async fn create(&self, record: &SkillRecord) -> Result<()> {
        sqlx::query("INSERT INTO skills (name, sort) VALUES ($1, $2)")
            .bind(&record.name)
            .bind(record.sort)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to insert skill '{}'", record.name))?;
        Ok(())
    }
}

pub fn seed_skills() -> Vec<SkillRecord> {
    vec![
        SkillRecord::new("JavaScript", 1),
        SkillRecord::new("CSS/HTML", 2),
        SkillRecord::new("React", 3),
        SkillRecord::new("NodeJS", 6),
        SkillRecord::new("Remix", 1),
    ]
}

/// Writes every seed record, returning how many were inserted.
pub async fn seed<S: SkillStore + ?Sized>(store: &S) -> Result<usize> {
    let records = seed_skills();
    try_join_all(records.iter().map(|record| store.create(record))).await?;
    info!(count = records.len(), "Seeded skills");
    Ok(records.len())
}
