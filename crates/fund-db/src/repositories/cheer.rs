//! PostgreSQL implementation of CheerRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fund_core::entities::Cheer;
use fund_core::traits::{CheerRepository, RepoResult};

use crate::mappers::CheerInsert;
use crate::models::CheerModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CheerRepository
#[derive(Clone)]
pub struct PgCheerRepository {
    pool: PgPool,
}

impl PgCheerRepository {
    /// Create a new PgCheerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CheerRepository for PgCheerRepository {
    #[instrument(skip(self))]
    async fn latest(&self, limit: i64) -> RepoResult<Vec<Cheer>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, CheerModel>(
            r#"
            SELECT id, author, message, initials, color_from, color_to, client_ref, created_at
            FROM cheers
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Cheer::from).collect())
    }

    #[instrument(skip(self, cheer))]
    async fn insert(&self, cheer: &Cheer) -> RepoResult<Cheer> {
        let values = CheerInsert::new(cheer);

        let model = sqlx::query_as::<_, CheerModel>(
            r#"
            INSERT INTO cheers (author, message, initials, color_from, color_to, client_ref)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, author, message, initials, color_from, color_to, client_ref, created_at
            "#,
        )
        .bind(values.author)
        .bind(values.message)
        .bind(values.initials)
        .bind(values.color_from)
        .bind(values.color_to)
        .bind(values.client_ref)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Cheer::from(model))
    }
}
