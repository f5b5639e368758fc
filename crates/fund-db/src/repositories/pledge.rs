//! PostgreSQL implementation of PledgeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use fund_core::entities::Pledge;
use fund_core::projection::FundingSnapshot;
use fund_core::traits::{PledgeRepository, RepoResult};
use fund_core::value_objects::PledgeId;

use crate::mappers::PledgeInsert;
use crate::models::{FundingTotalsRow, PledgeModel};

use super::error::map_db_error;

/// PostgreSQL implementation of PledgeRepository
#[derive(Clone)]
pub struct PgPledgeRepository {
    pool: PgPool,
}

impl PgPledgeRepository {
    /// Create a new PgPledgeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PledgeRepository for PgPledgeRepository {
    #[instrument(skip(self))]
    async fn sum_amounts(&self) -> RepoResult<FundingSnapshot> {
        // Total and cursor come from one statement so the snapshot is
        // internally consistent: the cursor covers exactly the rows summed.
        let row = sqlx::query_as::<_, FundingTotalsRow>(
            r#"
            SELECT COALESCE(SUM(amount), 0)::BIGINT AS total, MAX(id) AS cursor
            FROM pledges
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(FundingSnapshot {
            total: row.total,
            cursor: row.cursor.map(PledgeId::new),
        })
    }

    #[instrument(skip(self, pledge))]
    async fn insert(&self, pledge: &Pledge) -> RepoResult<Pledge> {
        let values = PledgeInsert::new(pledge);

        let model = sqlx::query_as::<_, PledgeModel>(
            r#"
            INSERT INTO pledges (amount, tier_name, mobile, payment_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, amount, tier_name, mobile, payment_id, created_at
            "#,
        )
        .bind(values.amount)
        .bind(values.tier_name)
        .bind(values.mobile)
        .bind(values.payment_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Pledge::from(model))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Pledge>> {
        let results = sqlx::query_as::<_, PledgeModel>(
            r#"
            SELECT id, amount, tier_name, mobile, payment_id, created_at
            FROM pledges
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Pledge::from).collect())
    }
}
