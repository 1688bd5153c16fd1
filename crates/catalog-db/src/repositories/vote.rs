//! PostgreSQL implementation of VoteRepository
//!
//! A toggle runs in one transaction: the vote ledger row and the tool's
//! counter always move together. The unique `(tool_name, ip_address)`
//! constraint decides concurrent inserts and row locks decide concurrent
//! deletes, so a racing toggle that loses reports `Unchanged` instead of
//! double counting.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, instrument};

use catalog_core::entities::{VoteAction, VoteOutcome};
use catalog_core::traits::{RepoResult, VoteRepository};

use super::error::{is_foreign_key_violation, map_db_error, tool_not_found};

/// PostgreSQL implementation of VoteRepository
#[derive(Clone)]
pub struct PgVoteRepository {
    pool: PgPool,
}

impl PgVoteRepository {
    /// Create a new PgVoteRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn current_upvotes(
        tx: &mut Transaction<'_, Postgres>,
        tool_name: &str,
    ) -> RepoResult<Option<i32>> {
        sqlx::query_scalar::<_, i32>("SELECT upvotes FROM tools WHERE name = $1")
            .bind(tool_name)
            .fetch_optional(&mut **tx)
            .await
            .map_err(map_db_error)
    }

    async fn add_vote(
        tx: &mut Transaction<'_, Postgres>,
        tool_name: &str,
        ip_address: &str,
    ) -> RepoResult<VoteAction> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO tool_votes (tool_name, ip_address)
            VALUES ($1, $2)
            ON CONFLICT (tool_name, ip_address) DO NOTHING
            "#,
        )
        .bind(tool_name)
        .bind(ip_address)
        .execute(&mut **tx)
        .await;

        match inserted {
            Ok(result) if result.rows_affected() == 1 => {
                sqlx::query("UPDATE tools SET upvotes = upvotes + 1 WHERE name = $1")
                    .bind(tool_name)
                    .execute(&mut **tx)
                    .await
                    .map_err(map_db_error)?;
                Ok(VoteAction::Added)
            }
            Ok(_) => Ok(VoteAction::Unchanged),
            Err(e) if is_foreign_key_violation(&e) => Err(tool_not_found(tool_name)),
            Err(e) => Err(map_db_error(e)),
        }
    }

    async fn remove_vote(
        tx: &mut Transaction<'_, Postgres>,
        tool_name: &str,
        ip_address: &str,
    ) -> RepoResult<VoteAction> {
        let deleted = sqlx::query("DELETE FROM tool_votes WHERE tool_name = $1 AND ip_address = $2")
            .bind(tool_name)
            .bind(ip_address)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        if deleted.rows_affected() == 0 {
            return Ok(VoteAction::Unchanged);
        }

        sqlx::query("UPDATE tools SET upvotes = GREATEST(upvotes - 1, 0) WHERE name = $1")
            .bind(tool_name)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        Ok(VoteAction::Removed)
    }
}

#[async_trait]
impl VoteRepository for PgVoteRepository {
    #[instrument(skip(self))]
    async fn toggle(&self, tool_name: &str, ip_address: &str) -> RepoResult<VoteOutcome> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if Self::current_upvotes(&mut tx, tool_name).await?.is_none() {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(tool_not_found(tool_name));
        }

        let voted = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tool_votes WHERE tool_name = $1 AND ip_address = $2)",
        )
        .bind(tool_name)
        .bind(ip_address)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let action = if voted {
            Self::remove_vote(&mut tx, tool_name, ip_address).await?
        } else {
            Self::add_vote(&mut tx, tool_name, ip_address).await?
        };

        let upvotes = Self::current_upvotes(&mut tx, tool_name)
            .await?
            .ok_or_else(|| tool_not_found(tool_name))?;

        tx.commit().await.map_err(map_db_error)?;

        // Whether this toggle or a racing one did the work, the pair ends up
        // opposite to what was read at the start.
        let voted_after = !voted;

        debug!(%action, voted = voted_after, upvotes, "Vote toggled");
        Ok(VoteOutcome::new(action, voted_after, upvotes))
    }

    #[instrument(skip(self))]
    async fn has_voted(&self, tool_name: &str, ip_address: &str) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM tool_votes WHERE tool_name = $1 AND ip_address = $2)",
        )
        .bind(tool_name)
        .bind(ip_address)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn count_for_tool(&self, tool_name: &str) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tool_votes WHERE tool_name = $1",
        )
        .bind(tool_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }
}
