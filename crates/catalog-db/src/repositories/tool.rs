//! PostgreSQL implementation of ToolRepository

use async_trait::async_trait;
use sqlx::{PgExecutor, PgPool};
use tracing::{debug, instrument};

use catalog_core::entities::{CategoryCount, Tool};
use catalog_core::traits::{RepoResult, ToolRepository};

use crate::mappers::ToolUpsert;
use crate::models::{CategoryCountModel, ToolModel};

use super::error::map_db_error;

const TOOL_COLUMNS: &str = "name, description, category, categories, importance, \
     is_open_source, url, documentation_url, github_url, tags, upvotes, created_at, updated_at";

/// PostgreSQL implementation of ToolRepository
#[derive(Clone)]
pub struct PgToolRepository {
    pool: PgPool,
}

impl PgToolRepository {
    /// Create a new PgToolRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_page<'e, E>(executor: E, limit: i64, offset: i64) -> RepoResult<Vec<Tool>>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {TOOL_COLUMNS} FROM tools ORDER BY upvotes DESC, name ASC LIMIT $1 OFFSET $2"
        );

        let results = sqlx::query_as::<_, ToolModel>(&query)
            .bind(limit.max(1))
            .bind(offset.max(0))
            .fetch_all(executor)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tool::from).collect())
    }

    async fn upsert_one<'e, E>(executor: E, tool: &Tool) -> RepoResult<()>
    where
        E: PgExecutor<'e>,
    {
        let values = ToolUpsert::new(tool);

        sqlx::query(
            r#"
            INSERT INTO tools (
                name, description, category, categories, importance,
                is_open_source, url, documentation_url, github_url, tags
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (name) DO UPDATE SET
                description = EXCLUDED.description,
                category = EXCLUDED.category,
                categories = EXCLUDED.categories,
                importance = EXCLUDED.importance,
                is_open_source = EXCLUDED.is_open_source,
                url = EXCLUDED.url,
                documentation_url = EXCLUDED.documentation_url,
                github_url = EXCLUDED.github_url,
                tags = EXCLUDED.tags,
                updated_at = NOW()
            "#,
        )
        .bind(values.name)
        .bind(values.description)
        .bind(values.category)
        .bind(values.categories)
        .bind(values.importance)
        .bind(values.is_open_source)
        .bind(values.url)
        .bind(values.documentation_url)
        .bind(values.github_url)
        .bind(values.tags)
        .execute(executor)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl ToolRepository for PgToolRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Tool>> {
        let query = format!("SELECT {TOOL_COLUMNS} FROM tools WHERE name = $1");

        let result = sqlx::query_as::<_, ToolModel>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Tool::from))
    }

    #[instrument(skip(self))]
    async fn list_page(&self, limit: i64, offset: i64) -> RepoResult<Vec<Tool>> {
        Self::fetch_page(&self.pool, limit, offset).await
    }

    /// Pages are read from one snapshot so concurrent votes cannot shift
    /// rows across page boundaries.
    #[instrument(skip(self))]
    async fn list_all(&self, page_size: i64) -> RepoResult<Vec<Tool>> {
        let page_size = page_size.max(1);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let mut tools = Vec::new();
        let mut offset = 0;
        loop {
            let page = Self::fetch_page(&mut *tx, page_size, offset).await?;
            let fetched = page.len() as i64;
            tools.extend(page);

            if fetched < page_size {
                break;
            }
            offset += fetched;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(tools)
    }

    #[instrument(skip(self))]
    async fn count_by_category(&self) -> RepoResult<Vec<CategoryCount>> {
        let results = sqlx::query_as::<_, CategoryCountModel>(
            r#"
            SELECT category, COUNT(*) AS count
            FROM tools
            WHERE category <> ''
            GROUP BY category
            ORDER BY count DESC, category ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(CategoryCount::from).collect())
    }

    #[instrument(skip(self, tools), fields(tools = tools.len()))]
    async fn upsert_all(&self, tools: &[Tool]) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for tool in tools {
            Self::upsert_one(&mut *tx, tool).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(tools.len() as u64)
    }

    #[instrument(skip(self, tools), fields(tools = tools.len()))]
    async fn replace_all(&self, tools: &[Tool]) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query("DELETE FROM tools")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?
            .rows_affected();

        for tool in tools {
            Self::upsert_one(&mut *tx, tool).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        debug!(removed, written = tools.len(), "Catalog replaced");
        Ok(removed)
    }
}
