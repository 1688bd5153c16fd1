//! Tool entity <-> model mapper

use catalog_core::entities::{CategoryCount, Importance, Tool};
use tracing::warn;

use crate::models::{CategoryCountModel, ToolModel};

/// Convert ToolModel to Tool entity
impl From<ToolModel> for Tool {
    fn from(model: ToolModel) -> Self {
        let importance = model.importance.parse::<Importance>().unwrap_or_else(|_| {
            warn!(tool = %model.name, value = %model.importance, "Unknown importance, using default");
            Importance::default()
        });

        Tool {
            name: model.name,
            description: model.description,
            category: model.category,
            categories: model.categories,
            importance,
            is_open_source: model.is_open_source,
            url: model.url,
            documentation_url: model.documentation_url,
            github_url: model.github_url,
            tags: model.tags,
            upvotes: model.upvotes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<CategoryCountModel> for CategoryCount {
    fn from(model: CategoryCountModel) -> Self {
        CategoryCount::new(model.category, model.count)
    }
}

/// Borrowed tool values for insert/update statements
pub struct ToolUpsert<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub categories: Option<&'a [String]>,
    pub importance: &'static str,
    pub is_open_source: bool,
    pub url: &'a str,
    pub documentation_url: Option<&'a str>,
    pub github_url: Option<&'a str>,
    pub tags: &'a [String],
}

impl<'a> ToolUpsert<'a> {
    pub fn new(tool: &'a Tool) -> Self {
        Self {
            name: &tool.name,
            description: &tool.description,
            category: &tool.category,
            categories: tool.categories.as_deref(),
            importance: tool.importance.as_str(),
            is_open_source: tool.is_open_source,
            url: &tool.url,
            documentation_url: tool.documentation_url.as_deref(),
            github_url: tool.github_url.as_deref(),
            tags: &tool.tags,
        }
    }
}
