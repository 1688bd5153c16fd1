//! Request DTOs
//!
//! Tool records as produced by the catalog collector. Records are
//! deserialized from camelCase JSON and validated before import.

use catalog_core::entities::{Importance, Tool};
use serde::Deserialize;
use validator::Validate;

fn default_open_source() -> bool {
    true
}

/// One tool record of an import file
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    #[validate(length(min = 1, max = 200, message = "Tool name must be 1-200 characters"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Category must be at most 100 characters"))]
    pub category: String,

    #[serde(default)]
    pub categories: Option<Vec<String>>,

    #[serde(default)]
    pub importance: Option<String>,

    #[serde(default = "default_open_source")]
    pub is_open_source: bool,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    #[validate(url(message = "Invalid documentation URL"))]
    pub documentation_url: Option<String>,

    #[serde(default)]
    #[validate(url(message = "Invalid source repository URL"))]
    pub github_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub stars: Option<u64>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ToolRecord {
    /// Trim text fields and turn blank optional values into `None`
    pub fn normalized(self) -> Self {
        let categories = self
            .categories
            .map(|list| {
                list.into_iter()
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|list| !list.is_empty());

        Self {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            category: self.category.trim().to_string(),
            categories,
            importance: non_blank(self.importance),
            is_open_source: self.is_open_source,
            url: self.url.trim().to_string(),
            documentation_url: non_blank(self.documentation_url),
            github_url: non_blank(self.github_url),
            tags: self
                .tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            stars: self.stars,
        }
    }

    /// Fold a later record with the same name into this one
    ///
    /// Fields already set here win; tags are unioned.
    pub fn merge(&mut self, other: ToolRecord) {
        fn fill(target: &mut String, source: String) {
            if target.is_empty() {
                *target = source;
            }
        }

        fill(&mut self.description, other.description);
        fill(&mut self.category, other.category);
        fill(&mut self.url, other.url);

        if self.categories.is_none() {
            self.categories = other.categories;
        }
        if self.importance.is_none() {
            self.importance = other.importance;
        }
        if self.documentation_url.is_none() {
            self.documentation_url = other.documentation_url;
        }
        if self.github_url.is_none() {
            self.github_url = other.github_url;
        }
        self.stars = match (self.stars, other.stars) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };

        for tag in other.tags {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Importance given by the record, or derived from its star count
    pub fn resolved_importance(&self) -> Importance {
        self.importance
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or_else(|| Importance::from_stars(&self.name, self.stars.unwrap_or(0)))
    }

    /// Convert into a domain entity with a zero counter
    pub fn into_tool(self) -> Tool {
        let importance = self.resolved_importance();
        let mut tool = Tool::new(self.name, self.description, self.category, self.url);
        tool.categories = self.categories;
        tool.importance = importance;
        tool.is_open_source = self.is_open_source;
        tool.documentation_url = self.documentation_url;
        tool.github_url = self.github_url;
        tool.tags = self.tags;
        tool
    }
}
