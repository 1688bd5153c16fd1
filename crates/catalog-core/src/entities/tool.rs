//! Tool entity - represents one catalog entry

use chrono::{DateTime, Utc};

use super::importance::Importance;

/// Tool entity, identified by its unique name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub category: String,
    pub categories: Option<Vec<String>>,
    pub importance: Importance,
    pub is_open_source: bool,
    pub url: String,
    pub documentation_url: Option<String>,
    pub github_url: Option<String>,
    pub tags: Vec<String>,
    pub upvotes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tool {
    /// Create a new Tool with required fields
    pub fn new(name: String, description: String, category: String, url: String) -> Self {
        let now = Utc::now();
        Self {
            name,
            description,
            category,
            categories: None,
            importance: Importance::default(),
            is_open_source: true,
            url,
            documentation_url: None,
            github_url: None,
            tags: Vec::new(),
            upvotes: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Primary category followed by any extra categories, without duplicates
    pub fn all_categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        let extra = self.categories.iter().flatten().map(String::as_str);
        for category in std::iter::once(self.category.as_str()).chain(extra) {
            if !category.is_empty() && !out.contains(&category) {
                out.push(category);
            }
        }
        out
    }

    /// Check if the tool belongs to a category (case-insensitive)
    pub fn in_category(&self, category: &str) -> bool {
        self.all_categories()
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }

    /// Owner and repository name when the source repository is hosted on GitHub
    pub fn github_repo(&self) -> Option<(String, String)> {
        let url = self.github_url.as_deref()?.trim();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .unwrap_or(url);
        let rest = rest.strip_prefix("www.").unwrap_or(rest);
        let path = rest.strip_prefix("github.com/")?;

        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let owner = segments.next()?;
        let repo = segments.next()?;
        let repo = repo.strip_suffix(".git").unwrap_or(repo);

        if repo.is_empty() {
            return None;
        }
        Some((owner.to_string(), repo.to_string()))
    }
}

/// Number of tools in a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

impl CategoryCount {
    /// Create a new CategoryCount
    pub fn new(category: String, count: i64) -> Self {
        Self { category, count }
    }
}
