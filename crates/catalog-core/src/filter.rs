//! Tool filtering - pure predicate composition over an in-memory tool set

use crate::entities::{Importance, Tool};

/// Criteria for narrowing a list of tools
///
/// Every criterion left empty matches all tools; the set criteria are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolFilter {
    /// Case-insensitive substring of the tool name
    pub search: Option<String>,
    /// Tool must belong to at least one of these categories
    pub categories: Vec<String>,
    /// Tool importance must be one of these
    pub importances: Vec<Importance>,
    /// Only keep open-source tools
    pub open_source_only: bool,
}

impl ToolFilter {
    /// Create an empty filter that matches everything
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importances.push(importance);
        self
    }

    pub fn open_source_only(mut self, enabled: bool) -> Self {
        self.open_source_only = enabled;
        self
    }

    /// Check if no criterion is set
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.categories.is_empty()
            && self.importances.is_empty()
            && !self.open_source_only
    }

    /// Check a single tool against every criterion
    pub fn matches(&self, tool: &Tool) -> bool {
        self.matches_search(tool)
            && self.matches_category(tool)
            && self.matches_importance(tool)
            && (!self.open_source_only || tool.is_open_source)
    }

    /// Keep matching tools, preserving order
    pub fn apply(&self, tools: Vec<Tool>) -> Vec<Tool> {
        if self.is_empty() {
            return tools;
        }
        tools.into_iter().filter(|t| self.matches(t)).collect()
    }

    fn matches_search(&self, tool: &Tool) -> bool {
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => tool.name.to_lowercase().contains(&needle.to_lowercase()),
        }
    }

    fn matches_category(&self, tool: &Tool) -> bool {
        self.categories.is_empty() || self.categories.iter().any(|c| tool.in_category(c))
    }

    fn matches_importance(&self, tool: &Tool) -> bool {
        self.importances.is_empty() || self.importances.contains(&tool.importance)
    }
}
