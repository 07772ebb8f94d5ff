//! Active filter selection

use super::category::Category;
use super::map::{CategorizedTags, TagCategoryMap};

/// Currently selected filter tags, one ordered set per category
///
/// Insertion order is kept for display; filtering only looks at
/// membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedTags {
    tags: CategorizedTags,
}

impl SelectedTags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `tags`, each toggled once in order
    #[must_use]
    pub fn from_tags<S: AsRef<str>>(tags: &[S], map: &TagCategoryMap) -> Self {
        tags.iter()
            .fold(Self::new(), |selection, tag| selection.toggled(tag.as_ref(), map))
    }

    /// Add `tag` to its category's set if absent, remove it if present
    ///
    /// Returns `true` when the tag is selected afterwards.
    ///
    /// # Examples
    /// ```
    /// use portfolio_engine::tags::{SelectedTags, TagCategoryMap};
    ///
    /// let map = TagCategoryMap::default();
    /// let mut selection = SelectedTags::new();
    /// assert!(selection.toggle("React", &map));
    /// assert!(!selection.toggle("React", &map));
    /// assert!(selection.is_empty());
    /// ```
    pub fn toggle(&mut self, tag: &str, map: &TagCategoryMap) -> bool {
        let bucket = self.tags.get_mut(map.category(tag));
        if let Some(pos) = bucket.iter().position(|t| t == tag) {
            bucket.remove(pos);
            false
        } else {
            bucket.push(tag.to_string());
            true
        }
    }

    /// Owned form of `toggle`
    #[must_use]
    pub fn toggled(mut self, tag: &str, map: &TagCategoryMap) -> Self {
        self.toggle(tag, map);
        self
    }

    pub fn clear(&mut self) {
        self.tags = CategorizedTags::default();
    }

    pub fn clear_category(&mut self, category: Category) {
        self.tags.get_mut(category).clear();
    }

    #[must_use]
    pub fn category(&self, category: Category) -> &[String] {
        self.tags.get(category)
    }

    #[must_use]
    pub const fn by_category(&self) -> &CategorizedTags {
        &self.tags
    }

    /// Union of all three sets: scope, then tools, then focus
    #[must_use]
    pub fn all_selected(&self) -> Vec<&str> {
        self.tags.all().map(String::as_str).collect()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.all().any(|t| t == tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_routes_to_category() {
        let map = TagCategoryMap::default();
        let mut selection = SelectedTags::new();
        selection.toggle("React", &map);
        selection.toggle("Backend", &map);
        selection.toggle("RAG", &map);
        selection.toggle("Mystery", &map);

        assert_eq!(selection.category(Category::Scope), ["Backend"]);
        assert_eq!(selection.category(Category::Tools), ["React", "Mystery"]);
        assert_eq!(selection.category(Category::Focus), ["RAG"]);
        assert_eq!(selection.all_selected(), ["Backend", "React", "Mystery", "RAG"]);
    }

    #[test]
    fn toggle_twice_restores() {
        let map = TagCategoryMap::default();
        let before = SelectedTags::from_tags(&["Python", "Frontend"], &map);
        let after = before.clone().toggled("Docker", &map).toggled("Docker", &map);
        assert_eq!(before, after);
    }

    #[test]
    fn toggle_removes_only_that_tag() {
        let map = TagCategoryMap::default();
        let mut selection = SelectedTags::from_tags(&["React", "Python", "Docker"], &map);
        assert!(!selection.toggle("Python", &map));
        assert_eq!(selection.category(Category::Tools), ["React", "Docker"]);
        assert!(selection.contains("React"));
        assert!(!selection.contains("Python"));
    }

    #[test]
    fn clear_and_clear_category() {
        let map = TagCategoryMap::default();
        let mut selection = SelectedTags::from_tags(&["React", "Backend", "RAG"], &map);

        selection.clear_category(Category::Tools);
        assert_eq!(selection.all_selected(), ["Backend", "RAG"]);
        assert_eq!(selection.len(), 2);

        selection.clear();
        assert!(selection.is_empty());
    }
}
