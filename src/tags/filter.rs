//! Filtering, ordering and grouping of content by tags

use super::content::{ContentItem, ProjectType};
use super::map::{CategorizedTags, TagCategoryMap};
use super::selection::SelectedTags;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;

/// Published items matching every selected tag, in input order
///
/// An empty selection matches all published items. Items without tags
/// never match a non-empty selection.
///
/// # Examples
/// ```
/// use portfolio_engine::tags::{SelectedTags, TagCategoryMap, filter_content, parse_content};
///
/// let items = parse_content(r#"[
///     {"slug": "p/a", "title": "A", "date": "2024-01-01", "tags": ["React", "Backend"]},
///     {"slug": "p/b", "title": "B", "date": "2024-02-01", "tags": ["React"]}
/// ]"#).unwrap();
/// let map = TagCategoryMap::default();
/// let selection = SelectedTags::from_tags(&["React", "Backend"], &map);
///
/// let matched = filter_content(&items, &selection);
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].title, "A");
/// ```
#[must_use]
pub fn filter_content<'a>(items: &'a [ContentItem], selection: &SelectedTags) -> Vec<&'a ContentItem> {
    let selected = selection.all_selected();
    items
        .iter()
        .filter(|item| item.published)
        .filter(|item| selected.iter().all(|tag| item.has_tag(tag)))
        .collect()
}

/// Published items, newest first; equal dates keep input order
#[must_use]
pub fn published_by_date<'a>(items: impl IntoIterator<Item = &'a ContentItem>) -> Vec<&'a ContentItem> {
    let mut published: Vec<&ContentItem> = items.into_iter().filter(|i| i.published).collect();
    published.sort_by_key(|item| Reverse(item.date));
    published
}

/// Distinct tags across published items, per category, in code point order
///
/// Unlike `TagCategoryMap::sort_tags` this is a plain string sort, so
/// upper-case tags come before lower-case ones.
#[must_use]
pub fn unique_tags_by_category(items: &[ContentItem], map: &TagCategoryMap) -> CategorizedTags {
    let mut seen = FxHashSet::default();
    let distinct: Vec<&str> = items
        .iter()
        .filter(|item| item.published)
        .flat_map(ContentItem::tags)
        .map(String::as_str)
        .filter(|tag| seen.insert(*tag))
        .collect();

    let mut categorized = map.categorize(&distinct);
    for category in super::Category::ALL {
        categorized.get_mut(category).sort();
    }
    categorized
}

/// Published items bucketed by project type, newest first within a bucket
///
/// Buckets come back in display order and are present even when empty.
#[must_use]
pub fn group_by_project_type<'a>(
    items: impl IntoIterator<Item = &'a ContentItem>,
) -> Vec<(ProjectType, Vec<&'a ContentItem>)> {
    let published = published_by_date(items);
    ProjectType::ALL
        .into_iter()
        .map(|kind| {
            let bucket = published
                .iter()
                .copied()
                .filter(|item| item.project_type() == kind)
                .collect();
            (kind, bucket)
        })
        .collect()
}

/// Group to open first: AI/ML when it has items, else SWE, else none
#[must_use]
pub fn default_project_type(groups: &[(ProjectType, Vec<&ContentItem>)]) -> Option<ProjectType> {
    let has_items = |kind: ProjectType| {
        groups
            .iter()
            .any(|(k, bucket)| *k == kind && !bucket.is_empty())
    };
    [ProjectType::AiMl, ProjectType::Swe]
        .into_iter()
        .find(|&kind| has_items(kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::parse_content;

    fn fixture() -> Vec<ContentItem> {
        parse_content(
            r#"[
            {"slug": "p/one", "title": "One", "date": "2024-01-10", "tags": ["React", "Backend"], "projectType": "AI/ML"},
            {"slug": "p/two", "title": "Two", "date": "2024-03-05", "tags": ["Python", "RAG"]},
            {"slug": "p/three", "title": "Three", "date": "2023-07-20", "tags": ["React"], "projectType": "DATA"},
            {"slug": "p/hidden", "title": "Hidden", "date": "2025-01-01", "tags": ["React", "Backend"], "published": false},
            {"slug": "p/bare", "title": "Bare", "date": "2024-01-10"}
        ]"#,
        )
        .unwrap()
    }

    fn titles(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn empty_selection_returns_published_in_order() {
        let items = fixture();
        let matched = filter_content(&items, &SelectedTags::new());
        assert_eq!(titles(&matched), ["One", "Two", "Three", "Bare"]);
    }

    #[test]
    fn selection_is_conjunctive_across_categories() {
        let items = fixture();
        let map = TagCategoryMap::default();

        let react = SelectedTags::from_tags(&["React"], &map);
        assert_eq!(titles(&filter_content(&items, &react)), ["One", "Three"]);

        let both = SelectedTags::from_tags(&["React", "Backend"], &map);
        assert_eq!(titles(&filter_content(&items, &both)), ["One"]);

        let none = SelectedTags::from_tags(&["React", "RAG"], &map);
        assert!(filter_content(&items, &none).is_empty());
    }

    #[test]
    fn published_newest_first_stable() {
        let items = fixture();
        let sorted = published_by_date(&items);
        assert_eq!(titles(&sorted), ["Two", "One", "Bare", "Three"]);
    }

    #[test]
    fn unique_tags_skip_unpublished_and_sort() {
        let mut items = fixture();
        items[3].tags = Some(vec!["Kubernetes".into()]);
        let unique = unique_tags_by_category(&items, &TagCategoryMap::default());

        assert_eq!(unique.scope, ["Backend"]);
        assert_eq!(unique.tools, ["Python", "React"]);
        assert_eq!(unique.focus, ["RAG"]);
    }

    #[test]
    fn unique_tags_sort_by_code_point() {
        let items = parse_content(
            r#"[{"slug": "p/aws", "title": "Cloud", "date": "2024-05-01",
                 "tags": ["aws-cdk", "Apache Spark", "AWS"]}]"#,
        )
        .unwrap();
        let unique = unique_tags_by_category(&items, &TagCategoryMap::empty());

        assert_eq!(unique.tools, ["AWS", "Apache Spark", "aws-cdk"]);
        assert!(unique.scope.is_empty());
        assert!(unique.focus.is_empty());
    }

    #[test]
    fn grouping_by_project_type() {
        let items = fixture();
        let groups = group_by_project_type(&items);

        let kinds: Vec<ProjectType> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(kinds, ProjectType::ALL);
        assert_eq!(titles(&groups[0].1), ["One"]);
        assert_eq!(titles(&groups[1].1), ["Two", "Bare"]);
        assert!(groups[2].1.is_empty());
        assert_eq!(titles(&groups[3].1), ["Three"]);
        assert_eq!(default_project_type(&groups), Some(ProjectType::AiMl));
    }

    #[test]
    fn default_project_type_fallbacks() {
        let items = fixture();
        let mut groups = group_by_project_type(&items);
        groups[0].1.clear();
        assert_eq!(default_project_type(&groups), Some(ProjectType::Swe));

        groups[1].1.clear();
        assert_eq!(default_project_type(&groups), None);
    }
}
