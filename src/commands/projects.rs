//! Project listing and tag commands
//!
//! Thin wrappers over the tag engine that turn command-line tag lists into a
//! selection and shape results for display or JSON output.

use crate::error::Result;
use crate::tags::{
    CategorizedTags, ContentItem, ProjectType, SelectedTags, TagCategoryMap, filter_content,
    group_by_project_type, published_by_date, unique_tags_by_category,
};
use serde_json::{Value, json};

/// Selection from a list of tags; repeated tags select once
#[must_use]
pub fn selection_from_args<S: AsRef<str>>(tags: &[S], map: &TagCategoryMap) -> SelectedTags {
    let mut selection = SelectedTags::new();
    for tag in tags {
        let tag = tag.as_ref().trim();
        if !tag.is_empty() && !selection.contains(tag) {
            selection.toggle(tag, map);
        }
    }
    selection
}

/// Published items carrying every tag in `tags`, newest first
#[must_use]
pub fn list_projects<'a, S: AsRef<str>>(
    items: &'a [ContentItem],
    tags: &[S],
    map: &TagCategoryMap,
) -> Vec<&'a ContentItem> {
    let selection = selection_from_args(tags, map);
    published_by_date(filter_content(items, &selection))
}

/// Matching items grouped by project type
#[must_use]
pub fn list_projects_by_type<'a, S: AsRef<str>>(
    items: &'a [ContentItem],
    tags: &[S],
    map: &TagCategoryMap,
) -> Vec<(ProjectType, Vec<&'a ContentItem>)> {
    group_by_project_type(list_projects(items, tags, map))
}

/// Available filter tags
#[must_use]
pub fn tag_index(items: &[ContentItem], map: &TagCategoryMap) -> CategorizedTags {
    unique_tags_by_category(items, map)
}

/// JSON for a flat listing, tags in display order
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn projects_json(items: &[&ContentItem], map: &TagCategoryMap) -> Result<String> {
    let values: Vec<Value> = items.iter().map(|item| item_json(item, map)).collect();
    Ok(serde_json::to_string_pretty(&values)?)
}

/// JSON for a grouped listing
///
/// # Errors
///
/// Returns a JSON error if serialization fails.
pub fn groups_json(
    groups: &[(ProjectType, Vec<&ContentItem>)],
    map: &TagCategoryMap,
) -> Result<String> {
    let values: Vec<Value> = groups
        .iter()
        .map(|(kind, items)| {
            json!({
                "type": kind,
                "label": kind.label(),
                "tooltip": kind.tooltip(),
                "projects": items.iter().map(|item| item_json(item, map)).collect::<Vec<_>>(),
            })
        })
        .collect();
    Ok(serde_json::to_string_pretty(&values)?)
}

fn item_json(item: &ContentItem, map: &TagCategoryMap) -> Value {
    json!({
        "slug": item.slug,
        "slugAsParams": item.slug_as_params(),
        "title": item.title,
        "description": item.description,
        "date": item.date.to_rfc3339(),
        "projectType": item.project_type(),
        "tags": map.sort_tags(item.tags()),
    })
}
