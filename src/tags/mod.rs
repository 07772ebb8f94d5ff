//! Tag classification and content filtering
//!
//! Every tag belongs to exactly one [`Category`]. Filtering is conjunctive
//! over the union of the selected tags, whatever their category.

mod category;
mod content;
mod filter;
mod map;
mod selection;

pub use category::Category;
pub use content::{ContentItem, ProjectType, load_content, parse_content, parse_date};
pub use filter::{
    default_project_type, filter_content, group_by_project_type, published_by_date,
    unique_tags_by_category,
};
pub use map::{CategorizedTags, RepresentativeTags, TagCategoryMap, TagTable, compare_alphabetic};
pub use selection::SelectedTags;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;

    const FIXTURE: &str = r#"[
        {"slug": "projects/subset", "title": "Subset", "date": "2024-01-01", "tags": ["React"]},
        {"slug": "projects/exact", "title": "Exact", "date": "2024-02-01", "tags": ["React", "Backend", "RAG"]},
        {"slug": "projects/superset", "title": "Superset", "date": "2024-03-01", "tags": ["Docker", "RAG", "React", "Backend", "Python"]},
        {"slug": "projects/disjoint", "title": "Disjoint", "date": "2024-04-01", "tags": ["Figma", "UI/UX"]},
        {"slug": "projects/untagged", "title": "Untagged", "date": "2024-05-01"},
        {"slug": "projects/hidden", "title": "Hidden", "date": "2024-06-01", "tags": ["React", "Backend", "RAG"], "published": false}
    ]"#;

    fn fixture() -> Vec<ContentItem> {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FIXTURE.as_bytes()).unwrap();
        load_content(file.path()).unwrap()
    }

    fn titles(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.title.clone()).collect()
    }

    #[test]
    fn empty_selection_returns_published_in_order() {
        let items = fixture();
        let matched = filter_content(&items, &SelectedTags::new());
        assert_eq!(
            titles(&matched),
            ["Subset", "Exact", "Superset", "Disjoint", "Untagged"]
        );
    }

    #[test]
    fn matches_are_supersets_of_selection() {
        let items = fixture();
        let map = TagCategoryMap::default();
        let selection = SelectedTags::from_tags(&["React", "Backend", "RAG"], &map);

        // One tag from each category
        for category in Category::ALL {
            assert_eq!(selection.category(category).len(), 1);
        }

        let matched = filter_content(&items, &selection);
        assert_eq!(titles(&matched), ["Exact", "Superset"]);
        for item in matched {
            for tag in selection.all_selected() {
                assert!(item.has_tag(tag));
            }
        }
    }

    #[test]
    fn untagged_items_never_match_a_selection() {
        let items = fixture();
        let map = TagCategoryMap::default();
        let selection = SelectedTags::from_tags(&["Figma"], &map);
        assert_eq!(titles(&filter_content(&items, &selection)), ["Disjoint"]);
    }

    #[test]
    fn toggling_off_restores_full_listing() {
        let items = fixture();
        let map = TagCategoryMap::default();
        let mut selection = SelectedTags::new();

        selection.toggle("Python", &map);
        assert_eq!(titles(&filter_content(&items, &selection)), ["Superset"]);

        selection.toggle("Python", &map);
        assert_eq!(filter_content(&items, &selection).len(), 5);
    }

    #[test]
    fn available_tags_are_grouped_and_sorted() {
        let items = fixture();
        let unique = unique_tags_by_category(&items, &TagCategoryMap::default());

        assert_eq!(unique.scope, ["Backend", "UI/UX"]);
        assert_eq!(unique.tools, ["Docker", "Figma", "Python", "React"]);
        assert_eq!(unique.focus, ["RAG"]);
    }

    #[test]
    fn configured_map_changes_classification() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[tags]\nfocus = [\"React\"]\n").unwrap();
        let map = Config::load(Some(file.path())).unwrap().tag_map();

        let items = fixture();
        let unique = unique_tags_by_category(&items, &map);
        assert_eq!(unique.focus, ["React"]);
        assert!(unique.scope.is_empty());
        assert_eq!(map.sort_tags(&["React", "Docker"]), ["Docker", "React"]);
    }
}
