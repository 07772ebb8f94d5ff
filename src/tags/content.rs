//! Content records consumed by the tag engine
//!
//! Records are produced by an external content pipeline as a JSON array and
//! are only ever read here.

use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One tagged content record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Unique path-like slug, e.g. `projects/portfolio`
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    #[serde(default = "default_published")]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// `None` and `Some(vec![])` both mean "no tags"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Free-form grouping field; see `ProjectType::parse`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

const fn default_published() -> bool {
    true
}

/// Accept a bare ISO date (midnight UTC) or an RFC 3339 date-time
fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
}

/// Parse `YYYY-MM-DD` or RFC 3339 into UTC
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

impl ContentItem {
    /// Tags of the item, empty when absent
    #[must_use]
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags().iter().any(|t| t == tag)
    }

    /// Slug without its first path segment
    ///
    /// # Examples
    /// ```
    /// # use portfolio_engine::tags::ContentItem;
    /// let item: ContentItem = serde_json::from_str(
    ///     r#"{"slug": "projects/word-game", "title": "Word game", "date": "2024-01-02"}"#,
    /// ).unwrap();
    /// assert_eq!(item.slug_as_params(), "word-game");
    /// ```
    #[must_use]
    pub fn slug_as_params(&self) -> String {
        self.slug.split('/').skip(1).collect::<Vec<_>>().join("/")
    }

    #[must_use]
    pub fn project_type(&self) -> ProjectType {
        ProjectType::parse(self.project_type.as_deref())
    }
}

/// Display grouping for project listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ProjectType {
    AiMl,
    #[default]
    Swe,
    Design,
    Data,
}

impl ProjectType {
    /// Groups in display order
    pub const ALL: [Self; 4] = [Self::AiMl, Self::Swe, Self::Design, Self::Data];

    /// Missing or unrecognised values group as `Swe`
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("AI/ML") => Self::AiMl,
            Some("DESIGN") => Self::Design,
            Some("DATA") => Self::Data,
            _ => Self::Swe,
        }
    }

    /// Value as it appears in content records
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::AiMl => "AI/ML",
            Self::Swe => "SWE",
            Self::Design => "DESIGN",
            Self::Data => "DATA",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::AiMl => "AI / ML",
            Self::Swe => "Software Engineering",
            Self::Design => "Design",
            Self::Data => "Data Engineering",
        }
    }

    #[must_use]
    pub const fn tooltip(self) -> &'static str {
        match self {
            Self::AiMl => "Research, modeling, and ML systems",
            Self::Swe => "Product engineering and systems work",
            Self::Design => "UX/UI and product design projects",
            Self::Data => "Data pipelines and analytics systems",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ProjectType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Read a JSON array of content items
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid array of
/// content items.
pub fn load_content<P: AsRef<Path>>(path: P) -> Result<Vec<ContentItem>> {
    let path = path.as_ref();
    let items = parse_content(&fs::read_to_string(path)?)?;
    debug!(path = %path.display(), count = items.len(), "loaded content");
    Ok(items)
}

/// Parse a JSON array of content items
///
/// # Errors
///
/// Returns a JSON error when the input is malformed.
pub fn parse_content(json: &str) -> Result<Vec<ContentItem>> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {
            "slug": "projects/rag-bot",
            "title": "RAG bot",
            "description": "Chat over documents",
            "date": "2024-03-01T00:00:00.000Z",
            "tags": ["Python", "RAG", "AI/ML"],
            "projectType": "AI/ML"
        },
        {
            "slug": "projects/draft",
            "title": "Draft",
            "date": "2023-01-15",
            "published": false
        }
    ]"#;

    #[test]
    fn parses_both_date_forms_and_defaults() {
        let items = parse_content(SAMPLE).unwrap();
        assert_eq!(items.len(), 2);

        let rag = &items[0];
        assert!(rag.published);
        assert_eq!(rag.date.year(), 2024);
        assert_eq!(rag.tags(), ["Python", "RAG", "AI/ML"]);
        assert_eq!(rag.project_type(), ProjectType::AiMl);

        let draft = &items[1];
        assert!(!draft.published);
        assert_eq!(draft.date.month(), 1);
        assert_eq!(draft.date.day(), 15);
        assert!(draft.tags().is_empty());
        assert_eq!(draft.project_type(), ProjectType::Swe);
    }

    #[test]
    fn rejects_bad_date() {
        let json = r#"[{"slug": "a/b", "title": "x", "date": "yesterday"}]"#;
        assert!(parse_content(json).is_err());
    }

    #[test]
    fn slug_as_params_drops_first_segment() {
        let mut item = parse_content(SAMPLE).unwrap().remove(0);
        assert_eq!(item.slug_as_params(), "rag-bot");

        item.slug = "projects/2024/deep/path".to_string();
        assert_eq!(item.slug_as_params(), "2024/deep/path");

        item.slug = "lonely".to_string();
        assert_eq!(item.slug_as_params(), "");
    }

    #[test]
    fn project_type_parse_falls_back_to_swe() {
        assert_eq!(ProjectType::parse(Some("DATA")), ProjectType::Data);
        assert_eq!(ProjectType::parse(Some("DESIGN")), ProjectType::Design);
        assert_eq!(ProjectType::parse(Some("quantum")), ProjectType::Swe);
        assert_eq!(ProjectType::parse(None), ProjectType::Swe);
        assert_eq!(ProjectType::AiMl.label(), "AI / ML");
    }

    #[test]
    fn load_content_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let items = load_content(file.path()).unwrap();
        assert_eq!(items[0].title, "RAG bot");
    }

    #[test]
    fn load_content_missing_file() {
        assert!(load_content("/no/such/projects.json").is_err());
    }
}
