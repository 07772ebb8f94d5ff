//! Tag to category classification
//!
//! `TagCategoryMap` is a total function from tag to `Category`: tags that are
//! not listed classify as `Category::Tools`. The table is data, either the
//! built-in default or a `[tags]` section from configuration.

use super::category::Category;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;

/// Built-in tag table
const DEFAULT_TAGS: &[(&str, Category)] = &[
    // Scope
    ("Frontend", Category::Scope),
    ("Backend", Category::Scope),
    ("AI/ML", Category::Scope),
    ("UI/UX", Category::Scope),
    ("DevOps", Category::Scope),
    ("Cloud", Category::Scope),
    ("Security", Category::Scope),
    ("Data Analysis", Category::Scope),
    ("Big Data", Category::Scope),
    ("Data Engineering", Category::Scope),
    ("NLP", Category::Scope),
    ("Generative AI", Category::Scope),
    ("Computer Vision", Category::Scope),
    ("Project Management", Category::Scope),
    ("Agile", Category::Scope),
    ("Quality Assurance", Category::Scope),
    // Tools
    ("React", Category::Tools),
    ("Vue.js", Category::Tools),
    ("JavaScript", Category::Tools),
    ("TypeScript", Category::Tools),
    ("Python", Category::Tools),
    ("Flask", Category::Tools),
    ("ExpressJS", Category::Tools),
    ("Firebase", Category::Tools),
    ("PostgreSQL", Category::Tools),
    ("NoSQL", Category::Tools),
    ("Kafka", Category::Tools),
    ("Temporal", Category::Tools),
    ("Docker", Category::Tools),
    ("Kubernetes", Category::Tools),
    ("Grafana", Category::Tools),
    ("Prometheus", Category::Tools),
    ("AWS", Category::Tools),
    ("Azure", Category::Tools),
    ("YOLO", Category::Tools),
    ("Figma", Category::Tools),
    ("Clerk Auth", Category::Tools),
    ("Stripe API", Category::Tools),
    ("Saga Pattern", Category::Tools),
    ("ITIL", Category::Tools),
    ("IaaS", Category::Tools),
    ("Odoo", Category::Tools),
    ("Apache Spark", Category::Tools),
    ("PySpark", Category::Tools),
    ("AWS Glue", Category::Tools),
    ("AWS Athena", Category::Tools),
    ("AWS EMR", Category::Tools),
    ("Transformers", Category::Tools),
    ("BERT", Category::Tools),
    ("LoRA", Category::Tools),
    ("PyTorch", Category::Tools),
    ("Ollama", Category::Tools),
    ("FastAPI", Category::Tools),
    ("Next.js", Category::Tools),
    ("Jira", Category::Tools),
    ("GitHub Actions", Category::Tools),
    ("LLM", Category::Tools),
    // Focus
    ("Solution Architecture", Category::Focus),
    ("Cloud Migration", Category::Focus),
    ("DevSecOps", Category::Focus),
    ("CI/CD", Category::Focus),
    ("Scrum", Category::Focus),
    ("Design Thinking", Category::Focus),
    ("User Research", Category::Focus),
    ("Prototyping", Category::Focus),
    ("Fine-tuning", Category::Focus),
    ("RAG", Category::Focus),
    ("Multi-task Learning", Category::Focus),
    ("Recommender Systems", Category::Focus),
    ("Feature Engineering", Category::Focus),
    ("Classification", Category::Focus),
    ("Microservices", Category::Focus),
    ("Data Pipelines", Category::Focus),
    ("Predictive Modelling", Category::Focus),
    ("NER", Category::Focus),
    ("Prompt Engineering", Category::Focus),
    ("Serverless", Category::Focus),
];

/// Tag lists per category, as written in configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTable {
    #[serde(default)]
    pub scope: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub focus: Vec<String>,
}

/// Tags partitioned by category, preserving input order within each bucket
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizedTags {
    pub scope: Vec<String>,
    pub tools: Vec<String>,
    pub focus: Vec<String>,
}

impl CategorizedTags {
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Scope => &self.scope,
            Category::Tools => &self.tools,
            Category::Focus => &self.focus,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Scope => &mut self.scope,
            Category::Tools => &mut self.tools,
            Category::Focus => &mut self.focus,
        }
    }

    /// Buckets in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// All tags, scope first, then tools, then focus
    pub fn all(&self) -> impl Iterator<Item = &String> {
        self.scope.iter().chain(&self.tools).chain(&self.focus)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scope.len() + self.tools.len() + self.focus.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First tag of each category, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepresentativeTags<'a> {
    pub scope: Option<&'a str>,
    pub tools: Option<&'a str>,
    pub focus: Option<&'a str>,
}

/// Mapping from known tags to their category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCategoryMap {
    categories: FxHashMap<String, Category>,
}

impl Default for TagCategoryMap {
    fn default() -> Self {
        Self {
            categories: DEFAULT_TAGS
                .iter()
                .map(|&(tag, category)| (tag.to_string(), category))
                .collect(),
        }
    }
}

impl TagCategoryMap {
    /// A map with no known tags; everything classifies as tools
    #[must_use]
    pub fn empty() -> Self {
        Self {
            categories: FxHashMap::default(),
        }
    }

    /// Build a map from per-category lists
    ///
    /// A tag listed under more than one category keeps its last listing,
    /// reading scope, then tools, then focus.
    #[must_use]
    pub fn from_table(table: &TagTable) -> Self {
        let mut map = Self::empty();
        let lists = [
            (Category::Scope, &table.scope),
            (Category::Tools, &table.tools),
            (Category::Focus, &table.focus),
        ];
        for (category, tags) in lists {
            for tag in tags {
                map.insert(tag.clone(), category);
            }
        }
        map
    }

    /// Classify `tag`, overriding any previous entry
    pub fn insert(&mut self, tag: String, category: Category) {
        if let Some(previous) = self.categories.insert(tag.clone(), category)
            && previous != category
        {
            warn!(%tag, from = %previous, to = %category, "tag listed in more than one category");
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Category of `tag`, defaulting to tools for unknown tags
    ///
    /// # Examples
    /// ```
    /// use portfolio_engine::tags::{Category, TagCategoryMap};
    ///
    /// let map = TagCategoryMap::default();
    /// assert_eq!(map.category("Frontend"), Category::Scope);
    /// assert_eq!(map.category("Never Heard Of It"), Category::Tools);
    /// ```
    #[must_use]
    pub fn category(&self, tag: &str) -> Category {
        self.categories.get(tag).copied().unwrap_or_default()
    }

    /// Partition tags by category, keeping input order within each bucket
    #[must_use]
    pub fn categorize<S: AsRef<str>>(&self, tags: &[S]) -> CategorizedTags {
        let mut categorized = CategorizedTags::default();
        for tag in tags {
            let tag = tag.as_ref();
            categorized
                .get_mut(self.category(tag))
                .push(tag.to_string());
        }
        categorized
    }

    /// First tag in input order for each category
    #[must_use]
    pub fn representative_tags<'a, S: AsRef<str>>(&self, tags: &'a [S]) -> RepresentativeTags<'a> {
        let mut rep = RepresentativeTags::default();
        for tag in tags {
            let tag = tag.as_ref();
            let slot = match self.category(tag) {
                Category::Scope => &mut rep.scope,
                Category::Tools => &mut rep.tools,
                Category::Focus => &mut rep.focus,
            };
            slot.get_or_insert(tag);
        }
        rep
    }

    /// Stable sort by category priority, then alphabetically
    ///
    /// # Examples
    /// ```
    /// use portfolio_engine::tags::TagCategoryMap;
    ///
    /// let map = TagCategoryMap::default();
    /// let sorted = map.sort_tags(&["RAG", "React", "Backend", "Docker"]);
    /// assert_eq!(sorted, ["Backend", "Docker", "React", "RAG"]);
    /// ```
    #[must_use]
    pub fn sort_tags<S: AsRef<str>>(&self, tags: &[S]) -> Vec<String> {
        let mut sorted: Vec<String> = tags.iter().map(|t| t.as_ref().to_string()).collect();
        sorted.sort_by(|a, b| {
            self.category(a)
                .priority()
                .cmp(&self.category(b).priority())
                .then_with(|| compare_alphabetic(a, b))
        });
        sorted
    }
}

/// Alphabetical comparison in the manner of a default locale collation
///
/// Case-insensitive first; on a tie lowercase sorts before uppercase, then
/// code point order decides.
#[must_use]
pub fn compare_alphabetic(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a)
        .cmp(&folded(b))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}
