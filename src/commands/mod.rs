//! Command implementations

pub mod evaluate;
pub mod projects;
pub mod simple;
pub mod word;

pub use evaluate::{EvaluationResult, evaluate_words};
pub use projects::{
    groups_json, list_projects, list_projects_by_type, projects_json, selection_from_args,
    tag_index,
};
pub use simple::{LineAction, handle_line, run_simple};
pub use word::fetch_word;
