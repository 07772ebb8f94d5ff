//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_classification, print_evaluation, print_project_groups, print_projects,
    print_share_grid, print_tag_index,
};
