//! Portfolio - CLI
//!
//! Word game (TUI and line mode) and project listing by tags.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use portfolio_engine::{
    commands::{
        evaluate_words, fetch_word, groups_json, list_projects, list_projects_by_type,
        projects_json, run_simple, tag_index,
    },
    config::Config,
    game::{Game, Session},
    logging::{self, LogTarget},
    output::{
        print_classification, print_evaluation, print_project_groups, print_projects,
        print_tag_index,
    },
    tags::{ContentItem, TagCategoryMap, load_content},
    wordlists::{EmbeddedWordSource, HttpWordSource, WordSource},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "portfolio",
    about = "Word game and tag-filtered project listing from the portfolio site",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: ./portfolio.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word endpoint returning {"word": "..."}; overrides the config
    #[arg(short, long, global = true)]
    endpoint: Option<String>,

    /// Write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without the TUI
    Simple,

    /// Evaluate a guess against a solution
    Evaluate {
        /// The guessed word
        guess: String,

        /// The solution word
        solution: String,
    },

    /// Fetch one word from the configured source
    Word,

    /// List published projects, newest first
    Projects {
        /// Content JSON file (default from config)
        content: Option<PathBuf>,

        /// Only projects carrying this tag; repeat for more (all must match)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Group by project type
        #[arg(long)]
        by_type: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Available filter tags by category
    Tags {
        /// Content JSON file (default from config)
        content: Option<PathBuf>,
    },

    /// Show the category of each tag and their display order
    Classify {
        /// Tags to classify
        #[arg(required = true)]
        tags: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path.as_path()),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(cli.verbose, target)?;

    let config = Config::load(cli.config.as_deref())?;
    let endpoint = cli.endpoint.or_else(|| config.wordle.endpoint.clone());
    let timeout = Duration::from_secs(config.wordle.timeout_secs);
    let words = config.wordle.words.as_deref();

    match command {
        Commands::Play => run_play_command(word_source(endpoint.as_deref(), words, timeout)?),
        Commands::Simple => run_simple_command(word_source(endpoint.as_deref(), words, timeout)?),
        Commands::Evaluate { guess, solution } => run_evaluate_command(&guess, &solution),
        Commands::Word => run_word_command(word_source(endpoint.as_deref(), words, timeout)?),
        Commands::Projects {
            content,
            tags,
            by_type,
            json,
        } => {
            let path = content.unwrap_or_else(|| config.content.path.clone());
            run_projects_command(&path, &tags, by_type, json, &config.tag_map())
        }
        Commands::Tags { content } => {
            let path = content.unwrap_or_else(|| config.content.path.clone());
            run_tags_command(&path, &config.tag_map())
        }
        Commands::Classify { tags } => {
            print_classification(&tags, &config.tag_map());
            Ok(())
        }
    }
}

/// Word source and a label for messages
///
/// An endpoint wins over a word list file, which wins over the embedded list.
fn word_source(
    endpoint: Option<&str>,
    words: Option<&Path>,
    timeout: Duration,
) -> Result<(Arc<dyn WordSource>, String)> {
    if let Some(endpoint) = endpoint {
        info!(%endpoint, "using word endpoint");
        let source: Arc<dyn WordSource> = Arc::new(HttpWordSource::new(endpoint, Some(timeout)));
        Ok((source, endpoint.to_string()))
    } else if let Some(path) = words {
        info!(path = %path.display(), "using word list file");
        let list = EmbeddedWordSource::from_file(path)
            .with_context(|| format!("Failed to load word list from {}", path.display()))?;
        let source: Arc<dyn WordSource> = Arc::new(list);
        Ok((source, path.display().to_string()))
    } else {
        info!("using embedded word list");
        let source: Arc<dyn WordSource> = Arc::new(EmbeddedWordSource::answers());
        Ok((source, "embedded list".to_string()))
    }
}

fn start_session(source: &dyn WordSource, label: &str) -> Result<Session> {
    let word = fetch_word(source, label).with_context(|| format!("No starting word from {label}"))?;
    Ok(Session::new(Game::new(word)))
}

fn run_play_command((source, label): (Arc<dyn WordSource>, String)) -> Result<()> {
    use portfolio_engine::interactive::{App, run_tui};

    let session = start_session(source.as_ref(), &label)?;
    run_tui(App::new(session, source, label))
}

fn run_simple_command((source, label): (Arc<dyn WordSource>, String)) -> Result<()> {
    let mut session = start_session(source.as_ref(), &label)?;
    run_simple(&mut session, source.as_ref())?;
    Ok(())
}

fn run_evaluate_command(guess: &str, solution: &str) -> Result<()> {
    let result = evaluate_words(guess, solution)?;
    print_evaluation(&result.guess, &result.solution, &result.cells);
    Ok(())
}

fn run_word_command((source, label): (Arc<dyn WordSource>, String)) -> Result<()> {
    let word = fetch_word(source.as_ref(), &label)?;
    println!("{}", word.text().to_uppercase().bright_yellow().bold());
    Ok(())
}

fn load_items(path: &Path) -> Result<Vec<ContentItem>> {
    load_content(path).with_context(|| format!("Failed to load content from {}", path.display()))
}

fn run_projects_command(
    path: &Path,
    tags: &[String],
    by_type: bool,
    json: bool,
    map: &TagCategoryMap,
) -> Result<()> {
    let items = load_items(path)?;

    if by_type {
        let groups = list_projects_by_type(&items, tags, map);
        if json {
            println!("{}", groups_json(&groups, map)?);
        } else {
            print_project_groups(&groups, map);
        }
    } else {
        let listing = list_projects(&items, tags, map);
        if json {
            println!("{}", projects_json(&listing, map)?);
        } else {
            print_projects(&listing, map);
        }
    }
    Ok(())
}

fn run_tags_command(path: &Path, map: &TagCategoryMap) -> Result<()> {
    let items = load_items(path)?;
    print_tag_index(&tag_index(&items, map));
    Ok(())
}
