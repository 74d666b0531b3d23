//! The SportMatch terminal binary.
//!
//! Wires the file-backed repositories into the use cases and runs the
//! interactive screen loop.

use std::borrow::Cow::{self, Borrowed, Owned};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};
use tracing_subscriber::EnvFilter;

use sportmatch_application::{BrowseUseCase, ChatUseCase, EventUseCase, ProfileUseCase};
use sportmatch_core::event::EventRepository;
use sportmatch_core::profile::ProfileImageRepository;
use sportmatch_infrastructure::{FileImageRepository, TomlEventRepository};

mod app;

#[derive(Parser)]
#[command(name = "sportmatch")]
#[command(about = "SportMatch - sports meetup matching for Gran Canaria", long_about = None)]
struct Cli {
    /// Store data under this directory instead of the per-user config dir
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

/// CLI helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    fn new() -> Self {
        Self {
            commands: vec![
                "search".to_string(),
                "activity".to_string(),
                "level".to_string(),
                "join".to_string(),
                "avatar".to_string(),
                "back".to_string(),
                "/exit".to_string(),
            ],
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if !line.is_empty() && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // ===== Backend Initialization =====
    let event_repository: Arc<dyn EventRepository> = match &cli.data_dir {
        Some(dir) => Arc::new(TomlEventRepository::with_base_path(dir.clone())),
        None => Arc::new(TomlEventRepository::new().context("resolving the event store path")?),
    };
    let image_repository: Arc<dyn ProfileImageRepository> = match &cli.data_dir {
        Some(dir) => Arc::new(FileImageRepository::with_base_path(dir.clone())),
        None => Arc::new(FileImageRepository::new().context("resolving the avatar slot path")?),
    };

    // Seed an empty store before the first screen reads it.
    let seeded = event_repository
        .load_all()
        .await
        .context("opening the event store")?;
    tracing::debug!(count = seeded.len(), "event store ready");

    let browse = BrowseUseCase::new(event_repository.clone());
    let events = EventUseCase::new(event_repository);
    let chat = ChatUseCase::new();
    let profile = ProfileUseCase::new(image_repository);

    app::App::new(browse, events, chat, profile).run().await
}
