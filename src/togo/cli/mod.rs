//! # CLI Layer
//!
//! One client of the togo library. This is the only code that parses
//! arguments, writes to the terminal, installs the log subscriber or decides
//! the exit code. Everything it shows comes from a `CmdResult`.

mod print;
mod setup;

use clap::Parser;
use directories::ProjectDirs;
use print::{print_config, print_footer, print_messages, print_tasks};
use setup::{Cli, Commands};
use std::path::PathBuf;
use togo::api::{ConfigAction, MessageLevel, TogoApi};
use togo::config::TogoConfig;
use togo::error::{Result, TogoError};
use togo::store::fs::FileStore;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: TogoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Ls { queries, done }) => handle_list(&ctx, &queries, done),
        Some(Commands::Add { text }) => handle_add(&mut ctx, &text.join(" ")),
        Some(Commands::Do { position }) => handle_complete(&mut ctx, position),
        Some(Commands::Rm { position }) => handle_delete(&mut ctx, position),
        Some(Commands::Archive) => handle_archive(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&mut ctx),
        None => handle_list(&ctx, &[], false),
    }
}

/// Logs go to stderr so stdout only carries task lines.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("togo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("TOGO_HOME") {
        return Ok(PathBuf::from(home));
    }
    let proj_dirs = ProjectDirs::from("com", "togo", "togo")
        .ok_or_else(|| TogoError::Config("Could not determine config dir".into()))?;
    Ok(proj_dirs.config_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let mut config = TogoConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config");
        TogoConfig::default()
    });

    if let Some(file) = &cli.file {
        config.todo_file = file.clone();
    }
    if let Some(done_file) = &cli.done_file {
        config.done_file = Some(done_file.clone());
    }
    debug!(
        todo = %config.todo_file.display(),
        done = %config.done_file_path().display(),
        "resolved task files"
    );

    let store = FileStore::new(config.todo_file.clone(), config.done_file_path());
    let api = TogoApi::new(store, config, config_dir);
    Ok(AppContext { api })
}

fn handle_list(ctx: &AppContext, queries: &[String], done: bool) -> Result<()> {
    let result = if done {
        ctx.api.list_archived(queries)?
    } else {
        ctx.api.list_tasks(queries)?
    };
    print_tasks(&result.listed_tasks);

    let source = result
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    print_footer(result.listed_tasks.len(), result.total_tasks, &source);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: &str) -> Result<()> {
    let result = ctx.api.add_task(text)?;
    print_messages(&result.messages);
    print_tasks(&result.affected_tasks);
    Ok(())
}

fn handle_complete(ctx: &mut AppContext, position: usize) -> Result<()> {
    let result = ctx.api.complete_task(position)?;
    print_messages(&result.messages);
    print_tasks(&result.affected_tasks);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, position: usize) -> Result<()> {
    let result = ctx.api.delete_task(position)?;
    print_messages(&result.messages);
    print_tasks(&result.affected_tasks);
    Ok(())
}

fn handle_archive(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.archive_tasks()?;
    print_messages(&result.messages);
    print_tasks(&result.affected_tasks);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(failure) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(TogoError::Config(failure.content.clone()));
    }

    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
            println!("(config dir: {})", ctx.api.config_dir().display());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
