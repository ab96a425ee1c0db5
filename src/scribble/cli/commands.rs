//! # CLI Layer
//!
//! This module is **one possible UI client** for scribble. It is the only place that:
//! - Knows about terminal I/O (stdout, stderr, prompts)
//! - Parses arguments
//! - Formats output for humans
//!
//! ## Flow
//!
//! 1. Parse arguments with clap and install logging
//! 2. Build an [`AppContext`]: resolve the data dir, load config, open the store
//! 3. Sweep expired trash once, before anything is rendered
//! 4. Dispatch to a `handle_*` function, which calls [`ScribbleApi`] and renders
//!
//! Every mutating handler re-renders the affected collection afterwards, whether or
//! not the call changed anything.

use super::compose;
use super::logging;
use super::render::{
    print_messages, render_config, render_full_notes, render_note_list, render_theme,
    render_trash_count,
};
use super::setup::{Cli, Commands, ThemeMode};
use super::styles::Painter;
use chrono::Utc;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use scribble::api::{
    ConfigAction, NoteFilter, NoteStatusFilter, NoteUpdate, ScribbleApi, ThemeAction,
};
use scribble::config::ScribbleConfig;
use scribble::error::{Result, ScribbleError};
use scribble::store::{DataStore, FileStore};
use std::path::PathBuf;
use tracing::{debug, warn};

const HOME_ENV: &str = "SCRIBBLE_HOME";

struct AppContext {
    api: ScribbleApi<FileStore>,
    config: ScribbleConfig,
    painter: Painter,
    color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { title, content }) => handle_create(&mut ctx, title, content),
        Some(Commands::Compose) => handle_compose(&mut ctx),
        Some(Commands::List {
            deleted,
            all,
            search,
        }) => handle_list(&mut ctx, status_for(deleted, all), search),
        Some(Commands::View { indexes }) => handle_view(&mut ctx, indexes),
        Some(Commands::Edit {
            index,
            title,
            content,
        }) => handle_edit(&mut ctx, index, title, content),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Restore { indexes }) => handle_restore(&mut ctx, indexes),
        Some(Commands::Purge { indexes, yes }) => handle_purge(&mut ctx, indexes, yes),
        Some(Commands::Trash) => handle_list(&mut ctx, NoteStatusFilter::Trashed, None),
        Some(Commands::Theme { mode }) => handle_theme(&mut ctx, mode),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, NoteStatusFilter::Active, None),
    }
}

fn status_for(deleted: bool, all: bool) -> NoteStatusFilter {
    match (deleted, all) {
        (_, true) => NoteStatusFilter::All,
        (true, false) => NoteStatusFilter::Trashed,
        (false, false) => NoteStatusFilter::Active,
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "scribble", "scribble")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ScribbleError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = ScribbleConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        ScribbleConfig::default()
    });

    let store = FileStore::open_dir(data_dir.clone())?.with_retention(config.retention());
    let mut api = ScribbleApi::new(store, data_dir);

    // Expired trash never reaches the screen
    let swept = api.sweep_expired(Utc::now())?;

    let color = Term::stdout().features().colors_supported();
    let theme = api.theme(ThemeAction::Show)?.theme.unwrap_or_default();
    let painter = Painter::new(theme, color);

    print_messages(&swept.messages, &painter);

    Ok(AppContext {
        api,
        config,
        painter,
        color,
    })
}

fn print_active(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes(NoteFilter::default())?;
    print!(
        "{}",
        render_note_list(&result.listed_notes, "No notes yet.", &ctx.painter)
    );
    print!(
        "{}",
        render_trash_count(ctx.api.store().trash().len(), &ctx.painter)
    );
    Ok(())
}

fn print_trash(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_notes(NoteFilter {
        status: NoteStatusFilter::Trashed,
        ..Default::default()
    })?;
    print!(
        "{}",
        render_note_list(&result.listed_notes, "Trash is empty.", &ctx.painter)
    );
    Ok(())
}

fn handle_create(ctx: &mut AppContext, title: Vec<String>, content: Option<String>) -> Result<()> {
    let title = title.join(" ");
    let result = ctx
        .api
        .create_note(&title, content.as_deref().unwrap_or_default())?;
    print_messages(&result.messages, &ctx.painter);
    print_active(ctx)
}

fn handle_compose(ctx: &mut AppContext) -> Result<()> {
    let delay = ctx.config.autosave_delay();
    let painter = ctx.painter;
    let api = &mut ctx.api;

    compose::run(delay, |draft| {
        let result = api.create_note(&draft.title, &draft.content)?;
        print_messages(&result.messages, &painter);
        Ok(())
    })?;
    print_active(ctx)
}

fn handle_list(
    ctx: &mut AppContext,
    status: NoteStatusFilter,
    search: Option<String>,
) -> Result<()> {
    let result = ctx.api.list_notes(NoteFilter {
        status,
        search_term: search,
    })?;

    let empty_message = match status {
        NoteStatusFilter::Trashed => "Trash is empty.",
        _ => "No notes yet.",
    };
    print!(
        "{}",
        render_note_list(&result.listed_notes, empty_message, &ctx.painter)
    );
    if status == NoteStatusFilter::Active {
        print!(
            "{}",
            render_trash_count(ctx.api.store().trash().len(), &ctx.painter)
        );
    }
    print_messages(&result.messages, &ctx.painter);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_notes(&indexes)?;
    print!("{}", render_full_notes(&result.listed_notes, &ctx.painter));
    print_messages(&result.messages, &ctx.painter);
    Ok(())
}

fn handle_edit(
    ctx: &mut AppContext,
    index: String,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let result = ctx.api.edit_note(&index, NoteUpdate { title, content })?;
    print_messages(&result.messages, &ctx.painter);
    print_active(ctx)
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_notes(&indexes)?;
    print_messages(&result.messages, &ctx.painter);
    print_active(ctx)
}

fn handle_restore(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.restore_notes(&indexes)?;
    print_messages(&result.messages, &ctx.painter);
    print_active(ctx)
}

fn handle_purge(ctx: &mut AppContext, indexes: Vec<String>, yes: bool) -> Result<()> {
    let preview = ctx.api.purge_preview(&indexes)?;

    if preview.all && !preview.targets.is_empty() && !yes {
        let question = format!(
            "Permanently delete all {} note(s) in the trash? This cannot be undone. [y/N] ",
            preview.targets.len()
        );
        if !confirm(&question)? {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = ctx.api.purge_notes(&indexes)?;
    print_messages(&result.messages, &ctx.painter);
    print_trash(ctx)
}

/// Blocking yes/no prompt on stderr. Anything but `y`/`yes` is a no.
fn confirm(question: &str) -> Result<bool> {
    let term = Term::stderr();
    term.write_str(question)?;

    // Term only reads from an attended terminal; piped answers come from stdin
    let answer = if term.is_term() {
        term.read_line()?
    } else {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        line
    };
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn handle_theme(ctx: &mut AppContext, mode: Option<ThemeMode>) -> Result<()> {
    let action = match mode {
        None => ThemeAction::Show,
        Some(ThemeMode::On) => ThemeAction::Set(scribble::theme::Theme::Dark),
        Some(ThemeMode::Off) => ThemeAction::Set(scribble::theme::Theme::Light),
        Some(ThemeMode::Toggle) => ThemeAction::Toggle,
    };

    let result = ctx.api.theme(action)?;
    if let Some(theme) = result.theme {
        ctx.painter = Painter::new(theme, ctx.color);
        if action == ThemeAction::Show {
            print!("{}", render_theme(theme));
        }
    }
    print_messages(&result.messages, &ctx.painter);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = action == ConfigAction::ShowAll;

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages, &ctx.painter);
    Ok(())
}
