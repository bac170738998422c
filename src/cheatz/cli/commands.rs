//! # CLI Layer
//!
//! One UI client for cheatz, not the application itself. This is the only place
//! that knows about stdout, stderr, stdin, the editor, the clipboard, and
//! process exit codes.
//!
//! - `run()`: parse arguments, set up logging and `AppContext`, dispatch
//! - `handle_*()`: one per subcommand; calls `CheatzApi` and prints the result
//!
//! Output formatting lives in `render.rs`. Business logic stays in the library.

use super::render::{print_messages, render_full_sheets, render_sheet_list};
use super::setup::{get_grouped_help, Cli, Commands};
use cheatz::api::{CheatzApi, CmdMessage, ConfigAction};
use cheatz::clipboard::copy_to_clipboard;
use cheatz::config::CheatzConfig;
use cheatz::editor::edit_markdown;
use cheatz::error::{CheatzError, Result};
use cheatz::markdown::{document_to_markdown, table_to_markdown};
use cheatz::store::fs::FileStore;
use clap::{CommandFactory, FromArgMatches};
use directories::ProjectDirs;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

const DATA_DIR_ENV: &str = "CHEATZ_HOME";

const TABLE_TEMPLATE: &str = "| New Table |\n| -------- | -------- |\n| key | value |\n";

struct AppContext {
    api: CheatzApi<FileStore>,
}

pub fn run() -> Result<()> {
    let matches = Cli::command()
        .override_help(get_grouped_help())
        .get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    init_logging(cli.verbose);
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Create { name, description }) => handle_create(&mut ctx, name, description),
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::View { sheets }) => handle_view(&ctx, sheets),
        Some(Commands::Rename { sheet, name }) => handle_rename(&mut ctx, sheet, name),
        Some(Commands::Describe { sheet, description }) => {
            handle_describe(&mut ctx, sheet, description)
        }
        Some(Commands::Duplicate { sheets }) => handle_duplicate(&mut ctx, sheets),
        Some(Commands::Delete { sheets }) => handle_delete(&mut ctx, sheets),
        Some(Commands::AddTable { sheet, file }) => handle_add_table(&mut ctx, sheet, file),
        Some(Commands::EditTable { sheet, table }) => handle_edit_table(&mut ctx, sheet, table),
        Some(Commands::RemoveTable { sheet, table }) => {
            handle_remove_table(&mut ctx, sheet, table)
        }
        Some(Commands::MoveTable { sheet, from, to }) => {
            handle_move_table(&mut ctx, sheet, from, to)
        }
        Some(Commands::Edit { sheet }) => handle_edit(&mut ctx, sheet),
        Some(Commands::Import { into, paths }) => handle_import(&mut ctx, into, paths),
        Some(Commands::Export { archive, sheets }) => handle_export(&ctx, archive, sheets),
        Some(Commands::Copy { sheets }) => handle_copy(&ctx, sheets),
        Some(Commands::Path { sheets }) => handle_paths(&ctx, sheets),
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

/// `warn` by default, `debug` with `--verbose`. `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "cheatz", "cheatz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CheatzError::Api(format!(
                "Could not determine a data directory. Set ${}.",
                DATA_DIR_ENV
            ))
        })
}

fn init_context() -> Result<AppContext> {
    let data_dir = data_dir()?;
    log::debug!("data dir: {}", data_dir.display());

    let config = match CheatzConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring unreadable config: {}", e);
            CheatzConfig::default()
        }
    };

    let store = FileStore::new(data_dir.clone());
    Ok(AppContext {
        api: CheatzApi::new(store, data_dir, config),
    })
}

/// Reads piped stdin, or `None` when stdin is a terminal.
fn read_piped_stdin() -> Result<Option<String>> {
    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buffer = String::new();
    stdin.read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

fn handle_create(ctx: &mut AppContext, name: Option<String>, description: String) -> Result<()> {
    let result = ctx.api.create_sheet(name, description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list_sheets(search.as_deref())?;
    print!("{}", render_sheet_list(&result.listed_sheets));
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, sheets: Vec<String>) -> Result<()> {
    let result = ctx.api.view_sheets(&sheets)?;
    print!("{}", render_full_sheets(&result.listed_sheets));
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, sheet: String, name: String) -> Result<()> {
    let result = ctx.api.rename_sheet(&[sheet], name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_describe(ctx: &mut AppContext, sheet: String, description: String) -> Result<()> {
    let result = ctx.api.describe_sheet(&[sheet], description)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_duplicate(ctx: &mut AppContext, sheets: Vec<String>) -> Result<()> {
    let result = ctx.api.duplicate_sheets(&sheets)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, sheets: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_sheets(&sheets)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_table(ctx: &mut AppContext, sheet: String, file: Option<PathBuf>) -> Result<()> {
    let markdown = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => match read_piped_stdin()? {
            Some(text) => text,
            None => edit_markdown(TABLE_TEMPLATE, "new-table")?,
        },
    };

    let result = ctx.api.add_table(&[sheet], &markdown)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit_table(ctx: &mut AppContext, sheet: String, position: usize) -> Result<()> {
    let viewed = ctx.api.view_sheets(&[sheet])?;
    let Some(target) = viewed.listed_sheets.first() else {
        return Ok(());
    };
    let table = position
        .checked_sub(1)
        .and_then(|i| target.sheet.tables().get(i))
        .ok_or_else(|| {
            CheatzError::Api(format!(
                "Table {} not found: \"{}\" has {} tables",
                position,
                target.sheet.name(),
                target.sheet.tables().len()
            ))
        })?;

    let original = table_to_markdown(table);
    let edited = edit_markdown(&original, &table.title)?;
    if edited.trim() == original.trim() {
        print_messages(&[CmdMessage::info("No changes.")]);
        return Ok(());
    }

    let result = ctx
        .api
        .replace_table(&[target.index.to_string()], position, &edited)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove_table(ctx: &mut AppContext, sheet: String, position: usize) -> Result<()> {
    let result = ctx.api.remove_table(&[sheet], position)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_move_table(ctx: &mut AppContext, sheet: String, from: usize, to: usize) -> Result<()> {
    let result = ctx.api.move_table(&[sheet], from, to)?;
    print_messages(&result.messages);
    Ok(())
}

/// Round-trips each sheet through markdown in the editor.
fn handle_edit(ctx: &mut AppContext, sheets: Vec<String>) -> Result<()> {
    let viewed = ctx.api.view_sheets(&sheets)?;

    for target in &viewed.listed_sheets {
        let original = document_to_markdown(&target.sheet.document);
        let edited = edit_markdown(&original, target.sheet.name())?;
        if edited.trim() == original.trim() {
            print_messages(&[CmdMessage::info(format!(
                "No changes to {}.",
                target.sheet.name()
            ))]);
            continue;
        }

        let result = ctx
            .api
            .import_into(&[target.index.to_string()], &edited)?;
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_import(ctx: &mut AppContext, into: Option<String>, paths: Vec<PathBuf>) -> Result<()> {
    if let Some(target) = into {
        let markdown = match paths.as_slice() {
            [] => read_piped_stdin()?.ok_or_else(|| {
                CheatzError::Api("Nothing to import: give a file or pipe markdown in".into())
            })?,
            [path] => std::fs::read_to_string(path)?,
            _ => {
                return Err(CheatzError::Api(
                    "--into takes a single markdown file".into(),
                ))
            }
        };
        let result = ctx.api.import_into(&[target], &markdown)?;
        print_messages(&result.messages);
        return Ok(());
    }

    let result = if paths.is_empty() {
        let markdown = read_piped_stdin()?.ok_or_else(|| {
            CheatzError::Api("Nothing to import: give paths or pipe markdown in".into())
        })?;
        ctx.api.import_text(&markdown)?
    } else {
        ctx.api.import_paths(paths)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, archive: bool, sheets: Vec<String>) -> Result<()> {
    if archive {
        let out_dir = std::env::current_dir()?;
        let result = ctx.api.export_archive(&sheets, &out_dir)?;
        print_messages(&result.messages);
        return Ok(());
    }

    let result = ctx.api.export_markdown(&sheets)?;
    if let Some(markdown) = &result.markdown {
        print!("{}", markdown);
    }
    if result.markdown.as_deref().map_or(true, str::is_empty) {
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_copy(ctx: &AppContext, sheets: Vec<String>) -> Result<()> {
    let result = ctx.api.export_markdown(&sheets)?;
    let markdown = result.markdown.unwrap_or_default();
    copy_to_clipboard(&markdown)?;
    print_messages(&[CmdMessage::success("Copied to clipboard.")]);
    Ok(())
}

fn handle_paths(ctx: &AppContext, sheets: Vec<String>) -> Result<()> {
    let result = ctx.api.sheet_paths(&sheets)?;
    for path in &result.paths {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            for key in CheatzConfig::KEYS {
                println!("{} = {}", key, config.get(key).unwrap_or_default());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}
