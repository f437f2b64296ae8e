//! Launchpad - personal tool launcher
//!
//! CLI entry point for adding, finding and opening tools.

use std::fs;

use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use tracing::{debug, info};

use keystore::FileStorage;
use launchpad::cli::{ClearFlags, Cli, Command, OutputFormat, ToolFields, build_patch, get_log_path};
use launchpad::config::Config;
use launchpad::{
    Category, CategoryFilter, HostMetadata, ICON_PALETTE, MetadataLookup, Mutation, Registry, SystemLauncher, Tool,
    ToolDraft, category_counts, open_tool, search,
};

type FileRegistry = Registry<FileStorage>;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    let log_path = get_log_path();
    if let Some(log_dir) = log_path.parent() {
        fs::create_dir_all(log_dir).context("Failed to create log directory")?;
    }

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(|s| s.to_uppercase()) {
        Some(s) => match s.as_str() {
            "TRACE" => tracing::Level::TRACE,
            "DEBUG" => tracing::Level::DEBUG,
            "INFO" => tracing::Level::INFO,
            "WARN" | "WARNING" => tracing::Level::WARN,
            "ERROR" => tracing::Level::ERROR,
            _ => {
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        },
        None => tracing::Level::INFO,
    };

    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(store = %config.storage.path.display(), key = %config.storage.key, "launchpad starting");

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::List {
            category,
            query,
            format,
        } => {
            let registry = open_registry(&config)?;
            cmd_list(&registry, category, query.as_deref().unwrap_or(""), format)
        }
        Command::Add {
            url,
            name,
            fields,
            category,
            no_autofill,
        } => {
            let mut registry = open_registry(&config)?;
            let autofill = config.defaults.autofill && !no_autofill;
            let category = category.unwrap_or(config.defaults.category);
            cmd_add(&mut registry, url, name, fields, category, autofill)
        }
        Command::Edit {
            reference,
            name,
            url,
            fields,
            category,
            clear_description,
            clear_emoji,
            clear_favicon,
            clear_thumbnail,
        } => {
            let mut registry = open_registry(&config)?;
            let clear = ClearFlags {
                description: clear_description,
                emoji: clear_emoji,
                favicon: clear_favicon,
                thumbnail: clear_thumbnail,
            };
            cmd_edit(&mut registry, &reference, build_patch(name, url, fields, category, clear))
        }
        Command::Rm { reference, yes } => {
            let mut registry = open_registry(&config)?;
            cmd_rm(&mut registry, &reference, yes)
        }
        Command::Show { reference, format } => {
            let registry = open_registry(&config)?;
            cmd_show(&registry, &reference, format)
        }
        Command::Open { reference, print } => {
            let registry = open_registry(&config)?;
            cmd_open(&registry, &reference, print)
        }
        Command::Categories => {
            let registry = open_registry(&config)?;
            cmd_categories(&registry)
        }
        Command::Icons => cmd_icons(),
        Command::Reset { yes } => {
            let mut registry = open_registry(&config)?;
            cmd_reset(&mut registry, yes)
        }
        Command::Config { save } => cmd_config(&config, save.as_deref()),
    }
}

fn open_registry(config: &Config) -> Result<FileRegistry> {
    let storage = FileStorage::open(&config.storage.path).context("Failed to open tool storage")?;
    let (registry, outcome) = Registry::load_with_key(storage, config.storage.key.as_str());
    debug!(?outcome, "open_registry: loaded");
    Ok(registry)
}

/// Warn when a change stayed in memory only
fn report_persist<T>(mutation: &Mutation<T>) {
    if let Some(e) = mutation.warning() {
        eprintln!("{} Change applied but not saved: {}", "⚠".yellow(), e);
    }
}

fn cmd_list(registry: &FileRegistry, category: CategoryFilter, query: &str, format: OutputFormat) -> Result<()> {
    let tools = search(registry.tools(), query, category);
    debug!(count = tools.len(), %category, query, "cmd_list: filtered");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&tools)?),
        OutputFormat::Text if tools.is_empty() => println!("No tools found"),
        OutputFormat::Text => {
            for tool in &tools {
                println!(
                    "{} {} {} {} {}",
                    tool.icon(),
                    tool.name.bold(),
                    tool.url.cyan(),
                    format!("[{}]", tool.category).dimmed(),
                    tool.id.short().dimmed()
                );
                if let Some(description) = &tool.description {
                    println!("    {}", description);
                }
            }
        }
        OutputFormat::Table => print_table(&tools),
    }
    Ok(())
}

fn print_table(tools: &[&Tool]) {
    let name_width = tools.iter().map(|t| t.name.chars().count()).max().unwrap_or(0).max(4);
    println!(
        "{:<8}  {:<name_width$}  {:<13}  URL",
        "ID", "NAME", "CATEGORY"
    );
    for tool in tools {
        println!(
            "{:<8}  {:<name_width$}  {:<13}  {}",
            tool.id.short(),
            tool.name,
            tool.category.as_str(),
            tool.url
        );
    }
}

fn cmd_add(
    registry: &mut FileRegistry,
    url: String,
    name: Option<String>,
    fields: ToolFields,
    category: Category,
    autofill: bool,
) -> Result<()> {
    let mut draft = ToolDraft {
        name: name.unwrap_or_default(),
        url,
        description: fields.description,
        favicon: fields.favicon,
        thumbnail: fields.thumbnail,
        emoji: fields.emoji,
        category: Some(category),
    };

    if autofill {
        match HostMetadata.lookup(&draft.url) {
            Ok(metadata) => draft = metadata.fill(draft),
            // The registry reports the real validation error below
            Err(e) => debug!(error = %e, "cmd_add: metadata lookup skipped"),
        }
    }

    let mutation = registry.create(draft).context("Failed to add tool")?;
    report_persist(&mutation);
    let tool = mutation.into_value();
    println!(
        "{} Added {} {} {}",
        "✓".green(),
        tool.name.bold(),
        tool.url.cyan(),
        tool.id.short().dimmed()
    );
    Ok(())
}

fn cmd_edit(registry: &mut FileRegistry, reference: &str, patch: launchpad::ToolPatch) -> Result<()> {
    if patch.is_empty() {
        bail!("Nothing to change: pass at least one field to edit");
    }
    let id = registry.resolve(reference)?.id.clone();
    let mutation = registry.update(&id, patch).context("Failed to update tool")?;
    report_persist(&mutation);
    let tool = mutation.into_value();
    println!("{} Updated {} {}", "✓".green(), tool.name.bold(), tool.id.short().dimmed());
    Ok(())
}

fn cmd_rm(registry: &mut FileRegistry, reference: &str, yes: bool) -> Result<()> {
    let tool = registry.resolve(reference)?;
    if !yes {
        bail!("Refusing to remove {} ({}) without --yes", tool.name, tool.url);
    }
    let id = tool.id.clone();
    let mutation = registry.delete(&id);
    report_persist(&mutation);
    if let Some(tool) = mutation.into_value() {
        println!("{} Removed {}", "✓".green(), tool.name.bold());
    }
    Ok(())
}

fn cmd_show(registry: &FileRegistry, reference: &str, format: OutputFormat) -> Result<()> {
    let tool = registry.resolve(reference)?;
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(tool)?);
        return Ok(());
    }

    let created = chrono::DateTime::from_timestamp_millis(tool.created_at)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| tool.created_at.to_string());

    println!("{} {}", tool.icon(), tool.name.bold());
    println!("  ID:          {}", tool.id);
    println!("  URL:         {}", tool.url.cyan());
    println!("  Category:    {} {}", tool.category.glyph(), tool.category.label());
    if let Some(description) = &tool.description {
        println!("  Description: {}", description);
    }
    if let Some(favicon) = &tool.favicon {
        println!("  Favicon:     {}", favicon);
    }
    if let Some(thumbnail) = &tool.thumbnail {
        println!("  Thumbnail:   {}", thumbnail);
    }
    println!("  Created:     {}", created);
    Ok(())
}

fn cmd_open(registry: &FileRegistry, reference: &str, print: bool) -> Result<()> {
    let tool = registry.resolve(reference)?;
    if print {
        println!("{}", tool.url);
        return Ok(());
    }
    open_tool(&SystemLauncher, tool)?;
    println!("{} Opened {}", "✓".green(), tool.url.cyan());
    Ok(())
}

fn cmd_categories(registry: &FileRegistry) -> Result<()> {
    for (filter, count) in category_counts(registry.tools()) {
        println!(
            "{} {:<14} {:<14} {}",
            filter.glyph(),
            filter.label(),
            filter.as_str().dimmed(),
            count
        );
    }
    Ok(())
}

fn cmd_icons() -> Result<()> {
    println!("{}", ICON_PALETTE.join(" "));
    Ok(())
}

fn cmd_reset(registry: &mut FileRegistry, yes: bool) -> Result<()> {
    if !yes {
        bail!("Refusing to remove {} tools without --yes", registry.len());
    }
    let mutation = registry.clear();
    report_persist(&mutation);
    println!("{} Removed {} tools", "✓".green(), mutation.into_value());
    Ok(())
}

fn cmd_config(config: &Config, save: Option<&std::path::Path>) -> Result<()> {
    if let Some(path) = save {
        config.save(path).context(format!("Failed to save config to {}", path.display()))?;
        println!("{} Saved config to {}", "✓".green(), path.display());
        return Ok(());
    }
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}
