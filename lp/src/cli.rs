//! CLI command definitions and subcommands

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::domain::{Category, CategoryFilter, ToolPatch};

/// Launchpad - personal tool launcher
#[derive(Parser, Debug)]
#[command(name = "lp")]
#[command(author, version, about = "Personal tool launcher: save, find and open your web tools", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List tools, optionally filtered by category and search text
    #[command(alias = "ls")]
    List {
        /// Category to show (all, production, marketing, development, design, analytics, communication)
        #[arg(short = 'C', long, default_value = "all")]
        category: CategoryFilter,

        /// Case-insensitive text matched against name and description
        #[arg(short, long)]
        query: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a tool
    Add {
        /// Destination URL (https:// is added when no scheme is given)
        #[arg(required = true)]
        url: String,

        /// Display name (derived from the URL's host when omitted)
        #[arg(short, long)]
        name: Option<String>,

        #[command(flatten)]
        fields: ToolFields,

        /// Category (defaults to the configured category)
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Do not derive missing name/favicon from the URL
        #[arg(long)]
        no_autofill: bool,
    },

    /// Edit fields of a tool
    Edit {
        /// Tool id, id prefix, or name
        #[arg(required = true)]
        reference: String,

        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New destination URL
        #[arg(short, long)]
        url: Option<String>,

        #[command(flatten)]
        fields: ToolFields,

        /// New category
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Remove the description
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,

        /// Remove the emoji icon
        #[arg(long, conflicts_with = "emoji")]
        clear_emoji: bool,

        /// Remove the favicon
        #[arg(long, conflicts_with = "favicon")]
        clear_favicon: bool,

        /// Remove the thumbnail
        #[arg(long, conflicts_with = "thumbnail")]
        clear_thumbnail: bool,
    },

    /// Remove a tool
    #[command(alias = "delete")]
    Rm {
        /// Tool id, id prefix, or name
        #[arg(required = true)]
        reference: String,

        /// Confirm removal
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one tool in full
    Show {
        /// Tool id, id prefix, or name
        #[arg(required = true)]
        reference: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Open a tool in the default browser
    Open {
        /// Tool id, id prefix, or name
        #[arg(required = true)]
        reference: String,

        /// Print the URL instead of opening it
        #[arg(short, long)]
        print: bool,
    },

    /// List categories with tool counts
    Categories,

    /// List the icon glyphs available for --emoji
    Icons,

    /// Remove every tool
    Reset {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to this path
        #[arg(long)]
        save: Option<PathBuf>,
    },
}

/// Optional fields shared by `add` and `edit`
#[derive(Args, Debug, Default, Clone)]
pub struct ToolFields {
    /// Free-text description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Single-glyph icon shown instead of the favicon
    #[arg(short, long)]
    pub emoji: Option<String>,

    /// Icon image URL
    #[arg(long)]
    pub favicon: Option<String>,

    /// Preview image URL
    #[arg(long)]
    pub thumbnail: Option<String>,
}

/// Clear flags accepted by `edit`
#[derive(Debug, Default, Clone, Copy)]
pub struct ClearFlags {
    pub description: bool,
    pub emoji: bool,
    pub favicon: bool,
    pub thumbnail: bool,
}

/// Build a patch from `edit` arguments; a clear flag wins over a missing value
pub fn build_patch(
    name: Option<String>,
    url: Option<String>,
    fields: ToolFields,
    category: Option<Category>,
    clear: ClearFlags,
) -> ToolPatch {
    fn field(value: Option<String>, clear: bool) -> Option<Option<String>> {
        if clear { Some(None) } else { value.map(Some) }
    }

    let patch = ToolPatch {
        name,
        url,
        description: field(fields.description, clear.description),
        favicon: field(fields.favicon, clear.favicon),
        thumbnail: field(fields.thumbnail, clear.thumbnail),
        emoji: field(fields.emoji, clear.emoji),
        category,
    };
    debug!(?patch, "build_patch: built");
    patch
}

/// Location of the log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("launchpad")
        .join("logs")
        .join("launchpad.log")
}

/// Output format for list/show commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown format: {}. Use text, json, or table", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("PLAIN".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from(["lp", "list", "-C", "design", "-q", "fig", "-f", "json"]).unwrap();
        match cli.command {
            Command::List {
                category,
                query,
                format,
            } => {
                assert_eq!(category, CategoryFilter::Only(Category::Design));
                assert_eq!(query.as_deref(), Some("fig"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_add_rejects_all_category() {
        assert!(Cli::try_parse_from(["lp", "add", "x.com", "-C", "all"]).is_err());
    }

    #[test]
    fn test_parse_rm_confirmation() {
        match Cli::try_parse_from(["lp", "rm", "figma", "-y"]).unwrap().command {
            Command::Rm { reference, yes } => {
                assert_eq!(reference, "figma");
                assert!(yes);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        match Cli::try_parse_from(["lp", "delete", "figma"]).unwrap().command {
            Command::Rm { yes, .. } => assert!(!yes),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_build_patch_clear_flags() {
        let patch = build_patch(
            Some("New".to_string()),
            None,
            ToolFields {
                emoji: Some("🚀".to_string()),
                ..Default::default()
            },
            None,
            ClearFlags {
                description: true,
                ..Default::default()
            },
        );

        assert_eq!(patch.name.as_deref(), Some("New"));
        assert_eq!(patch.description, Some(None));
        assert_eq!(patch.emoji, Some(Some("🚀".to_string())));
        assert_eq!(patch.favicon, None);
        assert_eq!(patch.category, None);
    }
}
