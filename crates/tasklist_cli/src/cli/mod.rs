use clap::{Parser, Subcommand};
use tasklist_core::config::canonical_key;

/// Process arguments. The binary always opens an interactive session.
#[derive(Parser, Debug)]
#[command(name = "tasklist", author, version, about, long_about = None)]
pub struct Cli {
    /// Start with this theme (light or dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Start with this language (english or arabic)
    #[arg(long = "lang", value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Render task views as JSON
    #[arg(long)]
    pub json: bool,

    /// Override configuration values (format KEY=VALUE)
    #[arg(long = "config-override", value_name = "KEY=VALUE")]
    pub config_override: Vec<String>,
}

/// One line typed into the session.
#[derive(Parser, Debug)]
#[command(name = "tasklist", no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task
    ///
    /// Example: add "Buy milk" 2025-01-01 --priority low
    /// Example: add --priority low -- "-5 kg by June" 2025-06-01
    Add {
        description: Option<String>,
        date: Option<String>,
        #[arg(short, long, value_name = "PRIORITY")]
        priority: Option<String>,
    },
    /// Edit one task; omitted fields keep their current value
    ///
    /// Example: edit "Buy milk" --description "Buy oat milk" --date 2025-01-03
    /// Example: edit #2 --priority medium
    Edit {
        task: String,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, value_name = "PRIORITY")]
        priority: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete one or more tasks
    ///
    /// Example: delete "Buy milk" #3
    Delete { tasks: Vec<String> },
    /// Toggle completion of one or more tasks
    ///
    /// Example: done #1 #2
    #[command(visible_alias = "toggle")]
    Done { tasks: Vec<String> },
    /// Search descriptions (no text clears the search)
    ///
    /// Example: search milk
    /// Example: search -5 kg
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Filter by priority: all, high, medium, low
    ///
    /// Example: filter-priority high
    FilterPriority { value: String },
    /// Filter by status: all, completed, incomplete
    ///
    /// Example: filter-status incomplete
    FilterStatus { value: String },
    /// Sort tasks: none, priority
    ///
    /// Example: sort priority
    Sort { value: String },
    /// Clear search, filters and sort
    Reset,
    /// Show the current task view
    List,
    /// Switch the display language: english, arabic
    ///
    /// Example: lang arabic
    Lang { language: String },
    /// Switch the theme: light, dark
    ///
    /// Example: theme light
    Theme { theme: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOverrideTarget {
    Theme,
    Language,
    Alias(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfigOverride {
    pub target: ConfigOverrideTarget,
    pub value: String,
}

/// Parse a raw `KEY=VALUE` override string into a structured target.
pub fn parse_config_override(raw: &str) -> Result<ParsedConfigOverride, String> {
    let trimmed = raw.trim();
    let (key_raw, value_raw) = trimmed
        .split_once('=')
        .ok_or_else(|| "override must be in KEY=VALUE format".to_string())?;

    let value = value_raw.trim().to_string();
    let (field, remainder) = key_raw
        .split_once('.')
        .map(|(field, rest)| (field.trim(), Some(rest.trim())))
        .unwrap_or((key_raw.trim(), None));

    let canonical_field =
        canonicalize_flag_name(field).ok_or_else(|| "override key cannot be empty".to_string())?;

    match canonical_field.as_str() {
        "theme" | "language" | "lang" if remainder.is_some() => {
            Err(format!("{canonical_field} override cannot have subfields"))
        }
        "theme" => Ok(ParsedConfigOverride {
            target: ConfigOverrideTarget::Theme,
            value,
        }),
        "language" | "lang" => Ok(ParsedConfigOverride {
            target: ConfigOverrideTarget::Language,
            value,
        }),
        "aliases" | "alias" => {
            let alias_name = remainder
                .filter(|segment| !segment.is_empty())
                .ok_or_else(|| "aliases override requires an alias name".to_string())?;
            Ok(ParsedConfigOverride {
                target: ConfigOverrideTarget::Alias(alias_name.to_string()),
                value,
            })
        }
        other => Err(format!("unknown config field '{other}'")),
    }
}

fn canonicalize_flag_name(name: &str) -> Option<String> {
    let cleaned = canonical_key(name);
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
