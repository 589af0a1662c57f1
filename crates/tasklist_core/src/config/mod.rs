use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKLIST_CONFIG_PATH";
const APP_DIR_NAME: &str = "tasklist";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_name(raw: &str) -> Result<Self, AppError> {
        match canonical_theme_name(raw).as_deref() {
            Some("light") => Ok(Theme::Light),
            Some("dark") => Ok(Theme::Dark),
            _ => Err(AppError::invalid_input(format!(
                "unknown theme '{}'",
                raw.trim()
            ))),
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                accent: "\x1b[38;5;208m",
                muted: "\x1b[38;5;250m",
                reset: "\x1b[0m",
            },
            Theme::Light => Palette {
                accent: "",
                muted: "",
                reset: "",
            },
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Arabic => "arabic",
        }
    }

    pub fn from_name(raw: &str) -> Result<Self, AppError> {
        match canonical_language_name(raw).as_deref() {
            Some("english") => Ok(Language::English),
            Some("arabic") => Ok(Language::Arabic),
            _ => Err(AppError::invalid_input(format!(
                "unknown language '{}'",
                raw.trim()
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Palette {
    pub accent: &'static str,
    pub muted: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub fn accentize(&self, text: &str) -> String {
        if self.accent.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.accent, text, self.reset)
        }
    }

    pub fn mutedize(&self, text: &str) -> String {
        if self.muted.is_empty() {
            text.to_string()
        } else {
            format!("{}{}{}", self.muted, text, self.reset)
        }
    }
}

/// Lowercases `raw` and collapses every run of non-alphanumeric characters
/// into a single `_`, trimming separators from both ends.
pub fn canonical_key(raw: &str) -> String {
    let mut cleaned = String::new();
    let mut previous_underscore = false;

    for ch in raw.chars() {
        if ch.is_alphanumeric() {
            cleaned.extend(ch.to_lowercase());
            previous_underscore = false;
        } else if !previous_underscore && !cleaned.is_empty() {
            cleaned.push('_');
            previous_underscore = true;
        }
    }

    cleaned.trim_matches('_').to_string()
}

/// Maps theme spellings onto `light` or `dark`. Blank input means the
/// default theme; unknown names yield `None`.
pub fn canonical_theme_name(raw: &str) -> Option<String> {
    let cleaned = canonical_key(raw);
    if cleaned.is_empty() {
        return Some(Theme::default().as_str().to_string());
    }

    match cleaned.as_str() {
        "light" | "light_mode" | "lightmode" | "vanilla" | "default" => Some("light".to_string()),
        "dark" | "dark_mode" | "darkmode" | "noir" => Some("dark".to_string()),
        _ => None,
    }
}

pub fn canonical_language_name(raw: &str) -> Option<String> {
    match canonical_key(raw).as_str() {
        "english" | "en" => Some("english".to_string()),
        "arabic" | "ar" | "العربية" | "عربي" => Some("arabic".to_string()),
        _ => None,
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl Config {
    pub fn theme(&self) -> Theme {
        self.theme
            .as_deref()
            .and_then(|name| Theme::from_name(name).ok())
            .unwrap_or_default()
    }

    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .and_then(|name| Language::from_name(name).ok())
            .unwrap_or_default()
    }

    /// Replaces the first word of `line` when it names an alias.
    pub fn expand_alias(&self, line: &str) -> String {
        let trimmed = line.trim_start();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, Some(rest)),
            None => (trimmed, None),
        };

        match (self.aliases.get(head), rest) {
            (Some(expanded), Some(rest)) => format!("{expanded} {rest}"),
            (Some(expanded), None) => expanded.clone(),
            (None, _) => line.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    pub error: Option<AppError>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub theme: Option<String>,
    pub language: Option<String>,
    pub aliases: HashMap<String, String>,
}

pub fn config_path() -> Result<PathBuf, AppError> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR)
        && !path.trim().is_empty()
    {
        return Ok(PathBuf::from(path));
    }

    if cfg!(windows) {
        let appdata =
            std::env::var("APPDATA").map_err(|_| AppError::invalid_data("APPDATA is not set"))?;
        Ok(PathBuf::from(appdata)
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    } else {
        let home = std::env::var("HOME").map_err(|_| AppError::invalid_data("HOME is not set"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME))
    }
}

pub fn load_config_with_fallback() -> ConfigLoad {
    match config_path() {
        Ok(path) => load_config_with_fallback_from_path(&path),
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_with_fallback_from_path(path: &Path) -> ConfigLoad {
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return ConfigLoad {
            config: Config::default(),
            error: None,
        };
    }

    match load_config_from_path(path) {
        Ok(config) => ConfigLoad {
            config,
            error: None,
        },
        Err(err) => ConfigLoad {
            config: Config::default(),
            error: Some(err),
        },
    }
}

fn load_config_from_path(path: &Path) -> Result<Config, AppError> {
    let content = std::fs::read_to_string(path)
        .map_err(|err| AppError::io(format!("{}: {}", path.display(), err)))?;
    let config = serde_json::from_str(&content).map_err(|err| {
        AppError::invalid_data(format!("invalid JSON in {}: {}", path.display(), err))
    })?;
    Ok(normalize_config(config))
}

fn normalize_config(mut config: Config) -> Config {
    config.theme = config.theme.and_then(|name| canonical_theme_name(&name));
    config.language = config
        .language
        .and_then(|name| canonical_language_name(&name));
    config
}

pub fn merge_overrides(base: &Config, overrides: &ConfigOverrides) -> Config {
    let mut merged = base.clone();
    if let Some(theme) = overrides.theme.as_ref()
        && let Some(normalized) = canonical_theme_name(theme)
    {
        merged.theme = Some(normalized);
    }

    if let Some(language) = overrides.language.as_ref()
        && let Some(normalized) = canonical_language_name(language)
    {
        merged.language = Some(normalized);
    }

    for (alias, value) in overrides.aliases.iter() {
        merged.aliases.insert(alias.clone(), value.clone());
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::{
        Config, ConfigOverrides, Language, Theme, canonical_key, canonical_language_name,
        canonical_theme_name,
        load_config_from_path, load_config_with_fallback_from_path, merge_overrides,
    };
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(file_name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("tasklist-{nanos}-{file_name}"))
    }

    #[test]
    fn load_config_missing_returns_defaults_without_error() {
        let path = temp_path("missing-config.json");
        let result = load_config_with_fallback_from_path(&path);

        assert_eq!(result.config, Config::default());
        assert!(result.error.is_none());
    }

    #[test]
    fn load_config_invalid_returns_defaults_and_error() {
        let path = temp_path("invalid-config.json");
        fs::write(&path, "{ invalid json ").unwrap();

        let result = load_config_with_fallback_from_path(&path);
        fs::remove_file(&path).ok();

        assert_eq!(result.config, Config::default());
        assert_eq!(result.error.map(|err| err.code()), Some("invalid_data"));
    }

    #[test]
    fn load_config_reads_valid_file() {
        let path = temp_path("valid-config.json");
        let content = serde_json::json!({
            "theme": "Light Mode",
            "language": "AR",
            "aliases": {
                "ls": "list"
            }
        });
        fs::write(&path, serde_json::to_string(&content).unwrap()).unwrap();

        let loaded = load_config_from_path(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded.theme.as_deref(), Some("light"));
        assert_eq!(loaded.language.as_deref(), Some("arabic"));
        assert_eq!(loaded.theme(), Theme::Light);
        assert_eq!(loaded.language(), Language::Arabic);
        assert_eq!(loaded.aliases.get("ls").map(String::as_str), Some("list"));
    }

    #[test]
    fn defaults_are_dark_and_english() {
        let config = Config::default();
        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.language(), Language::English);
    }

    #[test]
    fn merge_overrides_updates_theme_language_and_aliases() {
        let base = Config {
            theme: Some("dark".into()),
            language: Some("english".into()),
            aliases: [("ls".into(), "list".into())].into_iter().collect(),
        };

        let overrides = ConfigOverrides {
            theme: Some("vanilla".into()),
            language: Some("arabic".into()),
            aliases: [
                ("ls".into(), "search milk".into()),
                ("x".into(), "delete".into()),
            ]
            .into_iter()
            .collect(),
        };

        let merged = merge_overrides(&base, &overrides);
        assert_eq!(merged.theme(), Theme::Light);
        assert_eq!(merged.language(), Language::Arabic);
        assert_eq!(
            merged.aliases.get("ls").map(String::as_str),
            Some("search milk")
        );
        assert_eq!(merged.aliases.get("x").map(String::as_str), Some("delete"));

        assert_eq!(base.theme.as_deref(), Some("dark"));
        assert!(!base.aliases.contains_key("x"));
    }

    #[test]
    fn merge_overrides_ignores_unknown_names() {
        let base = Config {
            theme: Some("light".into()),
            language: Some("arabic".into()),
            aliases: Default::default(),
        };
        let overrides = ConfigOverrides {
            theme: Some("oceanic".into()),
            language: Some("klingon".into()),
            aliases: Default::default(),
        };

        assert_eq!(merge_overrides(&base, &overrides), base);
    }

    #[test]
    fn merge_overrides_with_empty_overrides_returns_clone() {
        let base = Config {
            theme: Some("light".into()),
            language: None,
            aliases: [("ls".into(), "list".into())].into_iter().collect(),
        };

        let merged = merge_overrides(&base, &ConfigOverrides::default());

        assert_eq!(merged, base);
    }

    #[test]
    fn canonical_key_collapses_separators() {
        assert_eq!(canonical_key(" Dark--Mode "), "dark_mode");
        assert_eq!(canonical_key("ALIASES"), "aliases");
        assert_eq!(canonical_key("العربية"), "العربية");
        assert_eq!(canonical_key(" - "), "");
    }

    #[test]
    fn canonical_theme_name_maps_variants() {
        assert_eq!(canonical_theme_name("Vanilla"), Some("light".into()));
        assert_eq!(canonical_theme_name("Noir"), Some("dark".into()));
        assert_eq!(canonical_theme_name("dark-mode"), Some("dark".into()));
        assert_eq!(canonical_theme_name("  "), Some("dark".into()));
        assert_eq!(canonical_theme_name("oceanic"), None);
    }

    #[test]
    fn canonical_language_name_accepts_codes_and_endonyms() {
        assert_eq!(canonical_language_name("EN"), Some("english".into()));
        assert_eq!(canonical_language_name("Arabic"), Some("arabic".into()));
        assert_eq!(canonical_language_name("العربية"), Some("arabic".into()));
        assert_eq!(canonical_language_name(""), None);
    }

    #[test]
    fn theme_palette_colors_only_dark() {
        let dark = Theme::Dark.palette();
        assert_eq!(dark.accent, "\x1b[38;5;208m");
        assert_eq!(dark.accentize("x"), "\x1b[38;5;208mx\x1b[0m");

        let light = Theme::Light.palette();
        assert!(light.accent.is_empty());
        assert_eq!(light.mutedize("x"), "x");
    }

    #[test]
    fn expand_alias_replaces_first_word() {
        let config = Config {
            theme: None,
            language: None,
            aliases: [
                ("ls".into(), "list".into()),
                ("hi".into(), "filter-priority high".into()),
            ]
            .into_iter()
            .collect(),
        };

        assert_eq!(config.expand_alias("ls"), "list");
        assert_eq!(config.expand_alias("hi  "), "filter-priority high  ");
        assert_eq!(config.expand_alias("add ls 2025"), "add ls 2025");
    }
}
