//! Interactive session state: the task store plus everything the user sees
//! around it (search, filters, sort, language, theme, last rendered rows).

use crate::cli::{Command, SessionLine};
use crate::i18n::{self, messages};
use crate::render;
use clap::Parser;
use clap::error::ErrorKind;
use tasklist_core::config::{Config, Language, Theme};
use tasklist_core::error::AppError;
use tasklist_core::model::Priority;
use tasklist_core::query::TaskQuery;
use tasklist_core::store::TaskStore;

const ROW_PREFIX: char = '#';

#[derive(Debug)]
pub struct Session {
    store: TaskStore,
    query: TaskQuery,
    language: Language,
    theme: Theme,
    json: bool,
    config: Config,
    /// Descriptions of the rows in the last rendered view, for `#N` lookups.
    visible: Vec<String>,
}

impl Session {
    pub fn new(config: &Config, json: bool) -> Self {
        Self {
            store: TaskStore::new(),
            query: TaskQuery::default(),
            language: config.language(),
            theme: config.theme(),
            json,
            config: config.clone(),
            visible: Vec::new(),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn query(&self) -> &TaskQuery {
        &self.query
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Parses and runs one input line. Returns the text to print, if any.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<String>, AppError> {
        let expanded = self.config.expand_alias(line);
        let args = split_command_line(&expanded)?;
        if args.is_empty() {
            return Ok(None);
        }

        let parsed = match SessionLine::try_parse_from(args) {
            Ok(parsed) => parsed,
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                return Ok(Some(err.to_string()));
            }
            Err(err) => return Err(normalize_parse_error(err)),
        };

        self.execute(parsed.command).map(Some)
    }

    pub fn execute(&mut self, command: Command) -> Result<String, AppError> {
        log::debug!("executing {command:?}");
        let text = messages(self.language);

        let status = match command {
            Command::Add {
                description,
                date,
                priority,
            } => {
                let description = required_text(description, text.please_provide_task)?;
                let date = required_text(date, text.please_provide_task)?;
                let priority = match priority {
                    Some(raw) => i18n::parse_priority(self.language, &raw)?,
                    None => Priority::default(),
                };

                self.store.add(&description, priority, &date);
                Some(format!("{} {}", text.task_added, description))
            }
            Command::Edit {
                task,
                description,
                priority,
                date,
            } => {
                let old_description = self.resolve_task(&task)?;
                let current = self
                    .store
                    .find(&old_description)
                    .cloned()
                    .ok_or_else(|| AppError::invalid_input(text.task_not_found))?;

                let new_description = required_text(
                    Some(description.unwrap_or(current.description)),
                    text.please_provide_task,
                )?;
                let new_date =
                    required_text(Some(date.unwrap_or(current.date)), text.please_provide_task)?;
                let new_priority = match priority {
                    Some(raw) => i18n::parse_priority(self.language, &raw)?,
                    None => current.priority,
                };

                self.store
                    .edit(&old_description, &new_description, new_priority, &new_date);
                Some(format!("{} {}", text.task_updated, new_description))
            }
            Command::Delete { tasks } => {
                let targets = self.resolve_selection(&tasks, text.delete_info)?;
                let deleted: Vec<String> = targets
                    .into_iter()
                    .filter(|description| self.store.delete(description))
                    .collect();
                summarize(text.tasks_deleted, &deleted)
            }
            Command::Done { tasks } => {
                let targets = self.resolve_selection(&tasks, text.mark_done_info)?;
                let toggled: Vec<String> = targets
                    .into_iter()
                    .filter(|description| self.store.toggle(description))
                    .collect();
                summarize(text.tasks_toggled, &toggled)
            }
            Command::Search { text: words } => {
                self.query.search = words.join(" ");
                None
            }
            Command::FilterPriority { value } => {
                self.query.priority = i18n::parse_priority_filter(self.language, &value)?;
                None
            }
            Command::FilterStatus { value } => {
                self.query.status = i18n::parse_status_filter(self.language, &value)?;
                None
            }
            Command::Sort { value } => {
                self.query.sort = i18n::parse_sort_order(self.language, &value)?;
                None
            }
            Command::Reset => {
                self.query = TaskQuery::default();
                None
            }
            Command::List => None,
            Command::Lang { language } => {
                self.language = Language::from_name(&language)?;
                None
            }
            Command::Theme { theme } => {
                self.theme = Theme::from_name(&theme)?;
                let text = messages(self.language);
                Some(match self.theme {
                    Theme::Light => text.light_mode.to_string(),
                    Theme::Dark => text.dark_mode.to_string(),
                })
            }
        };

        let view = self.view();
        Ok(match status {
            Some(status) if !self.json => format!("{status}\n{view}"),
            _ => view,
        })
    }

    /// Re-runs the query over a fresh snapshot and renders it.
    pub fn view(&mut self) -> String {
        let tasks = self.query.apply(&self.store.list_all());
        self.visible = tasks.iter().map(|task| task.description.clone()).collect();

        if self.json {
            render::render_json(&tasks)
        } else {
            render::render_view(&tasks, &self.query, self.language, &self.theme.palette())
        }
    }

    /// An exact description always wins. Otherwise `#N` names the N-th row
    /// of the last view, and anything else is taken as a description.
    fn resolve_task(&self, reference: &str) -> Result<String, AppError> {
        if self.store.find(reference).is_some() {
            return Ok(reference.to_string());
        }

        let Some(row) = reference
            .strip_prefix(ROW_PREFIX)
            .and_then(|number| number.parse::<usize>().ok())
        else {
            return Ok(reference.to_string());
        };

        row.checked_sub(1)
            .and_then(|index| self.visible.get(index))
            .cloned()
            .ok_or_else(|| {
                AppError::invalid_input(format!("no row {reference} in the current view"))
            })
    }

    fn resolve_selection(
        &self,
        references: &[String],
        empty_message: &str,
    ) -> Result<Vec<String>, AppError> {
        if references.is_empty() {
            return Err(AppError::invalid_input(empty_message));
        }

        references
            .iter()
            .map(|reference| self.resolve_task(reference))
            .collect()
    }
}

fn required_text(value: Option<String>, message: &str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AppError::invalid_input(message)),
    }
}

fn summarize(label: &str, descriptions: &[String]) -> Option<String> {
    if descriptions.is_empty() {
        None
    } else {
        Some(format!("{} {}", label, descriptions.join(", ")))
    }
}

pub fn normalize_parse_error(err: clap::Error) -> AppError {
    let rendered = err.to_string();
    let first_line = rendered.lines().next().unwrap_or("invalid command").trim();
    let message = first_line
        .strip_prefix("error: ")
        .unwrap_or(first_line)
        .to_string();
    AppError::invalid_input(message)
}

pub fn split_command_line(line: &str) -> Result<Vec<String>, AppError> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut escape = false;

    for ch in line.chars() {
        if escape {
            if ch != '"' && ch != '\\' {
                current.push('\\');
            }
            current.push(ch);
            escape = false;
            continue;
        }

        if in_quotes && ch == '\\' {
            escape = true;
            continue;
        }

        if ch == '"' {
            in_quotes = !in_quotes;
            quoted = true;
            continue;
        }

        if ch.is_whitespace() && !in_quotes {
            if !current.is_empty() || quoted {
                args.push(std::mem::take(&mut current));
                quoted = false;
            }
            continue;
        }

        current.push(ch);
    }

    if in_quotes {
        return Err(AppError::invalid_input("unterminated quote in command"));
    }

    if !current.is_empty() || quoted {
        args.push(current);
    }

    Ok(args)
}
