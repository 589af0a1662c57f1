use crate::i18n::{self, messages};
use tabled::builder::Builder;
use tabled::settings::Style;
use tasklist_core::config::{Language, Palette};
use tasklist_core::model::Task;
use tasklist_core::query::TaskQuery;

pub fn render_table(tasks: &[Task], language: Language) -> String {
    let text = messages(language);
    let mut builder = Builder::default();
    builder.push_record([
        "#".to_string(),
        text.task_description.to_string(),
        text.priority.to_string(),
        text.date.to_string(),
        text.status.to_string(),
    ]);

    for (index, task) in tasks.iter().enumerate() {
        builder.push_record([
            (index + 1).to_string(),
            task.description.clone(),
            format!(
                "{} {}",
                i18n::priority_emoji(task.priority),
                i18n::priority_label(language, task.priority)
            ),
            task.date.clone(),
            format!(
                "{} {}",
                i18n::status_label(language, task.completed),
                i18n::status_emoji(task.completed)
            ),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

pub fn render_json(tasks: &[Task]) -> String {
    let payload: Vec<serde_json::Value> = tasks
        .iter()
        .enumerate()
        .map(|(index, task)| {
            serde_json::json!({
                "index": index + 1,
                "description": task.description,
                "priority": task.priority,
                "date": task.date,
                "completed": task.completed,
            })
        })
        .collect();
    serde_json::Value::Array(payload).to_string()
}

/// One-line summary of the active search, filters and sort.
pub fn render_query_summary(query: &TaskQuery, language: Language) -> String {
    let text = messages(language);
    format!(
        "{} {} | {} {} | {} {} | {} {}",
        text.search,
        query.search.trim(),
        text.filter_priority,
        i18n::priority_filter_label(language, query.priority),
        text.filter_status,
        i18n::status_filter_label(language, query.status),
        text.sort_tasks,
        i18n::sort_order_label(language, query.sort),
    )
}

/// Full view: title, query summary, then the table (or an empty notice).
pub fn render_view(
    tasks: &[Task],
    query: &TaskQuery,
    language: Language,
    palette: &Palette,
) -> String {
    let text = messages(language);
    let mut lines = vec![
        palette.accentize(text.window_title),
        palette.mutedize(&render_query_summary(query, language)),
    ];

    if tasks.is_empty() {
        lines.push(palette.mutedize(text.no_tasks));
    } else {
        lines.push(render_table(tasks, language));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::{render_json, render_query_summary, render_table, render_view};
    use tasklist_core::config::{Language, Theme};
    use tasklist_core::model::{Priority, Task};
    use tasklist_core::query::{PriorityFilter, SortOrder, StatusFilter, TaskQuery};

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new("Buy milk", Priority::Low, "2025-01-01");
        done.completed = true;
        vec![done, Task::new("Pay rent", Priority::High, "2025-01-02")]
    }

    #[test]
    fn table_shows_localized_labels_and_emojis() {
        let english = render_table(&sample_tasks(), Language::English);
        assert!(english.contains("Task Description"));
        assert!(english.contains("Buy milk"));
        assert!(english.contains("🟢 Low"));
        assert!(english.contains("Completed ✅"));
        assert!(english.contains("Incomplete ❌"));

        let arabic = render_table(&sample_tasks(), Language::Arabic);
        assert!(arabic.contains("وصف المهمة"));
        assert!(arabic.contains("🔥 عالي"));
        assert!(arabic.contains("مكتملة ✅"));
    }

    #[test]
    fn json_view_uses_canonical_values() {
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&sample_tasks())).unwrap();

        assert_eq!(json[0]["index"], 1);
        assert_eq!(json[0]["description"], "Buy milk");
        assert_eq!(json[0]["priority"], "Low");
        assert_eq!(json[0]["completed"], true);
        assert_eq!(json[1]["priority"], "High");
    }

    #[test]
    fn summary_lists_active_query() {
        let query = TaskQuery {
            search: " milk ".to_string(),
            priority: PriorityFilter::Only(Priority::Medium),
            status: StatusFilter::Completed,
            sort: SortOrder::Priority,
        };

        let summary = render_query_summary(&query, Language::English);
        assert_eq!(
            summary,
            "Search: milk | Filter by Priority: Medium | Filter by Status: Completed | Sort Tasks: Priority"
        );
    }

    #[test]
    fn empty_view_shows_notice() {
        let view = render_view(
            &[],
            &TaskQuery::default(),
            Language::English,
            &Theme::Light.palette(),
        );

        assert!(view.starts_with("To-Do List Manager"));
        assert!(view.contains("No tasks to show."));
    }
}
