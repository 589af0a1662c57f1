//! Static English/Arabic string tables.
//!
//! The core only knows canonical enum values; everything shown to the user
//! goes through these tables, and localized filter choices are parsed back
//! into canonical values here.

use tasklist_core::config::Language;
use tasklist_core::error::AppError;
use tasklist_core::model::Priority;
use tasklist_core::query::{PriorityFilter, SortOrder, StatusFilter};

#[derive(Debug)]
pub struct Messages {
    pub window_title: &'static str,
    pub light_mode: &'static str,
    pub dark_mode: &'static str,
    pub search: &'static str,
    pub filter_priority: &'static str,
    pub filter_status: &'static str,
    pub sort_tasks: &'static str,
    /// All, High, Medium, Low
    pub priority_filter_options: [&'static str; 4],
    /// All, Completed, Incomplete
    pub status_filter_options: [&'static str; 3],
    /// None, Priority
    pub sort_options: [&'static str; 2],
    pub error: &'static str,
    pub please_provide_task: &'static str,
    pub edit_info: &'static str,
    pub task_not_found: &'static str,
    pub delete_info: &'static str,
    pub mark_done_info: &'static str,
    pub task_description: &'static str,
    pub priority: &'static str,
    pub date: &'static str,
    pub status: &'static str,
    pub completed: &'static str,
    pub incomplete: &'static str,
    pub high_priority: &'static str,
    pub medium_priority: &'static str,
    pub low_priority: &'static str,
    pub task_added: &'static str,
    pub task_updated: &'static str,
    pub tasks_deleted: &'static str,
    pub tasks_toggled: &'static str,
    pub no_tasks: &'static str,
}

static ENGLISH: Messages = Messages {
    window_title: "To-Do List Manager",
    light_mode: "Light Mode",
    dark_mode: "Dark Mode",
    search: "Search:",
    filter_priority: "Filter by Priority:",
    filter_status: "Filter by Status:",
    sort_tasks: "Sort Tasks:",
    priority_filter_options: ["All", "High", "Medium", "Low"],
    status_filter_options: ["All", "Completed", "Incomplete"],
    sort_options: ["None", "Priority"],
    error: "Error",
    please_provide_task: "Please provide both a task description and a date.",
    edit_info: "Please select exactly one task to edit.",
    task_not_found: "Task not found.",
    delete_info: "Please select at least one task to delete.",
    mark_done_info: "Please select at least one task to toggle.",
    task_description: "Task Description",
    priority: "Priority",
    date: "Date",
    status: "Status",
    completed: "Completed",
    incomplete: "Incomplete",
    high_priority: "High",
    medium_priority: "Medium",
    low_priority: "Low",
    task_added: "Added task:",
    task_updated: "Updated task:",
    tasks_deleted: "Deleted task(s):",
    tasks_toggled: "Toggled task(s):",
    no_tasks: "No tasks to show.",
};

static ARABIC: Messages = Messages {
    window_title: "مدير قائمة المهام",
    light_mode: "الوضع الفاتح",
    dark_mode: "الوضع الداكن",
    search: "بحث:",
    filter_priority: "تصفية حسب الأولوية:",
    filter_status: "تصفية حسب الحالة:",
    sort_tasks: "ترتيب المهام:",
    priority_filter_options: ["الكل", "عالي", "متوسط", "منخفض"],
    status_filter_options: ["الكل", "مكتملة", "غير مكتملة"],
    sort_options: ["لا شيء", "الأولوية"],
    error: "خطأ",
    please_provide_task: "يرجى تقديم وصف المهمة والتاريخ.",
    edit_info: "يرجى اختيار مهمة واحدة للتعديل.",
    task_not_found: "المهمة غير موجودة.",
    delete_info: "يرجى اختيار مهمة واحدة على الأقل للحذف.",
    mark_done_info: "يرجى اختيار مهمة واحدة على الأقل لتبديل حالتها.",
    task_description: "وصف المهمة",
    priority: "الأولوية",
    date: "التاريخ",
    status: "الحالة",
    completed: "مكتملة",
    incomplete: "غير مكتملة",
    high_priority: "عالي",
    medium_priority: "متوسط",
    low_priority: "منخفض",
    task_added: "تمت إضافة المهمة:",
    task_updated: "تم تحديث المهمة:",
    tasks_deleted: "تم حذف المهمة(المهام):",
    tasks_toggled: "تم تبديل حالة المهمة(المهام):",
    no_tasks: "لا توجد مهام لعرضها.",
};

pub fn messages(language: Language) -> &'static Messages {
    match language {
        Language::English => &ENGLISH,
        Language::Arabic => &ARABIC,
    }
}

pub fn priority_label(language: Language, priority: Priority) -> &'static str {
    let messages = messages(language);
    match priority {
        Priority::High => messages.high_priority,
        Priority::Medium => messages.medium_priority,
        Priority::Low => messages.low_priority,
    }
}

pub fn status_label(language: Language, completed: bool) -> &'static str {
    let messages = messages(language);
    if completed {
        messages.completed
    } else {
        messages.incomplete
    }
}

pub fn priority_emoji(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔥",
        Priority::Medium => "⭐",
        Priority::Low => "🟢",
    }
}

pub fn status_emoji(completed: bool) -> &'static str {
    if completed { "✅" } else { "❌" }
}

/// Matches `raw` against a canonical English name (any case) or the
/// label shown in `language`.
fn matches_choice(raw: &str, canonical: &str, localized: &str) -> bool {
    raw.eq_ignore_ascii_case(canonical) || raw == localized
}

pub fn parse_priority(language: Language, raw: &str) -> Result<Priority, AppError> {
    let trimmed = raw.trim();
    Priority::ALL
        .into_iter()
        .find(|priority| {
            matches_choice(
                trimmed,
                priority.as_str(),
                priority_label(language, *priority),
            )
        })
        .ok_or_else(|| AppError::invalid_input(format!("unknown priority '{trimmed}'")))
}

pub fn parse_priority_filter(language: Language, raw: &str) -> Result<PriorityFilter, AppError> {
    let trimmed = raw.trim();
    if matches_choice(
        trimmed,
        ENGLISH.priority_filter_options[0],
        messages(language).priority_filter_options[0],
    ) {
        return Ok(PriorityFilter::All);
    }

    parse_priority(language, trimmed).map(PriorityFilter::Only)
}

pub fn parse_status_filter(language: Language, raw: &str) -> Result<StatusFilter, AppError> {
    let trimmed = raw.trim();
    let localized = messages(language).status_filter_options;
    let choices = [
        StatusFilter::All,
        StatusFilter::Completed,
        StatusFilter::Incomplete,
    ];

    choices
        .into_iter()
        .zip(ENGLISH.status_filter_options.iter().zip(localized.iter()))
        .find(|(_, (canonical, label))| matches_choice(trimmed, canonical, label))
        .map(|(filter, _)| filter)
        .ok_or_else(|| AppError::invalid_input(format!("unknown status filter '{trimmed}'")))
}

pub fn parse_sort_order(language: Language, raw: &str) -> Result<SortOrder, AppError> {
    let trimmed = raw.trim();
    let localized = messages(language).sort_options;

    [SortOrder::None, SortOrder::Priority]
        .into_iter()
        .zip(ENGLISH.sort_options.iter().zip(localized.iter()))
        .find(|(_, (canonical, label))| matches_choice(trimmed, canonical, label))
        .map(|(order, _)| order)
        .ok_or_else(|| AppError::invalid_input(format!("unknown sort option '{trimmed}'")))
}

pub fn priority_filter_label(language: Language, filter: PriorityFilter) -> &'static str {
    match filter {
        PriorityFilter::All => messages(language).priority_filter_options[0],
        PriorityFilter::Only(priority) => priority_label(language, priority),
    }
}

pub fn status_filter_label(language: Language, filter: StatusFilter) -> &'static str {
    let options = messages(language).status_filter_options;
    match filter {
        StatusFilter::All => options[0],
        StatusFilter::Completed => options[1],
        StatusFilter::Incomplete => options[2],
    }
}

pub fn sort_order_label(language: Language, order: SortOrder) -> &'static str {
    let options = messages(language).sort_options;
    match order {
        SortOrder::None => options[0],
        SortOrder::Priority => options[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_language() {
        assert_eq!(priority_label(Language::English, Priority::High), "High");
        assert_eq!(priority_label(Language::Arabic, Priority::Low), "منخفض");
        assert_eq!(status_label(Language::Arabic, true), "مكتملة");
        assert_eq!(status_label(Language::English, false), "Incomplete");
    }

    #[test]
    fn parse_priority_accepts_canonical_and_localized() {
        assert_eq!(
            parse_priority(Language::English, "medium").unwrap(),
            Priority::Medium
        );
        assert_eq!(
            parse_priority(Language::Arabic, "عالي").unwrap(),
            Priority::High
        );
        assert_eq!(
            parse_priority(Language::Arabic, "LOW").unwrap(),
            Priority::Low
        );
        assert_eq!(
            parse_priority(Language::English, "عالي")
                .unwrap_err()
                .code(),
            "invalid_input"
        );
    }

    #[test]
    fn parse_priority_filter_handles_all_sentinel() {
        assert_eq!(
            parse_priority_filter(Language::English, "All").unwrap(),
            PriorityFilter::All
        );
        assert_eq!(
            parse_priority_filter(Language::Arabic, "الكل").unwrap(),
            PriorityFilter::All
        );
        assert_eq!(
            parse_priority_filter(Language::Arabic, "متوسط").unwrap(),
            PriorityFilter::Only(Priority::Medium)
        );
    }

    #[test]
    fn parse_status_filter_maps_options() {
        assert_eq!(
            parse_status_filter(Language::English, "incomplete").unwrap(),
            StatusFilter::Incomplete
        );
        assert_eq!(
            parse_status_filter(Language::Arabic, "مكتملة").unwrap(),
            StatusFilter::Completed
        );
        assert!(parse_status_filter(Language::English, "pending").is_err());
    }

    #[test]
    fn parse_sort_order_maps_options() {
        assert_eq!(
            parse_sort_order(Language::English, "priority").unwrap(),
            SortOrder::Priority
        );
        assert_eq!(
            parse_sort_order(Language::Arabic, "لا شيء").unwrap(),
            SortOrder::None
        );
        assert!(parse_sort_order(Language::English, "date").is_err());
    }

    #[test]
    fn filter_labels_round_trip_through_parsers() {
        for language in [Language::English, Language::Arabic] {
            for filter in [
                StatusFilter::All,
                StatusFilter::Completed,
                StatusFilter::Incomplete,
            ] {
                let label = status_filter_label(language, filter);
                assert_eq!(parse_status_filter(language, label).unwrap(), filter);
            }
        }
    }
}
