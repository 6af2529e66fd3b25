// Terminal rendering: a pure function from derived store output to text.
// Mutation never renders; callers re-render after each command.

use chrono::NaiveDate;
use colored::Colorize;

use crate::filter::TaskFilter;
use crate::models::{Counts, DueStatus, Priority, Task};
use crate::store::TaskStore;

/// Render one view of the list: the filtered tasks, the edit marker, and
/// the closing count line.
pub fn render_view(
    tasks: &[&Task],
    editing_id: Option<&str>,
    counts: Counts,
    filter: TaskFilter,
    today: NaiveDate,
) -> String {
    let mut out = String::new();

    if tasks.is_empty() {
        out.push_str("No tasks to show\n");
    } else {
        for task in tasks {
            out.push_str(&render_task(task, editing_id, today));
            out.push('\n');
        }
    }

    out.push_str(&count_line(counts, filter));
    out.push('\n');
    out
}

/// Convenience wrapper reading everything from the store.
pub fn render_store(store: &TaskStore) -> String {
    render_view(
        &store.filtered_tasks(),
        store.editing_task_id(),
        store.counts(),
        store.current_filter(),
        crate::models::local_today(),
    )
}

fn render_task(task: &Task, editing_id: Option<&str>, today: NaiveDate) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };

    let text = if task.completed {
        task.text.strikethrough().dimmed().to_string()
    } else {
        task.text.to_string()
    };

    let priority = match task.priority {
        Priority::High => "high".red().to_string(),
        Priority::Medium => "medium".yellow().to_string(),
        Priority::Low => "low".green().to_string(),
    };

    let mut line = format!("{checkbox} {} {text}  !{priority}  #{}", short_id(&task.id), task.category);

    if let Some(due) = task.format_due() {
        line.push_str(&format!("  due {due}"));
    }

    match task.due_status(today) {
        DueStatus::Overdue => line.push_str(&format!("  {}", "OVERDUE".red().bold())),
        DueStatus::DueToday => line.push_str(&format!("  {}", "due today".yellow())),
        DueStatus::None => {}
    }

    if editing_id == Some(task.id.as_str()) {
        line.push_str(&format!("  {}", "(editing)".cyan()));
    }

    line
}

fn count_line(counts: Counts, filter: TaskFilter) -> String {
    match filter {
        TaskFilter::All => format!(
            "{} tasks ({} active, {} completed)",
            counts.total, counts.active, counts.completed
        ),
        other => format!("{} {} tasks", counts.total, other),
    }
}

/// Leading slice of the id, enough to address a task interactively.
fn short_id(id: &str) -> &str {
    &id[..id.len().min(8)]
}
