// Named view filters over the task list

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{Priority, Task};

/// The six recognized view filters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
    High,
    Overdue,
    Today,
}

impl TaskFilter {
    /// Whether `task` belongs in the view, evaluated against the given
    /// calendar day. Date comparisons are date-only; the due time never
    /// participates.
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
            TaskFilter::High => task.priority == Priority::High,
            TaskFilter::Overdue => match task.due_date {
                Some(due) => !task.completed && due < today,
                None => false,
            },
            TaskFilter::Today => task.due_date == Some(today),
        }
    }
}

impl std::str::FromStr for TaskFilter {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(TaskFilter::All),
            "active" => Ok(TaskFilter::Active),
            "completed" => Ok(TaskFilter::Completed),
            "high" => Ok(TaskFilter::High),
            "overdue" => Ok(TaskFilter::Overdue),
            "today" => Ok(TaskFilter::Today),
            other => Err(StoreError::InvalidFilter {
                name: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskFilter::All => write!(f, "all"),
            TaskFilter::Active => write!(f, "active"),
            TaskFilter::Completed => write!(f, "completed"),
            TaskFilter::High => write!(f, "high"),
            TaskFilter::Overdue => write!(f, "overdue"),
            TaskFilter::Today => write!(f, "today"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(text: &str, priority: Priority, due_date: Option<NaiveDate>) -> Task {
        Task::new(
            format!("id-{text}"),
            text.to_string(),
            priority,
            "general".to_string(),
            due_date,
            None,
        )
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<TaskFilter>().unwrap(), TaskFilter::All);
        assert_eq!("overdue".parse::<TaskFilter>().unwrap(), TaskFilter::Overdue);

        let err = "urgent".parse::<TaskFilter>().unwrap_err();
        assert!(matches!(err, StoreError::InvalidFilter { ref name } if name == "urgent"));
    }

    #[test]
    fn test_filter_display_round_trip() {
        for filter in [
            TaskFilter::All,
            TaskFilter::Active,
            TaskFilter::Completed,
            TaskFilter::High,
            TaskFilter::Overdue,
            TaskFilter::Today,
        ] {
            assert_eq!(filter.to_string().parse::<TaskFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(TaskFilter::default(), TaskFilter::All);
    }

    #[test]
    fn test_active_and_completed_predicates() {
        let today = date(2026, 3, 10);
        let mut t = task("Buy milk", Priority::Low, None);

        assert!(TaskFilter::All.matches(&t, today));
        assert!(TaskFilter::Active.matches(&t, today));
        assert!(!TaskFilter::Completed.matches(&t, today));

        t.completed = true;
        assert!(TaskFilter::All.matches(&t, today));
        assert!(!TaskFilter::Active.matches(&t, today));
        assert!(TaskFilter::Completed.matches(&t, today));
    }

    #[test]
    fn test_high_predicate() {
        let today = date(2026, 3, 10);
        assert!(TaskFilter::High.matches(&task("Pay rent", Priority::High, None), today));
        assert!(!TaskFilter::High.matches(&task("Buy milk", Priority::Medium, None), today));
    }

    #[test]
    fn test_overdue_predicate() {
        let today = date(2026, 3, 10);

        let mut overdue = task("Pay rent", Priority::High, Some(date(2026, 3, 9)));
        assert!(TaskFilter::Overdue.matches(&overdue, today));

        // Completing the task removes it from the overdue view
        overdue.completed = true;
        assert!(!TaskFilter::Overdue.matches(&overdue, today));

        // Due today or later is not overdue
        assert!(!TaskFilter::Overdue.matches(&task("a", Priority::Low, Some(today)), today));
        assert!(!TaskFilter::Overdue.matches(&task("b", Priority::Low, Some(date(2026, 3, 11))), today));

        // No due date is never overdue
        assert!(!TaskFilter::Overdue.matches(&task("c", Priority::Low, None), today));
    }

    #[test]
    fn test_today_predicate_ignores_completion_and_time() {
        let today = date(2026, 3, 10);

        let mut due_today = task("Dentist", Priority::Medium, Some(today));
        assert!(TaskFilter::Today.matches(&due_today, today));

        // Unlike overdue, the today view keeps completed tasks
        due_today.completed = true;
        assert!(TaskFilter::Today.matches(&due_today, today));

        assert!(!TaskFilter::Today.matches(&task("a", Priority::Low, Some(date(2026, 3, 9))), today));
        assert!(!TaskFilter::Today.matches(&task("b", Priority::Low, None), today));
    }
}
