// Data models for taskpad

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A single user-created to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub category: String,
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a fresh task. A due time without a due date is meaningless,
    /// so it is dropped here instead of being re-checked at display sites.
    pub fn new(
        id: String,
        text: String,
        priority: Priority,
        category: String,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            id,
            text,
            completed: false,
            priority,
            category,
            due_date,
            due_time: if due_date.is_some() { due_time } else { None },
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Per-task display hint, computed against the given calendar day.
    /// Completed tasks never report a due status.
    pub fn due_status(&self, today: NaiveDate) -> DueStatus {
        if self.completed {
            return DueStatus::None;
        }
        match self.due_date {
            Some(due) if due < today => DueStatus::Overdue,
            Some(due) if due == today => DueStatus::DueToday,
            _ => DueStatus::None,
        }
    }

    /// Human-readable due string, e.g. "2026-03-01 at 17:30".
    /// `None` when the task has no due date.
    pub fn format_due(&self) -> Option<String> {
        let due = self.due_date?;
        match self.due_time {
            Some(time) => Some(format!("{} at {}", due, time.format("%H:%M"))),
            None => Some(due.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other} (expected low, medium or high)")),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Due-date hint for rendering, independent of the active filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DueStatus {
    None,
    Overdue,
    DueToday,
}

/// Tallies over the currently filtered view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Start of the current calendar day in local time
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_priority_serialization() {
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: Priority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Priority::Medium);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_due_time_without_due_date_is_dropped() {
        let task = Task::new(
            "t-1".to_string(),
            "Water plants".to_string(),
            Priority::Low,
            "home".to_string(),
            None,
            NaiveTime::from_hms_opt(9, 0, 0),
        );
        assert!(task.due_time.is_none());
        assert!(task.format_due().is_none());
    }

    #[test]
    fn test_due_status_overdue_and_today() {
        let today = date(2026, 3, 10);
        let mut task = Task::new(
            "t-1".to_string(),
            "Pay rent".to_string(),
            Priority::High,
            "finance".to_string(),
            Some(date(2026, 3, 9)),
            None,
        );
        assert_eq!(task.due_status(today), DueStatus::Overdue);

        task.due_date = Some(today);
        assert_eq!(task.due_status(today), DueStatus::DueToday);

        task.due_date = Some(date(2026, 3, 11));
        assert_eq!(task.due_status(today), DueStatus::None);
    }

    #[test]
    fn test_due_status_completed_is_none() {
        let mut task = Task::new(
            "t-1".to_string(),
            "Pay rent".to_string(),
            Priority::High,
            "finance".to_string(),
            Some(date(2026, 3, 9)),
            None,
        );
        task.completed = true;
        assert_eq!(task.due_status(date(2026, 3, 10)), DueStatus::None);
    }

    #[test]
    fn test_format_due() {
        let task = Task::new(
            "t-1".to_string(),
            "Dentist".to_string(),
            Priority::Medium,
            "health".to_string(),
            Some(date(2026, 3, 1)),
            NaiveTime::from_hms_opt(17, 30, 0),
        );
        assert_eq!(task.format_due().as_deref(), Some("2026-03-01 at 17:30"));
    }

    #[test]
    fn test_task_serialization_round_trip() {
        let task = Task::new(
            "t-1".to_string(),
            "Buy milk".to_string(),
            Priority::Low,
            "errand".to_string(),
            Some(date(2026, 3, 1)),
            None,
        );
        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, task.id);
        assert_eq!(parsed.text, task.text);
        assert_eq!(parsed.due_date, task.due_date);
        assert!(!parsed.completed);
    }
}
