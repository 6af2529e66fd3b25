// Task id generation behind a seam so tests stay deterministic

use uuid::Uuid;

/// Source of task ids. Implementations must hand out ids that are unique
/// for the lifetime of the process and never reused.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Default generator: UUID v7. Time-ordered like the original
/// timestamp-based scheme, but with strict uniqueness.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::now_v7().to_string()
    }
}

/// Deterministic generator handing out "task-1", "task-2", ...
/// Intended for tests and demos.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    next: u64,
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("task-{}", self.next)
    }
}
