// In-memory task store: the single mutable aggregate of the app

use chrono::{NaiveDate, NaiveTime, Utc};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::filter::TaskFilter;
use crate::idgen::{IdGenerator, UuidIdGenerator};
use crate::models::{Counts, DueStatus, Priority, Task, local_today};

/// Ordered collection of tasks plus the active view filter and the
/// at-most-one task currently in edit mode. Newest tasks come first.
/// Lives for the duration of the session; nothing is persisted.
pub struct TaskStore {
    tasks: Vec<Task>,
    current_filter: TaskFilter,
    editing_task_id: Option<String>,
    idgen: Box<dyn IdGenerator>,
}

impl TaskStore {
    /// Empty store with UUID v7 ids.
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(UuidIdGenerator))
    }

    /// Empty store with a caller-supplied id source.
    pub fn with_id_generator(idgen: Box<dyn IdGenerator>) -> Self {
        Self {
            tasks: Vec::new(),
            current_filter: TaskFilter::default(),
            editing_task_id: None,
            idgen,
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Create a task and prepend it, so it shows first regardless of due
    /// date. Fails with `EmptyInput` when the trimmed text is blank.
    pub fn add_task(
        &mut self,
        text: &str,
        priority: Priority,
        category: &str,
        due_date: Option<NaiveDate>,
        due_time: Option<NaiveTime>,
    ) -> Result<&Task, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(StoreError::EmptyInput);
        }

        let id = self.idgen.next_id();
        let task = Task::new(
            id,
            text.to_string(),
            priority,
            category.to_string(),
            due_date,
            due_time,
        );

        info!(id = %task.id, %priority, "add_task");
        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    /// Flip completion. Sets `completed_at` when a task becomes done and
    /// clears it when it comes back. Unknown ids are ignored.
    pub fn toggle_task(&mut self, id: &str) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                task.completed_at = if task.completed { Some(Utc::now()) } else { None };
                debug!(id, completed = task.completed, "toggle_task");
            }
            None => debug!(id, "toggle_task: id not found, ignoring"),
        }
    }

    /// Remove a task. Unknown ids are ignored. Destructive-intent
    /// confirmation is the caller's job; once invoked this deletes.
    pub fn delete_task(&mut self, id: &str) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() < before {
            info!(id, "delete_task");
        } else {
            debug!(id, "delete_task: id not found, ignoring");
        }
    }

    /// Put a task into edit mode. Fails with `NotFound` on an unknown id
    /// so a stale UI reference cannot open a phantom editor.
    pub fn start_edit(&mut self, id: &str) -> Result<(), StoreError> {
        if !self.tasks.iter().any(|t| t.id == id) {
            return Err(StoreError::NotFound { id: id.to_string() });
        }
        self.editing_task_id = Some(id.to_string());
        debug!(id, "start_edit");
        Ok(())
    }

    /// Leave edit mode without committing, whatever its prior state.
    pub fn cancel_edit(&mut self) {
        self.editing_task_id = None;
    }

    /// Commit an edit. Blank text silently no-ops and leaves edit mode
    /// open, unlike `add_task` which rejects loudly; unknown ids no-op
    /// the same way. On success the trimmed text is stored and edit
    /// mode ends.
    pub fn save_edit(&mut self, id: &str, new_text: &str) {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            debug!(id, "save_edit: blank text, ignoring");
            return;
        }
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.text = new_text.to_string();
            self.editing_task_id = None;
            debug!(id, "save_edit");
        } else {
            debug!(id, "save_edit: id not found, ignoring");
        }
    }

    /// Switch the active view. Unknown filter names are rejected before
    /// this point, at the `TaskFilter` parse boundary.
    pub fn set_filter(&mut self, filter: TaskFilter) {
        debug!(%filter, "set_filter");
        self.current_filter = filter;
    }

    /// Drop every completed task in one step and return how many went.
    /// With zero completed tasks this reports `NothingToClear` and
    /// leaves the store untouched.
    pub fn clear_completed(&mut self) -> Result<usize, StoreError> {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        if completed == 0 {
            return Err(StoreError::NothingToClear);
        }
        self.tasks.retain(|t| !t.completed);
        info!(cleared = completed, "clear_completed");
        Ok(completed)
    }

    // ========================================================================
    // Derivations (pure, recomputed on demand)
    // ========================================================================

    /// The current view: tasks passing the active filter, in store order
    /// (newest first). Never cached, never reordered.
    pub fn filtered_tasks(&self) -> Vec<&Task> {
        let today = local_today();
        self.tasks
            .iter()
            .filter(|t| self.current_filter.matches(t, today))
            .collect()
    }

    /// Display hint for one task against today's date. Independent of
    /// the active filter.
    pub fn task_status(&self, task: &Task) -> DueStatus {
        task.due_status(local_today())
    }

    /// Tallies over the current view, not the whole store. Under the
    /// `all` filter this is the full active/completed split.
    pub fn counts(&self) -> Counts {
        let filtered = self.filtered_tasks();
        let total = filtered.len();
        let completed = filtered.iter().filter(|t| t.completed).count();
        Counts {
            total,
            active: total - completed,
            completed,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn current_filter(&self) -> TaskFilter {
        self.current_filter
    }

    pub fn editing_task_id(&self) -> Option<&str> {
        self.editing_task_id.as_deref()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
