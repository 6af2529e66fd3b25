// taskpad - In-memory task list manager with filtering

pub mod error;
pub mod filter;
pub mod idgen;
pub mod models;
pub mod render;
pub mod store;

// Re-export main types for convenience
pub use error::StoreError;
pub use filter::TaskFilter;
pub use idgen::{IdGenerator, SequenceIdGenerator, UuidIdGenerator};
pub use models::{Counts, DueStatus, Priority, Task, local_today};
pub use render::{render_store, render_view};
pub use store::TaskStore;
