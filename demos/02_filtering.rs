//! Example 02: Filtering and counts
//!
//! Shows the six view filters, the per-task due status hint, and how
//! counts follow the active filter.
//!
//! Run with: cargo run --example 02_filtering

use eyre::Result;
use taskpad::{Priority, SequenceIdGenerator, TaskFilter, TaskStore, local_today};

fn main() -> Result<()> {
    println!("taskpad filtering example");
    println!("=========================\n");

    let mut store = TaskStore::with_id_generator(Box::new(SequenceIdGenerator::default()));

    let today = local_today();
    let yesterday = today.pred_opt().expect("date out of range");

    println!("Creating sample tasks...\n");
    store.add_task("Buy milk", Priority::Low, "errand", None, None)?;
    store.add_task("Pay rent", Priority::High, "finance", Some(yesterday), None)?;
    store.add_task("Dentist appointment", Priority::Medium, "health", Some(today), None)?;
    let report = store
        .add_task("Write report", Priority::High, "work", Some(today), None)?
        .id
        .clone();
    store.toggle_task(&report);

    for task in store.tasks() {
        println!(
            "  {} - {} (priority={}, due={:?}, completed={}, status={:?})",
            task.id,
            task.text,
            task.priority,
            task.due_date,
            task.completed,
            store.task_status(task),
        );
    }
    println!();

    for filter in [
        TaskFilter::All,
        TaskFilter::Active,
        TaskFilter::Completed,
        TaskFilter::High,
        TaskFilter::Overdue,
        TaskFilter::Today,
    ] {
        store.set_filter(filter);
        let view = store.filtered_tasks();
        let counts = store.counts();

        println!("Filter '{filter}':");
        for task in &view {
            println!("   - {} : {}", task.id, task.text);
        }
        println!(
            "   {} total, {} active, {} completed\n",
            counts.total, counts.active, counts.completed
        );
    }

    println!("Example complete!");
    Ok(())
}
