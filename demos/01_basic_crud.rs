//! Example 01: Basic CRUD
//!
//! Walks through the task lifecycle: add, toggle, edit, delete and
//! clear-completed on a fresh in-memory store.
//!
//! Run with: cargo run --example 01_basic_crud

use eyre::Result;
use taskpad::{Priority, SequenceIdGenerator, StoreError, TaskStore};

fn main() -> Result<()> {
    println!("taskpad CRUD example");
    println!("====================\n");

    // Sequential ids keep the output readable
    let mut store = TaskStore::with_id_generator(Box::new(SequenceIdGenerator::default()));

    // Create
    println!("Adding tasks...");
    let groceries = store
        .add_task("Buy groceries", Priority::Medium, "errand", None, None)?
        .id
        .clone();
    let rent = store
        .add_task("Pay rent", Priority::High, "finance", None, None)?
        .id
        .clone();
    for task in store.tasks() {
        println!("  {} - {} ({})", task.id, task.text, task.priority);
    }
    println!();

    // Blank text is rejected, nothing is created
    match store.add_task("   ", Priority::Low, "general", None, None) {
        Err(StoreError::EmptyInput) => println!("Blank add rejected, store still has {} tasks\n", store.len()),
        other => println!("Unexpected: {other:?}\n"),
    }

    // Toggle
    println!("Completing '{}'...", store.get(&rent).unwrap().text);
    store.toggle_task(&rent);
    let task = store.get(&rent).unwrap();
    println!("  completed={} completed_at={:?}\n", task.completed, task.completed_at);

    // Edit
    println!("Editing '{}'...", store.get(&groceries).unwrap().text);
    store.start_edit(&groceries)?;
    store.save_edit(&groceries, "Buy groceries and coffee");
    println!("  new text: {}\n", store.get(&groceries).unwrap().text);

    // Delete
    store.delete_task(&groceries);
    println!("Deleted one task, {} remaining", store.len());

    // Clear completed
    let cleared = store.clear_completed()?;
    println!("Cleared {cleared} completed task(s), {} remaining", store.len());

    println!("\nExample complete!");
    Ok(())
}
