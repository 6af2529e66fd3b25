use std::io::{self, BufRead, Write};

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use colored::Colorize;
use eyre::Result;
use taskpad::{Priority, StoreError, TaskFilter, TaskStore, render_store};

#[derive(Parser)]
#[command(name = "taskpad")]
#[command(about = "Interactive in-memory task list with filtering")]
#[command(version)]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

/// One line of shell input, first word is the command
#[derive(Parser)]
#[command(multicall = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand)]
enum ShellCommand {
    /// Add a task
    Add {
        /// Task text
        #[arg(required = true)]
        text: Vec<String>,

        /// Task priority
        #[arg(short, long, default_value = "medium")]
        priority: Priority,

        /// Free-form category tag
        #[arg(short, long, default_value = "general")]
        category: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,

        /// Due time (HH:MM), only meaningful with --due
        #[arg(long, value_parser = parse_due_time)]
        at: Option<NaiveTime>,
    },

    /// Toggle completion of a task
    Toggle { id: String },

    /// Delete a task (asks for confirmation)
    Delete { id: String },

    /// Start editing a task's text
    Edit { id: String },

    /// Commit new text for the task being edited
    Save {
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Leave edit mode without saving
    Cancel,

    /// Switch the view filter (all, active, completed, high, overdue, today)
    Filter { name: String },

    /// Remove all completed tasks (asks for confirmation)
    Clear,

    /// Show the current view
    List,

    /// Print all tasks as JSON
    Dump,

    /// Exit the shell
    #[command(alias = "exit")]
    Quit,
}

fn parse_due_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("invalid time: {s} (expected HH:MM)"))
}

fn main() -> Result<()> {
    // Setup tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut store = TaskStore::new();

    println!("taskpad - type 'help' for commands, 'quit' to leave");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => {
                if !dispatch(&mut store, parsed.command)? {
                    break;
                }
            }
            // clap renders its own help and usage errors
            Err(err) => print!("{err}"),
        }
    }

    Ok(())
}

/// Run one command against the store, re-rendering after every mutation.
/// Returns false when the shell should exit.
fn dispatch(store: &mut TaskStore, command: ShellCommand) -> Result<bool> {
    match command {
        ShellCommand::Add { text, priority, category, due, at } => {
            match store.add_task(&text.join(" "), priority, &category, due, at) {
                Ok(_) => print!("{}", render_store(store)),
                Err(StoreError::EmptyInput) => warn("Please enter a task!"),
                Err(err) => warn(&err.to_string()),
            }
        }

        ShellCommand::Toggle { id } => {
            if let Some(id) = resolve_id(store, &id) {
                store.toggle_task(&id);
                print!("{}", render_store(store));
            }
        }

        ShellCommand::Delete { id } => {
            if let Some(id) = resolve_id(store, &id) {
                if confirm("Are you sure you want to delete this task?")? {
                    store.delete_task(&id);
                    print!("{}", render_store(store));
                }
            }
        }

        ShellCommand::Edit { id } => {
            if let Some(id) = resolve_id(store, &id) {
                match store.start_edit(&id) {
                    Ok(()) => print!("{}", render_store(store)),
                    Err(err) => warn(&err.to_string()),
                }
            }
        }

        ShellCommand::Save { text } => match store.editing_task_id().map(str::to_string) {
            Some(id) => {
                store.save_edit(&id, &text.join(" "));
                print!("{}", render_store(store));
            }
            None => warn("No task is being edited (use 'edit <id>' first)"),
        },

        ShellCommand::Cancel => {
            store.cancel_edit();
            print!("{}", render_store(store));
        }

        ShellCommand::Filter { name } => match name.parse::<TaskFilter>() {
            Ok(filter) => {
                store.set_filter(filter);
                print!("{}", render_store(store));
            }
            // Strict policy: the previous filter stays active
            Err(err) => warn(&err.to_string()),
        },

        ShellCommand::Clear => {
            let completed = store.tasks().iter().filter(|t| t.completed).count();
            if completed == 0 {
                println!("No completed tasks to clear!");
            } else if confirm(&format!("Delete {completed} completed task(s)?"))? {
                match store.clear_completed() {
                    Ok(cleared) => {
                        println!("Cleared {cleared} task(s)");
                        print!("{}", render_store(store));
                    }
                    Err(err) => warn(&err.to_string()),
                }
            }
        }

        ShellCommand::List => print!("{}", render_store(store)),

        ShellCommand::Dump => println!("{}", serde_json::to_string_pretty(store.tasks())?),

        ShellCommand::Quit => return Ok(false),
    }

    Ok(true)
}

/// Resolve a full id or an unambiguous id prefix.
fn resolve_id(store: &TaskStore, input: &str) -> Option<String> {
    if store.get(input).is_some() {
        return Some(input.to_string());
    }

    let matches: Vec<&str> = store
        .tasks()
        .iter()
        .filter(|t| t.id.starts_with(input))
        .map(|t| t.id.as_str())
        .collect();

    match matches.as_slice() {
        [id] => Some((*id).to_string()),
        [] => {
            warn(&format!("No task matches id {input}"));
            None
        }
        _ => {
            warn(&format!("Id prefix {input} is ambiguous ({} matches)", matches.len()));
            None
        }
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn warn(message: &str) {
    println!("{}", message.yellow());
}
