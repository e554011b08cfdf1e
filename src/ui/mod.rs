//! Terminal UI helpers for task display.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::entities::{Task, TaskKind};

/// Get colored completion status string
pub fn status_colored(completed: bool) -> String {
    if completed {
        "done".green().to_string()
    } else {
        "pending".yellow().to_string()
    }
}

/// Render tasks as numbered lines, one task per line.
///
/// Positions are shown 1-based. An empty slice renders as an empty
/// string with no lines.
pub fn numbered_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, task)| format!("{}. {}", i + 1, task.render()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a table for displaying tasks
pub fn task_table(tasks: &[Task]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::Cyan),
        Cell::new("Task").fg(Color::Cyan),
        Cell::new("Kind").fg(Color::Cyan),
        Cell::new("When").fg(Color::Cyan),
        Cell::new("Status").fg(Color::Cyan),
        Cell::new("Added").fg(Color::Cyan),
    ]);

    for (i, task) in tasks.iter().enumerate() {
        let status_color = if task.completed {
            Color::Green
        } else {
            Color::Yellow
        };

        let kind_color = match task.kind {
            TaskKind::Plain => Color::White,
            TaskKind::Deadline { .. } => Color::Magenta,
            TaskKind::Timed { .. } => Color::Blue,
        };

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&task.description),
            Cell::new(task.kind.label()).fg(kind_color),
            Cell::new(task.kind.detail().unwrap_or("-")),
            Cell::new(if task.completed { "done" } else { "pending" }).fg(status_color),
            Cell::new(task.created_at.format("%Y-%m-%d %H:%M")),
        ]);
    }

    table
}

/// Display task details in a formatted way
pub fn display_task_details(position: usize, task: &Task) {
    println!("{}", "═".repeat(60).dimmed());
    println!(
        "{} {} {}",
        "Task".cyan().bold(),
        (position + 1).to_string().cyan().bold(),
        format!("[{}]", if task.completed { "done" } else { "pending" }).yellow()
    );
    println!("{}", "═".repeat(60).dimmed());
    println!();

    println!("{}: {}", "Description".bold(), task.description);
    println!("{}: {}", "Kind".bold(), task.kind);

    match &task.kind {
        TaskKind::Plain => {}
        TaskKind::Deadline { deadline } => println!("{}: {}", "Deadline".bold(), deadline),
        TaskKind::Timed { timeline } => println!("{}: {}", "Timeline".bold(), timeline),
    }

    println!("{}: {}", "Status".bold(), status_colored(task.completed));
    println!(
        "{}: {}",
        "Added".bold(),
        task.created_at.format("%Y-%m-%d %H:%M")
    );
    println!();
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
