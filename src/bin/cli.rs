//! Todos CLI - interactive to-do tracking session.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

use todos::domain::{parse_position, TaskForm, TaskVariant};
use todos::entities::TaskList;
use todos::ui;

#[derive(Parser)]
#[command(name = "todos")]
#[command(about = "Interactive to-do tracking with plain, deadline, and timed tasks", long_about = None)]
#[command(version)]
struct Cli {
    /// Render task listings as a table instead of numbered lines
    #[arg(long, env = "TODOS_TABLE")]
    table: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

const MENU: [&str; 6] = [
    "Add Task",
    "Display Tasks",
    "Show Task Details",
    "Mark Task Completed",
    "Export Tasks (JSON)",
    "Quit",
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        ui::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let theme = ColorfulTheme::default();

    // The one list of the session; dropped at exit, never persisted.
    let mut list = TaskList::new();

    println!("{}", "To-Do List".cyan().bold());
    println!();

    loop {
        let action = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .default(0)
            .items(&MENU)
            .interact()?;

        println!();

        match action {
            0 => add_task(&theme, &mut list)?,
            1 => display_tasks(cli, &list),
            2 => show_details(&theme, &list)?,
            3 => mark_completed(&theme, &mut list)?,
            4 => export_json(&list)?,
            _ => break,
        }

        println!();
    }

    Ok(())
}

fn add_task(theme: &ColorfulTheme, list: &mut TaskList) -> anyhow::Result<()> {
    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let variant_idx = Select::with_theme(theme)
        .with_prompt("Task type")
        .default(0)
        .items(&TaskVariant::ALL)
        .interact()?;
    let variant = TaskVariant::ALL[variant_idx];

    let mut form = TaskForm {
        description,
        variant,
        ..TaskForm::default()
    };

    match variant {
        TaskVariant::Plain => {}
        TaskVariant::Deadline => {
            form.deadline = Input::with_theme(theme)
                .with_prompt("Deadline")
                .allow_empty(true)
                .interact_text()?;
        }
        TaskVariant::Timed => {
            form.timeline = Input::with_theme(theme)
                .with_prompt("Timeline")
                .allow_empty(true)
                .interact_text()?;
        }
    }

    match form.submit() {
        Ok(task) => {
            debug!(kind = task.kind.label(), "task added");
            list.add(task);
            ui::print_success("Task added successfully.");
        }
        Err(e) => ui::print_error(&e.to_string()),
    }

    Ok(())
}

fn display_tasks(cli: &Cli, list: &TaskList) {
    if list.is_empty() {
        ui::print_info("No tasks found");
        return;
    }

    if cli.table {
        let table = ui::task_table(list.all());
        println!("{table}");
    } else {
        println!("{}", ui::numbered_list(list.all()));
    }

    println!();
    ui::print_info(&format!(
        "{} task(s), {} completed",
        list.len(),
        list.completed_count()
    ));
}

fn show_details(theme: &ColorfulTheme, list: &TaskList) -> anyhow::Result<()> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Task index")
        .interact_text()?;

    let position = match parse_position(&input) {
        Ok(position) => position,
        Err(e) => {
            ui::print_error(&e.to_string());
            return Ok(());
        }
    };

    match position.and_then(|p| list.get(p).map(|task| (p, task))) {
        Some((p, task)) => ui::display_task_details(p, task),
        None => ui::print_warning(&format!("No task at index {}", input.trim())),
    }

    Ok(())
}

fn mark_completed(theme: &ColorfulTheme, list: &mut TaskList) -> anyhow::Result<()> {
    let input: String = Input::with_theme(theme)
        .with_prompt("Enter the index of the task to mark as completed")
        .interact_text()?;

    let position = match parse_position(&input) {
        Ok(position) => position,
        Err(e) => {
            ui::print_error(&e.to_string());
            return Ok(());
        }
    };

    // The list itself ignores out-of-range positions; the bounds check
    // here only decides what to tell the user.
    match position {
        Some(p) if p < list.len() => {
            list.mark_completed(p);
            debug!(position = p, "task marked completed");
            ui::print_success("Task marked as completed.");
        }
        _ => ui::print_warning(&format!("No task at index {}", input.trim())),
    }

    Ok(())
}

fn export_json(list: &TaskList) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(list)?);
    Ok(())
}
