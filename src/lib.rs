#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]

//! # Todos
//!
//! In-memory to-do tracking with three task variants: plain,
//! deadline-bound, and timed.
//!
//! This crate provides:
//! - Task entities with per-variant canonical rendering
//! - An insertion-ordered task list addressed by 0-based position
//! - The input contract a front-end applies before constructing tasks
//! - Terminal UI helpers backing the interactive CLI session
//!
//! ## Example
//!
//! ```rust
//! use todos::entities::{Task, TaskList};
//!
//! let mut list = TaskList::new();
//! list.add(Task::plain("Buy milk"));
//! list.mark_completed(0);
//! assert_eq!(list.all()[0].render(), "To-Do: Buy milk (Completed)");
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Input contract between the front-end and the entities
pub mod domain;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use domain::{parse_position, TaskForm, TaskVariant};
pub use entities::{Task, TaskKind, TaskList};
pub use errors::{TodosError, TodosResult};
