//! Input contract between the front-end and the entities.
//!
//! These modules hold the checks a front-end applies before calling
//! into the entities: presence of variant-specific fields and 1-based
//! index parsing. The entities never re-validate.

mod form;
mod position;

pub use form::{TaskForm, TaskVariant};
pub use position::parse_position;
