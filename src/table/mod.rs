//! Input data model for the assignment engine.
//!
//! A [`SubjectTable`] is a rectangular table: one [`Subject`] per row (a
//! unique integer id plus one `f64` value per measured variable), an ordered
//! list of variable names, and optional non-numeric metadata columns (e.g.
//! a `cage` label) that are carried alongside but never scored.
//!
//! Construction validates integrity up front — duplicate ids, ragged rows,
//! reserved column names — so the engine itself can assume a well-formed
//! table (see [`validation`]).
//!
//! Missing measurements are represented as [`f64::NAN`] and propagate
//! through means, differences, and totals; the table never coerces them.

mod types;
mod validation;

pub use types::{variable_set, MetadataColumn, Subject, SubjectId, SubjectTable, RESERVED_COLUMNS};
pub use validation::TableError;
