//! Table model.
//!
//! This crate defines the in-memory, immutable description of a table:
//! its columns, its rows and the cells inside them, together with the
//! builders that validate and freeze that description.
//!
//! Ownership is strictly a tree: a [`Table`] owns its [`Column`]s and
//! [`Row`]s, and every `Row` owns its [`Cell`]s. Nothing is shared and
//! nothing changes after [`TableBuilder::build`].

mod cell;
mod error;
mod row;
mod table;

pub use cell::{Cell, DEFAULT_BORDER_WIDTH};
pub use error::TableError;
pub use row::{Row, RowBuilder};
pub use table::{Column, Table, TableBuilder};

#[cfg(test)]
mod table_test;
