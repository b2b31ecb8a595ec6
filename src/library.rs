//! Book model and the static catalog.

pub mod book;
pub mod catalog;

pub use book::Book;
pub use catalog::{Catalog, Lookup};
