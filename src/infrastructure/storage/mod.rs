//! Storage infrastructure module

mod migrations;

pub use migrations::{migrations, Migration, PostgresMigrator};
