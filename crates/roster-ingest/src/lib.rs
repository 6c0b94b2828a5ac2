#![deny(unsafe_code)]

pub mod cache;
pub mod csv_table;
pub mod error;
pub mod schema;

pub use cache::{RosterCache, load_roster};
pub use csv_table::read_roster_table;
pub use error::{IngestError, Result};
pub use schema::resolve_schema;
