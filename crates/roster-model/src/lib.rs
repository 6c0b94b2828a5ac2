#![deny(unsafe_code)]

pub mod alias;
pub mod record;
pub mod request;
pub mod schema;
pub mod table;

pub use alias::{ColumnAliasSet, normalize_name, outfit_suffix};
pub use record::{CharacterRecord, NO_MATCH_MESSAGE};
pub use request::{Gender, PickRequest};
pub use schema::RosterSchema;
pub use table::{CsvTable, Roster, RosterRow, clean_cell};
