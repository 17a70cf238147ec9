//! Game data as files: the symbol catalog and the rule settings live in
//! JSON under `assets/`, with the shipped copies embedded as defaults.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
