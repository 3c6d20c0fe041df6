//! Export module - Google Contacts CSV generation

pub mod csv;

pub use csv::*;
