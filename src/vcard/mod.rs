//! vCard (.vcf) parsing.
//!
//! This module turns raw `.vcf` file text into [`Contact`] records ready for
//! CSV export. Parsing is deliberately permissive: malformed property lines
//! degrade to default or empty values instead of failing, so a messy export
//! from a phone still converts.
//!
//! # Module Structure
//!
//! - `contact` - Contact record and typed phone/e-mail entries
//! - `error` - Error types for file loading
//! - `field` - Property line field extraction (`TYPE=` parameters)
//! - `block` - Single block parsing (`FN`, `N`, `TEL`, `EMAIL`)
//! - `splitter` - Block demarcation state machine
//! - `loader` - Recursive `.vcf` discovery and file loading

pub mod block;
pub mod contact;
pub mod error;
pub mod field;
pub mod loader;
pub mod splitter;

// Re-export public API types
pub use contact::{Contact, TypedValue};
pub use error::VcfError;
pub use loader::{find_vcf_files, load_vcf_file};
pub use splitter::parse_vcf_text;
