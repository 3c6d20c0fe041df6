//! Discovery and loading of `.vcf` files.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::utils::print_warning;

use super::contact::Contact;
use super::error::VcfError;
use super::splitter::parse_vcf_text;

/// Recursively collect every `.vcf` file under `dir`, sorted by path.
///
/// Sorting makes the output row order independent of the platform's
/// directory enumeration order, so re-runs over unchanged input produce
/// byte-identical CSV output. Unreadable entries, including a missing or
/// unreadable root directory, are reported to the console and skipped.
pub fn find_vcf_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                print_warning(&format!("Cannot read directory entry: {}", err));
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_vcf_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Whether the path carries a `.vcf` extension, case-insensitively.
fn is_vcf_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("vcf"))
}

/// Load one `.vcf` file and parse every vCard block it contains.
pub fn load_vcf_file(path: &Path) -> Result<Vec<Contact>, VcfError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|_| VcfError::InvalidUtf8)?;
    Ok(parse_vcf_text(&text))
}
