//! Conversion summary report generation

use std::path::Path;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of a folder conversion run.
#[derive(Debug, Default)]
pub struct ConversionSummary {
    pub files_found: usize,
    pub files_processed: usize,
    pub contacts_exported: usize,
    pub skipped_files: Vec<String>,
}

impl ConversionSummary {
    pub fn new(files_found: usize) -> Self {
        Self {
            files_found,
            ..Default::default()
        }
    }

    /// Record one successfully parsed file and the contacts it contributed.
    pub fn add_file(&mut self, contacts: usize) {
        self.files_processed += 1;
        self.contacts_exported += contacts;
    }

    /// Record a file that could not be read and was skipped.
    pub fn add_skipped(&mut self, path: &Path) {
        self.skipped_files.push(path.display().to_string());
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("CONVERSION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📂 Files Found"),
            Cell::new(self.files_found),
        ]);

        table.add_row(vec![
            Cell::new("📄 Files Processed"),
            Cell::new(self.files_processed),
        ]);

        table.add_row(vec![
            Cell::new("⚠️  Files Skipped"),
            Cell::new(self.skipped_files.len()).fg(if self.skipped_files.is_empty() {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Contacts Exported"),
            Cell::new(self.contacts_exported)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }

        // Show skipped file details if any
        if !self.skipped_files.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("SKIPPED FILES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();
            for file in &self.skipped_files {
                println!("      {} {}", style("-").dim(), style(file).yellow());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_file_accumulates() {
        let mut summary = ConversionSummary::new(3);
        summary.add_file(2);
        summary.add_file(5);

        assert_eq!(summary.files_found, 3);
        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.contacts_exported, 7);
    }

    #[test]
    fn test_add_skipped_records_path() {
        let mut summary = ConversionSummary::new(1);
        summary.add_skipped(Path::new("broken.vcf"));

        assert_eq!(summary.files_processed, 0);
        assert_eq!(summary.skipped_files, vec!["broken.vcf".to_string()]);
    }
}
