//! vcf2csv: vCard to CSV Converter
//!
//! A command-line tool that converts a folder of vCard (.vcf) files into a
//! single Google Contacts compatible CSV file.

mod cli;
mod export;
mod report;
mod utils;
mod vcard;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use console::style;

use cli::Cli;
use export::{render_csv, MAX_EMAILS, MAX_PHONES};
use report::ConversionSummary;
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success, print_warning,
};
use vcard::{find_vcf_files, load_vcf_file, Contact};

fn main() -> Result<()> {
    let cli = Cli::parse_or_usage();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(&cli.input_dir, &cli.output_csv, MAX_PHONES, MAX_EMAILS);

    // Step 1: Discover and parse the vCard files
    print_step_header(1, "Scan vCard Files");

    let step_start = Instant::now();
    let files = find_vcf_files(&cli.input_dir);
    let mut summary = ConversionSummary::new(files.len());
    let mut contacts: Vec<Contact> = Vec::new();

    if files.is_empty() {
        print_info("No .vcf files found");
    } else {
        print_count(".vcf file(s)", files.len(), None);

        for path in &files {
            match load_vcf_file(path) {
                Ok(parsed) => {
                    println!(
                        "      Processed: {} - Found {} contacts",
                        style(path.display()).dim(),
                        style(parsed.len()).yellow().bold()
                    );
                    summary.add_file(parsed.len());
                    contacts.extend(parsed);
                }
                Err(err) => {
                    print_warning(&format!("Could not read {}: {}", path.display(), err));
                    summary.add_skipped(path);
                }
            }
        }
    }

    print_success(&format!("Found total of {} contacts", contacts.len()));
    print_step_time(step_start.elapsed());

    // Step 2: Write the CSV output
    print_step_header(2, "Write CSV");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    write_csv(&cli.output_csv, &contacts)?;
    finish_with_success(
        &spinner,
        &format!("Saved to {}", cli.output_csv.display()),
    );
    print_step_time(step_start.elapsed());

    // Display summary
    summary.display();

    // Final completion message
    print_completion();

    Ok(())
}

/// Render all contacts and write the CSV document in one shot.
fn write_csv(path: &Path, contacts: &[Contact]) -> Result<()> {
    let csv = render_csv(contacts);
    fs::write(path, csv)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}
