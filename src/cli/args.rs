//! Command-line argument definitions using clap

use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;
use std::process;

/// vcf2csv - Convert a folder of vCard (.vcf) files into a single Google Contacts compatible CSV
#[derive(Parser, Debug)]
#[command(name = "vcf2csv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to scan recursively for .vcf files
    pub input_dir: PathBuf,

    /// Path of the CSV file to write
    pub output_csv: PathBuf,
}

impl Cli {
    /// Parse arguments, printing a usage message and exiting on bad input.
    ///
    /// The converter takes exactly two positional arguments; any other
    /// invocation prints the usage message on standard output and exits
    /// with status 1. `--help` and `--version` keep their conventional
    /// exit status 0.
    pub fn parse_or_usage() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err)
                if matches!(
                    err.kind(),
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
                ) =>
            {
                let _ = err.print();
                process::exit(0);
            }
            Err(err) => {
                println!("{}", err);
                process::exit(1);
            }
        }
    }
}
