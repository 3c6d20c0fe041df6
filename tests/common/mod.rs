//! Shared test utilities and vCard fixture builders

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A complete single-contact card with an explicit full name, one phone
/// number on the default type and one typed e-mail address.
pub const JANE_DOE: &str = "BEGIN:VCARD\n\
                            VERSION:3.0\n\
                            FN:Jane Doe\n\
                            TEL:555-1000\n\
                            EMAIL;TYPE=Work:jane@x.com\n\
                            END:VCARD\n";

/// A card without `FN`, forcing full-name synthesis from the `N` components.
pub const RICHARD_ROE: &str = "BEGIN:VCARD\n\
                               VERSION:3.0\n\
                               N:Roe;Richard;;;\n\
                               END:VCARD\n";

/// The expected CSV rows for [`JANE_DOE`] and [`RICHARD_ROE`].
pub const JANE_DOE_ROW: &str = "\"Jane Doe\",\"\",\"\",\"Mobile\",\"555-1000\",\"\",\"\",\"\",\"\",\"Work\",\"jane@x.com\",\"\",\"\",\"\",\"\"";
pub const RICHARD_ROE_ROW: &str = "\"Richard Roe\",\"Richard\",\"Roe\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\"";

/// Write `content` as a file under the temp dir and return its path.
pub fn write_vcf(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}
