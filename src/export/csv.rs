//! Fixed-column CSV rows in the Google Contacts import dialect.
//!
//! The column shape is fixed: three name columns, then type/value pairs for
//! up to [`MAX_PHONES`] phone numbers and [`MAX_EMAILS`] e-mail addresses.
//! Entries beyond the maximum are silently truncated, missing ones are
//! padded with empty fields. Every data field is wrapped in double quotes
//! with embedded quotes doubled; the header row is plain comma-joined
//! column names.

use crate::vcard::{Contact, TypedValue};

/// Maximum number of phone numbers exported per contact.
pub const MAX_PHONES: usize = 3;
/// Maximum number of e-mail addresses exported per contact.
pub const MAX_EMAILS: usize = 3;

/// Generate the fixed CSV header row.
pub fn csv_header() -> String {
    let mut columns = vec![
        "Name".to_string(),
        "Given Name".to_string(),
        "Family Name".to_string(),
    ];

    for i in 1..=MAX_PHONES {
        columns.push(format!("Phone {} - Type", i));
        columns.push(format!("Phone {} - Value", i));
    }

    for i in 1..=MAX_EMAILS {
        columns.push(format!("E-mail {} - Type", i));
        columns.push(format!("E-mail {} - Value", i));
    }

    columns.join(",")
}

/// Convert a contact to one CSV row matching the header shape.
pub fn contact_row(contact: &Contact) -> String {
    let mut values = vec![
        contact.full_name.clone(),
        contact.given_name.clone(),
        contact.family_name.clone(),
    ];

    push_typed_columns(&mut values, &contact.phones, MAX_PHONES);
    push_typed_columns(&mut values, &contact.emails, MAX_EMAILS);

    let quoted: Vec<String> = values.iter().map(|value| quote_field(value)).collect();
    quoted.join(",")
}

/// Render the full CSV document: header plus one row per contact.
///
/// Rows follow the given contact order. The document carries no trailing
/// newline, so re-rendering the same contacts is byte-identical.
pub fn render_csv(contacts: &[Contact]) -> String {
    let mut lines = Vec::with_capacity(contacts.len() + 1);
    lines.push(csv_header());
    lines.extend(contacts.iter().map(contact_row));
    lines.join("\n")
}

/// Append `max` type/value column pairs, padding with empty fields.
fn push_typed_columns(values: &mut Vec<String>, entries: &[TypedValue], max: usize) {
    for i in 0..max {
        match entries.get(i) {
            Some(entry) => {
                values.push(entry.label.clone());
                values.push(entry.value.clone());
            }
            None => {
                values.push(String::new());
                values.push(String::new());
            }
        }
    }
}

/// Quote one field: embedded `"` doubled, whole field wrapped in `"…"`.
fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
