//! Single block parsing: the lines of one `BEGIN:VCARD…END:VCARD` block
//! become one [`Contact`].

use super::contact::Contact;
use super::field::parse_typed_property;

/// Type label for `TEL` lines without an explicit `TYPE=` parameter.
const DEFAULT_PHONE_LABEL: &str = "Mobile";
/// Type label for `EMAIL` lines without an explicit `TYPE=` parameter.
const DEFAULT_EMAIL_LABEL: &str = "Home";

/// Parse the lines strictly between `BEGIN:VCARD` and its `END:VCARD`.
///
/// Lines without a `:` are skipped. Properties dispatch on their
/// upper-cased base key; keys other than `FN`, `N`, `TEL` and `EMAIL` are
/// ignored. Repeated `TEL`/`EMAIL` properties each contribute one entry in
/// encounter order, a repeated `FN` keeps the last value. Entries with an
/// empty value are dropped. When no `FN` was present, the full name is
/// synthesized from the `N` components.
pub fn parse_block(lines: &[&str]) -> Contact {
    let mut contact = Contact::default();

    for line in lines {
        let line = line.trim();
        let Some((key_segment, value_segment)) = line.split_once(':') else {
            continue;
        };
        let value = value_segment.trim();

        // Base key without parameters, e.g. "TEL" out of "TEL;TYPE=home".
        let base_key = key_segment
            .split(';')
            .next()
            .unwrap_or_default()
            .to_ascii_uppercase();

        match base_key.as_str() {
            "FN" => contact.full_name = value.to_string(),
            "N" => {
                // Family;Given;Middle;Prefix;Suffix - empty components are
                // preserved, only the first two are used.
                let components: Vec<&str> = value.splitn(5, ';').collect();
                if components.len() > 1 {
                    contact.family_name = components[0].to_string();
                    contact.given_name = components[1].to_string();
                }
            }
            "TEL" => {
                let entry = parse_typed_property(line, DEFAULT_PHONE_LABEL);
                if !entry.value.is_empty() {
                    contact.phones.push(entry);
                }
            }
            "EMAIL" => {
                let entry = parse_typed_property(line, DEFAULT_EMAIL_LABEL);
                if !entry.value.is_empty() {
                    contact.emails.push(entry);
                }
            }
            _ => {}
        }
    }

    contact.finalize();
    contact
}
