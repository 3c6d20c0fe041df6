//! Property line field extraction.
//!
//! A vCard property line has the shape `KEY[;PARAM=value...]:VALUE`, for
//! example `TEL;TYPE=home:+1 555 0100`. This module pulls the type label
//! and the value out of one such line.

use super::contact::TypedValue;

/// Extract the `(type, value)` pair from a single property line.
///
/// The line is split at the first `:`. The parameter tokens before it are
/// scanned case-insensitively for the first one starting with `TYPE=`; its
/// value has literal `"` characters stripped and is passed through
/// [`title_case`]. Later `TYPE=` tokens are ignored. Without a `TYPE=`
/// parameter the label falls back to `default_label`. The value is
/// everything after the first `:`, trimmed of surrounding whitespace.
///
/// Malformed input never fails: a line without any `:` yields an empty
/// value, which callers discard.
pub fn parse_typed_property(line: &str, default_label: &str) -> TypedValue {
    let Some((key_segment, raw_value)) = line.split_once(':') else {
        return TypedValue::new(default_label, "");
    };

    // The first `;` token is the bare property name, the rest are parameters.
    let mut label = default_label.to_string();
    for param in key_segment.split(';').skip(1) {
        let Some(prefix) = param.get(..5) else { continue };
        if prefix.eq_ignore_ascii_case("TYPE=") {
            label = title_case(&param[5..].replace('"', ""));
            break;
        }
    }

    TypedValue::new(label, raw_value.trim())
}

/// Title-case a type label: the first letter of each whitespace-separated
/// word is upper-cased, everything else lower-cased.
///
/// The rule is pinned here instead of relying on locale-dependent text
/// transforms so output is identical across platforms. A multi-valued
/// parameter like `TYPE=home,voice` stays a single word and becomes
/// `Home,voice`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word_start = true;

    for ch in input.chars() {
        if ch.is_whitespace() {
            word_start = true;
            out.push(ch);
        } else if word_start {
            out.extend(ch.to_uppercase());
            word_start = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out
}
