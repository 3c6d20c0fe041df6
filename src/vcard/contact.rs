//! Contact record shared by the parser and the CSV exporter.

/// A phone number or e-mail address together with its type label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedValue {
    /// Type label such as `Home`, `Work` or `Mobile`.
    pub label: String,
    /// The number or address itself, trimmed of surrounding whitespace.
    pub value: String,
}

impl TypedValue {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A single parsed contact.
///
/// Created fresh per vCard block and populated field by field while the
/// block's lines are scanned in order. Once the block is consumed the full
/// name is synthesized if necessary; after that the record is never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    /// Display name. Never empty when a given or family name is known.
    pub full_name: String,
    pub given_name: String,
    pub family_name: String,
    /// Phone numbers in the order encountered in the source file.
    pub phones: Vec<TypedValue>,
    /// E-mail addresses in the order encountered in the source file.
    pub emails: Vec<TypedValue>,
}

impl Contact {
    /// Synthesize the full name from the name components when no explicit
    /// `FN` property supplied one.
    pub(crate) fn finalize(&mut self) {
        if self.full_name.is_empty() {
            self.full_name = format!("{} {}", self.given_name, self.family_name)
                .trim()
                .to_string();
        }
    }
}
