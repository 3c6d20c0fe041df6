//! Block demarcation: splitting raw file text into vCard blocks.
//!
//! Blocks are detected with an explicit two-state machine rather than an ad
//! hoc boolean, so the data-loss transitions are intentional and testable:
//!
//! | State   | Line starts with | Next state | Effect                          |
//! |---------|------------------|------------|---------------------------------|
//! | Outside | `BEGIN:VCARD`    | Inside     | clear accumulator               |
//! | Inside  | `END:VCARD`      | Outside    | emit contact, clear accumulator |
//! | Inside  | `BEGIN:VCARD`    | Inside     | clear accumulator, no emit      |
//! | Inside  | anything else    | Inside     | buffer line                     |
//! | Outside | anything else    | Outside    | ignore line                     |
//!
//! Nesting is not supported: a `BEGIN:VCARD` inside a block restarts it and
//! the buffered lines of the previous block are lost. An unterminated block
//! at end of input produces no contact, and an `END:VCARD` outside any
//! block is a no-op.

use super::block::parse_block;
use super::contact::Contact;

/// Opens a vCard block (case-insensitive prefix match on the raw line).
const BEGIN_MARKER: &str = "BEGIN:VCARD";
/// Closes a vCard block (case-insensitive prefix match on the raw line).
const END_MARKER: &str = "END:VCARD";

/// Scanner position relative to a vCard block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Between blocks; lines are ignored.
    Outside,
    /// Between a `BEGIN:VCARD` and its `END:VCARD`; lines are buffered.
    Inside,
}

/// Parse the full text of one `.vcf` file into contacts, one per block.
///
/// Lines are split on any newline convention. Block order in the text is
/// preserved in the returned sequence.
pub fn parse_vcf_text(text: &str) -> Vec<Contact> {
    let mut contacts = Vec::new();
    let mut block: Vec<&str> = Vec::new();
    let mut state = ScanState::Outside;

    for line in text.lines() {
        if starts_with_ignore_case(line, BEGIN_MARKER) {
            block.clear();
            state = ScanState::Inside;
        } else if starts_with_ignore_case(line, END_MARKER) {
            if state == ScanState::Inside {
                contacts.push(parse_block(&block));
                block.clear();
                state = ScanState::Outside;
            }
        } else if state == ScanState::Inside {
            block.push(line);
        }
    }

    contacts
}

fn starts_with_ignore_case(line: &str, marker: &str) -> bool {
    line.get(..marker.len())
        .map_or(false, |head| head.eq_ignore_ascii_case(marker))
}
