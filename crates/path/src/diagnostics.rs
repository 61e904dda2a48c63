extern crate thiserror;

use self::thiserror::Error;

/// A problem found in path data that did not stop sampling.
///
/// Offsets are byte offsets in the sampled path data string.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum Warning {
    #[error("Column {offset}: Unsupported command {command:?}, skipped.")]
    UnsupportedCommand { command: char, offset: usize },
    #[error("Column {offset}: Command {command:?} expects groups of {expected} numbers, {found} left over.")]
    MissingArguments {
        command: char,
        offset: usize,
        expected: usize,
        found: usize,
    },
    #[error("Column {offset}: Malformed number {src:?} in command {command:?}.")]
    MalformedNumber {
        command: char,
        offset: usize,
        src: String,
    },
    #[error("Column {offset}: Data before the first command, ignored.")]
    StrayData { offset: usize },
}

impl Warning {
    pub fn offset(&self) -> usize {
        match *self {
            Warning::UnsupportedCommand { offset, .. }
            | Warning::MissingArguments { offset, .. }
            | Warning::MalformedNumber { offset, .. }
            | Warning::StrayData { offset } => offset,
        }
    }
}

/// Collects the warnings of a sampling run and logs them as they come.
pub(crate) fn report(warnings: &mut Vec<Warning>, warning: Warning) {
    log::warn!("{}", warning);
    warnings.push(warning);
}

#[test]
fn warning_messages() {
    let w = Warning::UnsupportedCommand {
        command: 'A',
        offset: 12,
    };
    assert_eq!(format!("{}", w), "Column 12: Unsupported command 'A', skipped.");
    assert_eq!(w.offset(), 12);

    let w = Warning::MissingArguments {
        command: 'C',
        offset: 0,
        expected: 6,
        found: 4,
    };
    assert_eq!(
        format!("{}", w),
        "Column 0: Command 'C' expects groups of 6 numbers, 4 left over."
    );
}
