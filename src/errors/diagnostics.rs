use crate::get_line_at_position;

use super::errors::{Error, ErrorTip};

/// Receives every lexical and syntax error as it is recorded.
pub trait DiagnosticSink {
    fn report(&mut self, error: &Error);
}

/// Collects errors for later inspection.
impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: &Error) {
        self.push(error.clone());
    }
}

/// Prints each error to stderr with the offending source line and a caret.
pub struct StderrSink<'a> {
    source: &'a str,
}

impl<'a> StderrSink<'a> {
    pub fn new(source: &'a str) -> Self {
        StderrSink { source }
    }
}

impl DiagnosticSink for StderrSink<'_> {
    fn report(&mut self, error: &Error) {
        eprintln!("{}", render_error(error, self.source));
    }
}

/// Renders an error against the full source text:
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `=`, expected variable name)
/// -> main.soro:2:6
///   |
/// 2 | abeg = 5;
///   | -----^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_text = get_line_at_position(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;
    let arrows = position.column.max(1) as usize;

    let header = match error.get_tip() {
        ErrorTip::None => format!("Error: {}", error.get_error_name()),
        tip => format!("Error: {} ({})", error.get_error_name(), tip),
    };

    [
        header,
        format!("-> {}:{}", error.get_file(), position),
        format!("{:>padding$}", "|"),
        format!("{} | {}", line_string, line_text),
        format!("{:>padding$} {:->arrows$}", "|", "^"),
    ]
    .join("\n")
}
