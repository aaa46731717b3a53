//! C source scanner — line-by-line state machine.
//!
//! Comment lines accumulate into a pending buffer that attaches to the next
//! definition line. Any other non-blank, non-directive line drops it.

use crate::model::{Function, FunctionSet};
use crate::parser::classify::{self, LineKind};
use crate::parser::extract;

/// Whether a scan consumed its whole input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Complete,
    /// The function set filled up; the rest of the input was not looked at.
    Truncated,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    /// Space-joined text of the current comment run.
    Accumulating(String),
}

impl State {
    fn append(&mut self, text: &str) {
        match self {
            State::Idle => *self = State::Accumulating(text.to_string()),
            State::Accumulating(buf) => {
                if text.is_empty() {
                    return;
                }
                if !buf.is_empty() {
                    buf.push(' ');
                }
                buf.push_str(text);
            }
        }
    }

    fn take(&mut self) -> String {
        match std::mem::take(self) {
            State::Idle => String::new(),
            State::Accumulating(buf) => buf,
        }
    }
}

/// Scanner context for a single file.
///
/// Borrows the shared [`FunctionSet`] so records from successive files land
/// in one ordered list.
pub struct Scanner<'a> {
    file: String,
    functions: &'a mut FunctionSet,
    state: State,
    line_no: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(file: impl Into<String>, functions: &'a mut FunctionSet) -> Self {
        Self {
            file: file.into(),
            functions,
            state: State::Idle,
            line_no: 0,
        }
    }

    /// Process one physical line. Returns `false` once the set is full and
    /// scanning should stop.
    pub fn feed(&mut self, raw: &str) -> bool {
        self.line_no += 1;
        let line = raw.trim();

        let kind = classify::classify(line);
        match kind {
            LineKind::Comment => {
                if let Some(body) = classify::comment_body(line) {
                    self.state.append(body);
                }
            }
            _ if classify::is_definition(kind, line) => {
                if self.functions.is_full() {
                    return false;
                }
                let sig = extract::extract(line);
                self.functions.push(Function {
                    name: sig.name,
                    params: sig.params,
                    description: self.state.take(),
                    file: self.file.clone(),
                    line: self.line_no,
                });
            }
            _ => {
                if !line.is_empty() && !classify::is_directive(line) {
                    self.state = State::Idle;
                }
            }
        }
        true
    }
}

/// Scan every line of `lines` as the contents of `file`.
pub fn scan_lines<I, S>(file: &str, lines: I, functions: &mut FunctionSet) -> ScanOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = Scanner::new(file, functions);
    for line in lines {
        if !scanner.feed(line.as_ref()) {
            return ScanOutcome::Truncated;
        }
    }
    ScanOutcome::Complete
}
