//! Interactive resolver that lists phones and reads the chosen index.

use super::{parse_index, IndexResolver, SelectionError};
use crate::domain::PhoneNumber;
use crate::input::SharedInput;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{debug, warn};

const PROMPT: &str = "Enter the index of a phone you want to edit >>> ";

/// Prints the candidate phones to `output` and reads one answer line from `input`.
pub struct TerminalResolver<R, W> {
    input: SharedInput<R>,
    output: W,
}

impl TerminalResolver<StdinLock<'static>, Stdout> {
    /// Resolver reading from the session's stdin handle and writing to stdout.
    pub fn stdio(input: SharedInput<StdinLock<'static>>) -> Self {
        Self::new(input, io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalResolver<R, W> {
    pub fn new(input: SharedInput<R>, output: W) -> Self {
        Self { input, output }
    }

    fn show_candidates(&mut self, name: &str, phones: &[PhoneNumber]) -> io::Result<()> {
        writeln!(self.output, "{}", name)?;
        for (index, phone) in phones.iter().enumerate() {
            writeln!(self.output, "{}: {}", index, phone)?;
        }
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()
    }

    /// Consume the resolver, returning its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> IndexResolver for TerminalResolver<R, W> {
    fn resolve(&mut self, name: &str, phones: &[PhoneNumber]) -> Result<usize, SelectionError> {
        if let Err(e) = self.show_candidates(name, phones) {
            warn!("Failed to display phone choices: {}", e);
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => {
                debug!(answer = answer.trim(), "Phone index answer received");
                parse_index(&answer, phones.len())
            }
            Err(e) => {
                warn!("Failed to read phone index: {}", e);
                Err(SelectionError::NotANumber)
            }
        }
    }
}
