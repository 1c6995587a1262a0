//! The interactive input loop.

use crate::commands::Dispatcher;
use crate::input::SharedInput;
use crate::repositories::ContactRepository;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::info;

/// Prompt printed before every command line.
pub const PROMPT: &str = ">>> ";

/// Read commands from `input` until a goodbye command or end of input, then
/// save the book through `repository`.
///
/// Blank lines are ignored. Every reply is written to `output` on its own line.
pub fn run_session<R: BufRead, W: Write>(
    dispatcher: &mut Dispatcher,
    repository: &dyn ContactRepository,
    input: &SharedInput<R>,
    output: &mut W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).context("Failed to read command")? == 0 {
            info!("End of input, closing session");
            writeln!(output)?;
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let reply = dispatcher.dispatch(&line);
        writeln!(output, "{}", reply.text)?;
        if reply.exit {
            break;
        }
    }

    dispatcher.book_mut().reset_cursor();
    repository
        .save(dispatcher.book())
        .context("Failed to save contacts")?;
    Ok(())
}
