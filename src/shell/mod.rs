/*!
 * Interactive Shell
 * Line-oriented front-end over the allocator core
 */

pub mod command;

pub use command::{Command, ParseError};

use crate::memory::QuickFitManager;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  alloc <process-id> <size-kb>   allocate a block of exactly <size-kb> KB
  free <process-id>              return the process's block to its pool
  state                          show pools and allocated processes
  help                           show this message
  quit                           leave the shell";

/// Interactive session over an allocator.
///
/// All raw-input validation happens here; the manager only ever sees a
/// non-empty process id and a positive size.
pub struct Shell {
    manager: QuickFitManager,
}

impl Shell {
    pub fn new(manager: QuickFitManager) -> Self {
        Self { manager }
    }

    /// Drive the session until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        writeln!(output, "Quick fit memory simulator, 'help' for commands")?;

        write!(output, "> ")?;
        output.flush()?;
        for line in input.lines() {
            let line = line?;
            if !self.dispatch(&line, &mut output)? {
                return Ok(());
            }
            write!(output, "> ")?;
            output.flush()?;
        }

        Ok(())
    }

    /// Handle one input line; returns false when the session should end.
    fn dispatch<W: Write>(&mut self, line: &str, output: &mut W) -> std::io::Result<bool> {
        let command = match command::parse(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return Ok(true),
            Err(err) => {
                writeln!(output, "error: {err}")?;
                return Ok(true);
            }
        };

        match command {
            Command::Allocate { process_id, size } => {
                match self.manager.allocate(&process_id, size) {
                    Ok(grant) => writeln!(
                        output,
                        "Process {} allocated to {} ({} KB)",
                        grant.process_id, grant.block, grant.size
                    )?,
                    Err(err) => writeln!(output, "warning: {err}")?,
                }
            }
            Command::Deallocate { process_id } => match self.manager.deallocate(&process_id) {
                Ok(release) => writeln!(
                    output,
                    "Block {} ({} KB) deallocated from process {}",
                    release.block, release.size, release.process_id
                )?,
                Err(err) => writeln!(output, "warning: {err}")?,
            },
            Command::State => write!(output, "{}", self.manager.snapshot())?,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(false),
        }

        Ok(true)
    }
}
