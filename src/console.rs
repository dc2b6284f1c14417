//! Line-oriented console ports.
//!
//! Every prompt in the game goes through a [`Console`], so a game can be
//! driven from stdin/stdout or from a scripted buffer in tests.

use derive_more::{Display, Error};
use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead, BufReader, Write};
use std::ops::RangeInclusive;
use std::rc::Rc;
use tracing::{debug, instrument};

/// A console shared by the session and the interactive players.
pub type SharedConsole = Rc<RefCell<Console>>;

/// The input side ran out of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Console input closed")]
pub struct InputClosed;

/// Input and output ports for prompting a human.
pub struct Console {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

impl Console {
    /// Creates a console over arbitrary ports.
    pub fn new(input: impl BufRead + 'static, output: impl Write + 'static) -> Self {
        Self {
            input: Box::new(input),
            output: Box::new(output),
        }
    }

    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }

    /// Console reading a fixed script and writing into `transcript`.
    pub fn scripted(script: impl Into<String>, transcript: Transcript) -> Self {
        Self::new(io::Cursor::new(script.into()), transcript)
    }

    /// Wraps the console for sharing.
    pub fn shared(self) -> SharedConsole {
        Rc::new(RefCell::new(self))
    }

    /// Writes one line.
    pub fn say(&mut self, message: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    /// Shows a prompt and reads one trimmed line, or `None` at end of input.
    #[instrument(skip(self))]
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("End of input");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks until the answer is a number in `range`.
    ///
    /// Anything else is reported and the prompt repeats.
    pub fn ask_number(
        &mut self,
        prompt: &str,
        range: RangeInclusive<u8>,
    ) -> io::Result<Option<u8>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.parse::<u8>() {
                Ok(n) if range.contains(&n) => return Ok(Some(n)),
                _ => self.say(format!(
                    "Please enter a number between {} and {}.",
                    range.start(),
                    range.end()
                ))?,
            }
        }
    }

    /// Asks a yes/no question until answered.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<Option<bool>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(Some(true)),
                "n" | "no" => return Ok(Some(false)),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }
}

/// In-memory output sink whose contents stay readable after it is moved
/// into a [`Console`].
#[derive(Debug, Clone, Default)]
pub struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
