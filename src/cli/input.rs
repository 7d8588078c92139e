//! Message assembly from positional text and piped standard input.

use super::Flags;
use crate::error::{ResolveError, ResolveResult};
use std::fmt;
use std::io::{IsTerminal, Read};

/// Where piped message text comes from.
pub enum InputSource {
    /// Interactive terminal; nothing is read.
    Terminal,
    /// Piped input, read to end-of-stream.
    Piped(Box<dyn Read>),
}

impl InputSource {
    /// Piped stdin when standard input is not a terminal.
    pub fn detect() -> Self {
        let stdin = std::io::stdin();
        if stdin.is_terminal() {
            InputSource::Terminal
        } else {
            InputSource::Piped(Box::new(stdin))
        }
    }

    pub fn piped(reader: impl Read + 'static) -> Self {
        InputSource::Piped(Box::new(reader))
    }
}

impl fmt::Debug for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Terminal => write!(f, "Terminal"),
            InputSource::Piped(_) => write!(f, "Piped(..)"),
        }
    }
}

/// Join `segment` onto `message` with a newline, unless `message` is empty.
pub fn append_message(message: &str, segment: &str) -> String {
    if message.is_empty() {
        segment.to_string()
    } else {
        format!("{}\n{}", message, segment)
    }
}

/// Read piped text to end-of-stream. Invalid UTF-8 is replaced, not rejected.
pub fn read_piped(reader: &mut dyn Read) -> ResolveResult<String> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(ResolveError::Stdin)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Append the last positional token, then any piped input, to `flags.message`.
///
/// A pipe that yields no bytes appends nothing, so `hi` with stdin from
/// `/dev/null` gives `"hi"` and not `"hi\n"`.
pub fn assemble_message(
    flags: &mut Flags,
    positional: &[String],
    input: InputSource,
) -> ResolveResult<()> {
    if let Some(last) = positional.last() {
        flags.append_message(last);
    }

    if let InputSource::Piped(mut reader) = input {
        let piped = read_piped(reader.as_mut())?;
        if !piped.is_empty() {
            flags.append_message(&piped);
        }
    }
    Ok(())
}
