//! Character-at-a-time key reader over a buffered byte stream.
//!
//! The reader decodes UTF-8 one character at a time so that it never consumes
//! bytes belonging to the next line, classifies each character against the
//! allowed set, and drains the remainder of the line once a key is accepted.

use crate::error::Result;
use crate::input::keys::{classify, DecisionKey, KeySet};
use std::io::{BufRead, ErrorKind};

/// Outcome of one [`KeyReader::read_key`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRead {
    /// An allowed key was recognized; the rest of its line has been drained.
    Key(DecisionKey),
    /// Enter was pressed on a line holding nothing but whitespace.
    LineEnd,
    /// The stream ended before any key was recognized.
    EndOfInput,
}

impl KeyRead {
    pub fn key(self) -> Option<DecisionKey> {
        match self {
            KeyRead::Key(key) => Some(key),
            KeyRead::LineEnd | KeyRead::EndOfInput => None,
        }
    }
}

/// Reads decision keys from any buffered input (stdin in the binary, byte
/// slices in tests).
#[derive(Debug)]
pub struct KeyReader<R> {
    input: R,
}

impl<R: BufRead> KeyReader<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    pub fn into_inner(self) -> R {
        self.input
    }

    /// Read until an allowed key, a blank line, or end-of-input.
    ///
    /// Characters that do not classify are discarded. A newline that ends a
    /// line of discarded non-blank characters does not terminate the read;
    /// only a newline on an otherwise blank line yields [`KeyRead::LineEnd`].
    pub fn read_key(&mut self, allowed: KeySet) -> Result<KeyRead> {
        let mut line_has_input = false;

        loop {
            let ch = match self.next_char()? {
                Some(ch) => ch,
                None => {
                    log::trace!("end of input while waiting for one of {allowed}");
                    return Ok(KeyRead::EndOfInput);
                }
            };

            if ch == '\n' {
                if !line_has_input {
                    return Ok(KeyRead::LineEnd);
                }
                log::trace!("discarded a line without any of {allowed}");
                line_has_input = false;
                continue;
            }

            if let Some(key) = classify(ch, allowed) {
                log::debug!("accepted {ch:?} as {key}");
                self.drain_line()?;
                return Ok(KeyRead::Key(key));
            }

            if !ch.is_whitespace() {
                line_has_input = true;
            }
        }
    }

    /// Discard input up to and including the next newline, or to end-of-input.
    pub fn drain_line(&mut self) -> Result<()> {
        loop {
            let buf = match self.input.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if buf.is_empty() {
                return Ok(());
            }

            match memchr::memchr(b'\n', buf) {
                Some(pos) => {
                    self.input.consume(pos + 1);
                    return Ok(());
                }
                None => {
                    let len = buf.len();
                    self.input.consume(len);
                }
            }
        }
    }

    /// Decode the next character, consuming only its own bytes.
    ///
    /// Malformed sequences decode to U+FFFD. A byte that cannot continue the
    /// current sequence is left in the stream.
    fn next_char(&mut self) -> Result<Option<char>> {
        let lead = match self.next_byte_if(|_| true)? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let width = utf8_width(lead);
        let mut bytes = [lead, 0, 0, 0];
        let mut len = 1;
        while len < width {
            match self.next_byte_if(|b| (0x80..=0xBF).contains(&b))? {
                Some(byte) => {
                    bytes[len] = byte;
                    len += 1;
                }
                None => break,
            }
        }

        let (decoded, _) = bstr::decode_utf8(&bytes[..len]);
        Ok(Some(decoded.unwrap_or(char::REPLACEMENT_CHARACTER)))
    }

    fn next_byte_if(&mut self, accept: impl Fn(u8) -> bool) -> Result<Option<u8>> {
        loop {
            match self.input.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => {
                    let byte = buf[0];
                    if !accept(byte) {
                        return Ok(None);
                    }
                    self.input.consume(1);
                    return Ok(Some(byte));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn utf8_width(lead: u8) -> usize {
    match lead {
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 1,
    }
}
