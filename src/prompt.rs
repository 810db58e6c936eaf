//! Query engine: renders a confirmation prompt and resolves the answer.
//!
//! The last answer is remembered in a [`StickyAnswer`] owned by the caller and
//! offered as the default for the next prompt. Pressing Enter on an empty line
//! selects that default.

use crate::error::{FreshEyeError, Result};
use crate::input::{DecisionKey, KeyRead, KeyReader, KeySet};
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Menu caption written after the caller's message.
pub const MENU_CAPTION: &str = "? (Yes/No/All/Stop/Context/Help) ";

/// The most recent answer returned by [`Prompter::ask`].
///
/// Starts empty and is never reset to empty once set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StickyAnswer(Option<DecisionKey>);

impl StickyAnswer {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<DecisionKey> {
        self.0
    }

    /// Name shown in the default hint.
    pub fn hint(&self) -> &'static str {
        self.0.unwrap_or(DecisionKey::Help).name()
    }

    fn remember(&mut self, key: DecisionKey) {
        self.0 = Some(key);
    }
}

/// Build the full prompt line, e.g. `Check a.txt? (Yes/No/All/Stop/Context/Help) [No] `.
pub fn render_prompt(message: Option<&str>, sticky: &StickyAnswer) -> String {
    format!(
        "{}{}[{}] ",
        message.unwrap_or_default(),
        MENU_CAPTION,
        sticky.hint()
    )
}

/// Resolve a reader outcome against the sticky default, updating it.
///
/// Returns `None` when input ended, or when Enter was pressed before any
/// answer had ever been given.
pub fn resolve(read: KeyRead, sticky: &mut StickyAnswer) -> Option<DecisionKey> {
    let answer = match read {
        KeyRead::Key(key) => Some(key),
        KeyRead::LineEnd => sticky.get(),
        KeyRead::EndOfInput => None,
    };

    if let Some(key) = answer {
        sticky.remember(key);
    }
    answer
}

/// Console prompter pairing a key reader with an output sink.
pub struct Prompter<R, W> {
    reader: KeyReader<R>,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            reader: KeyReader::new(input),
            output,
        }
    }

    /// Ask one question and return the resolved answer.
    ///
    /// `None` means no answer could be obtained (end-of-input, or a bare Enter
    /// with no previous answer to fall back on); `sticky` is then unchanged.
    pub fn ask(
        &mut self,
        sticky: &mut StickyAnswer,
        message: Option<&str>,
        allowed: KeySet,
    ) -> Result<Option<DecisionKey>> {
        self.ask_with_outcome(sticky, message, allowed)
            .map(|(_, answer)| answer)
    }

    /// Like [`Prompter::ask`], but also returns what the reader saw.
    ///
    /// Lets callers tell a bare Enter with no previous answer
    /// (`(KeyRead::LineEnd, None)`) apart from end-of-input.
    pub fn ask_with_outcome(
        &mut self,
        sticky: &mut StickyAnswer,
        message: Option<&str>,
        allowed: KeySet,
    ) -> Result<(KeyRead, Option<DecisionKey>)> {
        let prompt = render_prompt(message, sticky);
        self.write_text(&prompt)?;

        let read = self.reader.read_key(allowed)?;
        let answer = resolve(read, sticky);
        log::debug!("prompt answered with {read:?}, resolved to {answer:?}");
        Ok((read, answer))
    }

    /// Write free-form text (help legends, notices) to the prompt's output.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| FreshEyeError::io("Failed to write prompt", e))
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader.into_inner(), self.output)
    }
}
