//! Per-file confirmation loop run before analysis starts.

use crate::error::{FreshEyeError, Result};
use crate::input::{DecisionKey, KeyRead, KeySet};
use crate::prompt::{Prompter, StickyAnswer};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Keys accepted when asking about a file.
pub const REVIEW_KEYS: KeySet = KeySet::YES_NO
    .with(DecisionKey::All)
    .with(DecisionKey::Stop)
    .with(DecisionKey::Help);

pub const HELP_LEGEND: &str = "\
  Yes   - check this file
  No    - skip this file
  All   - check this file and every remaining one without asking
  Stop  - stop here, check nothing else
  Help  - show this text
Press Enter alone to repeat the answer shown in brackets.
";

/// Files chosen for checking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub files: Vec<PathBuf>,
    /// Stop was chosen or input ran out before every file was asked about.
    pub interrupted: bool,
}

/// Check that every file named for review exists and is a regular file.
pub fn validate_files(files: &[PathBuf]) -> Result<()> {
    files.iter().try_for_each(|file| validate_file(file))
}

fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(FreshEyeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if !path.is_file() {
        return Err(FreshEyeError::NotAFile {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Ask about each file in turn. In silent mode every file is selected.
pub fn select_files<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    sticky: &mut StickyAnswer,
    files: &[PathBuf],
    silent: bool,
) -> Result<Selection> {
    let mut selection = Selection::default();

    if silent {
        selection.files = files.to_vec();
        return Ok(selection);
    }

    for (index, file) in files.iter().enumerate() {
        let message = format!("Check {}", file.display());
        loop {
            match prompter.ask_with_outcome(sticky, Some(&message), REVIEW_KEYS)? {
                // Enter before anything was answered: the hint offers Help.
                (KeyRead::LineEnd, None) => {
                    prompter.write_text(HELP_LEGEND)?;
                }
                (_, Some(DecisionKey::Yes)) => {
                    selection.files.push(file.clone());
                    break;
                }
                (_, Some(DecisionKey::No)) => break,
                (_, Some(DecisionKey::All)) => {
                    selection.files.extend_from_slice(&files[index..]);
                    return Ok(selection);
                }
                (_, Some(DecisionKey::Stop) | None) => {
                    log::info!("selection stopped at {}", file.display());
                    selection.interrupted = true;
                    return Ok(selection);
                }
                // Context can only arrive as a sticky default from another prompt.
                (_, Some(DecisionKey::Help | DecisionKey::Context)) => {
                    prompter.write_text(HELP_LEGEND)?;
                }
            }
        }
    }

    Ok(selection)
}
