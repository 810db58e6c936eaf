//! Decision keys, the localized alias table, and allowed-key sets.
//!
//! Classification is a pure function so the alias set can be audited and tested
//! without touching a stream.

use crate::error::{FreshEyeError, Result};
use std::fmt;
use std::str::FromStr;

/// Canonical answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecisionKey {
    Yes,
    No,
    All,
    Stop,
    Context,
    Help,
}

impl DecisionKey {
    /// Every key, in menu order.
    pub const ALL_KEYS: [DecisionKey; 6] = [
        DecisionKey::Yes,
        DecisionKey::No,
        DecisionKey::All,
        DecisionKey::Stop,
        DecisionKey::Context,
        DecisionKey::Help,
    ];

    /// Canonical Latin letter for this key.
    pub fn letter(self) -> char {
        match self {
            DecisionKey::Yes => 'Y',
            DecisionKey::No => 'N',
            DecisionKey::All => 'A',
            DecisionKey::Stop => 'S',
            DecisionKey::Context => 'C',
            DecisionKey::Help => 'H',
        }
    }

    /// Spelled-out name shown in the menu and the default hint.
    pub fn name(self) -> &'static str {
        match self {
            DecisionKey::Yes => "Yes",
            DecisionKey::No => "No",
            DecisionKey::All => "All",
            DecisionKey::Stop => "Stop",
            DecisionKey::Context => "Context",
            DecisionKey::Help => "Help",
        }
    }

    /// Look up a key by its canonical letter. Expects an already folded char.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL_KEYS.into_iter().find(|key| key.letter() == letter)
    }

    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for DecisionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw (upper-cased) characters that stand in for a canonical key.
///
/// Lower-case forms never appear here: input is folded before lookup.
pub const ALIAS_TABLE: &[(char, DecisionKey)] = &[
    ('Y', DecisionKey::Yes),
    ('Д', DecisionKey::Yes), // "да"
    ('У', DecisionKey::Yes), // looks like Y
    ('N', DecisionKey::No),
    ('Н', DecisionKey::No), // "нет"
    ('И', DecisionKey::No), // looks like a mirrored N
];

/// Upper-case a raw input character.
///
/// Characters whose upper-case form expands to several chars (e.g. `ß`) keep
/// only the first one; none of them can match a key anyway.
pub fn fold_case(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

/// Resolve a folded character through the alias table.
pub fn alias_target(folded: char) -> Option<DecisionKey> {
    ALIAS_TABLE
        .iter()
        .find(|(alias, _)| *alias == folded)
        .map(|(_, key)| *key)
}

/// Map a raw input character to an allowed decision key.
///
/// Aliases only resolve when their target is allowed; otherwise the character
/// falls through to direct matching against the canonical letters.
pub fn classify(ch: char, allowed: KeySet) -> Option<DecisionKey> {
    let folded = fold_case(ch);

    if let Some(key) = alias_target(folded) {
        if allowed.contains(key) {
            return Some(key);
        }
    }

    DecisionKey::from_letter(folded).filter(|key| allowed.contains(*key))
}

/// Set of decision keys a caller accepts for one prompt.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeySet(u8);

impl KeySet {
    pub const EMPTY: KeySet = KeySet(0);
    /// Strict yes/no prompt.
    pub const YES_NO: KeySet = KeySet(0b11);
    /// Full navigable prompt.
    pub const ALL: KeySet = KeySet(0b11_1111);

    pub const fn with(self, key: DecisionKey) -> Self {
        KeySet(self.0 | key.bit())
    }

    pub const fn contains(self, key: DecisionKey) -> bool {
        self.0 & key.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = DecisionKey> {
        DecisionKey::ALL_KEYS
            .into_iter()
            .filter(move |key| self.contains(*key))
    }

    /// Parse a letter string such as `"YN"` or `"ynasch"`.
    pub fn from_letters(letters: &str) -> Result<Self> {
        letters.chars().try_fold(KeySet::EMPTY, |set, ch| {
            DecisionKey::from_letter(fold_case(ch))
                .map(|key| set.with(key))
                .ok_or_else(|| {
                    FreshEyeError::invalid_argument(format!(
                        "'{ch}' is not a decision key (expected one of YNASCH)"
                    ))
                })
        })
    }
}

impl FromIterator<DecisionKey> for KeySet {
    fn from_iter<I: IntoIterator<Item = DecisionKey>>(iter: I) -> Self {
        iter.into_iter().fold(KeySet::EMPTY, KeySet::with)
    }
}

impl FromStr for KeySet {
    type Err = FreshEyeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_letters(s)
    }
}

impl fmt::Display for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|key| write!(f, "{}", key.letter()))
    }
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeySet({self})")
    }
}
