// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
/// The 32 printable ASCII punctuation characters.
pub const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named category of characters with a fixed alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Uppercase => write!(f, "uppercase"),
            CharacterClass::Lowercase => write!(f, "lowercase"),
            CharacterClass::Digit => write!(f, "digits"),
            CharacterClass::Symbol => write!(f, "symbols"),
        }
    }
}

impl FromStr for CharacterClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharacterClass::Uppercase),
            "lower" | "lowercase" => Ok(CharacterClass::Lowercase),
            "digit" | "digits" | "number" | "numbers" => Ok(CharacterClass::Digit),
            "symbol" | "symbols" => Ok(CharacterClass::Symbol),
            other => Err(format!("unknown character class '{}'", other)),
        }
    }
}

/// Set of selected character classes, iterated in canonical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ClassSelection(u8);

impl ClassSelection {
    pub fn empty() -> Self {
        ClassSelection(0)
    }

    pub fn all() -> Self {
        CharacterClass::ALL.into_iter().collect()
    }

    /// Uppercase, lowercase and digits; what callers fall back to when nothing is selected.
    pub fn default_set() -> Self {
        [
            CharacterClass::Uppercase,
            CharacterClass::Lowercase,
            CharacterClass::Digit,
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn set(&mut self, class: CharacterClass, enabled: bool) {
        if enabled {
            self.insert(class);
        } else {
            self.remove(class);
        }
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL.into_iter().filter(|c| self.contains(*c))
    }

    /// Applies the default-class rule: an empty selection becomes [`ClassSelection::default_set`].
    pub fn or_default_set(self) -> Self {
        if self.is_empty() {
            Self::default_set()
        } else {
            self
        }
    }
}

impl FromIterator<CharacterClass> for ClassSelection {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        let mut selection = ClassSelection::empty();
        for class in iter {
            selection.insert(class);
        }
        selection
    }
}

impl fmt::Display for ClassSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        if names.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", names.join(", "))
        }
    }
}

impl FromStr for ClassSelection {
    type Err = String;

    /// Parses a comma separated list such as `upper,lower,digit`. `all` selects every class.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::all());
        }
        s.split(',')
            .filter(|part| !part.trim().is_empty())
            .map(CharacterClass::from_str)
            .collect()
    }
}

// Password generation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSelection,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSelection) -> Self {
        Self { length, classes }
    }
}

/// A generated password. Debug output is redacted so it never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<Vec<char>> for Password {
    fn from(chars: Vec<char>) -> Self {
        Password(chars.into_iter().collect())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthTier::Weak => write!(f, "Weak"),
            StrengthTier::Medium => write!(f, "Medium"),
            StrengthTier::Strong => write!(f, "Strong"),
        }
    }
}
