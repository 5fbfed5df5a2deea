//! Alphabet: the ordered set of symbols a machine can encode.
//!
//! Maps symbols to indices `0..size` and back. The symbol table is shared
//! behind an [`Rc`], so every permutation and rotor built over the same
//! alphabet holds a cheap handle to one table instead of a copy.

use std::fmt;
use std::rc::Rc;

use crate::error::EnigmaError;

/// The default alphabet: upper-case Latin letters.
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// An ordered set of encodable symbols.
///
/// Symbol number `k` has index `k`. The alphabet is immutable once built.
/// Duplicate symbols are a caller contract violation; lookups resolve to the
/// first occurrence. Use [`Alphabet::checked`] to reject them up front.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Rc<[char]>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(UPPER)
    }
}

impl Alphabet {
    /// Creates an alphabet containing the characters of `symbols`, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Alphabet;
    ///
    /// let alpha = Alphabet::new("ABC");
    /// assert_eq!(alpha.size(), 3);
    /// assert_eq!(alpha.to_int('C').unwrap(), 2);
    /// ```
    pub fn new(symbols: &str) -> Self {
        Alphabet {
            symbols: symbols.chars().collect(),
        }
    }

    /// Creates an alphabet, rejecting empty input, duplicates and symbols
    /// that the configuration syntax reserves (`(`, `)`, `*`, whitespace).
    ///
    /// # Errors
    /// Returns [`EnigmaError::EmptyAlphabet`], [`EnigmaError::DuplicateSymbol`]
    /// or [`EnigmaError::ReservedSymbol`].
    pub fn checked(symbols: &str) -> Result<Self, EnigmaError> {
        if symbols.is_empty() {
            return Err(EnigmaError::EmptyAlphabet);
        }
        let mut seen: Vec<char> = Vec::with_capacity(symbols.len());
        for ch in symbols.chars() {
            if ch == '(' || ch == ')' || ch == '*' || ch.is_whitespace() {
                return Err(EnigmaError::ReservedSymbol(ch));
            }
            if seen.contains(&ch) {
                return Err(EnigmaError::DuplicateSymbol(ch));
            }
            seen.push(ch);
        }
        Ok(Self::new(symbols))
    }

    /// Returns the number of symbols.
    pub fn size(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if `ch` is one of the symbols.
    pub fn contains(&self, ch: char) -> bool {
        self.symbols.contains(&ch)
    }

    /// Returns symbol number `index`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::IndexOutOfRange`] unless `index < size()`.
    pub fn to_char(&self, index: usize) -> Result<char, EnigmaError> {
        self.symbols
            .get(index)
            .copied()
            .ok_or(EnigmaError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Returns the index of `ch`. This is the inverse of [`to_char`](Self::to_char).
    ///
    /// # Errors
    /// Returns [`EnigmaError::SymbolNotInAlphabet`] if `ch` is absent.
    pub fn to_int(&self, ch: char) -> Result<usize, EnigmaError> {
        self.symbols
            .iter()
            .position(|&s| s == ch)
            .ok_or(EnigmaError::SymbolNotInAlphabet(ch))
    }

    /// Symbol at an index already known to be valid.
    pub(crate) fn symbol(&self, index: usize) -> char {
        self.symbols[index]
    }

    /// Iterates over the symbols in index order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.symbols() {
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alphabet({:?})", self.to_string())
    }
}
